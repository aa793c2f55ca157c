use shared::ui::{ERROR_MESSAGE_ID, RESULT_CARD_ID, RESULT_CONFIDENCE_ID, RESULT_LABEL_ID};
use shared::{Panel, UiState};
use yew::prelude::*;

pub fn render_loading_panel(ui: &UiState) -> Html {
    html! {
        <div id={Panel::Loading.element_id()} class={ui.panel_class(Panel::Loading, "loading-section")}>
            <i class="fa-solid fa-spinner fa-spin"></i>
            <p>{"Analyzing..."}</p>
        </div>
    }
}

/// The result card keeps its last content while hidden, like the static page did.
pub fn render_result_panel(ui: &UiState) -> Html {
    let (card_class, label, confidence) = match &ui.result {
        Some(view) => (view.card_class(), view.label.clone(), view.confidence_text()),
        None => ("result-card".to_string(), String::new(), String::new()),
    };

    html! {
        <div id={Panel::Result.element_id()} class={ui.panel_class(Panel::Result, "result-section")}>
            <div id={RESULT_CARD_ID} class={card_class}>
                <h2 id={RESULT_LABEL_ID}>{ label }</h2>
                <p id={RESULT_CONFIDENCE_ID}>{ confidence }</p>
            </div>
        </div>
    }
}

pub fn render_error_panel(ui: &UiState) -> Html {
    html! {
        <div id={Panel::Error.element_id()} class={ui.panel_class(Panel::Error, "error-message")}>
            <i class="fa-solid fa-circle-exclamation"></i>
            <p id={ERROR_MESSAGE_ID}>{ &ui.error_message }</p>
        </div>
    }
}

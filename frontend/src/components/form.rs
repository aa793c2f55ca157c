use shared::UiState;
use shared::ui::{EMAIL_INPUT_ID, SUBMIT_BUTTON_ID};
use web_sys::KeyboardEvent;
use yew::prelude::*;

pub fn render_form(
    ui: &UiState,
    input_ref: &NodeRef,
    on_submit: Callback<MouseEvent>,
    on_keydown: Callback<KeyboardEvent>,
) -> Html {
    html! {
        <div class="input-section">
            <textarea
                id={EMAIL_INPUT_ID}
                ref={input_ref.clone()}
                rows="12"
                placeholder="Paste the email text here..."
                onkeydown={on_keydown}
            />
            <button
                id={SUBMIT_BUTTON_ID}
                class="analyze-btn"
                onclick={on_submit}
                disabled={!ui.submit_enabled}
            >
                <i class="fa-solid fa-magnifying-glass"></i>{" Check Email"}
            </button>
        </div>
    }
}

mod api;
mod components;

use api::FetchTransport;
use shared::{
    begin_submission, finish_submission, is_submit_shortcut, ApiConfig, KeyPress,
    PredictionResponse, PredictionTransport, SubmitError, TransportError, UiState,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlTextAreaElement, KeyboardEvent};
use yew::prelude::*;

use components::form::render_form;
use components::header::render_header;
use components::panels::{render_error_panel, render_loading_panel, render_result_panel};

// Yew msg components
enum Msg {
    Submit,
    PredictionFinished(Result<PredictionResponse, TransportError>),
}

// Main component
struct Model {
    ui: UiState,
    transport: FetchTransport,
    input_ref: NodeRef,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let config = ApiConfig::from_override(option_env!("SPAM_CHECK_API_ROOT"));

        Self {
            ui: UiState::new(),
            transport: FetchTransport::new(&config),
            input_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Submit => self.handle_submit(ctx),
            Msg::PredictionFinished(outcome) => self.handle_prediction_finished(outcome),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_shortcut = link.batch_callback(|e: KeyboardEvent| {
            let press = KeyPress::new(e.key(), e.ctrl_key());
            is_submit_shortcut(&press).then_some(Msg::Submit)
        });

        html! {
            <div class="container">
                { render_header() }

                <main class="main-content">
                    { render_form(&self.ui, &self.input_ref, link.callback(|_| Msg::Submit), on_shortcut) }
                    { render_loading_panel(&self.ui) }
                    { render_result_panel(&self.ui) }
                    { render_error_panel(&self.ui) }
                </main>
            </div>
        }
    }
}

// Handler methods
impl Model {
    fn read_input(&self) -> String {
        self.input_ref
            .cast::<HtmlTextAreaElement>()
            .map(|input| input.value())
            .unwrap_or_default()
    }

    fn handle_submit(&mut self, ctx: &Context<Self>) -> bool {
        let input = self.read_input();
        let Some(request) = begin_submission(&mut self.ui, &input) else {
            return true;
        };

        let link = ctx.link().clone();
        let transport = self.transport.clone();
        spawn_local(async move {
            let outcome = transport.predict(&request).await;
            link.send_message(Msg::PredictionFinished(outcome));
        });

        true
    }

    fn handle_prediction_finished(
        &mut self,
        outcome: Result<PredictionResponse, TransportError>,
    ) -> bool {
        match finish_submission(&mut self.ui, outcome) {
            Ok(()) => log::info!("Prediction rendered"),
            Err(SubmitError::Prediction(message)) => log::warn!("Prediction failed: {}", message),
            Err(_) => {}
        }
        true
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}

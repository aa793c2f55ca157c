use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-envelope-circle-check"></i> {" Email Spam Check"}</h1>
            <p class="subtitle">{"Paste an email and press Check, or Ctrl+Enter"}</p>
        </header>
    }
}

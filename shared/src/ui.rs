use strum_macros::{EnumIter, IntoStaticStr};

use crate::prediction::Prediction;

pub const EMAIL_INPUT_ID: &str = "emailInput";
pub const SUBMIT_BUTTON_ID: &str = "predictBtn";
pub const RESULT_CARD_ID: &str = "resultCard";
pub const RESULT_LABEL_ID: &str = "resultLabel";
pub const RESULT_CONFIDENCE_ID: &str = "resultConfidence";
pub const ERROR_MESSAGE_ID: &str = "errorMessage";

pub const HIDDEN_CLASS: &str = "hidden";

/// The three toggleable regions of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr, EnumIter)]
pub enum Panel {
    #[strum(serialize = "loadingSection")]
    Loading,
    #[strum(serialize = "resultSection")]
    Result,
    #[strum(serialize = "errorSection")]
    Error,
}

impl Panel {
    pub fn element_id(self) -> &'static str {
        self.into()
    }
}

/// What the result card displays for one prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub is_spam: bool,
    pub label: String,
    pub confidence: f64,
}

impl ResultView {
    pub fn verdict_class(&self) -> &'static str {
        if self.is_spam { "spam" } else { "not-spam" }
    }

    pub fn card_class(&self) -> String {
        format!("result-card {}", self.verdict_class())
    }

    pub fn confidence_text(&self) -> String {
        format!("Confidence: {}%", self.confidence)
    }
}

impl From<&Prediction> for ResultView {
    fn from(prediction: &Prediction) -> Self {
        Self {
            is_spam: prediction.is_spam,
            label: prediction.label.clone(),
            confidence: prediction.confidence,
        }
    }
}

/// Visibility and content of every panel the controller touches.
///
/// Panels are toggled independently by each operation; nothing here forces
/// exactly one of them to be visible.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub loading_visible: bool,
    pub result_visible: bool,
    pub error_visible: bool,
    pub submit_enabled: bool,
    pub result: Option<ResultView>,
    pub error_message: String,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            loading_visible: false,
            result_visible: false,
            error_visible: false,
            submit_enabled: true,
            result: None,
            error_message: String::new(),
        }
    }
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self, panel: Panel) -> bool {
        match panel {
            Panel::Loading => self.loading_visible,
            Panel::Result => self.result_visible,
            Panel::Error => self.error_visible,
        }
    }

    /// Class list for a panel element: its own class plus `hidden` when off.
    pub fn panel_class(&self, panel: Panel, base: &str) -> String {
        if self.is_visible(panel) {
            base.to_string()
        } else {
            format!("{} {}", base, HIDDEN_CLASS)
        }
    }

    pub fn show_loading(&mut self) {
        self.loading_visible = true;
        self.result_visible = false;
        self.error_visible = false;
        self.submit_enabled = false;
    }

    pub fn hide_loading(&mut self) {
        self.loading_visible = false;
        self.submit_enabled = true;
    }

    pub fn show_result(&mut self, prediction: &Prediction) {
        self.result = Some(ResultView::from(prediction));
        self.result_visible = true;
        self.hide_loading();
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error_message = message.into();
        self.error_visible = true;
        self.hide_loading();
    }
}

pub mod config;
pub mod controller;
pub mod error;
pub mod prediction;
pub mod shortcut;
pub mod ui;

pub use config::ApiConfig;
pub use controller::{begin_submission, finish_submission, PredictionController, PredictionTransport};
pub use error::{SubmitError, TransportError};
pub use prediction::{Prediction, PredictionRequest, PredictionResponse};
pub use shortcut::{is_submit_shortcut, KeyPress};
pub use ui::{Panel, ResultView, UiState};

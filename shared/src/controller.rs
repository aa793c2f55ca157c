use crate::error::{SubmitError, TransportError};
use crate::prediction::{PredictionRequest, PredictionResponse};
use crate::ui::UiState;

/// Sends one prediction request and decodes the reply.
///
/// Implementations must not inspect HTTP status codes; whatever JSON comes
/// back is decoded into a [`PredictionResponse`].
#[allow(async_fn_in_trait)]
pub trait PredictionTransport {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse, TransportError>;
}

/// Validates the raw input and enters the loading state.
///
/// Returns the request to send, or `None` after rendering the validation
/// error when there is nothing to send.
pub fn begin_submission(ui: &mut UiState, raw_input: &str) -> Option<PredictionRequest> {
    let email_text = raw_input.trim();
    if email_text.is_empty() {
        ui.show_error(SubmitError::Validation.to_string());
        return None;
    }

    ui.show_loading();
    Some(PredictionRequest::new(email_text))
}

/// Renders the outcome of a request started by [`begin_submission`].
pub fn finish_submission(
    ui: &mut UiState,
    outcome: Result<PredictionResponse, TransportError>,
) -> Result<(), SubmitError> {
    let error = match outcome {
        Ok(PredictionResponse::Success(prediction)) => {
            ui.show_result(&prediction);
            return Ok(());
        }
        Ok(PredictionResponse::Failure { error }) => SubmitError::Prediction(error),
        Err(cause) => {
            log::error!("Error: {}", cause);
            SubmitError::Connection(cause)
        }
    };

    ui.show_error(error.to_string());
    Err(error)
}

pub struct PredictionController<T> {
    transport: T,
    ui: UiState,
}

impl<T: PredictionTransport> PredictionController<T> {
    pub fn new(transport: T) -> Self {
        Self { transport, ui: UiState::new() }
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Runs one full submission. Errors are already rendered into the UI
    /// state when this returns; the result only reports which kind it was.
    pub async fn submit(&mut self, raw_input: &str) -> Result<(), SubmitError> {
        let Some(request) = begin_submission(&mut self.ui, raw_input) else {
            return Err(SubmitError::Validation);
        };

        let outcome = self.transport.predict(&request).await;
        finish_submission(&mut self.ui, outcome)
    }
}

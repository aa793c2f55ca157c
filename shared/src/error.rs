pub const VALIDATION_MESSAGE: &str = "Please enter email text";
pub const CONNECTION_MESSAGE: &str =
    "Failed to connect to server. Please make sure the server is running.";

/// Failure while talking to the prediction endpoint.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Everything that can end a submission without a result.
///
/// The `Display` text is exactly what the error panel shows.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    #[error("{}", VALIDATION_MESSAGE)]
    Validation,
    #[error("{}", CONNECTION_MESSAGE)]
    Connection(#[from] TransportError),
    #[error("{0}")]
    Prediction(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_error_hides_cause_from_user() {
        let err = SubmitError::from(TransportError::Network("connection refused".into()));
        assert_eq!(err.to_string(), CONNECTION_MESSAGE);
    }

    #[test]
    fn prediction_error_shows_server_text() {
        assert_eq!(SubmitError::Prediction("Model unavailable".into()).to_string(), "Model unavailable");
    }

    #[test]
    fn transport_error_keeps_cause_for_logs() {
        let err = TransportError::Decode("expected value at line 1".into());
        assert_eq!(err.to_string(), "Failed to parse response: expected value at line 1");
    }
}

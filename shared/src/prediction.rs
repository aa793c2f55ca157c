use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PredictionRequest {
    pub email_text: String,
}

impl PredictionRequest {
    pub fn new(email_text: impl Into<String>) -> Self {
        Self { email_text: email_text.into() }
    }
}

/// A successful classification returned by the prediction service.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Prediction {
    pub is_spam: bool,
    pub label: String,
    /// Percentage in the 0-100 range, passed through as the service sent it.
    pub confidence: f64,
}

/// Body of a `/predict` response.
///
/// The service signals failure only by including an `error` field, so the
/// shape is decoded through a flat wire struct and resolved once here.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(try_from = "RawPredictionResponse")]
pub enum PredictionResponse {
    Success(Prediction),
    Failure { error: String },
}

#[derive(Deserialize)]
struct RawPredictionResponse {
    error: Option<String>,
    is_spam: Option<bool>,
    label: Option<String>,
    confidence: Option<f64>,
}

impl TryFrom<RawPredictionResponse> for PredictionResponse {
    type Error = String;

    fn try_from(raw: RawPredictionResponse) -> Result<Self, Self::Error> {
        if let Some(error) = raw.error {
            return Ok(PredictionResponse::Failure { error });
        }

        match (raw.is_spam, raw.label, raw.confidence) {
            (Some(is_spam), Some(label), Some(confidence)) => {
                Ok(PredictionResponse::Success(Prediction { is_spam, label, confidence }))
            }
            (is_spam, label, confidence) => {
                let missing: Vec<&str> = [
                    ("is_spam", is_spam.is_none()),
                    ("label", label.is_none()),
                    ("confidence", confidence.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, absent)| absent.then_some(name))
                .collect();
                Err(format!("prediction response is missing {}", missing.join(", ")))
            }
        }
    }
}

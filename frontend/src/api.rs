use gloo_console::error;
use gloo_net::http::Request;
use shared::{ApiConfig, PredictionRequest, PredictionResponse, PredictionTransport, TransportError};

/// `fetch`-backed transport for the prediction endpoint.
#[derive(Clone)]
pub struct FetchTransport {
    url: String,
}

impl FetchTransport {
    pub fn new(config: &ApiConfig) -> Self {
        Self { url: config.predict_url() }
    }
}

impl PredictionTransport for FetchTransport {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse, TransportError> {
        let response = Request::post(&self.url)
            .json(request)
            .map_err(|err| TransportError::Network(err.to_string()))?
            .send()
            .await
            .map_err(|err| {
                error!(format!("Fetch error: {:?}", err));
                TransportError::Network(err.to_string())
            })?;

        log::info!("Prediction response status: {}", response.status());

        response
            .json::<PredictionResponse>()
            .await
            .map_err(|err| {
                error!(format!("Decode error: {:?}", err));
                TransportError::Decode(err.to_string())
            })
    }
}

pub const DEFAULT_API_ROOT: &str = "/api";

/// Where the prediction service lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub api_root: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { api_root: DEFAULT_API_ROOT.to_string() }
    }
}

impl ApiConfig {
    pub fn new(api_root: impl Into<String>) -> Self {
        Self { api_root: api_root.into() }
    }

    /// Uses `override_root` when it is set and non-blank, otherwise the default.
    pub fn from_override(override_root: Option<&str>) -> Self {
        match override_root.map(str::trim).filter(|root| !root.is_empty()) {
            Some(root) => {
                log::info!("Using prediction API root {}", root);
                Self::new(root)
            }
            None => Self::default(),
        }
    }

    pub fn predict_url(&self) -> String {
        format!("{}/predict", self.api_root.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_is_relative_api_path() {
        assert_eq!(ApiConfig::default().predict_url(), "/api/predict");
    }

    #[test]
    fn trailing_slash_is_normalized() {
        assert_eq!(ApiConfig::new("http://localhost:8080/api/").predict_url(), "http://localhost:8080/api/predict");
    }

    #[test]
    fn blank_override_falls_back_to_default() {
        assert_eq!(ApiConfig::from_override(Some("  ")), ApiConfig::default());
        assert_eq!(ApiConfig::from_override(None), ApiConfig::default());
        assert_eq!(ApiConfig::from_override(Some("/v2")).predict_url(), "/v2/predict");
    }
}

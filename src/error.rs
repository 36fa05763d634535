use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExporterError {
    #[error("Snipe-IT API error: {endpoint} returned {status}")]
    SnipeItApi {
        endpoint: String,
        status: reqwest::StatusCode,
    },

    #[error("Authentication failed: {endpoint} returned {status}")]
    Auth {
        endpoint: String,
        status: reqwest::StatusCode,
    },

    #[error("Snipe-IT API error: {endpoint}: {message}")]
    ApiMessage { endpoint: String, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExporterError {
    /// Classify a non-success response from the API
    pub fn from_status(endpoint: impl Into<String>, status: reqwest::StatusCode) -> Self {
        let endpoint = endpoint.into();
        match status {
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                Self::Auth { endpoint, status }
            }
            _ => Self::SnipeItApi { endpoint, status },
        }
    }
}

pub type Result<T> = std::result::Result<T, ExporterError>;

use fish_supply_api::ApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RestError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

pub type RestResult<T> = Result<T, RestError>;

impl From<RestError> for ApiError {
    fn from(error: RestError) -> Self {
        match error {
            RestError::Config(msg) => ApiError::ConfigurationError(msg),
            RestError::InvalidRequest(msg) => ApiError::ValidationError(msg),
            RestError::Status { status: 404, body } => ApiError::NotFound(body),
            other => ApiError::InternalError(other.to_string()),
        }
    }
}

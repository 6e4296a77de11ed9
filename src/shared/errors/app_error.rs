use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    /// The server answered with anything other than HTTP 200
    #[error("Error: req.status = {0}")]
    TransportError(u16),

    /// The request never produced a status (DNS, refused connection, broken body)
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Malformed JSON: {0}")]
    MalformedJson(String),

    #[error("The server did not send an Array")]
    NotAnArray,

    #[error("Mapping error: {0}")]
    MappingError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => AppError::TransportError(status.as_u16()),
            None => AppError::ConnectionError(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedJson(err.to_string())
    }
}

impl AppError {
    /// True for failures raised before a response body was available
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            AppError::TransportError(_) | AppError::ConnectionError(_)
        )
    }

    /// True for a 200 response whose body was not a JSON array
    pub fn is_validation_error(&self) -> bool {
        matches!(self, AppError::MalformedJson(_) | AppError::NotAnArray)
    }

    /// HTTP status carried by a transport error
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::TransportError(status) => Some(*status),
            _ => None,
        }
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

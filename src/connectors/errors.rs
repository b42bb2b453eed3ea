use thiserror::Error;

/// Errors that can occur during external service communication
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// HTTP request/response error
    #[error("HTTP error: {0}")]
    HttpError(String),
    /// Service unreachable or timeout
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
    /// Invalid response format from external service
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    /// Well-formed reply that carries nothing usable
    #[error("Unusable reply: {0}")]
    Unsuccessful(String),
}

impl From<reqwest::Error> for ConnectorError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::ServiceUnavailable(format!("Request timeout: {}", err))
        } else if err.is_connect() {
            Self::ServiceUnavailable(format!("Connection failed: {}", err))
        } else {
            Self::HttpError(err.to_string())
        }
    }
}

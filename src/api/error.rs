//! Job search API error types.

/// Errors that can occur while fetching jobs.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request timed out before a response arrived
    #[error("Request timed out")]
    Timeout,

    /// HTTP request failed before a response was obtained
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[source] reqwest::Error),

    /// API returned an error response
    #[error("API error (status {status}): {message}")]
    Status { status: u16, message: String },

    /// Failed to deserialize API response
    #[error("Failed to deserialize API response: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// Client could not be built
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::HttpRequest(error)
        }
    }
}

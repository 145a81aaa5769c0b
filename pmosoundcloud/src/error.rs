//! Error types for the SoundCloud client

/// Result type alias for SoundCloud operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when using the SoundCloud client
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No script bundle yielded a client id
    #[error("client id not found in any script bundle")]
    CredentialNotFound,

    /// No hydration record carries the playlist discriminator
    #[error("no playlist record found in hydration data")]
    PlaylistNotFound,

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Regex error
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// API returned a non-success status
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Expected field missing from an API response
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an API error from a status code and response body
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a malformed-response error
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    /// Create a generic error from a string
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

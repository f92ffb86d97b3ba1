use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Every variant currently maps to the same generic failure response in the
/// handler; they are kept apart so callers can tell the modes apart in logs.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// The outbound HTTP request could not be completed (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The provider returned an unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error, with the API key redacted.
        url: String,
    },

    /// The response body was not valid JSON for the expected schema.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// The data received from the provider was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),
}

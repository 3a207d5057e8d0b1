use reqwest::StatusCode;

/// Errors that can occur while talking to the trip API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request could not be built or sent, or the response could not be read.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server responded {status}: {body}")]
    Status {
        /// The HTTP status returned.
        status: StatusCode,
        /// The raw response body, for diagnostics.
        body: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured base URL could not be joined with an endpoint path.
    #[error("invalid API URL: {0}")]
    Url(#[from] url::ParseError),
}

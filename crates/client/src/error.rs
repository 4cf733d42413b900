/// Failure of a call to the products API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network unreachable, CORS, ...).
    #[error("network error: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("API error ({0})")]
    Status(u16),

    /// The response body was not the expected JSON.
    #[error("parse error: {0}")]
    Decode(String),

    /// The configured base URL cannot address the API.
    #[error("invalid API url: {0}")]
    InvalidUrl(String),
}

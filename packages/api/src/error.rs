use thiserror::Error;

/// A request to the notes backend failed.
///
/// Callers in the UI treat every variant the same way (log, then show an empty
/// list); the variants only exist so the log line says what went wrong.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response: bad URL, DNS, refused connection.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("backend responded with status {0}")]
    Status(u16),
    /// The body is not the JSON shape we expect.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

use thiserror::Error;

/// Failure taxonomy of the API client layer.
///
/// `Validation` is raised synchronously, before any request is issued.
/// `Server` carries the human-readable message assembled from the response
/// body; its `Display` is exactly that message, so controllers can show
/// `err.to_string()` directly.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unexpected response shape: {0}")]
    Decode(String),
}

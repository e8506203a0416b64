use thiserror::Error;

/// Failure of a single backend fetch.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request never produced a response
    #[error("Request failed: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    /// The body did not have the expected shape
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Rejected selection change.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SelectionError {
    #[error("Crop name must not be empty")]
    EmptyCrop,
}

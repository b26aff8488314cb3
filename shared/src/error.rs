use thiserror::Error;

/// Everything that can go wrong between the click and the result card.
///
/// The widget shows the same message for all of these; the variants only
/// matter for logs and tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpinError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed spin result: {0}")]
    Decode(String),
    #[error("invalid spin result: {0}")]
    Invalid(String),
}

/// Maps a non-2xx HTTP status to [`SpinError::Status`].
pub fn ensure_success(status: u16) -> Result<(), SpinError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SpinError::Status(status))
    }
}

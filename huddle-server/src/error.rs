use thiserror::Error;

/// Failures that stop the relay from starting.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The configured CORS origin is not a valid header value.
    #[error("invalid allowed origin {0:?}")]
    InvalidOrigin(String),
}

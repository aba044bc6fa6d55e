use thiserror::Error;

/// Errors surfaced above the polynomial layer: key/ciphertext parsing and
/// the symmetric envelope.
#[derive(Debug, Error)]
pub enum KemError {
    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("envelope failure: {0}")]
    EnvelopeFailure(String),
}

impl From<ntru_core::error::CoreError> for KemError {
    fn from(e: ntru_core::error::CoreError) -> Self {
        match e {
            ntru_core::error::CoreError::MalformedInput(msg) => KemError::MalformedInput(msg),
            ntru_core::error::CoreError::SizeMismatch(msg) => {
                panic!("programming error: polynomial size mismatch: {}", msg)
            }
        }
    }
}

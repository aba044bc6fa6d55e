use thiserror::Error;

/// Errors surfaced by polynomial packing, unpacking and parsing.
///
/// `SizeMismatch` signals a caller bug (mismatched ring parameters between
/// operands) rather than bad external input, so callers should treat it as
/// fatal rather than attempt recovery.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("size mismatch: {0}")]
    SizeMismatch(String),
}

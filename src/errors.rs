use thiserror::Error;

/// Errors raised while building, encoding or extracting CESR primitives.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CesrError {
    #[error("Unknown code: {0}")]
    UnknownCode(String),

    #[error("Insufficient material: {0}")]
    InsufficientMaterial(String),

    #[error("Malformed prepad: {0}")]
    MalformedPrepad(String),

    #[error("Malformed padding: {0}")]
    MalformedPadding(String),

    #[error("Invalid option combination: {0}")]
    InvalidOptionCombination(String),

    #[error("Size overflow: {0}")]
    SizeOverflow(String),

    #[error("Invalid ondex: {0}")]
    InvalidOndex(String),

    #[error("Charset violation: {0}")]
    CharsetViolation(String),

    #[error("Invalid count: {0}")]
    InvalidCount(String),

    #[error("Invalid soft: {0}")]
    InvalidSoft(String),

    #[error("Unsupported code: {0}")]
    UnsupportedCode(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

pub type Result<T> = std::result::Result<T, CesrError>;

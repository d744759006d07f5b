use thiserror::Error;

/// Error returned when a color string cannot be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    #[error("empty color string")]
    Empty,

    #[error("invalid hex length: {0} digits (expected 3 or 6)")]
    InvalidLength(usize),

    #[error("invalid hex digit: {0:?}")]
    InvalidDigit(char),
}

pub type Result<T> = std::result::Result<T, ParseColorError>;

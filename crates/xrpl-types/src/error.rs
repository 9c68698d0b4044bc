//! error types for amount arithmetic

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AmountError {
    #[error("invalid amount value: {0}")]
    InvalidValue(String),

    #[error("invalid scale factor: {0}")]
    InvalidFactor(String),

    #[error("amount overflow: {0}")]
    Overflow(String),
}

pub type Result<T> = std::result::Result<T, AmountError>;

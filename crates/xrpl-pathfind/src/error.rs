//! error types for the path-find engine

use thiserror::Error;

use xrpl_types::AmountError;

/// transport-boundary failures reported by a `LedgerSession`
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    #[error("not connected to ledger")]
    NotConnected,

    #[error("request failed: {0}")]
    RequestFailed(String),

    #[error("subscribe failed: {0}")]
    SubscribeFailed(String),
}

/// swap construction and submission failures surfaced to the caller
#[derive(Debug, Error)]
pub enum SwapError {
    #[error("no route available")]
    NoRoute,

    #[error("slippage tolerance out of range: {0}")]
    InvalidSlippage(String),

    #[error("amount error: {0}")]
    Amount(#[from] AmountError),

    #[error("ledger transport error: {0}")]
    Transport(#[from] LedgerError),

    #[error("wallet rejected payment: {0}")]
    Wallet(String),
}

pub type Result<T> = std::result::Result<T, SwapError>;

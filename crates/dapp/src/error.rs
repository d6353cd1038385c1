//! Error types for the dApp model

use thiserror::Error;

/// Errors surfaced to the UI as text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DappError {
    /// Client-side gate on the reward form. A UI hint only; the contract
    /// enforces ownership for real.
    #[error("Unauthorised Owner")]
    UnauthorizedOwner,

    #[error("Wallet rejected the request: {0}")]
    WalletRejection(String),

    #[error("No wallet is installed")]
    WalletUnavailable,

    #[error("Invalid recipient address: {0}")]
    InvalidAddress(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Contract read failed: {0}")]
    Read(String),
}

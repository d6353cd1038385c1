//! Error types shared across the chain plumbing

use thiserror::Error;

/// Errors produced by address parsing, unit conversion, signing and RPC calls
#[derive(Error, Debug)]
pub enum ChainError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid signing key: {0}")]
    InvalidKey(String),

    #[error("Signing failed: {0}")]
    Signing(String),

    #[error("ABI error: {0}")]
    Abi(String),

    #[error("RPC error: {0}")]
    Rpc(String),
}

pub type ChainResult<T> = Result<T, ChainError>;

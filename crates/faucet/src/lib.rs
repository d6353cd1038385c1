//! PRT Faucet Service
//!
//! A single-endpoint claim service for the Phillip Reward Token: validates
//! a recipient address and amount, then broadcasts one ERC-20 `transfer`
//! signed by the faucet account. Responds with the transaction hash as soon
//! as the transaction is accepted for broadcast; on-chain finality is the
//! caller's concern.
//!
//! By policy this is a testnet-only tool: there is no rate limiting, no
//! per-address cooldown and no dispense ledger. See README.md.

pub mod api;
pub mod config;
pub mod error;
pub mod service;

#[cfg(test)]
pub(crate) mod mock;

pub use config::FaucetConfig;
pub use error::{ClaimError, ClaimResult};
pub use service::ClaimService;

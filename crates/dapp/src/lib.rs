//! Wallet dApp model for the Phillip Reward Token
//!
//! The browser UI's session, read-model and transaction-form logic,
//! expressed as explicit objects behind injectable traits: the wallet
//! connection ([`WalletConnector`]), read-only contract queries
//! ([`TokenReader`]) and transaction submission ([`TransactionSender`])
//! are all seams a host UI or a test harness can implement.

pub mod app;
pub mod error;
pub mod forms;
pub mod reads;
pub mod session;
pub mod tx;

#[cfg(test)]
pub(crate) mod fakes;

pub use app::{App, Card};
pub use error::DappError;
pub use forms::{RewardForm, TransferForm};
pub use reads::{RpcTokenReader, TokenReadModel, TokenReader};
pub use session::{TokenMetadata, WalletConnector, WalletSession};
pub use tx::{ContractCall, ReceiptStatus, Submission, SubmissionState, TransactionSender};

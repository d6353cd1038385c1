//! Transaction submission state machine
//!
//! One submission per form:
//! `Idle → Pending → Confirming(hash) → Confirmed | Failed`.
//! Transitions are driven by the injected [`TransactionSender`]; there is
//! no cancellation path once a call has been handed to the wallet.

use crate::error::DappError;
use async_trait::async_trait;
use prt_chain::Address;
use tracing::{info, warn};

/// A contract call ready for wallet signing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractCall {
    pub to: Address,
    pub data: Vec<u8>,
}

/// Terminal status reported by the transaction watcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiptStatus {
    Success,
    Reverted,
}

/// Seam to the connected wallet's signing and receipt-watching machinery.
#[async_trait]
pub trait TransactionSender: Send + Sync {
    /// Hand the call to the wallet for signing and broadcast; returns the
    /// transaction hash.
    async fn send(&self, call: ContractCall) -> Result<String, DappError>;

    /// Wait for the receipt of a broadcast transaction.
    async fn wait_for_receipt(&self, tx_hash: &str) -> Result<ReceiptStatus, DappError>;
}

/// Rendered submission state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Confirming {
        tx_hash: String,
    },
    Confirmed {
        tx_hash: String,
    },
    Failed {
        reason: String,
    },
}

/// Tracks one transaction from broadcast to its terminal state. The first
/// error encountered wins and is kept for rendering.
#[derive(Debug, Default)]
pub struct Submission {
    state: SubmissionState,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == SubmissionState::Idle
    }

    /// The hash once broadcast, in any of the post-broadcast states.
    pub fn tx_hash(&self) -> Option<&str> {
        match &self.state {
            SubmissionState::Confirming { tx_hash } | SubmissionState::Confirmed { tx_hash } => {
                Some(tx_hash)
            }
            _ => None,
        }
    }

    /// Drive one call through the full submission lifecycle.
    pub async fn run<S: TransactionSender + ?Sized>(
        &mut self,
        sender: &S,
        call: ContractCall,
    ) -> &SubmissionState {
        self.state = SubmissionState::Pending;

        let tx_hash = match sender.send(call).await {
            Ok(hash) => hash,
            Err(e) => {
                warn!("Submission failed before broadcast: {}", e);
                self.state = SubmissionState::Failed {
                    reason: e.to_string(),
                };
                return &self.state;
            }
        };

        info!("Transaction sent. Hash: {}", tx_hash);
        self.state = SubmissionState::Confirming {
            tx_hash: tx_hash.clone(),
        };

        self.state = match sender.wait_for_receipt(&tx_hash).await {
            Ok(ReceiptStatus::Success) => SubmissionState::Confirmed { tx_hash },
            Ok(ReceiptStatus::Reverted) => SubmissionState::Failed {
                reason: "Transaction reverted".to_string(),
            },
            Err(e) => SubmissionState::Failed {
                reason: e.to_string(),
            },
        };

        &self.state
    }
}

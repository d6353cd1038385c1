//! Reward and transfer form logic

use crate::error::DappError;
use crate::tx::{ContractCall, Submission, TransactionSender};
use prt_chain::{abi, parse_units, Address};

/// Owner-only reward form: grants the connected address new tokens.
pub struct RewardForm {
    token: Address,
    pub submission: Submission,
}

impl RewardForm {
    pub fn new(token: Address) -> Self {
        Self {
            token,
            submission: Submission::new(),
        }
    }

    /// The form is enabled only once the contract owner is known.
    pub fn is_enabled(&self, contract_owner: Option<Address>) -> bool {
        contract_owner.is_some()
    }

    /// Submit a `rewardUser` call for the connected address.
    ///
    /// The owner comparison is a client-side gate; the contract performs
    /// the authoritative check. Gate and input errors return before the
    /// wallet is involved, leaving the submission idle.
    pub async fn submit<S: TransactionSender + ?Sized>(
        &mut self,
        sender: &S,
        connected: Address,
        contract_owner: Option<Address>,
        amount: &str,
    ) -> Result<(), DappError> {
        let owner = contract_owner.ok_or_else(|| DappError::Read("owner unknown".to_string()))?;
        if connected != owner {
            return Err(DappError::UnauthorizedOwner);
        }

        let base_units =
            parse_units(amount).map_err(|e| DappError::InvalidAmount(e.to_string()))?;

        let call = ContractCall {
            to: self.token,
            data: abi::reward_user_call(connected, base_units),
        };
        self.submission.run(sender, call).await;
        Ok(())
    }
}

/// Peer-to-peer transfer form.
pub struct TransferForm {
    token: Address,
    pub submission: Submission,
}

impl TransferForm {
    pub fn new(token: Address) -> Self {
        Self {
            token,
            submission: Submission::new(),
        }
    }

    /// Submit a `transfer` of the given decimal amount to the recipient.
    pub async fn submit<S: TransactionSender + ?Sized>(
        &mut self,
        sender: &S,
        recipient: &str,
        amount: &str,
    ) -> Result<(), DappError> {
        let recipient: Address = recipient
            .parse()
            .map_err(|_| DappError::InvalidAddress(recipient.to_string()))?;
        let base_units =
            parse_units(amount).map_err(|e| DappError::InvalidAmount(e.to_string()))?;

        let call = ContractCall {
            to: self.token,
            data: abi::transfer_call(recipient, base_units),
        };
        self.submission.run(sender, call).await;
        Ok(())
    }
}

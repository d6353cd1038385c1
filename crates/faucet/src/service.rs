//! Claim service core logic

use crate::config::FaucetConfig;
use crate::error::{ClaimError, ClaimResult};
use prt_chain::{abi, parse_units, Address, ChainResult, EthRpc, LegacyTx, TxSigner, U256};
use std::sync::Arc;
use tracing::{debug, info};

/// Validates claim requests and submits signed token transfers.
///
/// The RPC transport is injected so tests can substitute a network double;
/// no process-wide provider or contract handles exist.
pub struct ClaimService {
    rpc: Arc<dyn EthRpc>,
    signer: TxSigner,
    token: Address,
    gas_limit: u64,
    min_claim: u64,
    max_claim: u64,
}

impl ClaimService {
    pub fn new(config: &FaucetConfig, rpc: Arc<dyn EthRpc>) -> ChainResult<Self> {
        let signer = TxSigner::from_hex(&config.private_key)?;
        let token: Address = config.token_address.parse()?;

        info!("Faucet address: {}", signer.address());
        info!("Token contract: {}", token);

        Ok(Self {
            rpc,
            signer,
            token,
            gas_limit: config.gas_limit,
            min_claim: config.min_claim,
            max_claim: config.max_claim,
        })
    }

    /// The faucet's own account address.
    pub fn faucet_address(&self) -> Address {
        self.signer.address()
    }

    /// Validate a claim and broadcast one token transfer.
    ///
    /// Returns the transaction hash as soon as the node accepts the raw
    /// transaction; no receipt is awaited.
    pub async fn claim(&self, address: &str, amount: &str) -> ClaimResult<String> {
        // Both validations run before any network call.
        let recipient: Address = address.parse().map_err(|_| ClaimError::InvalidAddress)?;
        let base_units = self.validate_amount(amount)?;

        let gas_price = self.rpc.gas_price().await?;
        debug!("Recommended gas price: {}", gas_price);

        let nonce = self.rpc.transaction_count(self.signer.address()).await?;
        let chain_id = self.rpc.chain_id().await?;

        let tx = LegacyTx {
            nonce,
            gas_price,
            gas_limit: self.gas_limit,
            to: self.token,
            value: U256::zero(),
            data: abi::transfer_call(recipient, base_units),
            chain_id,
        };

        let raw = self.signer.sign_legacy_hex(&tx)?;
        let tx_hash = self.rpc.send_raw_transaction(&raw).await?;

        info!("Transaction sent. Hash: {}", tx_hash);
        Ok(tx_hash)
    }

    /// Amount must parse as a decimal inside the configured claim range,
    /// inclusive on both ends.
    fn validate_amount(&self, amount: &str) -> ClaimResult<U256> {
        let out_of_range = || ClaimError::InvalidAmount(self.min_claim, self.max_claim);

        let base_units = parse_units(amount).map_err(|_| out_of_range())?;

        let min = U256::from(self.min_claim) * U256::exp10(prt_chain::TOKEN_DECIMALS as usize);
        let max = U256::from(self.max_claim) * U256::exp10(prt_chain::TOKEN_DECIMALS as usize);
        if base_units < min || base_units > max {
            return Err(out_of_range());
        }

        Ok(base_units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockRpc;

    const TEST_KEY: &str = "0x0000000000000000000000000000000000000000000000000000000000000001";
    const TOKEN: &str = "0x1e9f2f91e0673e3313c68b49a2262814c7d8921e";
    const RECIPIENT: &str = "0x8ba1f109551bd432803012645ac136ddd64dba72";

    fn test_config() -> FaucetConfig {
        FaucetConfig {
            private_key: TEST_KEY.to_string(),
            token_address: TOKEN.to_string(),
            ..FaucetConfig::default()
        }
    }

    fn service_with(rpc: Arc<MockRpc>) -> ClaimService {
        ClaimService::new(&test_config(), rpc).unwrap()
    }

    #[tokio::test]
    async fn invalid_address_fails_before_any_rpc_call() {
        let rpc = Arc::new(MockRpc::default());
        let service = service_with(rpc.clone());

        let err = service.claim("0xInvalid", "10").await.unwrap_err();
        assert!(matches!(err, ClaimError::InvalidAddress));
        assert_eq!(rpc.call_count(), 0);
    }

    #[tokio::test]
    async fn out_of_range_amounts_fail_before_any_rpc_call() {
        let rpc = Arc::new(MockRpc::default());
        let service = service_with(rpc.clone());

        for amount in ["5000", "0.5", "0", "abc", "", "-3", "1001"] {
            let err = service.claim(RECIPIENT, amount).await.unwrap_err();
            assert!(
                matches!(err, ClaimError::InvalidAmount(1, 1000)),
                "amount {:?} should be rejected",
                amount
            );
        }
        assert_eq!(rpc.call_count(), 0);
    }

    #[tokio::test]
    async fn boundary_amounts_are_accepted() {
        let rpc = Arc::new(MockRpc::default());
        let service = service_with(rpc.clone());

        assert!(service.claim(RECIPIENT, "1").await.is_ok());
        assert!(service.claim(RECIPIENT, "1000").await.is_ok());
    }

    #[tokio::test]
    async fn valid_claim_submits_exactly_once_and_returns_rpc_hash() {
        let rpc = Arc::new(MockRpc::with_tx_hash("0xabc123"));
        let service = service_with(rpc.clone());

        let hash = service.claim(RECIPIENT, "50").await.unwrap();
        assert_eq!(hash, "0xabc123");
        assert_eq!(rpc.send_count(), 1);

        // The broadcast transaction carries the transfer selector.
        let raw = rpc.last_raw_tx().unwrap();
        assert!(raw.starts_with("0x"));
    }

    #[tokio::test]
    async fn rpc_failure_surfaces_the_reason() {
        let rpc = Arc::new(MockRpc::with_send_error("execution reverted: not enough tokens"));
        let service = service_with(rpc.clone());

        let err = service.claim(RECIPIENT, "50").await.unwrap_err();
        match err {
            ClaimError::Submission(msg) => {
                assert!(msg.contains("execution reverted"));
            }
            other => panic!("expected submission error, got {:?}", other),
        }
    }
}

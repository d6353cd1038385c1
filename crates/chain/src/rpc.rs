//! JSON-RPC access to the blockchain network
//!
//! The [`EthRpc`] trait is the injection seam for everything that talks to
//! the network; handlers and the dApp read model take it as a trait object
//! so tests can substitute a deterministic double.

use crate::error::{ChainError, ChainResult};
use crate::types::Address;
use async_trait::async_trait;
use ethabi::ethereum_types::U256;

/// The subset of Ethereum JSON-RPC the faucet and dApp consume.
#[async_trait]
pub trait EthRpc: Send + Sync {
    /// `eth_chainId`
    async fn chain_id(&self) -> ChainResult<u64>;

    /// `eth_gasPrice` — the network's current recommended gas price.
    async fn gas_price(&self) -> ChainResult<U256>;

    /// `eth_getTransactionCount` (latest) — the account nonce.
    async fn transaction_count(&self, address: Address) -> ChainResult<u64>;

    /// `eth_sendRawTransaction` — broadcast a signed transaction, returning
    /// its hash. No confirmation is awaited.
    async fn send_raw_transaction(&self, raw_hex: &str) -> ChainResult<String>;

    /// `eth_call` (latest) — read-only contract call.
    async fn call(&self, to: Address, data: Vec<u8>) -> ChainResult<Vec<u8>>;
}

/// HTTP JSON-RPC client.
pub struct HttpRpc {
    rpc_url: String,
    client: reqwest::Client,
}

impl HttpRpc {
    pub fn new(rpc_url: impl Into<String>) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            client: reqwest::Client::new(),
        }
    }

    async fn request(&self, method: &str, params: serde_json::Value) -> ChainResult<serde_json::Value> {
        let payload = serde_json::json!({
            "jsonrpc": "2.0",
            "method": method,
            "params": params,
            "id": 1
        });

        let response = self
            .client
            .post(&self.rpc_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ChainError::Rpc(format!("request failed: {}", e)))?;

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ChainError::Rpc(format!("invalid response: {}", e)))?;

        if let Some(error) = json.get("error") {
            // Node errors carry the revert reason in the message field.
            let message = error
                .get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| error.to_string());
            return Err(ChainError::Rpc(message));
        }

        Ok(json
            .get("result")
            .cloned()
            .unwrap_or(serde_json::Value::Null))
    }

    fn quantity_u64(value: &serde_json::Value) -> ChainResult<u64> {
        let s = value
            .as_str()
            .ok_or_else(|| ChainError::Rpc("expected hex quantity".to_string()))?;
        u64::from_str_radix(s.trim_start_matches("0x"), 16)
            .map_err(|e| ChainError::Rpc(format!("invalid hex quantity {}: {}", s, e)))
    }

    fn quantity_u256(value: &serde_json::Value) -> ChainResult<U256> {
        let s = value
            .as_str()
            .ok_or_else(|| ChainError::Rpc("expected hex quantity".to_string()))?;
        U256::from_str_radix(s.trim_start_matches("0x"), 16)
            .map_err(|e| ChainError::Rpc(format!("invalid hex quantity {}: {}", s, e)))
    }
}

#[async_trait]
impl EthRpc for HttpRpc {
    async fn chain_id(&self) -> ChainResult<u64> {
        let result = self.request("eth_chainId", serde_json::json!([])).await?;
        Self::quantity_u64(&result)
    }

    async fn gas_price(&self) -> ChainResult<U256> {
        let result = self.request("eth_gasPrice", serde_json::json!([])).await?;
        Self::quantity_u256(&result)
    }

    async fn transaction_count(&self, address: Address) -> ChainResult<u64> {
        let result = self
            .request(
                "eth_getTransactionCount",
                serde_json::json!([address.to_string(), "latest"]),
            )
            .await?;
        Self::quantity_u64(&result)
    }

    async fn send_raw_transaction(&self, raw_hex: &str) -> ChainResult<String> {
        let result = self
            .request("eth_sendRawTransaction", serde_json::json!([raw_hex]))
            .await?;
        result
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| ChainError::Rpc("missing transaction hash".to_string()))
    }

    async fn call(&self, to: Address, data: Vec<u8>) -> ChainResult<Vec<u8>> {
        let result = self
            .request(
                "eth_call",
                serde_json::json!([
                    { "to": to.to_string(), "data": format!("0x{}", hex::encode(&data)) },
                    "latest"
                ]),
            )
            .await?;
        let s = result
            .as_str()
            .ok_or_else(|| ChainError::Rpc("expected hex data".to_string()))?;
        hex::decode(s.trim_start_matches("0x"))
            .map_err(|e| ChainError::Rpc(format!("invalid call result: {}", e)))
    }
}

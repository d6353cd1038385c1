//! Deterministic RPC double for claim service tests

use async_trait::async_trait;
use prt_chain::{Address, ChainError, ChainResult, EthRpc, U256};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-memory stand-in for the network, recording every call.
#[derive(Default)]
pub struct MockRpc {
    tx_hash: Mutex<String>,
    send_error: Mutex<Option<String>>,
    calls: AtomicUsize,
    sends: AtomicUsize,
    raw_txs: Mutex<Vec<String>>,
}

impl MockRpc {
    pub fn with_tx_hash(hash: &str) -> Self {
        let mock = Self::default();
        *mock.tx_hash.lock().unwrap() = hash.to_string();
        mock
    }

    pub fn with_send_error(reason: &str) -> Self {
        let mock = Self::default();
        *mock.send_error.lock().unwrap() = Some(reason.to_string());
        mock
    }

    /// Total RPC calls of any kind.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Number of `eth_sendRawTransaction` submissions.
    pub fn send_count(&self) -> usize {
        self.sends.load(Ordering::SeqCst)
    }

    pub fn last_raw_tx(&self) -> Option<String> {
        self.raw_txs.lock().unwrap().last().cloned()
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl EthRpc for MockRpc {
    async fn chain_id(&self) -> ChainResult<u64> {
        self.record();
        Ok(31337)
    }

    async fn gas_price(&self) -> ChainResult<U256> {
        self.record();
        Ok(U256::from(1_000_000_000u64))
    }

    async fn transaction_count(&self, _address: Address) -> ChainResult<u64> {
        self.record();
        Ok(7)
    }

    async fn send_raw_transaction(&self, raw_hex: &str) -> ChainResult<String> {
        self.record();
        self.sends.fetch_add(1, Ordering::SeqCst);
        self.raw_txs.lock().unwrap().push(raw_hex.to_string());

        if let Some(reason) = self.send_error.lock().unwrap().clone() {
            return Err(ChainError::Rpc(reason));
        }

        let hash = self.tx_hash.lock().unwrap().clone();
        if hash.is_empty() {
            Ok("0xdeadbeef".to_string())
        } else {
            Ok(hash)
        }
    }

    async fn call(&self, _to: Address, _data: Vec<u8>) -> ChainResult<Vec<u8>> {
        self.record();
        Ok(Vec::new())
    }
}

//! Deterministic doubles for the dApp seams

use crate::error::DappError;
use crate::reads::TokenReader;
use crate::session::{TokenMetadata, WalletConnector};
use crate::tx::{ContractCall, ReceiptStatus, TransactionSender};
use async_trait::async_trait;
use prt_chain::{abi, parse_units, Address, ChainError, ChainResult, EthRpc, U256};
use std::collections::HashMap;
use std::sync::Mutex;

/// Wallet connector with programmed outcomes.
pub struct FakeConnector {
    connect_result: Result<Address, DappError>,
    watch_asset_result: Result<bool, DappError>,
}

impl FakeConnector {
    pub fn connected_as(address: Address) -> Self {
        Self {
            connect_result: Ok(address),
            watch_asset_result: Ok(true),
        }
    }

    pub fn rejecting(reason: &str) -> Self {
        Self {
            connect_result: Err(DappError::WalletRejection(reason.to_string())),
            watch_asset_result: Ok(true),
        }
    }

    pub fn with_watch_asset(mut self, result: Result<bool, DappError>) -> Self {
        self.watch_asset_result = result;
        self
    }
}

#[async_trait]
impl WalletConnector for FakeConnector {
    async fn connect(&self) -> Result<Address, DappError> {
        self.connect_result.clone()
    }

    async fn disconnect(&self) {}

    async fn watch_asset(&self, _token: &TokenMetadata) -> Result<bool, DappError> {
        self.watch_asset_result.clone()
    }
}

/// Token reader with fixed metadata and a 100-token balance for everyone.
pub struct FakeReader {
    name: String,
    symbol: String,
    owner: Address,
}

impl FakeReader {
    pub fn new(name: &str, symbol: &str, owner: Address) -> Self {
        Self {
            name: name.to_string(),
            symbol: symbol.to_string(),
            owner,
        }
    }
}

#[async_trait]
impl TokenReader for FakeReader {
    async fn name(&self) -> Result<String, DappError> {
        Ok(self.name.clone())
    }

    async fn symbol(&self) -> Result<String, DappError> {
        Ok(self.symbol.clone())
    }

    async fn balance_of(&self, _holder: Address) -> Result<U256, DappError> {
        Ok(parse_units("100").expect("static amount"))
    }

    async fn owner(&self) -> Result<Address, DappError> {
        Ok(self.owner)
    }
}

/// Transaction sender with programmed send/receipt outcomes, recording
/// every call it is handed.
pub struct FakeSender {
    send_result: Result<String, DappError>,
    receipt: ReceiptStatus,
    sent: Mutex<Vec<ContractCall>>,
}

impl FakeSender {
    pub fn confirming(tx_hash: &str) -> Self {
        Self {
            send_result: Ok(tx_hash.to_string()),
            receipt: ReceiptStatus::Success,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn reverting(tx_hash: &str) -> Self {
        Self {
            send_result: Ok(tx_hash.to_string()),
            receipt: ReceiptStatus::Reverted,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn rejecting(reason: &str) -> Self {
        Self {
            send_result: Err(DappError::WalletRejection(reason.to_string())),
            receipt: ReceiptStatus::Success,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<ContractCall> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl TransactionSender for FakeSender {
    async fn send(&self, call: ContractCall) -> Result<String, DappError> {
        self.sent.lock().unwrap().push(call);
        self.send_result.clone()
    }

    async fn wait_for_receipt(&self, _tx_hash: &str) -> Result<ReceiptStatus, DappError> {
        Ok(self.receipt)
    }
}

/// `EthRpc` double answering `eth_call` by function selector.
pub struct StaticCallRpc {
    responses: HashMap<[u8; 4], Vec<u8>>,
}

impl StaticCallRpc {
    pub fn for_token(name: &str, symbol: &str, owner: Address, balance: U256) -> Self {
        let mut responses = HashMap::new();
        responses.insert(
            selector(&abi::name_call()),
            ethabi::encode(&[ethabi::Token::String(name.to_string())]),
        );
        responses.insert(
            selector(&abi::symbol_call()),
            ethabi::encode(&[ethabi::Token::String(symbol.to_string())]),
        );
        responses.insert(
            selector(&abi::owner_call()),
            ethabi::encode(&[ethabi::Token::Address(owner.into())]),
        );
        responses.insert(
            selector(&abi::balance_of_call(Address::default())),
            ethabi::encode(&[ethabi::Token::Uint(balance)]),
        );
        Self { responses }
    }
}

fn selector(data: &[u8]) -> [u8; 4] {
    let mut sel = [0u8; 4];
    sel.copy_from_slice(&data[..4]);
    sel
}

#[async_trait]
impl EthRpc for StaticCallRpc {
    async fn chain_id(&self) -> ChainResult<u64> {
        Ok(31337)
    }

    async fn gas_price(&self) -> ChainResult<U256> {
        Ok(U256::from(1_000_000_000u64))
    }

    async fn transaction_count(&self, _address: Address) -> ChainResult<u64> {
        Ok(0)
    }

    async fn send_raw_transaction(&self, _raw_hex: &str) -> ChainResult<String> {
        Err(ChainError::Rpc("read-only double".to_string()))
    }

    async fn call(&self, _to: Address, data: Vec<u8>) -> ChainResult<Vec<u8>> {
        self.responses
            .get(&selector(&data))
            .cloned()
            .ok_or_else(|| ChainError::Rpc("unexpected call".to_string()))
    }
}

//! Read-only token queries and the cached read model

use crate::error::DappError;
use async_trait::async_trait;
use prt_chain::{abi, format_units, Address, EthRpc, U256};
use std::sync::Arc;
use tracing::debug;

/// Read-only contract query surface.
#[async_trait]
pub trait TokenReader: Send + Sync {
    async fn name(&self) -> Result<String, DappError>;
    async fn symbol(&self) -> Result<String, DappError>;
    async fn balance_of(&self, holder: Address) -> Result<U256, DappError>;
    async fn owner(&self) -> Result<Address, DappError>;
}

/// [`TokenReader`] backed by `eth_call` against the deployed contract.
pub struct RpcTokenReader {
    rpc: Arc<dyn EthRpc>,
    token: Address,
}

impl RpcTokenReader {
    pub fn new(rpc: Arc<dyn EthRpc>, token: Address) -> Self {
        Self { rpc, token }
    }
}

#[async_trait]
impl TokenReader for RpcTokenReader {
    async fn name(&self) -> Result<String, DappError> {
        let data = self
            .rpc
            .call(self.token, abi::name_call())
            .await
            .map_err(|e| DappError::Read(e.to_string()))?;
        abi::decode_string(&data).map_err(|e| DappError::Read(e.to_string()))
    }

    async fn symbol(&self) -> Result<String, DappError> {
        let data = self
            .rpc
            .call(self.token, abi::symbol_call())
            .await
            .map_err(|e| DappError::Read(e.to_string()))?;
        abi::decode_string(&data).map_err(|e| DappError::Read(e.to_string()))
    }

    async fn balance_of(&self, holder: Address) -> Result<U256, DappError> {
        let data = self
            .rpc
            .call(self.token, abi::balance_of_call(holder))
            .await
            .map_err(|e| DappError::Read(e.to_string()))?;
        abi::decode_uint(&data).map_err(|e| DappError::Read(e.to_string()))
    }

    async fn owner(&self) -> Result<Address, DappError> {
        let data = self
            .rpc
            .call(self.token, abi::owner_call())
            .await
            .map_err(|e| DappError::Read(e.to_string()))?;
        abi::decode_address(&data).map_err(|e| DappError::Read(e.to_string()))
    }
}

/// Cached token metadata and balance, refreshed on demand only — there is
/// no polling loop.
pub struct TokenReadModel<R: TokenReader> {
    reader: R,
    name: Option<String>,
    symbol: Option<String>,
    owner: Option<Address>,
    balance: Option<U256>,
}

impl<R: TokenReader> TokenReadModel<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            name: None,
            symbol: None,
            owner: None,
            balance: None,
        }
    }

    /// Fetch name, symbol and owner.
    pub async fn refresh_metadata(&mut self) -> Result<(), DappError> {
        self.name = Some(self.reader.name().await?);
        self.symbol = Some(self.reader.symbol().await?);
        self.owner = Some(self.reader.owner().await?);
        debug!(
            "Token metadata refreshed: {} ({})",
            self.name.as_deref().unwrap_or(""),
            self.symbol.as_deref().unwrap_or("")
        );
        Ok(())
    }

    /// Fetch the holder's balance.
    pub async fn refresh_balance(&mut self, holder: Address) -> Result<(), DappError> {
        self.balance = Some(self.reader.balance_of(holder).await?);
        Ok(())
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    pub fn owner(&self) -> Option<Address> {
        self.owner
    }

    pub fn balance(&self) -> Option<U256> {
        self.balance
    }

    /// Balance as a decimal display string; `"0"` before the first refresh.
    pub fn balance_display(&self) -> String {
        match self.balance {
            Some(balance) => format_units(balance),
            None => "0".to_string(),
        }
    }
}

//! Wallet connection state

use crate::error::DappError;
use async_trait::async_trait;
use prt_chain::Address;
use serde::Serialize;
use tracing::info;

/// Asset descriptor for the wallet's watch-asset request.
#[derive(Debug, Clone, Serialize)]
pub struct TokenMetadata {
    pub address: Address,
    pub symbol: String,
    pub decimals: u8,
}

/// Seam to the browser wallet extension.
#[async_trait]
pub trait WalletConnector: Send + Sync {
    /// Request account access, returning the selected address.
    async fn connect(&self) -> Result<Address, DappError>;

    async fn disconnect(&self);

    /// Ask the wallet to add the token to its display list. `Ok(false)`
    /// means the user cancelled.
    async fn watch_asset(&self, token: &TokenMetadata) -> Result<bool, DappError>;
}

/// Connection state: binary, with no reconnection policy beyond what the
/// connector itself provides. The session only reads what the connector
/// reports.
pub struct WalletSession<C: WalletConnector> {
    connector: C,
    address: Option<Address>,
}

impl<C: WalletConnector> WalletSession<C> {
    pub fn new(connector: C) -> Self {
        Self {
            connector,
            address: None,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }

    pub fn address(&self) -> Option<Address> {
        self.address
    }

    pub async fn connect(&mut self) -> Result<Address, DappError> {
        let address = self.connector.connect().await?;
        info!("Wallet connected: {}", address);
        self.address = Some(address);
        Ok(address)
    }

    pub async fn disconnect(&mut self) {
        self.connector.disconnect().await;
        self.address = None;
        info!("Wallet disconnected");
    }

    pub async fn watch_asset(&self, token: &TokenMetadata) -> Result<bool, DappError> {
        self.connector.watch_asset(token).await
    }
}

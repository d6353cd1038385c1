//! Top-level dApp view model

use crate::error::DappError;
use crate::forms::{RewardForm, TransferForm};
use crate::reads::{TokenReadModel, TokenReader};
use crate::session::{TokenMetadata, WalletConnector, WalletSession};
use prt_chain::{Address, TOKEN_DECIMALS};

/// Where the claim service's UI lives; the dApp only links to it.
pub const FAUCET_URL: &str = "http://localhost:3000";

/// The UI cards. Everything except the wallet status requires a connected
/// session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Card {
    WalletStatus,
    TokenInfo,
    WatchAsset,
    FaucetLink,
    Reward,
    Transfer,
}

/// Aggregates the session, read model and forms for a host UI to render.
pub struct App<C: WalletConnector, R: TokenReader> {
    pub session: WalletSession<C>,
    pub token: TokenReadModel<R>,
    pub reward: RewardForm,
    pub transfer: TransferForm,
    token_address: Address,
}

impl<C: WalletConnector, R: TokenReader> App<C, R> {
    pub fn new(connector: C, reader: R, token_address: Address) -> Self {
        Self {
            session: WalletSession::new(connector),
            token: TokenReadModel::new(reader),
            reward: RewardForm::new(token_address),
            transfer: TransferForm::new(token_address),
            token_address,
        }
    }

    /// Connect the wallet, then populate token metadata and the balance.
    pub async fn connect(&mut self) -> Result<Address, DappError> {
        let address = self.session.connect().await?;
        self.token.refresh_metadata().await?;
        self.token.refresh_balance(address).await?;
        Ok(address)
    }

    pub async fn disconnect(&mut self) {
        self.session.disconnect().await;
    }

    /// Manual refresh of the connected account's balance.
    pub async fn refresh_balance(&mut self) -> Result<(), DappError> {
        if let Some(address) = self.session.address() {
            self.token.refresh_balance(address).await?;
        }
        Ok(())
    }

    /// Cards the UI should render in the current session state.
    pub fn visible_cards(&self) -> Vec<Card> {
        if !self.session.is_connected() {
            return vec![Card::WalletStatus];
        }
        vec![
            Card::WalletStatus,
            Card::TokenInfo,
            Card::WatchAsset,
            Card::FaucetLink,
            Card::Reward,
            Card::Transfer,
        ]
    }

    /// Ask the wallet to list the token, returning the message to render.
    pub async fn add_token_to_wallet(&self) -> String {
        let metadata = TokenMetadata {
            address: self.token_address,
            symbol: self.token.symbol().unwrap_or("PRT").to_string(),
            decimals: TOKEN_DECIMALS as u8,
        };

        match self.session.watch_asset(&metadata).await {
            Ok(true) => "Success! PRT token added to your wallet.".to_string(),
            Ok(false) => "Token adding was cancelled.".to_string(),
            Err(DappError::WalletUnavailable) => "MetaMask is not installed.".to_string(),
            Err(_) => "An error occurred.".to_string(),
        }
    }
}

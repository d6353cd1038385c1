//! Faucet configuration

use serde::{Deserialize, Serialize};

/// Faucet service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaucetConfig {
    /// Server listen address
    pub server_addr: String,

    /// RPC endpoint for the blockchain network
    pub rpc_url: String,

    /// Faucet account private key (hex)
    pub private_key: String,

    /// Deployed reward token contract address
    pub token_address: String,

    /// Directory the claim UI is served from
    pub static_dir: String,

    /// Gas limit for token transfer transactions
    pub gas_limit: u64,

    /// Smallest claimable amount (in whole tokens)
    pub min_claim: u64,

    /// Largest claimable amount (in whole tokens)
    pub max_claim: u64,

    /// Enable CORS
    pub cors_enabled: bool,
}

impl Default for FaucetConfig {
    fn default() -> Self {
        Self {
            server_addr: "0.0.0.0:3000".to_string(),
            rpc_url: "http://localhost:8545".to_string(),
            private_key: String::new(),
            token_address: String::new(),
            static_dir: "crates/faucet/public".to_string(),
            gas_limit: 100_000,
            min_claim: 1,
            max_claim: 1000,
            cors_enabled: true,
        }
    }
}

impl FaucetConfig {
    /// Load from environment variables with defaults
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("FAUCET_SERVER_ADDR") {
            config.server_addr = addr;
        }

        if let Ok(port) = std::env::var("PORT") {
            config.server_addr = format!("0.0.0.0:{}", port);
        }

        if let Ok(rpc_url) = std::env::var("RPC_URL") {
            config.rpc_url = rpc_url;
        }

        if let Ok(key) = std::env::var("FAUCET_PRIVATE_KEY") {
            config.private_key = key;
        }

        if let Ok(token) = std::env::var("TOKEN_CONTRACT_ADDRESS") {
            config.token_address = token;
        }

        if let Ok(dir) = std::env::var("FAUCET_STATIC_DIR") {
            config.static_dir = dir;
        }

        if let Ok(gas) = std::env::var("FAUCET_GAS_LIMIT") {
            config.gas_limit = gas.parse().unwrap_or(config.gas_limit);
        }

        if let Ok(enabled) = std::env::var("FAUCET_CORS_ENABLED") {
            config.cors_enabled = enabled.to_lowercase() == "true";
        }

        config
    }
}

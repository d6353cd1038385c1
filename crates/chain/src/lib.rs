//! Shared Ethereum plumbing for the PRT faucet service and wallet dApp.
//!
//! Provides the address type, 18-decimal unit conversion, the ERC-20 call
//! surface of the reward token, a JSON-RPC client behind the [`EthRpc`]
//! trait, and EIP-155 legacy transaction signing.

pub mod abi;
pub mod error;
pub mod rpc;
pub mod tx;
pub mod types;
pub mod units;

pub use error::{ChainError, ChainResult};
pub use rpc::{EthRpc, HttpRpc};
pub use tx::{LegacyTx, TxSigner};
pub use types::Address;
pub use units::{format_units, parse_units, TOKEN_DECIMALS};

pub use ethabi::ethereum_types::U256;

//! ABI encoding for the reward token contract surface
//!
//! The deployed contract interface is assumed fixed: `transfer`,
//! `balanceOf`, `name`, `symbol`, `owner` and the owner-only `rewardUser`.

use crate::error::{ChainError, ChainResult};
use crate::types::Address;
use ethabi::ethereum_types::U256;
use ethabi::{short_signature, ParamType, Token};

fn encode_call(name: &str, params: &[ParamType], args: &[Token]) -> Vec<u8> {
    let mut data = short_signature(name, params).to_vec();
    data.extend(ethabi::encode(args));
    data
}

/// Calldata for `transfer(address,uint256)`.
pub fn transfer_call(to: Address, amount: U256) -> Vec<u8> {
    encode_call(
        "transfer",
        &[ParamType::Address, ParamType::Uint(256)],
        &[Token::Address(to.into()), Token::Uint(amount)],
    )
}

/// Calldata for `rewardUser(address,uint256)`.
pub fn reward_user_call(user: Address, amount: U256) -> Vec<u8> {
    encode_call(
        "rewardUser",
        &[ParamType::Address, ParamType::Uint(256)],
        &[Token::Address(user.into()), Token::Uint(amount)],
    )
}

/// Calldata for `balanceOf(address)`.
pub fn balance_of_call(owner: Address) -> Vec<u8> {
    encode_call(
        "balanceOf",
        &[ParamType::Address],
        &[Token::Address(owner.into())],
    )
}

/// Calldata for `name()`.
pub fn name_call() -> Vec<u8> {
    encode_call("name", &[], &[])
}

/// Calldata for `symbol()`.
pub fn symbol_call() -> Vec<u8> {
    encode_call("symbol", &[], &[])
}

/// Calldata for `owner()`.
pub fn owner_call() -> Vec<u8> {
    encode_call("owner", &[], &[])
}

/// Decode a single ABI-encoded string return value.
pub fn decode_string(data: &[u8]) -> ChainResult<String> {
    let tokens = ethabi::decode(&[ParamType::String], data)
        .map_err(|e| ChainError::Abi(e.to_string()))?;
    match tokens.into_iter().next() {
        Some(Token::String(s)) => Ok(s),
        _ => Err(ChainError::Abi("expected string return".to_string())),
    }
}

/// Decode a single ABI-encoded uint256 return value.
pub fn decode_uint(data: &[u8]) -> ChainResult<U256> {
    let tokens = ethabi::decode(&[ParamType::Uint(256)], data)
        .map_err(|e| ChainError::Abi(e.to_string()))?;
    match tokens.into_iter().next() {
        Some(Token::Uint(v)) => Ok(v),
        _ => Err(ChainError::Abi("expected uint return".to_string())),
    }
}

/// Decode a single ABI-encoded address return value.
pub fn decode_address(data: &[u8]) -> ChainResult<Address> {
    let tokens = ethabi::decode(&[ParamType::Address], data)
        .map_err(|e| ChainError::Abi(e.to_string()))?;
    match tokens.into_iter().next() {
        Some(Token::Address(a)) => Ok(a.into()),
        _ => Err(ChainError::Abi("expected address return".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transfer_selector_and_layout() {
        let to: Address = "0x1e9f2f91e0673e3313c68b49a2262814c7d8921e".parse().unwrap();
        let data = transfer_call(to, U256::from(1u64));
        // ERC-20 transfer selector
        assert_eq!(&data[..4], &[0xa9, 0x05, 0x9c, 0xbb]);
        // selector + two 32-byte words
        assert_eq!(data.len(), 68);
        // address is right-aligned in the first word
        assert_eq!(&data[16..36], &to.0);
        assert_eq!(data[67], 1);
    }

    #[test]
    fn balance_of_selector() {
        let owner = Address([0x11u8; 20]);
        let data = balance_of_call(owner);
        assert_eq!(&data[..4], &[0x70, 0xa0, 0x82, 0x31]);
        assert_eq!(data.len(), 36);
    }

    #[test]
    fn metadata_calls_are_selector_only() {
        assert_eq!(name_call().len(), 4);
        assert_eq!(symbol_call().len(), 4);
        assert_eq!(owner_call().len(), 4);
        assert_eq!(&name_call()[..], &[0x06, 0xfd, 0xde, 0x03]);
        assert_eq!(&symbol_call()[..], &[0x95, 0xd8, 0x9b, 0x41]);
        assert_eq!(&owner_call()[..], &[0x8d, 0xa5, 0xcb, 0x5b]);
    }

    #[test]
    fn decodes_return_values() {
        let encoded = ethabi::encode(&[Token::String("Phillip Reward Token".to_string())]);
        assert_eq!(decode_string(&encoded).unwrap(), "Phillip Reward Token");

        let encoded = ethabi::encode(&[Token::Uint(U256::from(42u64))]);
        assert_eq!(decode_uint(&encoded).unwrap(), U256::from(42u64));

        let addr = Address([0x22u8; 20]);
        let encoded = ethabi::encode(&[Token::Address(addr.into())]);
        assert_eq!(decode_address(&encoded).unwrap(), addr);

        assert!(decode_string(&[0u8; 3]).is_err());
    }
}

use crate::error::ChainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub const ADDRESS_LENGTH: usize = 20;

/// A 20-byte Ethereum account or contract address.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Address(pub [u8; ADDRESS_LENGTH]);

impl Address {
    /// Construct from a byte slice, zero-padding on the right if short.
    pub fn from_slice(bytes: &[u8]) -> Self {
        let mut arr = [0u8; ADDRESS_LENGTH];
        let len = bytes.len().min(ADDRESS_LENGTH);
        arr[..len].copy_from_slice(&bytes[..len]);
        Address(arr)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; ADDRESS_LENGTH]
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address(0x{})", hex::encode(self.0))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = ChainError;

    /// Parses a 0x-prefixed (or bare) 40-hex-digit address string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(stripped)
            .map_err(|_| ChainError::InvalidAddress(s.to_string()))?;
        if bytes.len() != ADDRESS_LENGTH {
            return Err(ChainError::InvalidAddress(s.to_string()));
        }
        let mut arr = [0u8; ADDRESS_LENGTH];
        arr.copy_from_slice(&bytes);
        Ok(Address(arr))
    }
}

impl From<Address> for ethabi::Address {
    fn from(addr: Address) -> Self {
        ethabi::Address::from(addr.0)
    }
}

impl From<ethabi::Address> for Address {
    fn from(addr: ethabi::Address) -> Self {
        Address(addr.0)
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

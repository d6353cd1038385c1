//! EIP-155 legacy transaction construction and signing

use crate::error::{ChainError, ChainResult};
use crate::types::Address;
use ethabi::ethereum_types::U256;
use k256::ecdsa::SigningKey;
use rlp::RlpStream;

/// An unsigned legacy (pre-EIP-1559) transaction.
#[derive(Debug, Clone)]
pub struct LegacyTx {
    pub nonce: u64,
    pub gas_price: U256,
    pub gas_limit: u64,
    pub to: Address,
    pub value: U256,
    pub data: Vec<u8>,
    pub chain_id: u64,
}

impl LegacyTx {
    fn rlp_base(&self, stream: &mut RlpStream) {
        stream.append(&self.nonce);
        stream.append(&self.gas_price);
        stream.append(&self.gas_limit);
        stream.append(&ethabi::Address::from(self.to));
        stream.append(&self.value);
        stream.append(&self.data);
    }

    /// EIP-155 signing payload: rlp(nonce, gasPrice, gas, to, value, data, chainId, 0, 0).
    fn signing_hash(&self) -> [u8; 32] {
        let mut stream = RlpStream::new();
        stream.begin_list(9);
        self.rlp_base(&mut stream);
        stream.append(&self.chain_id);
        stream.append(&0u8);
        stream.append(&0u8);
        keccak_hash::keccak(stream.out()).0
    }
}

/// Holds the faucet's private signing key and its derived account address.
pub struct TxSigner {
    key: SigningKey,
    address: Address,
}

impl TxSigner {
    /// Build a signer from a 0x-prefixed (or bare) 32-byte hex private key.
    pub fn from_hex(private_key: &str) -> ChainResult<Self> {
        let stripped = private_key.strip_prefix("0x").unwrap_or(private_key);
        let bytes = hex::decode(stripped)
            .map_err(|e| ChainError::InvalidKey(format!("not hex: {}", e)))?;
        if bytes.len() != 32 {
            return Err(ChainError::InvalidKey(format!(
                "expected 32 bytes, got {}",
                bytes.len()
            )));
        }
        let mut key_array = [0u8; 32];
        key_array.copy_from_slice(&bytes);

        let key = SigningKey::from_bytes(&key_array.into())
            .map_err(|e| ChainError::InvalidKey(e.to_string()))?;

        // keccak256 of the uncompressed public key, minus the 0x04 tag byte
        let public_key = key.verifying_key().to_encoded_point(false);
        let hash = keccak_hash::keccak(&public_key.as_bytes()[1..]);
        let address = Address::from_slice(&hash.0[12..]);

        Ok(Self { key, address })
    }

    /// The account address derived from the signing key.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Sign a legacy transaction, returning the raw RLP-encoded bytes ready
    /// for `eth_sendRawTransaction`.
    pub fn sign_legacy(&self, tx: &LegacyTx) -> ChainResult<Vec<u8>> {
        let hash = tx.signing_hash();

        let (signature, recovery_id) = self
            .key
            .sign_prehash_recoverable(&hash)
            .map_err(|e| ChainError::Signing(e.to_string()))?;

        let r = U256::from_big_endian(signature.r().to_bytes().as_slice());
        let s = U256::from_big_endian(signature.s().to_bytes().as_slice());
        let v = tx.chain_id * 2 + 35 + u64::from(recovery_id.to_byte());

        let mut stream = RlpStream::new();
        stream.begin_list(9);
        tx.rlp_base(&mut stream);
        stream.append(&v);
        stream.append(&r);
        stream.append(&s);

        Ok(stream.out().to_vec())
    }

    /// Sign and hex-encode with the `0x` prefix.
    pub fn sign_legacy_hex(&self, tx: &LegacyTx) -> ChainResult<String> {
        Ok(format!("0x{}", hex::encode(self.sign_legacy(tx)?)))
    }
}

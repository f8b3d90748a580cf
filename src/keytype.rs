/*
    Key types select which hash pipeline turns a public key
    into the bytes of a native (bech32) address and of a hex address.

        Canonical:      native = hash160(compressed)          hex = keccak(uncompressed)[12..]
        EthSecp256k1:   native = keccak(uncompressed)[12..]   hex = keccak(uncompressed)[12..]
        Secp256k1:      native = hash160(compressed)          hex = hash160(compressed)

    `uncompressed` is always the 64 byte x || y form without the 0x04 byte.
*/

use crate::{
    hash,
    address::AddressErr
};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    Canonical,
    EthSecp256k1,
    Secp256k1
}

impl Default for KeyType {
    fn default() -> Self {
        KeyType::Canonical
    }
}

impl KeyType {
    pub const ALL: [KeyType; 3] = [KeyType::Canonical, KeyType::EthSecp256k1, KeyType::Secp256k1];

    /**
        Returns the 20 bytes that get bech32 encoded into the native address.
    */
    pub fn native_hash(&self, compressed: &[u8; 33], uncompressed: &[u8; 64]) -> [u8; 20] {
        match self {
            KeyType::Canonical | KeyType::Secp256k1 => hash::hash160(compressed),
            KeyType::EthSecp256k1 => keccak_tail(uncompressed)
        }
    }

    /**
        Returns the 20 bytes shown as the 0x prefixed hex address.

        For Secp256k1 these are the native address bytes, which are not
        an address any EVM chain would recognise.
    */
    pub fn eth_hash(&self, compressed: &[u8; 33], uncompressed: &[u8; 64]) -> [u8; 20] {
        match self {
            KeyType::Canonical | KeyType::EthSecp256k1 => keccak_tail(uncompressed),
            KeyType::Secp256k1 => hash::hash160(compressed)
        }
    }

    /**
        True if the hex address of this key type is an Ethereum address.
    */
    pub fn is_evm_compatible(&self) -> bool {
        !matches!(self, KeyType::Secp256k1)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            KeyType::Canonical => "canonical",
            KeyType::EthSecp256k1 => "eth_secp256k1",
            KeyType::Secp256k1 => "secp256k1"
        }
    }
}

//Last 20 bytes of the keccak256 hash
fn keccak_tail(uncompressed: &[u8; 64]) -> [u8; 20] {
    let mut out = [0u8; 20];
    out.copy_from_slice(&hash::keccak256(uncompressed)[12..]);
    out
}

impl FromStr for KeyType {
    type Err = AddressErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "canonical" => Ok(KeyType::Canonical),
            "eth_secp256k1" | "eth-secp256k1" | "ethsecp256k1" => Ok(KeyType::EthSecp256k1),
            "secp256k1" => Ok(KeyType::Secp256k1),
            _ => Err(AddressErr::UnsupportedKeyType(s.to_string()))
        }
    }
}

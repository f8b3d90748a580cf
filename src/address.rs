/*
    Address derivation entry points.

    A key (private, public or derived from a mnemonic) is reduced to its
    compressed and uncompressed public key shapes, the key type picks the
    hash pipeline, and the resulting 20 bytes are bech32 encoded under the
    chain prefix. Private key sources also get a 0x prefixed hex address.
*/

use crate::{
    key::{
        PrivKey,
        PubKey,
        KeyErr
    },
    keytype::KeyType,
    encoding::{
        bech32,
        Bech32Err,
        ConvertBitsErr
    },
    hdwallet::{
        HDWError,
        Path,
        Xprv
    },
    bip39::{
        Mnemonic,
        MnemonicErr
    },
    validate::ValidationErr,
    util::encode_02x
};
use thiserror::Error;
use tracing::debug;

const ADDRESS_PAYLOAD_LEN: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressErr {
    #[error(transparent)]
    Key(#[from] KeyErr),

    #[error(transparent)]
    Convert(#[from] ConvertBitsErr),

    #[error(transparent)]
    Encoding(#[from] Bech32Err),

    #[error("unsupported key type {0:?}, expected one of: canonical, eth_secp256k1, secp256k1")]
    UnsupportedKeyType(String),

    #[error(transparent)]
    Derivation(#[from] HDWError),

    #[error(transparent)]
    Mnemonic(#[from] MnemonicErr),

    #[error(transparent)]
    Validation(#[from] ValidationErr)
}

/**
    Everything derived from a private key.
    Debug output never shows the private key.
*/
#[derive(Clone, PartialEq, Eq)]
pub struct AddressSet {
    pub address: String,
    pub eth_address: String,
    pub public_key: String,
    pub private_key: String
}

/**
    A public key only yields the native address.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PubKeyAddress {
    pub address: String
}

pub struct Address;

impl Address {
    /**
        Derives the addresses of a hex private key using the canonical key type.
    */
    pub fn from_private_key(hex: &str, prefix: &str) -> Result<AddressSet, AddressErr> {
        Self::from_private_key_with_type(hex, prefix, KeyType::default())
    }

    /**
        Derives the addresses of a hex private key.

        Hex shorter than 64 characters is left padded with zeroes.
        The decoded key must be exactly 32 bytes and a valid secp256k1 scalar.
    */
    pub fn from_private_key_with_type(hex: &str, prefix: &str, key_type: KeyType) -> Result<AddressSet, AddressErr> {
        let k = PrivKey::from_hex(hex)?;
        Self::from_priv_key(&k, prefix, key_type)
    }

    /**
        Derives the native address of a public key in any of its byte shapes
        (33 byte compressed, 65 byte uncompressed or 64 byte uncompressed without 0x04)
        using the canonical key type.
    */
    pub fn from_public_key(bytes: &[u8], prefix: &str) -> Result<PubKeyAddress, AddressErr> {
        Self::from_public_key_with_type(bytes, prefix, KeyType::default())
    }

    pub fn from_public_key_with_type(bytes: &[u8], prefix: &str, key_type: KeyType) -> Result<PubKeyAddress, AddressErr> {
        let pk = PubKey::from_slice(bytes)?;
        debug!(key_type = key_type.as_str(), prefix, key_len = bytes.len(), "deriving address from public key");

        let address = bech32::encode(prefix, &key_type.native_hash(&pk.as_bytes(), &pk.uncompressed_bytes()))?;
        debug!(%address, "derived address");

        Ok(PubKeyAddress { address })
    }

    /**
        Derives the addresses of the key at `path` below the seed of a mnemonic phrase.

        The phrase needs at least 12 English words and a valid checksum, the seed
        uses an empty passphrase. The path must be a full BIP44 account path.
    */
    pub fn from_mnemonic(phrase: &str, path: &str, prefix: &str, key_type: KeyType) -> Result<AddressSet, AddressErr> {
        let mnemonic = Mnemonic::from_phrase(phrase, "")?;
        let path = Path::bip44(path)?;
        debug!(words = mnemonic.word_count(), %path, "deriving key from mnemonic");

        let xprv = Xprv::from_seed(&mnemonic.seed())?.derive_from_path(&path)?;
        Self::from_priv_key(&xprv.get_prv(), prefix, key_type)
    }

    /**
        Derives the addresses of an already parsed private key.
    */
    pub fn from_priv_key(k: &PrivKey, prefix: &str, key_type: KeyType) -> Result<AddressSet, AddressErr> {
        let pk = k.pub_key();
        let (compressed, uncompressed) = (pk.as_bytes(), pk.uncompressed_bytes());
        debug!(key_type = key_type.as_str(), prefix, "deriving addresses from private key");

        let address = bech32::encode(prefix, &key_type.native_hash(&compressed, &uncompressed))?;
        let eth_address = format!("0x{}", encode_02x(&key_type.eth_hash(&compressed, &uncompressed)));
        debug!(%address, %eth_address, "derived addresses");

        Ok(AddressSet {
            address,
            eth_address,
            public_key: pk.hex(),
            private_key: k.hex()
        })
    }

    /**
        Verifies that an address is a bech32 string under `prefix` carrying a 20 byte payload.
    */
    pub fn is_valid(address: &str, prefix: &str) -> bool {
        match bech32::decode_to_bytes(address) {
            Ok((hrp, payload)) => hrp == prefix && payload.len() == ADDRESS_PAYLOAD_LEN,
            Err(_) => false
        }
    }
}

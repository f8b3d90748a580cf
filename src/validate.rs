/*
    Checks for user supplied strings before they reach the key and address modules.

    Every check returns the parsed value so callers never validate and then parse twice.
    Derivation path and mnemonic rules live in hdwallet::Path::bip44 and
    bip39::Mnemonic::from_phrase, the checks here wrap them.
*/

use crate::{
    bip39::{
        Mnemonic,
        MnemonicErr
    },
    hdwallet::{
        HDWError,
        Path
    },
    util::decode_02x
};
use base64::{engine::general_purpose::STANDARD as B64, Engine};
use thiserror::Error;

const PRIVATE_KEY_HEX_LEN: usize = 64;
const COMPRESSED_HEX_LEN: usize = 66;
const UNCOMPRESSED_HEX_LEN: usize = 130;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationErr {
    #[error("prefix must contain only lowercase letters a-z, got {0:?}")]
    Prefix(String),

    #[error("private key must be a hex string")]
    PrivateKeyNotHex,

    #[error("private key must be exactly 64 characters long, got {0}")]
    PrivateKeyLength(usize),

    #[error("public key must be a hex string of 66 or 130 characters or the base64 encoding of one, got {0}")]
    PublicKey(String),

    #[error(transparent)]
    Path(#[from] HDWError),

    #[error(transparent)]
    Mnemonic(#[from] MnemonicErr)
}

/**
    A bech32 prefix: one or more lowercase ASCII letters.
*/
pub fn prefix(s: &str) -> Result<&str, ValidationErr> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(ValidationErr::Prefix(s.to_string()))
    }
    Ok(s)
}

/**
    A hex private key of exactly 64 characters.
*/
pub fn private_key(s: &str) -> Result<&str, ValidationErr> {
    if !is_hex(s) { return Err(ValidationErr::PrivateKeyNotHex) }
    if s.len() != PRIVATE_KEY_HEX_LEN { return Err(ValidationErr::PrivateKeyLength(s.len())) }
    Ok(s)
}

/**
    A public key as hex (66 or 130 characters) or as standard base64 of the same bytes.

    A string is treated as base64 when it only uses the base64 alphabet and is not pure hex,
    so a base64 string that happens to be all hex digits is read as hex.
*/
pub fn public_key(s: &str) -> Result<Vec<u8>, ValidationErr> {
    let s = s.trim();
    let bytes = if is_likely_base64(s) {
        match B64.decode(s) {
            Ok(x) => x,
            Err(x) => return Err(ValidationErr::PublicKey(format!("invalid base64: {}", x)))
        }
    } else if is_hex(s) {
        match decode_02x(s) {
            Ok(x) => x,
            Err(x) => return Err(ValidationErr::PublicKey(format!("invalid hex: {}", x)))
        }
    } else {
        return Err(ValidationErr::PublicKey(format!("{:?}", s)))
    };

    match bytes.len() * 2 {
        COMPRESSED_HEX_LEN | UNCOMPRESSED_HEX_LEN => Ok(bytes),
        x => Err(ValidationErr::PublicKey(format!("{} hex characters", x)))
    }
}

/**
    A BIP44 account path, m / purpose' / coin_type' / account' / change / index
*/
pub fn derivation_path(s: &str) -> Result<Path, ValidationErr> {
    Ok(Path::bip44(s)?)
}

/**
    A BIP39 English mnemonic of at least 12 words with a valid checksum.
    The seed is derived with an empty passphrase.
*/
pub fn mnemonic(s: &str) -> Result<Mnemonic, ValidationErr> {
    Ok(Mnemonic::from_phrase(s, "")?)
}

fn is_hex(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_hexdigit())
}

fn is_likely_base64(s: &str) -> bool {
    !s.is_empty()
        && s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'+' || b == b'/' || b == b'=')
        && !is_hex(s)
}

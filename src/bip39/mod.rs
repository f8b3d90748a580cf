/*
    This module wraps the BIP-39 standard for mnemonic phrases.

    Phrases are checked word by word against the English word list so
    that every bad word can be reported at once, then handed to the
    bip39 library for the checksum and the PBKDF2 seed.
*/

mod mnemonic;

pub use mnemonic::Mnemonic as Mnemonic;
pub use mnemonic::MIN_WORDS as MIN_WORDS;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MnemonicErr {
    #[error("mnemonic should contain at least 12 words, but got {0}")]
    TooFewWords(usize),

    #[error("invalid mnemonic words: {}", .0.join(", "))]
    InvalidWords(Vec<String>),

    #[error("bad mnemonic checksum")]
    BadChecksum,

    #[error("invalid mnemonic: {0}")]
    Invalid(String)
}

impl From<::bip39::Error> for MnemonicErr {
    fn from(err: ::bip39::Error) -> Self {
        match err {
            ::bip39::Error::InvalidChecksum => MnemonicErr::BadChecksum,
            x => MnemonicErr::Invalid(x.to_string())
        }
    }
}

/**
    This module combines all the boilerplate
    implementations of fmt::Display and fmt::Debug.

    Debug output of anything holding private key material is redacted.
*/

use crate::{
    key,
    keytype::KeyType,
    address,
    hdwallet::{
        ChildOptions,
        Path,
        Xprv
    },
    bip39
};
use std::fmt;

const REDACTED: &str = "[REDACTED]";

/*
    key module impls
*/
impl fmt::Debug for key::PrivKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PrivKey")
         .field(&REDACTED)
         .finish()
    }
}

impl fmt::Display for key::PubKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.hex())
    }
}

impl fmt::Debug for key::PubKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PubKey")
         .field(&self.hex())
         .finish()
    }
}

/*
    keytype module impls
*/
impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/*
    address module impls
*/
impl fmt::Debug for address::AddressSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddressSet")
         .field("address", &self.address)
         .field("eth_address", &self.eth_address)
         .field("public_key", &self.public_key)
         .field("private_key", &REDACTED)
         .finish()
    }
}

/*
    bip39 module impls
*/
impl fmt::Debug for bip39::Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mnemonic")
         .field("word_count", &self.word_count())
         .field("phrase", &REDACTED)
         .finish()
    }
}

/*
    hdwallet module impls
*/
impl fmt::Display for ChildOptions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ChildOptions::Normal(x) => write!(f, "{}", x),
            ChildOptions::Hardened(x) => write!(f, "{}'", x)
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "m")?;
        for child in self.children.iter() {
            write!(f, "/{}", child)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Xprv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Xprv")
         .field("key", &REDACTED)
         .field("depth", &self.depth)
         .field("parent_fingerprint", &self.parent_fingerprint)
         .field("index", &self.index)
         .finish()
    }
}

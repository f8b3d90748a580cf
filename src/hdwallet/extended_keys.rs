/*
    This module implements extended private keys that are
    used in BIP32 hierarchical deterministic wallets.

    An extended key is a 32 byte key with a 32 byte chaincode,
    plus the metadata that places it in the tree.
*/

use crate::{
    key::{
        PrivKey,
        PubKey
    },
    hdwallet::{
        ckd::{
            derive_xprv,
            ChildOptions
        },
        HDWError,
        Path
    },
    hash
};

//HMAC key used to turn a seed into the master key
const MASTER_KEY_SALT: &[u8] = b"Bitcoin seed";

#[derive(Clone)]
pub struct Xprv {
    key: PrivKey,
    chaincode: [u8; 32],
    pub depth: u8,
    pub parent_fingerprint: [u8; 4],
    pub index: [u8; 4]
}

impl Xprv {
    /**
        Constructs the Extended Key.
    */
    pub fn construct(key: PrivKey, chaincode: [u8; 32], depth: u8, pf: [u8; 4], index: [u8; 4]) -> Self {
        Self {
            key,
            chaincode,
            depth,
            parent_fingerprint: pf,
            index
        }
    }

    /**
        Creates the master extended key from a BIP39 seed.
        * HMAC-SHA512(key = "Bitcoin seed", data = seed)
    */
    pub fn from_seed(seed: &[u8]) -> Result<Self, HDWError> {
        let bytes: [u8; 64] = match hash::hmac_sha512(seed, MASTER_KEY_SALT) {
            Some(x) => x,
            None => return Err(HDWError::BadKey)
        };
        let key = match PrivKey::from_slice(&bytes[0..32]) {
            Ok(x) => x,
            Err(_) => return Err(HDWError::BadKey)
        };
        let mut chaincode = [0u8; 32];
        chaincode.copy_from_slice(&bytes[32..64]);

        Ok(Self::construct(key, chaincode, 0, [0; 4], [0; 4]))
    }

    /**
        Returns the key part (left 32 bytes) of the extended key
    */
    pub fn key(&self) -> [u8; 32] {
        self.key.as_bytes()
    }

    /**
        Returns the chaincode (right 32 bytes) of the extended key
    */
    pub fn chaincode(&self) -> [u8; 32] {
        self.chaincode
    }

    /**
        Derives the child key of self
    */
    pub fn get_xchild(&self, options: ChildOptions) -> Result<Self, HDWError> {
        derive_xprv(self, options)
    }

    /**
        Derive the key at the given path, relative to self.
    */
    pub fn derive_from_path(&self, path: &Path) -> Result<Self, HDWError> {
        let mut current_key: Self = self.clone();
        for child in path.children.iter() {
            current_key = current_key.get_xchild(*child)?;
        }
        Ok(current_key)
    }

    /**
        Returns the private key of self without the chaincode
    */
    pub fn get_prv(&self) -> PrivKey {
        self.key.clone()
    }

    /**
        Return the non extended public key of self.
    */
    pub fn get_pub(&self) -> PubKey {
        self.key.pub_key()
    }
}

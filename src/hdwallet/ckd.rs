/*
    This module implements child key derivation
    from parent extended private keys under the BIP32 standard.

    Reference:
        https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki
*/

use crate::{
    hash::{
        hmac_sha512,
        hash160
    },
    hdwallet::{
        Xprv,
        HDWError,
        HARDENED_OFFSET
    }
};

/**
    Enum to pattern match child key derivation options.
    The index is the unhardened index in both cases, Hardened(0) is child 2^31.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildOptions {
    Normal(u32),
    Hardened(u32)
}

/**
    Function to derive new child xprv keys from parent xprv keys.
*/
pub fn derive_xprv(parent: &Xprv, options: ChildOptions) -> Result<Xprv, HDWError> {
    //Assign the index and data based on ChildOptions
    let (index, data): (u32, Vec<u8>) = match options {
        ChildOptions::Normal(x) => {
            //Indexes from 2^31 are reserved for hardened keys
            if x >= HARDENED_OFFSET { return Err(HDWError::IndexTooLarge(x)) }

            //Normal child is [parent pub bytes || index bytes]
            let mut data: Vec<u8> = Vec::with_capacity(37);
            data.extend_from_slice(&parent.get_pub().as_bytes());
            data.extend_from_slice(&x.to_be_bytes());

            (x, data)
        },
        ChildOptions::Hardened(x) => {
            //2^31 + 2^31 wont fit in a u32
            if x >= HARDENED_OFFSET { return Err(HDWError::IndexTooLarge(x)) }
            let index: u32 = x + HARDENED_OFFSET;

            //Hardened child is [0x00 || parent priv bytes || index bytes]
            let mut data: Vec<u8> = Vec::with_capacity(37);
            data.push(0x00);
            data.extend_from_slice(&parent.key());
            data.extend_from_slice(&index.to_be_bytes());

            (index, data)
        }
    };

    //Hash the data with the parent chaincode as the key
    let hash: [u8; 64] = match hmac_sha512(&data, &parent.chaincode()) {
        Some(x) => x,
        None => return Err(HDWError::BadKey)
    };

    //Child key = left half + parent key (mod n). The right half is the child chaincode.
    let mut child_key = parent.get_prv();
    if child_key.add_assign(&hash[0..32]).is_err() {
        return Err(HDWError::BadKey)
    }
    let mut child_chaincode = [0u8; 32];
    child_chaincode.copy_from_slice(&hash[32..64]);

    let depth: u8 = match parent.depth.checked_add(1) {
        Some(x) => x,
        None => return Err(HDWError::TooDeep)
    };
    let mut fingerprint = [0u8; 4];
    fingerprint.copy_from_slice(&hash160(&parent.get_pub().as_bytes())[0..4]);

    Ok(
        Xprv::construct(
            child_key,
            child_chaincode,
            depth,
            fingerprint,
            index.to_be_bytes()
        )
    )
}

/*
    Library to derive Cosmos SDK style account addresses
    from mnemonics, private keys and public keys.

    A native address is the bech32 encoding of 20 bytes hashed out of
    the public key under a chain prefix (cosmos, sei, osmo, ...).
    Which hash is used depends on the key type of the chain, see keytype.rs.
    Chains with an EVM also get the 0x prefixed hex address of the key.

    References:
        - BIP-173 (https://github.com/bitcoin/bips/blob/master/bip-0173.mediawiki)
            bech32 encoding and checksum

        - BIP-32 and BIP-39
            mnemonic seeds and child key derivation

        - Cosmos SDK and Ethermint key types
            secp256k1 and eth_secp256k1 address hashing
*/

//Outward facing modules
pub mod key;
pub mod keytype;
pub mod address;
pub mod encoding;
pub mod bip39;
pub mod hdwallet;
pub mod validate;
pub mod prelude;

//Modules for internal use
mod hash;
pub mod util;
mod impls;

//Dependencies
#[cfg(test)]
use secp256k1::rand::rngs::OsRng as SecpOsRng;
use secp256k1::{PublicKey, Secp256k1, SecretKey};
use hmac::{Mac, NewMac, Hmac};
use sha2::{Sha256, Sha512, Digest};
use ripemd160::Ripemd160;
use tiny_keccak::{Hasher, Keccak};

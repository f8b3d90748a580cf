/*
    Private and public secp256k1 keys.

    All curve arithmetic (point multiplication, compression and
    decompression) is done by the secp256k1 library. This module only
    checks the shapes of the bytes handed to it.
*/

use crate::{
    Secp256k1,
    PublicKey,
    SecretKey,
    util::{
        decode_02x,
        encode_02x,
        pad_02x
    }
};
use thiserror::Error;

pub const PRIVATE_KEY_LEN: usize = 32;
pub const COMPRESSED_LEN: usize = 33;
pub const UNCOMPRESSED_LEN: usize = 65;
pub const RAW_UNCOMPRESSED_LEN: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyErr {
    #[error("private key must be {expected} bytes long, found {found} bytes")]
    InvalidPrivateKey { expected: usize, found: usize },

    #[error("private key is not a valid hex string: {0}")]
    BadHex(String),

    #[error("private key is zero or not below the secp256k1 curve order")]
    InvalidScalar,

    #[error("public key must be 33, 64 or 65 bytes long, found {0} bytes")]
    InvalidKeyLength(usize),

    #[error("public key is not a point on the secp256k1 curve: {0}")]
    InvalidPublicKey(String)
}

#[derive(Clone)]
pub struct PrivKey(SecretKey);

impl PrivKey {
    /**
        Use a predefined byte slice as a secret key.
    */
    pub fn from_slice(bytes: &[u8]) -> Result<Self, KeyErr> {
        if bytes.len() != PRIVATE_KEY_LEN {
            return Err(KeyErr::InvalidPrivateKey { expected: PRIVATE_KEY_LEN, found: bytes.len() })
        }

        match SecretKey::from_slice(bytes) {
            Ok(x) => Ok(Self(x)),
            Err(_) => Err(KeyErr::InvalidScalar)
        }
    }

    /**
        Parses a hex encoded secret key.

        Short strings are left padded with zeroes to 64 characters first.
        Length is checked on the decoded bytes, so longer strings are never truncated.
    */
    pub fn from_hex(hex: &str) -> Result<Self, KeyErr> {
        let padded = pad_02x(hex, PRIVATE_KEY_LEN * 2);
        let bytes = match decode_02x(&padded) {
            Ok(x) => x,
            Err(x) => return Err(KeyErr::BadHex(x.to_string()))
        };

        Self::from_slice(&bytes)
    }

    /**
        Serializes the private key into an array of bytes.
    */
    pub fn as_bytes(&self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&self.0[..]);
        bytes
    }

    pub fn hex(&self) -> String {
        encode_02x(&self.as_bytes())
    }

    /**
        Finds the public key of self.
    */
    pub fn pub_key(&self) -> PubKey {
        PubKey::from_priv_key(self)
    }

    /**
        Adds a 32 byte tweak to self modulo the curve order.
        Fails if the tweak is not below the order or the result is zero.
    */
    pub(crate) fn add_assign(&mut self, tweak: &[u8]) -> Result<(), KeyErr> {
        match self.0.add_assign(tweak) {
            Ok(()) => Ok(()),
            Err(_) => Err(KeyErr::InvalidScalar)
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PubKey(PublicKey);

impl PubKey {
    /**
        Finds the public key from a secret key.

        Is the result of static point G on the secp256k1 curve multipled k times, where k is the private key.
    */
    pub fn from_priv_key(k: &PrivKey) -> Self {
        Self(PublicKey::from_secret_key(&Secp256k1::new(), &k.0))
    }

    /**
        Parses a public key from any of its three byte shapes:
            33 bytes: compressed (parity byte + x)
            65 bytes: uncompressed (0x04 + x + y)
            64 bytes: uncompressed with the 0x04 byte stripped
    */
    pub fn from_slice(bytes: &[u8]) -> Result<Self, KeyErr> {
        let key = match bytes.len() {
            COMPRESSED_LEN | UNCOMPRESSED_LEN => PublicKey::from_slice(bytes),
            RAW_UNCOMPRESSED_LEN => {
                let mut prefixed = Vec::with_capacity(UNCOMPRESSED_LEN);
                prefixed.push(0x04);
                prefixed.extend_from_slice(bytes);
                PublicKey::from_slice(&prefixed)
            },
            x => return Err(KeyErr::InvalidKeyLength(x))
        };

        match key {
            Ok(x) => Ok(Self(x)),
            Err(x) => Err(KeyErr::InvalidPublicKey(x.to_string()))
        }
    }

    /**
        Returns the compressed public key as a byte array.
    */
    pub fn as_bytes(&self) -> [u8; 33] {
        self.0.serialize()
    }

    /**
        Returns the uncompressed public key, including the 0x04 format byte.
    */
    pub fn decompressed_bytes(&self) -> [u8; 65] {
        self.0.serialize_uncompressed()
    }

    /**
        Returns the uncompressed public key without the 0x04 format byte (x || y).
        This is the form Keccak-256 is applied to for hex addresses.
    */
    pub fn uncompressed_bytes(&self) -> [u8; 64] {
        let mut raw = [0u8; 64];
        raw.copy_from_slice(&self.decompressed_bytes()[1..]);
        raw
    }

    /**
       Return the compressed public key as a hex string.
    */
    pub fn hex(&self) -> String {
        encode_02x(&self.as_bytes())
    }

    /**
       Returns the uncompressed public key as a hex string.
    */
    pub fn decompressed_hex(&self) -> String {
        encode_02x(&self.decompressed_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SecpOsRng;

    const TEST_PRIV_KEY_HEX: &str = "30e60e7d56ffaa11dab5eac70acbb2601df6b685353264e03a551c02433320d1";
    const TEST_PUB_KEY_HEX: &str = "03e8f1035f52ed21615e339be6ac92b318f92c20fa15cb5054a3dd0884e10ecb6d";
    const TEST_RAW_UNCOMPRESSED_HEX: &str = "e8f1035f52ed21615e339be6ac92b318f92c20fa15cb5054a3dd0884e10ecb6dcc24bef7afbe5bd81946853a4d97132b4d93af560c02b3234c90e76186dc426b";

    #[test]
    fn pub_key_from_priv_key() {
        let k = PrivKey::from_hex(TEST_PRIV_KEY_HEX).unwrap();
        let pk = k.pub_key();
        assert_eq!(k.hex(), TEST_PRIV_KEY_HEX);
        assert_eq!(pk.hex(), TEST_PUB_KEY_HEX);
        assert_eq!(encode_02x(&pk.uncompressed_bytes()), TEST_RAW_UNCOMPRESSED_HEX);
        assert_eq!(pk.decompressed_hex(), format!("04{}", TEST_RAW_UNCOMPRESSED_HEX));
    }

    #[test]
    fn short_private_key_is_padded() {
        let k = PrivKey::from_hex("1").unwrap();
        assert_eq!(k.as_bytes()[31], 1);
        assert_eq!(k.pub_key().hex(), "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798");
    }

    #[test]
    fn bad_private_keys() {
        //68 hex chars decode to 34 bytes, padding never truncates
        assert_eq!(
            PrivKey::from_hex(&"1".repeat(68)).err(),
            Some(KeyErr::InvalidPrivateKey { expected: 32, found: 34 })
        );
        assert!(matches!(PrivKey::from_hex("tooshort"), Err(KeyErr::BadHex(_))));
        assert!(matches!(PrivKey::from_hex(&"1".repeat(65)), Err(KeyErr::BadHex(_))));
        assert_eq!(PrivKey::from_hex("0").err(), Some(KeyErr::InvalidScalar));
        assert_eq!(
            PrivKey::from_hex("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141").err(),
            Some(KeyErr::InvalidScalar)
        );
        assert_eq!(
            PrivKey::from_slice(&[1u8; 31]).err(),
            Some(KeyErr::InvalidPrivateKey { expected: 32, found: 31 })
        );
    }

    #[test]
    fn pub_key_shapes() {
        let compressed = decode_02x(TEST_PUB_KEY_HEX).unwrap();
        let raw = decode_02x(TEST_RAW_UNCOMPRESSED_HEX).unwrap();
        let mut uncompressed = vec![0x04];
        uncompressed.extend_from_slice(&raw);

        let a = PubKey::from_slice(&compressed).unwrap();
        let b = PubKey::from_slice(&uncompressed).unwrap();
        let c = PubKey::from_slice(&raw).unwrap();
        assert!(a == b && b == c);
        assert_eq!(c.hex(), TEST_PUB_KEY_HEX);
        assert_eq!(a.uncompressed_bytes().to_vec(), raw);
    }

    #[test]
    fn bad_pub_keys() {
        assert_eq!(PubKey::from_slice(&[2u8; 32]).err(), Some(KeyErr::InvalidKeyLength(32)));
        assert_eq!(PubKey::from_slice(&[]).err(), Some(KeyErr::InvalidKeyLength(0)));
        assert_eq!(PubKey::from_slice(&[4u8; 66]).err(), Some(KeyErr::InvalidKeyLength(66)));
        //Right length, bad format byte
        assert!(matches!(PubKey::from_slice(&[0x05; 33]), Err(KeyErr::InvalidPublicKey(_))));
        //x = 0 is not on the curve
        let mut not_on_curve = [0u8; 33];
        not_on_curve[0] = 0x02;
        assert!(matches!(PubKey::from_slice(&not_on_curve), Err(KeyErr::InvalidPublicKey(_))));
    }

    #[test]
    fn random_keys_round_trip() {
        let mut rng = SecpOsRng::new().expect("OsRng");
        for _i in 0..5 {
            let k = PrivKey(SecretKey::new(&mut rng));
            let pk = k.pub_key();
            assert_eq!(PrivKey::from_hex(&k.hex()).unwrap().as_bytes(), k.as_bytes());
            assert!(PubKey::from_slice(&pk.uncompressed_bytes()).unwrap() == pk);
            assert!(matches!(pk.as_bytes()[0], 0x02 | 0x03));
        }
    }
}

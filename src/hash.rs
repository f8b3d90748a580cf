/*
    Hash module includes the hash functions necessary to hash
    a public key into a native or hex address, and the HMAC
    used for BIP32 child key derivation.
*/

use crate::{
    Ripemd160, Sha256, Sha512, Digest,
    Hmac, Mac, NewMac,
    Keccak, Hasher
};

/*
    Takes in a byte array and returns the ripemd160 hash of it
*/
pub fn ripemd160<T>(input: T) -> [u8; 20]
where T: AsRef<[u8]>
{
    let mut r = Ripemd160::new();
    r.update(input);
    let mut out = [0u8; 20];
    out.copy_from_slice(&r.finalize());
    out
}

/*
    Takes in a byte array and returns the sha256 hash of it
*/
pub fn sha256<T>(input: T) -> [u8; 32]
where T: AsRef<[u8]>
{
    let mut r = Sha256::new();
    r.update(input);
    let mut out = [0u8; 32];
    out.copy_from_slice(&r.finalize());
    out
}

/*
    Ripemd160( Sha256( input ) )
*/
pub fn hash160<T>(input: T) -> [u8; 20]
where T: AsRef<[u8]>
{
    ripemd160(sha256(input))
}

/*
    Takes in a byte array and returns the original (pre NIST) Keccak-256 hash of it.
    This is not SHA3-256, the padding differs.
*/
pub fn keccak256<T>(input: T) -> [u8; 32]
where T: AsRef<[u8]>
{
    let mut k = Keccak::v256();
    k.update(input.as_ref());
    let mut out = [0u8; 32];
    k.finalize(&mut out);
    out
}

/**
    HMAC-SHA512 of data using key.
    Returns None only if the MAC rejects the key, which HMAC never does for any key length.
*/
pub fn hmac_sha512(data: &[u8], key: &[u8]) -> Option<[u8; 64]> {
    let mut mac = Hmac::<Sha512>::new_from_slice(key).ok()?;
    mac.update(data);
    let mut out = [0u8; 64];
    out.copy_from_slice(&mac.finalize().into_bytes());
    Some(out)
}

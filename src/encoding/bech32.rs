/*
    Module implements bech32 encoding (BIP-173) for native account addresses.

    An address is the human readable prefix, the separator '1', the payload
    squashed into 5 bit groups and a 6 character BCH checksum over both.
*/
use crate::encoding::bits::{
    convert_bits,
    ConvertBitsErr
};
use thiserror::Error;

// Encoding character set.
const CHARSET: [char; 32] = [
    'q','p','z','r','y','9','x','8',
    'g','f','2','t','v','d','w','0',
    's','3','j','n','5','4','k','h',
    'c','e','6','m','u','a','7','l'
];

const SEPARATOR: char = '1';
const CHECKSUM_LEN: usize = 6;
pub const MAX_LEN: usize = 90;

// Generator coefficients of the BCH code.
const GEN: [u32; 5] = [0x3b6a57b2, 0x26508e6d, 0x1ea119fa, 0x3d4233dd, 0x2a1462b3];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Bech32Err {
    #[error("prefix cannot be empty")]
    EmptyPrefix,

    #[error("invalid character {0:?} in prefix")]
    InvalidPrefixChar(char),

    #[error("address would be {0} characters long, the maximum is 90")]
    TooLong(usize),

    #[error("invalid data character {0:?}")]
    InvalidChar(char),

    #[error("address mixes upper and lower case characters")]
    MixedCase,

    #[error("missing separator or checksum")]
    MissingSeparator,

    #[error("invalid checksum")]
    BadChecksum,

    #[error("cannot regroup payload: {0}")]
    Convert(#[from] ConvertBitsErr)
}

struct Bech32Encoder {
    hrp: String,
    data: Vec<u8>
}

impl Bech32Encoder {
    /**
        Creates an encoder for the given prefix and 5 bit data.
        The prefix is checked here so that every encoder holds a usable prefix.
    */
    pub fn new(hrp: &str, data: Vec<u8>) -> Result<Self, Bech32Err> {
        check_hrp(hrp)?;
        //Encoders only ever emit lowercase
        if let Some(c) = hrp.chars().find(|c| c.is_ascii_uppercase()) {
            return Err(Bech32Err::InvalidPrefixChar(c))
        }

        Ok(Self {
            hrp: hrp.to_string(),
            data
        })
    }

    /**
        Returns the Bech32 string: hrp | separator | data | checksum
    */
    pub fn bech32(&self) -> Result<String, Bech32Err> {
        let len = self.hrp.len() + 1 + self.data.len() + CHECKSUM_LEN;
        if len > MAX_LEN { return Err(Bech32Err::TooLong(len)) }

        let mut encoded = String::with_capacity(len);
        encoded.push_str(&self.hrp);
        encoded.push(SEPARATOR);
        for x in self.data.iter().chain(self.create_checksum().iter()) {
            encoded.push(CHARSET[*x as usize]);
        }

        Ok(encoded)
    }

    fn create_checksum(&self) -> [u8; CHECKSUM_LEN] {
        let mut values = hrp_expand(&self.hrp);
        values.extend_from_slice(&self.data);
        values.extend_from_slice(&[0; CHECKSUM_LEN]);
        let plm = polymod(&values) ^ 1;

        let mut checksum = [0u8; CHECKSUM_LEN];
        for (i, c) in checksum.iter_mut().enumerate() {
            *c = ((plm >> (5 * (5 - i))) & 31) as u8;
        }
        checksum
    }
}

/*
    Prefix characters must be printable US-ASCII
*/
fn check_hrp(hrp: &str) -> Result<(), Bech32Err> {
    if hrp.is_empty() { return Err(Bech32Err::EmptyPrefix) }
    match hrp.chars().find(|c| !(33..=126).contains(&(*c as u32))) {
        Some(c) => Err(Bech32Err::InvalidPrefixChar(c)),
        None => Ok(())
    }
}

/*
    Expands the prefix into values for checksum computation:
    high bits of each char | 0 | low bits of each char
*/
fn hrp_expand(hrp: &str) -> Vec<u8> {
    let mut v: Vec<u8> = hrp.bytes().map(|b| b >> 5).collect();
    v.push(0);
    v.extend(hrp.bytes().map(|b| b & 31));
    v
}

fn polymod(values: &[u8]) -> u32 {
    let mut chk: u32 = 1;
    for v in values {
        let b = chk >> 25;
        chk = (chk & 0x1ffffff) << 5 ^ *v as u32;
        for (i, g) in GEN.iter().enumerate() {
            if (b >> i) & 1 == 1 {
                chk ^= g;
            }
        }
    }
    chk
}

/**
    Encodes a byte payload as a bech32 string with the given prefix.
    The payload is squashed into 5 bit groups, zero padding the last group.
*/
pub fn encode(prefix: &str, payload: &[u8]) -> Result<String, Bech32Err> {
    let data = convert_bits(payload, 8, 5, true)?;
    Bech32Encoder::new(prefix, data)?.bech32()
}

/**
    Decodes a bech32 string into its prefix and 5 bit data, verifying the checksum.
    The returned prefix is lowercase.
*/
pub fn decode(encoded: &str) -> Result<(String, Vec<u8>), Bech32Err> {
    if encoded.len() > MAX_LEN { return Err(Bech32Err::TooLong(encoded.len())) }

    let has_lower = encoded.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = encoded.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper { return Err(Bech32Err::MixedCase) }
    let encoded = encoded.to_ascii_lowercase();

    //The separator is the last '1', the prefix itself may contain '1's
    let pos = match encoded.rfind(SEPARATOR) {
        Some(x) if x > 0 && x + CHECKSUM_LEN < encoded.len() => x,
        Some(0) => return Err(Bech32Err::EmptyPrefix),
        _ => return Err(Bech32Err::MissingSeparator)
    };
    let (hrp, rest) = (&encoded[..pos], &encoded[pos + 1..]);
    check_hrp(hrp)?;

    let mut data: Vec<u8> = Vec::with_capacity(rest.len());
    for c in rest.chars() {
        match CHARSET.iter().position(|x| *x == c) {
            Some(x) => data.push(x as u8),
            None => return Err(Bech32Err::InvalidChar(c))
        }
    }

    let mut values = hrp_expand(hrp);
    values.extend_from_slice(&data);
    if polymod(&values) != 1 { return Err(Bech32Err::BadChecksum) }

    data.truncate(data.len() - CHECKSUM_LEN);
    Ok((hrp.to_string(), data))
}

/**
    Decodes a bech32 string and expands the data back into bytes.
*/
pub fn decode_to_bytes(encoded: &str) -> Result<(String, Vec<u8>), Bech32Err> {
    let (hrp, data) = decode(encoded)?;
    Ok((hrp, convert_bits(&data, 5, 8, false)?))
}

/*
    Decodes hex strings into a byte vector
*/
pub fn decode_02x(hex: &str) -> Result<Vec<u8>, hex::FromHexError> {
    hex::decode(hex)
}

/*
    Encodes byte slices into lowercase hex string
*/
pub fn encode_02x(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/**
    Left pads a hex string with zeroes up to the given width.
    Strings that are already at least `width` long are returned unchanged.
*/
pub fn pad_02x(hex: &str, width: usize) -> String {
    format!("{:0>width$}", hex, width = width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_test() {
        assert_eq!(pad_02x("abc", 6), "000abc");
        assert_eq!(pad_02x("", 4), "0000");
        //Never truncates
        assert_eq!(pad_02x("1111111", 4), "1111111");
    }

    #[test]
    fn hex_test() {
        assert_eq!(encode_02x(&[0x00, 0x0f, 0xff]), "000fff");
        assert_eq!(decode_02x("000FfF").unwrap(), vec![0x00, 0x0f, 0xff]);
        assert!(decode_02x("abc").is_err());
        assert!(decode_02x("zz").is_err());
    }
}

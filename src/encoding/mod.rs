/*
    Module that bundles together the encoding schemes used for native addresses
*/

pub mod bits;
pub mod bech32;
pub use bits::convert_bits as convert_bits;
pub use bits::ConvertBitsErr as ConvertBitsErr;
pub use self::bech32::Bech32Err as Bech32Err;

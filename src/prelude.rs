/*
    This module contains the default imports for the library.

    Import the library using:
        use cosmos_keyaddress::prelude::*;
    to quickly import the essential parts of the library.
*/

pub use crate::{

    key::{
        PubKey,
        PrivKey,
        KeyErr
    },

    keytype::KeyType,

    address::{
        Address,
        AddressErr,
        AddressSet,
        PubKeyAddress
    },

    bip39::{
        MnemonicErr,
        Mnemonic
    },

    hdwallet::{
        ChildOptions,
        Xprv,
        HDWError,
        Path
    },

    encoding::{
        Bech32Err,
        ConvertBitsErr,
        convert_bits
    },

    validate::ValidationErr,

    util::{
        encode_02x,
        decode_02x
    }

};

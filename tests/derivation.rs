/*
    End to end address derivation through the public api.
*/

use cosmos_keyaddress::prelude::*;

const ABANDON: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
const TEST_JUNK: &str = "test test test test test test test test test test test junk";

#[test]
fn private_key_vector() {
    let set = Address::from_private_key("30e60e7d56ffaa11dab5eac70acbb2601df6b685353264e03a551c02433320d1", "cosmos").unwrap();
    assert_eq!(set.address, "cosmos1085uayqujzd9fj9j7emw5zsua3vgzx708932tt");
    assert_eq!(set.eth_address, "0xd0800523100506f2836f9401110755cb3d758205");
    assert!(Address::is_valid(&set.address, "cosmos"));
}

#[test]
fn mnemonic_vectors() {
    let cosmos = Address::from_mnemonic(ABANDON, "m/44'/118'/0'/0/0", "cosmos", KeyType::Canonical).unwrap();
    assert_eq!(cosmos.address, "cosmos19rl4cm2hmr8afy4kldpxz3fka4jguq0auqdal4");
    assert_eq!(cosmos.public_key, "024f4e2ad99c34d60b9ba6283c9431a8418af8673212961f97a77b6377fcd05b62");

    let evm = Address::from_mnemonic(ABANDON, "m/44'/60'/0'/0/0", "cosmos", KeyType::Canonical).unwrap();
    assert_eq!(evm.eth_address, "0x9858effd232b4033e47d90003d41ec34ecaeda94");
    assert_eq!(evm.address, "cosmos1gsvdpdxec8hsu57lhxg5xem7refr233zu34d65");

    //Well known development account
    let sei = Address::from_mnemonic(TEST_JUNK, "m/44'/60'/0'/0/0", "sei", KeyType::EthSecp256k1).unwrap();
    assert_eq!(sei.eth_address, "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266");
    let sei = Address::from_mnemonic(TEST_JUNK, "m/44'/60'/0'/0/0", "sei", KeyType::Canonical).unwrap();
    assert_eq!(sei.address, "sei15428vq2uzwhm3taey9sr9x5vm6tk78ew5cyfgc");
}

#[test]
fn mnemonic_matches_private_key_source() {
    let from_mnemonic = Address::from_mnemonic(ABANDON, "(m/44'/118'/0'/0/0)", "osmo", KeyType::EthSecp256k1).unwrap();
    let from_key = Address::from_private_key_with_type(&from_mnemonic.private_key, "osmo", KeyType::EthSecp256k1).unwrap();
    assert_eq!(from_mnemonic, from_key);
}

#[test]
fn base64_public_key() {
    let bytes = cosmos_keyaddress::validate::public_key("A7z8ZtJ6xR0UbK7nOX2VbAwF2fgwpRZmDzMA6fYrReht").unwrap();
    assert_eq!(encode_02x(&bytes), "03bcfc66d27ac51d146caee7397d956c0c05d9f830a516660f3300e9f62b45e86d");

    assert_eq!(
        Address::from_public_key(&bytes, "cosmos").unwrap().address,
        "cosmos1urutmh8u83ncxmyy8xh7zpsd37uwhkka4crf7g"
    );
    assert_eq!(
        Address::from_public_key_with_type(&bytes, "cosmos", KeyType::EthSecp256k1).unwrap().address,
        "cosmos1mu5xl0sx5txcyx400uskvyp99gsg87vpdjajwu"
    );

    let sei = cosmos_keyaddress::validate::public_key("AzMDx9YcjoWC3m7VLmInQI65V6vJjvV1lRTNrBu1zQpC").unwrap();
    assert_eq!(
        Address::from_public_key(&sei, "sei").unwrap().address,
        "sei1wev8ptzj27aueu04wgvvl4gvurax6rj5yrag90"
    );
}

#[test]
fn uncompressed_public_key_without_format_byte() {
    let raw = decode_02x(
        "bcfc66d27ac51d146caee7397d956c0c05d9f830a516660f3300e9f62b45e86dc12e354a0c6ddf4e3b30a3fbc95d71bdd4a2cf643bfb1ed46877e065d359159d"
    ).unwrap();
    assert_eq!(raw.len(), 64);
    assert_eq!(
        Address::from_public_key_with_type(&raw, "cosmos", KeyType::EthSecp256k1).unwrap().address,
        "cosmos1mu5xl0sx5txcyx400uskvyp99gsg87vpdjajwu"
    );
    assert_eq!(
        Address::from_public_key(&raw, "cosmos").unwrap().address,
        "cosmos1urutmh8u83ncxmyy8xh7zpsd37uwhkka4crf7g"
    );
}

#[test]
fn errors_surface_through_aggregate() {
    let err = Address::from_private_key(&"1".repeat(68), "cosmos").unwrap_err();
    assert_eq!(err, AddressErr::Key(KeyErr::InvalidPrivateKey { expected: 32, found: 34 }));
    assert_eq!(err.to_string(), "private key must be 32 bytes long, found 34 bytes");

    let err = "ed25519".parse::<KeyType>().unwrap_err();
    assert!(err.to_string().contains("ed25519"));

    let err = Address::from_private_key("1", "UPPER").unwrap_err();
    assert_eq!(err, AddressErr::Encoding(Bech32Err::InvalidPrefixChar('U')));
}

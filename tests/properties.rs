/*
    Properties that hold for every valid private key.
*/

use cosmos_keyaddress::{
    encoding::bech32,
    prelude::*
};
use proptest::prelude::*;

fn valid_key() -> impl Strategy<Value = [u8; 32]> {
    any::<[u8; 32]>().prop_filter("not a valid secp256k1 scalar", |k| PrivKey::from_slice(k).is_ok())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 32, .. ProptestConfig::default() })]

    #[test]
    fn derivation_is_deterministic(k in valid_key(), kt in prop::sample::select(KeyType::ALL.to_vec())) {
        let hex = encode_02x(&k);
        let a = Address::from_private_key_with_type(&hex, "cosmos", kt).unwrap();
        let b = Address::from_private_key_with_type(&hex, "cosmos", kt).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn canonical_and_secp256k1_share_native_address(k in valid_key()) {
        let hex = encode_02x(&k);
        let canonical = Address::from_private_key_with_type(&hex, "sei", KeyType::Canonical).unwrap();
        let secp = Address::from_private_key_with_type(&hex, "sei", KeyType::Secp256k1).unwrap();
        let eth = Address::from_private_key_with_type(&hex, "sei", KeyType::EthSecp256k1).unwrap();

        prop_assert_eq!(&canonical.address, &secp.address);
        prop_assert_ne!(&canonical.address, &eth.address);
        //Canonical and EthSecp256k1 share the hex address
        prop_assert_eq!(&canonical.eth_address, &eth.eth_address);
    }

    #[test]
    fn addresses_are_well_formed(k in valid_key()) {
        let set = Address::from_private_key(&encode_02x(&k), "osmo").unwrap();
        prop_assert!(Address::is_valid(&set.address, "osmo"));
        prop_assert_eq!(set.address.len(), "osmo".len() + 1 + 32 + 6);
        prop_assert_eq!(set.eth_address.len(), 42);
        prop_assert!(set.eth_address.starts_with("0x"));
        prop_assert_eq!(set.private_key.len(), 64);
        prop_assert_eq!(set.public_key.len(), 66);
    }

    #[test]
    fn public_key_source_agrees(k in valid_key(), kt in prop::sample::select(KeyType::ALL.to_vec())) {
        let set = Address::from_private_key_with_type(&encode_02x(&k), "cosmos", kt).unwrap();
        let pk = PubKey::from_slice(&decode_02x(&set.public_key).unwrap()).unwrap();
        for shape in [pk.as_bytes().to_vec(), pk.decompressed_bytes().to_vec(), pk.uncompressed_bytes().to_vec()].iter() {
            prop_assert_eq!(&Address::from_public_key_with_type(shape, "cosmos", kt).unwrap().address, &set.address);
        }
    }

    #[test]
    fn bits_round_trip(data in prop::collection::vec(any::<u8>(), 0..256)) {
        let squashed = convert_bits(&data, 8, 5, true).unwrap();
        prop_assert!(squashed.iter().all(|x| *x < 32));
        prop_assert_eq!(convert_bits(&squashed, 5, 8, false).unwrap(), data);
    }

    #[test]
    fn codec_round_trip(payload in prop::collection::vec(any::<u8>(), 0..40), hrp in "[a-z]{1,10}") {
        let encoded = bech32::encode(&hrp, &payload).unwrap();
        prop_assert_eq!(bech32::decode_to_bytes(&encoded).unwrap(), (hrp.clone(), payload.clone()));

        //The ecosystem decoder reads the same payload
        use ::bech32::FromBase32;
        let (other_hrp, data, _) = ::bech32::decode(&encoded).unwrap();
        prop_assert_eq!(other_hrp, hrp);
        prop_assert_eq!(Vec::<u8>::from_base32(&data).unwrap(), payload);
    }
}

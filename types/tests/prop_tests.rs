use proptest::prelude::*;

use swtc_types::{Alphabet, ChainParams, PublicKey, SWTC_ALPHABET};

proptest! {
    /// Every digit maps to a symbol that maps back to the same digit.
    #[test]
    fn alphabet_digit_symbol_roundtrip(d in 0usize..58) {
        let sym = SWTC_ALPHABET.symbol(d);
        prop_assert_eq!(SWTC_ALPHABET.digit(sym), Some(d as u8));
    }

    /// Bytes outside the alphabet never decode to a digit.
    #[test]
    fn alphabet_rejects_foreign_bytes(b in any::<u8>()) {
        let in_alphabet = SWTC_ALPHABET.as_str().as_bytes().contains(&b);
        prop_assert_eq!(SWTC_ALPHABET.digit(b).is_some(), in_alphabet);
    }

    /// ChainParams JSON roundtrip preserves all fields.
    #[test]
    fn chain_params_serde_roundtrip(seed in any::<u8>(), account in any::<u8>()) {
        let params = ChainParams {
            alphabet: SWTC_ALPHABET,
            seed_version: seed,
            account_version: account,
        };
        let json = serde_json::to_string(&params).unwrap();
        let back: ChainParams = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, params);
    }

    /// PublicKey serde roundtrip preserves all 33 bytes.
    #[test]
    fn public_key_serde_roundtrip(bytes in prop::collection::vec(any::<u8>(), 33)) {
        let arr: [u8; 33] = bytes.try_into().unwrap();
        let key = PublicKey(arr);
        let json = serde_json::to_string(&key).unwrap();
        let back: PublicKey = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, key);
    }

    /// Shuffled copies of the default alphabet always validate.
    #[test]
    fn rotated_alphabets_validate(rot in 1usize..58) {
        let s = SWTC_ALPHABET.as_str();
        let rotated: String = s.chars().cycle().skip(rot).take(58).collect();
        let alpha = Alphabet::new(&rotated).unwrap();
        prop_assert_eq!(alpha.zero_symbol(), s.as_bytes()[rot]);
    }
}

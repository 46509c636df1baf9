//! Account address derivation from public keys.
//!
//! Address payload: `RIPEMD-160(SHA-256(compressed public key))`, wrapped in
//! Base-58-check with the chain's account version byte. On the default SWTC
//! configuration (version 0) every address starts with the alphabet's zero
//! symbol, `j`.

use swtc_types::{ChainParams, PublicKey, SwtcError};

use crate::base58check::{decode_base58check, encode_base58check};
use crate::hash::hash160;

/// Derive the account address for a public key.
pub fn derive_address(public: &PublicKey, params: &ChainParams) -> String {
    let payload = hash160(public.as_bytes());
    encode_base58check(&params.alphabet, params.account_version, &payload)
}

/// Decode an address back to its 20-byte RIPEMD-160 payload, verifying the
/// account version byte and checksum. Requires no key material.
pub fn decode_address(address: &str, params: &ChainParams) -> Result<Vec<u8>, SwtcError> {
    if address.is_empty() {
        return Err(SwtcError::EmptyInput);
    }
    decode_base58check(&params.alphabet, params.account_version, address)
}

/// Validate an address string: well-formed, right version byte, checksum ok.
pub fn validate_address(address: &str, params: &ChainParams) -> bool {
    decode_address(address, params).is_ok()
}

//! Base-58-check codec with configurable alphabet.
//!
//! Encoding: `version ++ payload ++ checksum` where the checksum is the first
//! 4 bytes of double-SHA-256 over `version ++ payload`, then Base-58
//! big-integer encoding. Leading zero bytes map to leading occurrences of the
//! alphabet's zero symbol, which preserves fixed-length semantics for
//! addresses.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use swtc_types::{Alphabet, SwtcError};

use crate::hash::double_sha256;

const CHECKSUM_LEN: usize = 4;
/// Minimum decoded length: 1 version byte + 4 checksum bytes.
const MIN_DECODED_LEN: usize = 5;

/// Base-58 encode raw bytes (no version, no checksum).
pub fn encode_base58(alphabet: &Alphabet, bytes: &[u8]) -> String {
    let leading_zeros = bytes.iter().take_while(|&&b| b == 0).count();

    let mut digits = Vec::new();
    let mut num = BigUint::from_bytes_be(bytes);
    while !num.is_zero() {
        // the remainder is always < 58, so the conversion cannot fail
        let rem = (&num % 58u32).to_u64().unwrap_or(0) as usize;
        digits.push(alphabet.symbol(rem));
        num /= 58u32;
    }

    let mut out = Vec::with_capacity(leading_zeros + digits.len());
    out.extend(std::iter::repeat(alphabet.zero_symbol()).take(leading_zeros));
    out.extend(digits.iter().rev());
    // every symbol comes from the (ASCII) alphabet
    String::from_utf8(out).unwrap_or_default()
}

/// Base-58 decode to raw bytes (no version or checksum handling).
pub fn decode_base58(alphabet: &Alphabet, input: &str) -> Result<Vec<u8>, SwtcError> {
    let mut num = BigUint::zero();
    for c in input.bytes() {
        let digit = alphabet
            .digit(c)
            .ok_or_else(|| SwtcError::Decode(format!("character {:?} is not in the alphabet", c as char)))?;
        num = num * 58u32 + digit;
    }

    let leading_zeros = input
        .bytes()
        .take_while(|&c| c == alphabet.zero_symbol())
        .count();

    let body = if num.is_zero() {
        Vec::new()
    } else {
        num.to_bytes_be()
    };

    let mut out = vec![0u8; leading_zeros];
    out.extend_from_slice(&body);
    Ok(out)
}

/// Encode a versioned payload with its 4-byte double-SHA-256 checksum.
pub fn encode_base58check(alphabet: &Alphabet, version: u8, payload: &[u8]) -> String {
    let mut buffer = Vec::with_capacity(1 + payload.len() + CHECKSUM_LEN);
    buffer.push(version);
    buffer.extend_from_slice(payload);
    let checksum = double_sha256(&buffer);
    buffer.extend_from_slice(&checksum[..CHECKSUM_LEN]);
    encode_base58(alphabet, &buffer)
}

/// Decode a Base-58-check string, verifying length, version byte, and
/// checksum. Returns the payload with version and checksum stripped.
pub fn decode_base58check(
    alphabet: &Alphabet,
    version: u8,
    input: &str,
) -> Result<Vec<u8>, SwtcError> {
    let decoded = decode_base58(alphabet, input)?;
    if decoded.len() < MIN_DECODED_LEN {
        return Err(SwtcError::Decode(format!(
            "decoded length {} is below the minimum of {}",
            decoded.len(),
            MIN_DECODED_LEN
        )));
    }
    if decoded[0] != version {
        return Err(SwtcError::VersionMismatch {
            expected: version,
            found: decoded[0],
        });
    }
    let (body, checksum) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
    if double_sha256(body)[..CHECKSUM_LEN] != *checksum {
        return Err(SwtcError::ChecksumMismatch);
    }
    Ok(body[1..].to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use swtc_types::SWTC_ALPHABET;

    const SEED_VERSION: u8 = 33;

    #[test]
    fn known_entropy_encodes_to_known_secret() {
        let entropy: Vec<u8> = (0..16).collect();
        let secret = encode_base58check(&SWTC_ALPHABET, SEED_VERSION, &entropy);
        assert_eq!(secret, "sp6JdwovBCsiwnMhXuvZGZtPUoGVr");
    }

    #[test]
    fn known_secret_decodes_to_known_entropy() {
        let entropy =
            decode_base58check(&SWTC_ALPHABET, SEED_VERSION, "snsYqv2FsYLuibE9TGHdG5x5V5Qcn")
                .unwrap();
        assert_eq!(
            hex::encode_upper(&entropy),
            "A89DCAC9C68BEBE4B856F1F2D2E61A43"
        );
    }

    #[test]
    fn roundtrip_preserves_payload() {
        let payload = [0u8, 0, 1, 2, 3, 0xFF];
        let encoded = encode_base58check(&SWTC_ALPHABET, 7, &payload);
        let decoded = decode_base58check(&SWTC_ALPHABET, 7, &encoded).unwrap();
        assert_eq!(decoded, payload);
    }

    #[test]
    fn leading_zero_bytes_map_to_zero_symbols() {
        let encoded = encode_base58(&SWTC_ALPHABET, &[0, 0, 0, 1]);
        assert!(encoded.starts_with("jjj"));
        let decoded = decode_base58(&SWTC_ALPHABET, &encoded).unwrap();
        assert_eq!(decoded, [0, 0, 0, 1]);
    }

    #[test]
    fn foreign_character_is_a_decode_error() {
        // '0' is not in the alphabet
        let err = decode_base58check(&SWTC_ALPHABET, SEED_VERSION, "s0s0s0").unwrap_err();
        assert!(matches!(err, SwtcError::Decode(_)));
    }

    #[test]
    fn short_input_is_a_decode_error() {
        let err = decode_base58check(&SWTC_ALPHABET, SEED_VERSION, "sh").unwrap_err();
        assert!(matches!(err, SwtcError::Decode(_)));
    }

    #[test]
    fn wrong_version_is_a_version_mismatch() {
        let encoded = encode_base58check(&SWTC_ALPHABET, 5, b"payload");
        let err = decode_base58check(&SWTC_ALPHABET, 6, &encoded).unwrap_err();
        assert_eq!(
            err,
            SwtcError::VersionMismatch {
                expected: 6,
                found: 5
            }
        );
    }

    #[test]
    fn corrupted_payload_is_a_checksum_mismatch() {
        let payload = [1u8, 2, 3, 4, 5, 6, 7, 8];
        let encoded = encode_base58check(&SWTC_ALPHABET, 9, &payload);

        // flip one bit in the decoded byte form and re-encode
        let mut raw = decode_base58(&SWTC_ALPHABET, &encoded).unwrap();
        raw[3] ^= 0x01;
        let corrupted = encode_base58(&SWTC_ALPHABET, &raw);

        let err = decode_base58check(&SWTC_ALPHABET, 9, &corrupted).unwrap_err();
        assert_eq!(err, SwtcError::ChecksumMismatch);
    }

    #[test]
    fn alternate_alphabet_is_honored() {
        // XRP alphabet: SWTC with 'r' and 'j' swapped back
        let xrp = swtc_types::Alphabet::new(
            "rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz",
        )
        .unwrap();
        let entropy: Vec<u8> = (0..16).collect();
        let swtc_secret = encode_base58check(&SWTC_ALPHABET, SEED_VERSION, &entropy);
        let xrp_secret = encode_base58check(&xrp, SEED_VERSION, &entropy);
        assert_ne!(swtc_secret, xrp_secret);
        assert_eq!(
            decode_base58check(&xrp, SEED_VERSION, &xrp_secret).unwrap(),
            entropy
        );
    }
}

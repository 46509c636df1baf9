//! Base-58 alphabets.
//!
//! An [`Alphabet`] is an ordered sequence of 58 distinct ASCII symbols that
//! defines the digit-to-character mapping of the Base-58 codec. Distinct
//! chains sharing this derivation scheme differ only in their alphabet and
//! version bytes, so the codec itself is alphabet-agnostic.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SwtcError;

/// Marker for ASCII bytes that are not part of the alphabet.
const INVALID: u8 = 0xFF;

/// A Base-58 alphabet: 58 distinct ASCII symbols plus a reverse lookup table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    chars: [u8; 58],
    /// Reverse lookup table: ASCII byte → digit value (0xFF = invalid).
    decode: [u8; 128],
}

/// The default SWTC alphabet (the XRP alphabet with `r` and `j` swapped).
pub const SWTC_ALPHABET: Alphabet =
    Alphabet::from_bytes(b"jpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65rkm8oFqi1tuvAxyz");

impl Alphabet {
    /// Build an alphabet from a known-good 58-byte constant.
    ///
    /// No validation is performed; use [`Alphabet::new`] for runtime input.
    pub const fn from_bytes(chars: &[u8; 58]) -> Self {
        let mut decode = [INVALID; 128];
        let mut i = 0;
        while i < 58 {
            decode[chars[i] as usize] = i as u8;
            i += 1;
        }
        Self {
            chars: *chars,
            decode,
        }
    }

    /// Build an alphabet from arbitrary input, validating that it contains
    /// exactly 58 distinct ASCII characters.
    pub fn new(chars: &str) -> Result<Self, SwtcError> {
        let bytes = chars.as_bytes();
        if bytes.len() != 58 {
            return Err(SwtcError::InvalidAlphabet(format!(
                "expected 58 characters, got {}",
                bytes.len()
            )));
        }
        let mut decode = [INVALID; 128];
        let mut out = [0u8; 58];
        for (i, &b) in bytes.iter().enumerate() {
            if b >= 128 {
                return Err(SwtcError::InvalidAlphabet(
                    "non-ASCII character".to_string(),
                ));
            }
            if decode[b as usize] != INVALID {
                return Err(SwtcError::InvalidAlphabet(format!(
                    "duplicate character {:?}",
                    b as char
                )));
            }
            decode[b as usize] = i as u8;
            out[i] = b;
        }
        Ok(Self { chars: out, decode })
    }

    /// The symbol for a Base-58 digit value (0..58).
    pub fn symbol(&self, digit: usize) -> u8 {
        self.chars[digit]
    }

    /// The symbol representing digit zero (used for leading zero bytes).
    pub fn zero_symbol(&self) -> u8 {
        self.chars[0]
    }

    /// The digit value of an ASCII byte, or `None` if it is not in the
    /// alphabet.
    pub fn digit(&self, byte: u8) -> Option<u8> {
        if byte >= 128 {
            return None;
        }
        match self.decode[byte as usize] {
            INVALID => None,
            v => Some(v),
        }
    }

    /// The alphabet rendered as a string.
    pub fn as_str(&self) -> &str {
        // chars is validated ASCII on every construction path
        std::str::from_utf8(&self.chars).unwrap_or("")
    }
}

impl Serialize for Alphabet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Alphabet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Alphabet::new(&s).map_err(serde::de::Error::custom)
    }
}

//! Chain parameters — the three values that fully determine chain-specific
//! behavior of the derivation scheme.
//!
//! Consortium chains sharing the SWTC derivation differ only in their Base-58
//! alphabet and two version bytes. Everything else (curve, hashing, checksum)
//! is identical across chains.

use serde::{Deserialize, Serialize};

use crate::alphabet::{Alphabet, SWTC_ALPHABET};

/// Immutable per-chain configuration.
///
/// Constructed once and never mutated; safe to share across threads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainParams {
    /// The 58-symbol alphabet used by the Base-58-check codec.
    pub alphabet: Alphabet,

    /// Version byte prefixing encoded seeds. Default: 33 (seeds start with `s`).
    pub seed_version: u8,

    /// Version byte prefixing encoded addresses. Default: 0 (addresses start
    /// with the alphabet's zero symbol, `j` on SWTC).
    pub account_version: u8,
}

impl ChainParams {
    /// SWTC main-chain defaults.
    pub fn swtc_defaults() -> Self {
        Self {
            alphabet: SWTC_ALPHABET,
            seed_version: 33,
            account_version: 0,
        }
    }
}

/// Default is the SWTC main-chain configuration.
impl Default for ChainParams {
    fn default() -> Self {
        Self::swtc_defaults()
    }
}

//! Common error type shared across crates.

use thiserror::Error;

/// Errors arising from seed/address decoding and key derivation.
///
/// Every variant is recoverable at the call site; the boolean validation
/// helpers in `swtc-wallet-core` collapse all of them to `false`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SwtcError {
    #[error("input string is empty")]
    EmptyInput,

    #[error("base58 decode failed: {0}")]
    Decode(String),

    #[error("version byte mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u8, found: u8 },

    #[error("checksum mismatch")]
    ChecksumMismatch,

    #[error("rejection sampling exhausted the 32-bit counter space")]
    DerivationExhausted,

    #[error("scalar multiplication produced the point at infinity")]
    PointAtInfinity,

    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(String),
}

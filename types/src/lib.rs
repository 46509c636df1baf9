//! Fundamental types for SWTC key derivation.
//!
//! This crate defines the types shared across every other crate in the
//! workspace: the Base-58 alphabet, chain parameters, key material wrappers,
//! and the common error type.

pub mod alphabet;
pub mod error;
pub mod keys;
pub mod params;

pub use alphabet::{Alphabet, SWTC_ALPHABET};
pub use error::SwtcError;
pub use keys::{KeyPair, PrivateKey, PublicKey};
pub use params::ChainParams;

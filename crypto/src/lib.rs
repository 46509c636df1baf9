//! Cryptographic core for SWTC wallets.
//!
//! - **secp256k1** curve arithmetic over arbitrary-precision integers
//! - **SHA-256 / SHA-512 / RIPEMD-160** digest adapters
//! - **Base-58-check** codec with configurable alphabet and version bytes
//! - Deterministic seed → key-pair derivation (XRP-style rejection sampling)
//!
//! Every derivation is a pure function of its inputs; the only side effect in
//! the crate is the OS entropy read in [`generate_seed`].

pub mod address;
pub mod base58check;
pub mod curve;
pub mod derive;
pub mod hash;
pub mod modmath;

pub use address::{decode_address, derive_address, validate_address};
pub use base58check::{
    decode_base58, decode_base58check, encode_base58, encode_base58check,
};
pub use curve::{CurveParams, Point, SECP256K1};
pub use derive::{derive_keypair, derive_private_scalar, generate_seed, scalar_from_seed};
pub use hash::{double_sha256, hash160, ripemd160, sha256, Sha512};

//! Wallet façade for SWTC key derivation.
//!
//! Composes the crypto core into the operations a wallet application needs:
//! - Generate a fresh seed and derive its key pair
//! - Rebuild a wallet deterministically from an existing secret
//! - Render the public key (uppercase hex) and account address
//! - Validate secrets and addresses
//!
//! The parameterized `_with` operations are the primitives; the plain forms
//! are thin wrappers supplying the SWTC main-chain defaults.

pub mod wallet;

pub use wallet::{
    is_valid_address, is_valid_address_with, is_valid_secret, is_valid_secret_with, Wallet,
};

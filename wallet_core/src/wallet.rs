//! Core wallet struct and validation helpers.

use swtc_crypto::{derive_address, derive_keypair, generate_seed, validate_address};
use swtc_types::{ChainParams, KeyPair, PublicKey, SwtcError};
use tracing::debug;

/// A derived wallet: key pair, originating secret, and chain parameters.
///
/// Immutable once constructed. Construction either succeeds with a fully
/// derived key pair or fails with a [`SwtcError`]; there is no partially
/// initialized state.
pub struct Wallet {
    keypair: KeyPair,
    secret: String,
    params: ChainParams,
}

impl Wallet {
    /// Generate a wallet from fresh OS entropy on the default SWTC chain.
    pub fn generate() -> Result<Self, SwtcError> {
        Self::generate_with(ChainParams::swtc_defaults())
    }

    /// Generate a wallet from fresh OS entropy for a consortium chain.
    pub fn generate_with(params: ChainParams) -> Result<Self, SwtcError> {
        let secret = generate_seed(&params);
        let wallet = Self::from_secret_with(&secret, params)?;
        debug!(address = %wallet.address(), "generated wallet");
        Ok(wallet)
    }

    /// Rebuild a wallet from an existing secret on the default SWTC chain.
    pub fn from_secret(secret: &str) -> Result<Self, SwtcError> {
        Self::from_secret_with(secret, ChainParams::swtc_defaults())
    }

    /// Rebuild a wallet from an existing secret for a consortium chain.
    pub fn from_secret_with(secret: &str, params: ChainParams) -> Result<Self, SwtcError> {
        if secret.is_empty() {
            return Err(SwtcError::EmptyInput);
        }
        let keypair = derive_keypair(secret, &params)?;
        Ok(Self {
            keypair,
            secret: secret.to_string(),
            params,
        })
    }

    /// The compressed public key.
    pub fn public_key(&self) -> &PublicKey {
        &self.keypair.public
    }

    /// The public key as 66 uppercase hexadecimal characters.
    pub fn public_key_hex(&self) -> String {
        self.keypair.public.to_hex()
    }

    /// The secret this wallet was derived from.
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// The account address for this wallet's public key.
    pub fn address(&self) -> String {
        derive_address(&self.keypair.public, &self.params)
    }

    /// The chain parameters this wallet was derived under.
    pub fn params(&self) -> &ChainParams {
        &self.params
    }
}

/// Whether a secret derives a valid key pair on the default SWTC chain.
pub fn is_valid_secret(secret: &str) -> bool {
    is_valid_secret_with(secret, &ChainParams::swtc_defaults())
}

/// Whether a secret derives a valid key pair for a consortium chain.
///
/// Performs the full derivation; there is no cheaper shortcut that also
/// verifies the rejection-sampling loop terminates.
pub fn is_valid_secret_with(secret: &str, params: &ChainParams) -> bool {
    !secret.is_empty() && derive_keypair(secret, params).is_ok()
}

/// Whether an address is well-formed on the default SWTC chain.
pub fn is_valid_address(address: &str) -> bool {
    is_valid_address_with(address, &ChainParams::swtc_defaults())
}

/// Whether an address is well-formed for a consortium chain.
pub fn is_valid_address_with(address: &str, params: &ChainParams) -> bool {
    !address.is_empty() && validate_address(address, params)
}

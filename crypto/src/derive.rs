//! Deterministic seed → key-pair derivation.
//!
//! Two-stage XRP-style derivation: a generator scalar is rejection-sampled
//! from the seed entropy, then a per-account scalar is sampled from the
//! compressed generator public key keyed by a 32-bit discriminator. The
//! account private key is their sum modulo the curve order. The discriminator
//! mechanism allows many accounts per seed; this library only ever derives
//! account 0.

use num_bigint::BigUint;
use num_traits::Zero;
use rand::rngs::OsRng;
use rand::RngCore;
use swtc_types::{ChainParams, KeyPair, PrivateKey, PublicKey, SwtcError};

use crate::base58check::{decode_base58check, encode_base58check};
use crate::curve::SECP256K1;
use crate::hash::Sha512;

/// Entropy length of a freshly generated seed.
const SEED_ENTROPY_LEN: usize = 16;

/// Discriminator of the one account this library derives.
const ROOT_ACCOUNT: u32 = 0;

/// Rejection-sample a scalar in `(0, N)` from a keyed SHA-512 candidate
/// space.
///
/// Each candidate is the first 32 bytes of
/// `SHA-512(bytes ++ [discriminator be32] ++ counter be32)` read as a
/// big-endian integer. N is close enough to 2^256 that the first candidate is
/// accepted almost always; exhausting the full 32-bit counter space is
/// observationally impossible but still surfaced as an explicit error rather
/// than an out-of-range scalar.
pub fn scalar_from_seed(bytes: &[u8], discriminator: Option<u32>) -> Result<BigUint, SwtcError> {
    let n = &SECP256K1.n;
    for counter in 0..=u32::MAX {
        let mut h = Sha512::new();
        h.add(bytes);
        if let Some(d) = discriminator {
            h.add_u32(d);
        }
        h.add_u32(counter);
        let candidate = BigUint::from_bytes_be(&h.finish256());
        if !candidate.is_zero() && &candidate < n {
            return Ok(candidate);
        }
    }
    Err(SwtcError::DerivationExhausted)
}

/// Derive the account private scalar `D` from raw seed entropy.
///
/// `D = (scalar(compress(privateGen·G), account 0) + privateGen) mod N`,
/// where `privateGen = scalar(entropy)`. Always satisfies `0 < D < N`.
pub fn derive_private_scalar(entropy: &[u8]) -> Result<BigUint, SwtcError> {
    let private_gen = scalar_from_seed(entropy, None)?;
    let public_gen = SECP256K1.scalar_base_mult(&private_gen).compress()?;
    let account = scalar_from_seed(&public_gen, Some(ROOT_ACCOUNT))?;
    Ok((account + private_gen) % &SECP256K1.n)
}

/// Derive a full key pair from a Base-58-check encoded secret.
pub fn derive_keypair(secret: &str, params: &ChainParams) -> Result<KeyPair, SwtcError> {
    if secret.is_empty() {
        return Err(SwtcError::EmptyInput);
    }
    let entropy = decode_base58check(&params.alphabet, params.seed_version, secret)?;
    if entropy.is_empty() {
        return Err(SwtcError::Decode("seed entropy is empty".to_string()));
    }

    let d = derive_private_scalar(&entropy)?;
    let point = SECP256K1.scalar_base_mult(&d);
    Ok(KeyPair {
        public: PublicKey(point.compress()?),
        private: PrivateKey(scalar_to_bytes(&d)),
    })
}

/// Generate a fresh secret: 16 bytes from the OS entropy source,
/// Base-58-check encoded with the chain's seed version byte.
pub fn generate_seed(params: &ChainParams) -> String {
    let mut entropy = [0u8; SEED_ENTROPY_LEN];
    OsRng.fill_bytes(&mut entropy);
    encode_base58check(&params.alphabet, params.seed_version, &entropy)
}

/// A scalar as 32 big-endian bytes, left-padded with zeros.
fn scalar_to_bytes(d: &BigUint) -> [u8; 32] {
    let bytes = d.to_bytes_be();
    let mut out = [0u8; 32];
    out[32 - bytes.len()..].copy_from_slice(&bytes);
    out
}

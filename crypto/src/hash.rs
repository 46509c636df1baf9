//! Digest adapters: SHA-256, SHA-512, RIPEMD-160.
//!
//! Thin wrappers exposing exactly the primitives the derivation needs as pure
//! functions, plus an incremental SHA-512 builder with the truncated outputs
//! the rejection-sampling loop consumes.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// SHA-256 of arbitrary data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Sha256::digest(data));
    out
}

/// SHA-256 applied twice; the Base-58-check checksum is its first 4 bytes.
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// RIPEMD-160 of arbitrary data.
pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    let mut out = [0u8; 20];
    out.copy_from_slice(&Ripemd160::digest(data));
    out
}

/// RIPEMD-160 of SHA-256 — the public-key-to-address hash.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    ripemd160(&sha256(data))
}

/// Incremental SHA-512 with big-endian integer appends and truncated outputs.
#[derive(Default)]
pub struct Sha512 {
    h: sha2::Sha512,
}

impl Sha512 {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append raw bytes.
    pub fn add(&mut self, bytes: &[u8]) {
        self.h.update(bytes);
    }

    /// Append a 32-bit integer as 4 big-endian bytes.
    pub fn add_u32(&mut self, v: u32) {
        self.h.update(v.to_be_bytes());
    }

    /// The full 64-byte digest.
    pub fn finish(self) -> [u8; 64] {
        let mut out = [0u8; 64];
        out.copy_from_slice(&self.h.finalize());
        out
    }

    /// The first 32 bytes of the digest.
    pub fn finish256(self) -> [u8; 32] {
        let mut out = [0u8; 32];
        out.copy_from_slice(&self.finish()[..32]);
        out
    }

    /// The first 16 bytes of the digest.
    pub fn finish128(self) -> [u8; 16] {
        let mut out = [0u8; 16];
        out.copy_from_slice(&self.finish()[..16]);
        out
    }
}

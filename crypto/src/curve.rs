//! secp256k1 curve arithmetic.
//!
//! Short-Weierstrass point operations (`y² = x³ + ax + b` over the prime
//! field `P`) implemented with arbitrary-precision integers. Only the
//! operations the derivation needs are provided: doubling, addition, scalar
//! multiplication by the generator, and SEC1 point compression.

use std::sync::LazyLock;

use num_bigint::BigUint;
use num_traits::Zero;
use swtc_types::SwtcError;

use crate::modmath::{add_mod, mod_inverse, mul_mod, sub_mod};

/// The fixed parameters of a short-Weierstrass curve.
#[derive(Clone, Debug)]
pub struct CurveParams {
    /// Field prime.
    pub p: BigUint,
    /// Curve coefficient `a` (0 for secp256k1).
    pub a: BigUint,
    /// Curve coefficient `b` (7 for secp256k1).
    pub b: BigUint,
    /// Generator point X coordinate.
    pub gx: BigUint,
    /// Generator point Y coordinate.
    pub gy: BigUint,
    /// Order of the generator.
    pub n: BigUint,
    /// Cofactor.
    pub h: BigUint,
}

fn parse_hex(s: &[u8]) -> BigUint {
    // parse_bytes only fails on malformed input; all callers pass literals
    BigUint::parse_bytes(s, 16).unwrap_or_default()
}

/// Process-wide secp256k1 parameters, constructed once and never mutated.
pub static SECP256K1: LazyLock<CurveParams> = LazyLock::new(|| CurveParams {
    p: parse_hex(b"FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F"),
    a: BigUint::zero(),
    b: BigUint::from(7u8),
    gx: parse_hex(b"79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798"),
    gy: parse_hex(b"483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8"),
    n: parse_hex(b"FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141"),
    h: BigUint::from(1u8),
});

/// A point on the curve: affine coordinates or the point at infinity.
///
/// Two points are equal iff their coordinates match (or both are infinity).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Point {
    Infinity,
    Affine { x: BigUint, y: BigUint },
}

impl Point {
    /// The curve generator.
    pub fn generator(curve: &CurveParams) -> Self {
        Point::Affine {
            x: curve.gx.clone(),
            y: curve.gy.clone(),
        }
    }

    /// SEC1 compressed encoding: `0x02`/`0x03` by Y parity, then X as 32
    /// big-endian bytes, left-padded with zeros.
    ///
    /// The point at infinity has no affine encoding; compressing it is a
    /// caller error surfaced as [`SwtcError::PointAtInfinity`].
    pub fn compress(&self) -> Result<[u8; 33], SwtcError> {
        match self {
            Point::Infinity => Err(SwtcError::PointAtInfinity),
            Point::Affine { x, y } => {
                let mut out = [0u8; 33];
                out[0] = if y.bit(0) { 0x03 } else { 0x02 };
                let xb = x.to_bytes_be();
                out[33 - xb.len()..].copy_from_slice(&xb);
                Ok(out)
            }
        }
    }
}

impl CurveParams {
    /// Point doubling.
    pub fn double(&self, point: &Point) -> Point {
        let (x, y) = match point {
            Point::Infinity => return Point::Infinity,
            Point::Affine { x, y } => (x, y),
        };
        if y.is_zero() {
            return Point::Infinity;
        }
        // λ = (3x² + a) / 2y
        let three_x2 = mul_mod(&BigUint::from(3u8), &mul_mod(x, x, &self.p), &self.p);
        let num = add_mod(&three_x2, &self.a, &self.p);
        let den = mod_inverse(&add_mod(y, y, &self.p), &self.p);
        let lam = mul_mod(&num, &den, &self.p);

        let x3 = sub_mod(&mul_mod(&lam, &lam, &self.p), &add_mod(x, x, &self.p), &self.p);
        let y3 = sub_mod(&mul_mod(&lam, &sub_mod(x, &x3, &self.p), &self.p), y, &self.p);
        Point::Affine { x: x3, y: y3 }
    }

    /// Point addition.
    pub fn add(&self, p1: &Point, p2: &Point) -> Point {
        let (x1, y1) = match p1 {
            Point::Infinity => return p2.clone(),
            Point::Affine { x, y } => (x, y),
        };
        let (x2, y2) = match p2 {
            Point::Infinity => return p1.clone(),
            Point::Affine { x, y } => (x, y),
        };
        if x1 == x2 {
            if add_mod(y1, y2, &self.p).is_zero() {
                return Point::Infinity;
            }
            return self.double(p1);
        }
        // λ = (y2 - y1) / (x2 - x1)
        let num = sub_mod(y2, y1, &self.p);
        let den = mod_inverse(&sub_mod(x2, x1, &self.p), &self.p);
        let lam = mul_mod(&num, &den, &self.p);

        let x3 = sub_mod(
            &sub_mod(&mul_mod(&lam, &lam, &self.p), x1, &self.p),
            x2,
            &self.p,
        );
        let y3 = sub_mod(&mul_mod(&lam, &sub_mod(x1, &x3, &self.p), &self.p), y1, &self.p);
        Point::Affine { x: x3, y: y3 }
    }

    /// Scalar multiplication of the generator: `k·G` via double-and-add.
    ///
    /// Valid for `k` in `[0, N-1]`; callers always supply scalars reduced by
    /// the rejection-sampling loop, so the result is affine in practice.
    pub fn scalar_base_mult(&self, k: &BigUint) -> Point {
        let mut acc = Point::Infinity;
        let mut addend = Point::generator(self);
        for i in 0..k.bits() {
            if k.bit(i) {
                acc = self.add(&acc, &addend);
            }
            addend = self.double(&addend);
        }
        acc
    }
}

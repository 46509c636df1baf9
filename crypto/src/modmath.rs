//! Modular big-integer arithmetic over prime fields.
//!
//! All operations are exact over arbitrary precision; no fixed-width overflow
//! semantics apply. Inputs are expected to be already reduced (`< m`).

use num_bigint::BigUint;

/// `(a + b) mod m`.
pub fn add_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a + b) % m
}

/// `(a - b) mod m`, wrapping into `[0, m)`.
pub fn sub_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    ((a + m) - b) % m
}

/// `(a * b) mod m`.
pub fn mul_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a * b) % m
}

/// Modular inverse via Fermat's little theorem: `a^(m-2) mod m`.
///
/// `m` must be prime and `a` nonzero modulo `m`.
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> BigUint {
    a.modpow(&(m - 2u32), m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    fn big(v: u32) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn add_wraps_at_modulus() {
        assert_eq!(add_mod(&big(8), &big(9), &big(11)), big(6));
    }

    #[test]
    fn sub_wraps_below_zero() {
        assert_eq!(sub_mod(&big(3), &big(9), &big(11)), big(5));
    }

    #[test]
    fn mul_reduces() {
        assert_eq!(mul_mod(&big(7), &big(8), &big(11)), big(1));
    }

    #[test]
    fn inverse_times_value_is_one() {
        let m = big(10007); // prime
        for v in [1u32, 2, 58, 9999] {
            let a = big(v);
            let inv = mod_inverse(&a, &m);
            assert_eq!(mul_mod(&a, &inv, &m), BigUint::one());
        }
    }
}

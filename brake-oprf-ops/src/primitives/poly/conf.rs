//! Fixed parameters for modular polynomial types.

use std::fmt::Debug;

use ark_ff::{BigInteger, PrimeField};
use static_assertions::const_assert;

use crate::conf::{FullRes, MiddleRes, TinyTest};
use crate::primitives::poly::fq::{Fq76, FqTiny};

/// Fixed polynomial ring parameters.
///
/// Polynomials with different parameters are incompatible.
pub trait PolyConf: Copy + Clone + Debug + Eq + PartialEq {
    /// The maximum exponent in the polynomial: the ring dimension N.
    const MAX_POLY_DEGREE: usize;

    /// The modular field used for polynomial coefficients.
    type Coeff: PrimeField + From<u128> + From<u64> + From<i64>;

    /// The coefficient modulus q as a primitive integer.
    fn modulus_as_u128() -> u128 {
        le_bytes_as_u128(&Self::Coeff::MODULUS.to_bytes_le())
    }

    /// A coefficient's canonical `[0, q)` representative as a primitive integer.
    fn coeff_as_u128(coeff: Self::Coeff) -> u128 {
        le_bytes_as_u128(&coeff.into_bigint().to_bytes_le())
    }
}

/// Reads a little-endian byte string into a u128.
/// Bytes beyond the first 16 must be zero: every supported modulus fits.
fn le_bytes_as_u128(bytes: &[u8]) -> u128 {
    let mut value = 0u128;
    for (i, &byte) in bytes.iter().enumerate() {
        if i < 16 {
            value |= u128::from(byte) << (8 * i);
        } else {
            debug_assert_eq!(byte, 0, "modulus does not fit in 128 bits");
        }
    }
    value
}

impl PolyConf for FullRes {
    const MAX_POLY_DEGREE: usize = 4096;

    type Coeff = Fq76;
}

impl PolyConf for MiddleRes {
    const MAX_POLY_DEGREE: usize = 256;

    type Coeff = Fq76;
}

impl PolyConf for TinyTest {
    const MAX_POLY_DEGREE: usize = 4;

    type Coeff = FqTiny;
}

// X^N + 1 is only cyclotomic when N is a power of two.
const_assert!(<FullRes as PolyConf>::MAX_POLY_DEGREE.is_power_of_two());
const_assert!(<MiddleRes as PolyConf>::MAX_POLY_DEGREE.is_power_of_two());
const_assert!(<TinyTest as PolyConf>::MAX_POLY_DEGREE.is_power_of_two());

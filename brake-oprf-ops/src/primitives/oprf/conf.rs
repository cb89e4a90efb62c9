//! Fixed parameters for the OPRF scheme.

use crate::conf::{FullRes, MiddleRes, TinyTest};
use crate::primitives::poly::PolyConf;

/// Fixed OPRF scheme parameters on top of a polynomial ring.
///
/// States and outputs produced under different parameters are incompatible.
pub trait OprfConf: PolyConf {
    /// The failure-probability security parameter (sec).
    const SEC: u32 = 40;

    /// The plaintext modulus p.
    const PLAINTEXT_MODULUS: u64 = 2;

    /// The masking noise magnitude bound `B = 2·N·2^sec`.
    ///
    /// Rounding cancels all protocol noise except with probability
    /// `≈ (2N + B)/q` per coefficient, which needs `2N + B ≪ q/2`.
    const NOISE_BOUND: i128 = (2 * Self::MAX_POLY_DEGREE as i128) << Self::SEC;

    /// The plaintext modulus as a coefficient.
    fn plaintext_as_coeff() -> Self::Coeff {
        Self::Coeff::from(Self::PLAINTEXT_MODULUS)
    }
}

/// Full resolution parameters, as recommended for deployment:
/// q = NextPrime(2^75), N = 2^12, B = 2^53.
impl OprfConf for FullRes {}

/// The full-resolution modulus over the smaller ring: B = 2^49 keeps the
/// failure rate negligible, at test-friendly cost.
impl OprfConf for MiddleRes {}

/// Toy parameters for hand-checked algebra: q = 127, N = 4, B = 8.
///
/// The noise-overflow chance per run is around 40%, so only use this config
/// where a correctness-oracle failure is an expected outcome.
impl OprfConf for TinyTest {
    const SEC: u32 = 0;
}

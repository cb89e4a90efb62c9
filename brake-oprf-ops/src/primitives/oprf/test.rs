//! Tests for the OPRF scheme.

use rand::Rng;

use crate::primitives::{
    oprf::{Oprf, OprfConf},
    poly::IntPoly,
};

#[cfg(test)]
pub mod hash;


#[cfg(test)]
pub mod rounding;




// Test-only data generation methods.
impl<C: OprfConf> Oprf<C> {
    /// Samples a client secret shaped like the fuzzy-vault output: 16 small
    /// non-negative coefficients.
    pub fn sample_test_secret<R: Rng>(&self, rng: &mut R) -> IntPoly {
        IntPoly::from_coefficients_vec((0..16).map(|_| rng.gen_range(0..(1 << 18))).collect())
    }

    /// "Samples" the fixed secret `x^3 + 2x + 5` used by the seeded scenarios.
    pub fn sample_fixed_secret(&self) -> IntPoly {
        IntPoly::from_coefficients_vec(vec![5, 2, 0, 1])
    }
}

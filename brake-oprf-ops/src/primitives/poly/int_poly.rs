//! Variable-length integer polynomials outside the ring.

use derive_more::{AsRef, Deref, Into};
use itertools::Itertools;

/// A polynomial over `Z`, kept in normalized form (no trailing zero
/// coefficients).
///
/// Client secrets enter the protocol as one of these, and the rounded OPRF
/// output leaves as one. Both uses keep every coefficient well inside `i64`:
/// fuzzy-vault secrets fit a machine word, and rounded coefficients lie in
/// `(-p/2, p/2]`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, AsRef, Deref, Into)]
pub struct IntPoly(Vec<i64>);

impl IntPoly {
    /// Converts `coeffs` into a normalized integer polynomial.
    pub fn from_coefficients_vec(mut coeffs: Vec<i64>) -> Self {
        while coeffs.last() == Some(&0) {
            coeffs.pop();
        }
        Self(coeffs)
    }

    /// Ingests a fuzzy-vault secret: small-binary-field coefficients read as
    /// non-negative integers, constant term first.
    pub fn from_vault_coefficients(coeffs: &[u32]) -> Self {
        Self::from_coefficients_vec(coeffs.iter().map(|&c| i64::from(c)).collect())
    }

    /// Returns coefficient `i`, zero-extended past the stored length.
    pub fn coeff(&self, i: usize) -> i64 {
        self.0.get(i).copied().unwrap_or(0)
    }

    /// The stored coefficients, constant term first.
    pub fn coeffs(&self) -> &[i64] {
        &self.0
    }

    /// Concatenates the base-10 coefficient values into one string, constant
    /// term first, no separators. The zero polynomial concatenates to `""`.
    ///
    /// This exact encoding feeds both the coefficient lift and the KEM seed.
    pub fn decimal_concat(&self) -> String {
        self.0.iter().join("")
    }
}

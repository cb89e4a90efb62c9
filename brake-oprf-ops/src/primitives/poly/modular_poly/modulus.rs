//! Reduction by the polynomial modulus `X^[PolyConf::MAX_POLY_DEGREE] + 1`.

use ark_ff::{One, Zero};
use ark_poly::{polynomial::univariate::DenseOrSparsePolynomial, Polynomial};

use crate::primitives::poly::{Poly, PolyConf};

/// The fastest available modular polynomial operation.
pub use mod_poly_manual_mut as mod_poly;

/// Reduces `dividend` to its canonical form in the ring.
///
/// In the negacyclic ring `X^N = -1`, so coefficient `i` folds onto
/// `i mod N`, negated once per wrap.
pub fn mod_poly_manual_mut<C: PolyConf>(dividend: &mut Poly<C>) {
    let mut i = C::MAX_POLY_DEGREE;
    while i < dividend.coeffs.len() {
        let wraps = i / C::MAX_POLY_DEGREE;
        let r = i % C::MAX_POLY_DEGREE;

        // The loop condition limits `i` to valid indexes.
        if wraps % 2 == 1 {
            dividend.coeffs[r] = dividend.coeffs[r] - dividend.coeffs[i];
        } else {
            dividend.coeffs[r] = dividend.coeffs[r] + dividend.coeffs[i];
        }
        i += 1;
    }

    // The coefficients of C::MAX_POLY_DEGREE and higher have been folded above.
    dividend.coeffs.truncate(C::MAX_POLY_DEGREE);

    // The folded coefficients could sum to zero.
    dividend.truncate_to_canonical_form();
}

/// Returns the remainder of `dividend / (X^[PolyConf::MAX_POLY_DEGREE] + 1)`,
/// as a polynomial.
///
/// This uses an [`ark-poly`](ark_poly) library implementation, which always
/// creates a new polynomial. Slow; kept as a cross-check for the manual scan.
pub fn mod_poly_ark_ref_slow<C: PolyConf>(dividend: &Poly<C>) -> Poly<C> {
    let dividend: DenseOrSparsePolynomial<'_, C::Coeff> = dividend.into();
    let modulus = new_unreduced_poly_modulus_slow::<C>();
    let modulus: DenseOrSparsePolynomial<'_, C::Coeff> = (&modulus).into();

    // The DenseOrSparsePolynomial implementation ensures canonical form.
    let (_quotient, remainder) = dividend
        .divide_with_q_and_r(&modulus)
        .expect("the polynomial modulus is not zero");

    remainder.into()
}

/// Constructs and returns the polynomial modulus `X^[PolyConf::MAX_POLY_DEGREE] + 1`.
///
/// This is the canonical but un-reduced form, because the reduced form is the
/// zero polynomial.
pub fn new_unreduced_poly_modulus_slow<C: PolyConf>() -> Poly<C> {
    let mut poly = Poly::zero();

    // Since the leading coefficient is non-zero, this is in canonical form.
    poly[C::MAX_POLY_DEGREE] = C::Coeff::one();
    poly[0] = C::Coeff::one();

    assert_eq!(poly.degree(), C::MAX_POLY_DEGREE);

    poly
}

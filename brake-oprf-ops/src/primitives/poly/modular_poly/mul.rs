//! Efficient negacyclic polynomial multiplication.

use std::ops::MulAssign;

use ark_ff::{Field, Zero};
use ark_poly::{polynomial::univariate::DensePolynomial, DenseUVPolynomial, Polynomial};
use static_assertions::const_assert;

use crate::primitives::poly::{Poly, PolyConf};

/// The fastest available negacyclic polynomial multiplication (multiply then reduce).
pub use rec_karatsuba_mul as mul_poly;

/// Maximum number of coefficients multiplied with the schoolbook method
/// inside recursive Karatsuba calls.
pub const REC_KARATSUBA_MIN_COEFFS: usize = 8;

// The recursion halves power-of-two chunks down to this cutoff.
const_assert!(REC_KARATSUBA_MIN_COEFFS.is_power_of_two());

// Simple multiplication by a field element.

impl<C: PolyConf> MulAssign<C::Coeff> for Poly<C> {
    fn mul_assign(&mut self, rhs: C::Coeff) {
        for coeff in &mut self.coeffs {
            *coeff *= rhs;
        }
        self.truncate_to_canonical_form();
    }
}

/// Returns `a * b` followed by reduction mod `X^N + 1`, using schoolbook
/// multiplication.
///
/// All polynomials have maximum degree [`PolyConf::MAX_POLY_DEGREE`].
pub fn naive_cyclotomic_mul<C: PolyConf>(a: &Poly<C>, b: &Poly<C>) -> Poly<C> {
    debug_assert!(a.degree() <= C::MAX_POLY_DEGREE);
    debug_assert!(b.degree() <= C::MAX_POLY_DEGREE);

    let mut res: Poly<C> = a.naive_mul(b).into();
    res.reduce_mod_poly();

    assert!(res.degree() <= C::MAX_POLY_DEGREE);

    res
}

/// Returns `a * b` followed by reduction mod `X^N + 1`, using the recursive
/// Karatsuba method.
///
/// The full product is assembled un-reduced, then folded once at the top:
/// one fold is cheaper than reducing partial products at every level.
///
/// # Performance
///
/// This implementation should be compiled in release mode without debug
/// checks, which can slow multiplication down by more than an order of
/// magnitude.
pub fn rec_karatsuba_mul<C: PolyConf>(a: &Poly<C>, b: &Poly<C>) -> Poly<C> {
    debug_assert!(a.degree() <= C::MAX_POLY_DEGREE);
    debug_assert!(b.degree() <= C::MAX_POLY_DEGREE);

    let chunk = C::MAX_POLY_DEGREE;
    let mut res: Poly<C> = rec_karatsuba_mul_inner(a, b, chunk).into();
    res.reduce_mod_poly();

    assert!(res.degree() <= C::MAX_POLY_DEGREE);

    res
}

/// Returns the full (un-reduced) product of polynomials with at most `chunk`
/// coefficients each.
///
/// At each recursion level, operands start with at most `chunk` coefficients,
/// and are split into halves with at most `chunk / 2`.
fn rec_karatsuba_mul_inner<F: Field>(
    a: &DensePolynomial<F>,
    b: &DensePolynomial<F>,
    chunk: usize,
) -> DensePolynomial<F> {
    debug_assert!(a.coeffs.len() <= chunk, "{} > {chunk}", a.coeffs.len());
    debug_assert!(b.coeffs.len() <= chunk, "{} > {chunk}", b.coeffs.len());

    // invariant: the chunk size is a power of 2 at every level
    debug_assert_eq!(chunk.count_ones(), 1);

    if chunk <= REC_KARATSUBA_MIN_COEFFS
        || a.coeffs.len() <= REC_KARATSUBA_MIN_COEFFS
        || b.coeffs.len() <= REC_KARATSUBA_MIN_COEFFS
    {
        return a.naive_mul(b);
    }

    let half = chunk / 2;
    let (al, ar) = split_coeffs(a, half);
    let (bl, br) = split_coeffs(b, half);

    let albl = rec_karatsuba_mul_inner(&al, &bl, half);
    let arbr = rec_karatsuba_mul_inner(&ar, &br, half);

    // y = (al + ar)(bl + br) = al.bl + al.br + ar.bl + ar.br
    let alpar = &al + &ar;
    let blpbr = &bl + &br;
    let mut y = rec_karatsuba_mul_inner(&alpar, &blpbr, half);

    // res = al.bl + (y - al.bl - ar.br)x^{n/2} + (ar.br)x^n
    y = &y - &albl;
    y = &y - &arbr;

    let mut res = albl;
    add_shifted(&mut res, &y, half);
    add_shifted(&mut res, &arbr, chunk);

    res
}

/// Splits `a` at coefficient `at`, returning `(low, high)` where `low`
/// contains the constant term. Either half can be zero.
fn split_coeffs<F: Field>(
    a: &DensePolynomial<F>,
    at: usize,
) -> (DensePolynomial<F>, DensePolynomial<F>) {
    let split = at.min(a.coeffs.len());

    (
        DensePolynomial::from_coefficients_slice(&a.coeffs[..split]),
        DensePolynomial::from_coefficients_slice(&a.coeffs[split..]),
    )
}

/// Adds `p * X^shift` onto `acc` in place.
fn add_shifted<F: Field>(acc: &mut DensePolynomial<F>, p: &DensePolynomial<F>, shift: usize) {
    if p.is_zero() {
        return;
    }

    if acc.coeffs.len() < p.coeffs.len() + shift {
        acc.coeffs.resize(p.coeffs.len() + shift, F::zero());
    }
    for (i, coeff) in p.coeffs.iter().enumerate() {
        acc.coeffs[i + shift] += *coeff;
    }

    // Additions can cancel the leading coefficient.
    while acc.coeffs.last() == Some(&F::zero()) {
        acc.coeffs.pop();
    }
}

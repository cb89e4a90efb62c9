//! Rounding from the ring into integer polynomials.
//!
//! The map that makes the OPRF deterministic: quantizing to multiples of
//! `q/p` erases every bounded noise term the protocol accumulates.

use crate::primitives::{
    oprf::OprfConf,
    poly::{IntPoly, Poly},
};

/// Rounds one canonical coefficient `v ∈ [0, q)`.
///
/// `v` is shifted to its signed representative (values above `⌊q/2⌋` wrap
/// negative, `⌊q/2⌋` itself stays positive), scaled by `p/q`, and rounded
/// with ties toward -∞:
///
/// `⌈v_s·p/q - 1/2⌉`, computed exactly as `⌊(2·p·v_s + q - 1) / 2q⌋`.
///
/// Round-half-even must not be used here: both protocol parties have to
/// resolve a tie on the same side to reach the same bit.
pub fn round_coefficient(value: u128, modulus: u128, plaintext: u128) -> i64 {
    debug_assert!(value < modulus);

    let signed = if value <= modulus / 2 {
        value as i128
    } else {
        value as i128 - modulus as i128
    };

    let numerator = 2 * plaintext as i128 * signed + modulus as i128 - 1;
    let rounded = numerator.div_euclid(2 * modulus as i128);

    rounded as i64
}

/// Rounds every coefficient of a ring element, returning a normalized
/// integer polynomial.
pub fn round_element<C: OprfConf>(z: &Poly<C>) -> IntPoly {
    let modulus = C::modulus_as_u128();
    let plaintext = u128::from(C::PLAINTEXT_MODULUS);

    let coeffs = z
        .coeffs
        .iter()
        .map(|&coeff| round_coefficient(C::coeff_as_u128(coeff), modulus, plaintext))
        .collect();

    IntPoly::from_coefficients_vec(coeffs)
}

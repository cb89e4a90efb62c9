//! Unit tests for the rounding map.

use crate::{
    primitives::{
        oprf::{round_coefficient, round_element},
        poly::{FqTiny, IntPoly, Poly, PolyConf},
    },
    TinyTest,
};

/// The toy modulus of [`TinyTest`], as a primitive integer.
const TINY_Q: u128 = 127;

/// Test every input against the rounding formula, worked by hand for q = 10,
/// p = 2: shift to (-q/2, q/2], scale by p/q, then `⌈u - 1/2⌉`.
#[test]
fn test_round_small_modulus_table() {
    let expected = [0, 0, 0, 1, 1, 1, -1, -1, 0, 0];
    for (value, &rounded) in expected.iter().enumerate() {
        assert_eq!(
            round_coefficient(value as u128, 10, 2),
            rounded,
            "rounding {value} mod 10"
        );
    }
}

/// Test that a coefficient exactly at `⌊q/2⌋` is classified as positive, and
/// its successor as negative.
#[test]
fn test_round_signed_shift_boundary() {
    // 63 stays 63 and scales to 126/127; 64 shifts to -63.
    assert_eq!(round_coefficient(63, TINY_Q, 2), 1);
    assert_eq!(round_coefficient(64, TINY_Q, 2), -1);

    // The smallest value that scales past 1/2.
    assert_eq!(round_coefficient(31, TINY_Q, 2), 0);
    assert_eq!(round_coefficient(32, TINY_Q, 2), 1);
}

/// Test exact ties: they only exist for even moduli, and round toward -∞ on
/// both sides of zero.
#[test]
fn test_round_half_down_on_ties() {
    // q = 8, p = 2: value 2 scales to exactly 1/2, value 6 to exactly -1/2.
    assert_eq!(round_coefficient(2, 8, 2), 0);
    assert_eq!(round_coefficient(6, 8, 2), -1);

    // The tie pair is where the symmetry sum dips to -1.
    assert_eq!(round_coefficient(2, 8, 2) + round_coefficient(6, 8, 2), -1);
}

/// Test the rounding symmetry over the whole toy field:
/// `round(v) + round(-v mod q)` is never positive, and for an odd modulus
/// (where exact ties cannot occur) it is always zero.
#[test]
fn test_round_symmetry() {
    for value in 0..TINY_Q {
        let sum = round_coefficient(value, TINY_Q, 2)
            + round_coefficient((TINY_Q - value) % TINY_Q, TINY_Q, 2);
        assert_eq!(sum, 0, "asymmetric rounding at {value} mod {TINY_Q}");
    }
}

/// Test rounding a whole ring element, with normalization of the result.
#[test]
fn test_round_element() {
    let poly: Poly<TinyTest> = Poly::try_from_coefficients_vec(
        [43u64, 51, 12, 63].iter().map(|&c| FqTiny::from(c)).collect(),
    )
    .expect("fits the toy ring");

    assert_eq!(
        round_element::<TinyTest>(&poly),
        IntPoly::from_coefficients_vec(vec![1, 1, 0, 1])
    );

    // Coefficients that round to zero normalize away entirely.
    let small: Poly<TinyTest> = Poly::try_from_coefficients_vec(
        [3u64, 100].iter().map(|&c| FqTiny::from(c)).collect(),
    )
    .expect("fits the toy ring");
    assert_eq!(round_element::<TinyTest>(&small), IntPoly::default());

    // The zero element rounds to the zero polynomial.
    let zero = Poly::<TinyTest>::try_from_coefficients_vec(vec![]).expect("empty fits");
    assert_eq!(round_element::<TinyTest>(&zero), IntPoly::default());
}

/// The toy modulus constant matches the configured field.
#[test]
fn test_tiny_modulus_constant() {
    assert_eq!(TinyTest::modulus_as_u128(), TINY_Q);
}

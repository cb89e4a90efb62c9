//! Unit tests for hashing and the coefficient lift.

use ark_poly::Polynomial;

use crate::{
    primitives::{
        oprf::{sha256_hex, Oprf},
        poly::{FqTiny, IntPoly, Poly, PolyConf},
    },
    FullRes, TinyTest,
};

/// Test `sha256_hex` against published SHA-256 vectors.
#[test]
fn test_sha256_hex_vectors() {
    assert_eq!(
        sha256_hex(""),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    assert_eq!(
        sha256_hex("abc"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

/// Test the per-coefficient digests: h is hashed from the concatenated
/// decimal coefficients, and there are N + 1 output digests.
#[test]
fn test_hash_coefficients_shape() {
    let oprf: Oprf<TinyTest> = Oprf::new().expect("toy parameters are valid");
    let secret = oprf.sample_fixed_secret();

    let digests = oprf.hash_coefficients(&secret);
    assert_eq!(digests.len(), TinyTest::MAX_POLY_DEGREE + 1);

    // x^3 + 2x + 5 concatenates to "5201".
    let h = sha256_hex("5201");
    assert_eq!(digests[0], sha256_hex(&format!("0{h}")));
    assert_eq!(digests[4], sha256_hex(&format!("4{h}")));
}

/// Test the lift against a reference computation on the toy ring.
#[test]
fn test_compute_a_x_known_answer() {
    let oprf: Oprf<TinyTest> = Oprf::new().expect("toy parameters are valid");
    let secret = oprf.sample_fixed_secret();

    // Each digest's ASCII hex characters, big-endian mod 127, with the fifth
    // coefficient folded onto the first: [107 - 125, 33, 117, 84] mod 127.
    let expected: Poly<TinyTest> = Poly::try_from_coefficients_vec(
        [109u64, 33, 117, 84].iter().map(|&c| FqTiny::from(c)).collect(),
    )
    .expect("fits the toy ring");

    assert_eq!(oprf.compute_a_x(&secret), expected);
}

/// Test that the lift is deterministic across calls.
#[test]
fn test_compute_a_x_deterministic() {
    let oprf: Oprf<FullRes> = Oprf::new().expect("deployment parameters are valid");
    let secret = oprf.sample_fixed_secret();

    let first = oprf.compute_a_x(&secret);
    let second = oprf.compute_a_x(&secret);
    assert_eq!(first, second);
}

/// Test that secrets differing in one coefficient lift to different ring
/// elements.
#[test]
fn test_compute_a_x_secret_sensitivity() {
    let oprf: Oprf<FullRes> = Oprf::new().expect("deployment parameters are valid");

    let secret = IntPoly::from_coefficients_vec(vec![5, 2, 0, 1]);
    let tweaked = IntPoly::from_coefficients_vec(vec![5, 3, 0, 1]);

    // The inner digests diverge immediately...
    assert_ne!(
        oprf.hash_coefficients(&secret),
        oprf.hash_coefficients(&tweaked)
    );
    // ...and so do the lifted elements.
    assert_ne!(oprf.compute_a_x(&secret), oprf.compute_a_x(&tweaked));
}

/// Test that the all-zero secret still lifts to a well-formed element.
#[test]
fn test_compute_a_x_zero_secret() {
    let oprf: Oprf<TinyTest> = Oprf::new().expect("toy parameters are valid");

    // Normalization strips every zero coefficient, so the concatenation is
    // empty and h is the digest of "".
    let zero_secret = IntPoly::from_coefficients_vec(vec![0, 0, 0]);
    assert_eq!(zero_secret.decimal_concat(), "");

    let a_x = oprf.compute_a_x(&zero_secret);
    assert!(a_x.degree() < TinyTest::MAX_POLY_DEGREE);
}

/// Test fuzzy-vault ingestion against direct construction.
#[test]
fn test_vault_ingestion() {
    let from_vault = IntPoly::from_vault_coefficients(&[5, 2, 0, 1]);
    let direct = IntPoly::from_coefficients_vec(vec![5, 2, 0, 1]);
    assert_eq!(from_vault, direct);

    // Vault secrets are non-negative, so concatenation has no sign characters.
    assert_eq!(from_vault.decimal_concat(), "5201");
}

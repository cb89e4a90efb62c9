//! Hashing, and the deterministic lift of a client secret into the ring.

use ark_ff::PrimeField;
use sha2::{Digest, Sha256};

use crate::primitives::{
    oprf::{Oprf, OprfConf},
    poly::{IntPoly, Poly},
};

/// Returns the 64-character lowercase hex digest of `input`.
pub fn sha256_hex(input: &str) -> String {
    hex::encode(Sha256::digest(input.as_bytes()))
}

impl<C: OprfConf> Oprf<C> {
    /// Hashes the secret's coefficients, on a per-coefficient basis.
    ///
    /// The base-10 coefficients are concatenated and hashed into `h`, then
    /// each output digest is `sha256(i ‖ h)` for `i = 0..=N`.
    pub fn hash_coefficients(&self, secret: &IntPoly) -> Vec<String> {
        let h = sha256_hex(&secret.decimal_concat());

        (0..=C::MAX_POLY_DEGREE)
            .map(|i| sha256_hex(&format!("{i}{h}")))
            .collect()
    }

    /// The deterministic lift `a_x` of a client secret.
    ///
    /// Each digest contributes its 64 ASCII hex characters, read as a
    /// big-endian integer and reduced mod q. The rest of the deployment
    /// derives keys from exactly this encoding, so the hex characters are
    /// deliberately not decoded back to digest bytes.
    pub fn compute_a_x(&self, secret: &IntPoly) -> Poly<C> {
        let coeffs = self
            .hash_coefficients(secret)
            .iter()
            .map(|digest| C::Coeff::from_be_bytes_mod_order(digest.as_bytes()))
            .collect();

        // N + 1 digests: the top coefficient folds onto the constant term.
        let mut a_x = Poly::from_coefficients_vec(coeffs);
        a_x.reduce_mod_poly();
        a_x
    }
}

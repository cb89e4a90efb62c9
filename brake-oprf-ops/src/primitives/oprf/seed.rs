//! Seed derivation for the KEM collaborator.

use crate::{
    primitives::{oprf::hash::sha256_hex, poly::IntPoly},
    SEED_BYTES,
};

/// Derives the 32-byte KEM keypair seed from a rounded OPRF output.
///
/// The seed bytes are the first 32 ASCII characters of the hex digest of the
/// concatenated coefficients — not the raw digest — so every byte lands in
/// `{'0'..'9', 'a'..'f'}`. The reference deployment feeds exactly these
/// bytes to its KEM; a port using the raw digest would derive different
/// keypairs.
pub fn oprf_to_seed(y_rounded: &IntPoly) -> [u8; SEED_BYTES] {
    let digest_hex = sha256_hex(&y_rounded.decimal_concat());

    let mut seed = [0u8; SEED_BYTES];
    seed.copy_from_slice(&digest_hex.as_bytes()[..SEED_BYTES]);
    seed
}

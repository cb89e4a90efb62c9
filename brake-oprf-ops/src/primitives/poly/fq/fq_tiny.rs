//! Tiny test-only parameters in 2^7.
//!
//! These test parameters are specifically chosen to make failing tests easy
//! to read, diagnose, and check against pen-and-paper algebra. q = 2^7

use ark_ff::{Fp64, MontBackend, MontConfig};

/// The configuration of the test-only modular field, used for polynomial coefficients.
///
/// Deliberately set to an extremely small prime, so that rounding boundaries
/// and noise overflows show up with hand-sized numbers.
//
// Sage commands, results from <https://sagecell.sagemath.org/>:
// previous_prime(2**7)
// 127
// ff = GF(127)
// ff.multiplicative_generator()
// 3
#[derive(MontConfig)]
#[modulus = "127"]
#[generator = "3"]
pub struct Fq7Config;

/// The modular field used for test polynomial coefficients, with precomputed primes and generators.
pub type Fq7 = Fp64<MontBackend<Fq7Config, 1>>;

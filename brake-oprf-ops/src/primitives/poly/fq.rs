//! The underlying integer fields.
//!
//! Outside this module, use [`PolyConf::Coeff`](super::PolyConf::Coeff)
//! instead of [`Fq76`] or [`FqTiny`]. This automatically enables CI tests on
//! both fields.

pub use fq76::Fq76;
pub use fq_tiny::Fq7 as FqTiny;

use num_bigint::BigUint;
use num_traits::One;

mod fq76;
mod fq_tiny;

/// Miller-Rabin witnesses: the first twelve primes make the test
/// deterministic for every modulus below 2^78 (Sorenson & Webster, 2015).
const WITNESSES: [u8; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Returns whether `n` is prime.
///
/// Deterministic over the whole supported modulus range; coefficient moduli
/// are limited to 128 bits elsewhere, far below the witness-set bound.
pub fn is_prime(n: u128) -> bool {
    if n < 2 {
        return false;
    }
    for &w in &WITNESSES {
        if n % u128::from(w) == 0 {
            return n == u128::from(w);
        }
    }

    // n is odd and larger than every witness here.
    let n_big = BigUint::from(n);
    let one = BigUint::one();
    let n_minus_one = &n_big - &one;
    let trailing = n_minus_one
        .trailing_zeros()
        .expect("n > 2, so n - 1 is non-zero");
    let d = &n_minus_one >> trailing;

    'witness: for &w in &WITNESSES {
        let mut x = BigUint::from(w).modpow(&d, &n_big);
        if x == one || x == n_minus_one {
            continue;
        }
        for _ in 1..trailing {
            x = (&x * &x) % &n_big;
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

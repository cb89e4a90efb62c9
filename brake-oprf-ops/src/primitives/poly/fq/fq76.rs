//! Full-resolution coefficient modulus: the first prime above 2^75.
//!
//! These are the recommended deployment parameters: q = NextPrime(2^75).

use ark_ff::{Fp128, MontBackend, MontConfig};

/// The configuration of the modular field used for polynomial coefficients.
/* Generated with the following Sage commands:

```sage
q = next_prime(2**75)
assert q == 2**75 + 33
assert q == 37778931862957161709601
assert q - 1 == 2**5 * 5**2 * 29 * 41 * 113 * 7416361 * 47392381

generator = GF(q).multiplicative_generator()
assert generator == 3
```
*/
#[derive(MontConfig)]
#[modulus = "37778931862957161709601"]
#[generator = "3"]
pub struct Fq76Config;

/// The modular field used for polynomial coefficients, with precomputed primes and generators.
pub type Fq76 = Fp128<MontBackend<Fq76Config, 2>>;

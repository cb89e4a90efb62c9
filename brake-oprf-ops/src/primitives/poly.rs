//! Polynomial arithmetic in the negacyclic quotient ring `Z_q[x]/(x^N + 1)`.

pub use conf::PolyConf;
pub use fq::{is_prime, Fq76, FqTiny};
pub use int_poly::IntPoly;
pub use modular_poly::{
    modulus::{mod_poly, mod_poly_ark_ref_slow, new_unreduced_poly_modulus_slow},
    mul::{mul_poly, naive_cyclotomic_mul, rec_karatsuba_mul},
    Poly, ShapeError,
};

pub mod conf;
pub mod fq;
pub mod int_poly;
pub mod modular_poly;

#[cfg(any(test, feature = "benchmark"))]
pub mod test;

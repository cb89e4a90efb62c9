//! Basic operations used to implement the blinded evaluation protocol.
//!
//! Contains interfaces to dependencies that we might want to replace later.

/// Negacyclic polynomial operations using ark-poly
pub mod poly;

/// The modified RLWE OPRF of Albrecht et al. (2021)
pub mod oprf;

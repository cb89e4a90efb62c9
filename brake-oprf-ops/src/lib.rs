//! Lattice OPRF operations for biometric-authenticated key exchange.
//!
//! The client holds a secret polynomial recovered from a biometric fuzzy
//! vault; the evaluator holds an OPRF key. One protocol run gives the client
//! a deterministic pseudorandom polynomial `round(a_x · k)` without revealing
//! the secret to the evaluator or the key to the client. The rounded output
//! seeds a downstream KEM keypair.
//!
//! This library has 2 core modules:
//! [`primitives::poly`]: arithmetic in the ring `Z_q[x]/(x^N + 1)`,
//! [`primitives::oprf`]: samplers, the coefficient lift, rounding, and the
//!                       two-party blinded-evaluation protocol.

pub mod conf;
pub mod primitives;

pub use conf::{FullRes, MiddleRes, TinyTest};

#[cfg(any(test, feature = "benchmark"))]
pub use conf::TestRes;

pub use primitives::oprf::{
    oprf_to_seed, os_csprng, ClientState, EvaluatorState, Oprf, OprfConf, ParameterError,
    ProtocolStep, RandomnessError, RoundingMismatch,
};
pub use primitives::poly::{IntPoly, Poly, PolyConf};

/// The number of bytes in the seed handed to the KEM collaborator.
pub const SEED_BYTES: usize = 32;

/// The largest secret-polynomial degree the fuzzy vault produces in current
/// deployments. Informational; the lift accepts any degree.
pub const VAULT_SECRET_MAX_DEGREE: usize = 16;

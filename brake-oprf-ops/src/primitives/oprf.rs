//! The modified RLWE OPRF at the heart of the PQ-BRAKE handshake.
//!
//! Based on the round-optimal lattice OPRF of
//! "Round-optimal verifiable oblivious pseudorandom functions from ideal
//! lattices" (Albrecht et al., 2021):
//! the evaluator publishes `c = a·k + p·e`; the client blinds its hashed
//! secret as `c_x = a·s + e' + a_x`; the evaluator answers
//! `d_x = c_x·k + p·E`; the client unblinds `y = d_x - c·s` and rounds, which
//! cancels every noise term while `2N + B ≪ q/2`.

use std::{
    marker::PhantomData,
    time::{Duration, Instant},
};

use ark_ff::{UniformRand, Zero};
use rand::{
    rngs::{OsRng, StdRng},
    CryptoRng, Rng, SeedableRng,
};

use crate::primitives::poly::{is_prime, IntPoly, Poly};

pub use conf::OprfConf;

pub use check::RoundingMismatch;
pub use hash::sha256_hex;
pub use rounding::{round_coefficient, round_element};
pub use seed::oprf_to_seed;

pub mod check;
pub mod conf;
pub mod hash;
pub mod rounding;
pub mod seed;

#[cfg(test)]
pub mod test;

/// The OPRF scheme: the ring context plus every operation defined over it.
///
/// Constructing one validates the configured parameters, so holding an
/// `Oprf<C>` witnesses that the ring is sound.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Oprf<C: OprfConf> {
    /// A zero-sized marker, which binds the config type to the outer type.
    _conf: PhantomData<C>,
}

/// Rejected scheme parameters. Fatal at construction.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParameterError {
    /// `Z_q[x]/(x^N + 1)` needs a prime q for coefficients to form a field.
    #[error("coefficient modulus is not prime")]
    ModulusNotPrime,

    /// `x^N + 1` is only cyclotomic for N a positive power of two.
    #[error("ring dimension {0} is not a positive power of two")]
    DegreeNotPowerOfTwo(usize),

    /// The masking noise bound B must be positive.
    #[error("noise bound {0} is not positive")]
    NoiseBoundNotPositive(i128),
}

/// The OS entropy source failed. Fatal: the protocol never falls back to a
/// weaker source, and never retries.
#[derive(Debug, thiserror::Error)]
#[error("system randomness source failed: {0}")]
pub struct RandomnessError(#[from] pub rand::Error);

/// Builds the persistent process CSPRNG from OS entropy.
///
/// One generator serves every sampler invocation; each call to a sampler
/// consumes fresh output from it.
pub fn os_csprng() -> Result<StdRng, RandomnessError> {
    Ok(StdRng::from_rng(OsRng)?)
}

/// One protocol step, in execution order. Emitted with its duration through
/// the sink of [`Oprf::run_with_timings`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ProtocolStep {
    /// Evaluator samples the public randomness `a`.
    SamplePublicRandomness,
    /// Evaluator samples the ternary OPRF key `k`.
    SampleKey,
    /// Evaluator samples the ternary commitment error `e`.
    SampleKeyError,
    /// Evaluator computes the commitment `c = a·k + p·e`.
    ComputeCommitment,
    /// Client samples the ternary blinding factor `s`.
    SampleBlinding,
    /// Client samples the ternary blinding error `e'`.
    SampleBlindingError,
    /// Client lifts its secret to `a_x`.
    ComputeHashedSecret,
    /// Client computes the blinded input `c_x = a·s + e' + a_x`.
    ComputeBlindedInput,
    /// Evaluator samples the masking noise `E` from `[-B, B]`.
    SampleMaskingNoise,
    /// Evaluator computes the evaluation `d_x = c_x·k + p·E`.
    ComputeEvaluation,
    /// Client unblinds `y = d_x - c·s`.
    Unblind,
    /// Client rounds `y` to the protocol output.
    Round,
}

/// The client's protocol state.
///
/// The secret polynomial persists across executions of the same party; every
/// other field is overwritten per run and left readable for the correctness
/// oracle.
//
// TODO: zero `secret_polynomial`, `s`, `e_prime` and `y` on drop before any
// production deployment (tracking the zeroize crate).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientState<C: OprfConf> {
    /// The hashed-biometric lift source, set at construction and read-only
    /// thereafter.
    pub secret_polynomial: IntPoly,
    /// Fresh ternary blinding factor.
    pub s: Poly<C>,
    /// Fresh ternary blinding error.
    pub e_prime: Poly<C>,
    /// The deterministic lift of `secret_polynomial`.
    pub a_x: Poly<C>,
    /// The evaluator's blinded evaluation, received in step 6.
    pub d_x: Poly<C>,
    /// The unblinded result `d_x - c·s`.
    pub y: Poly<C>,
    /// `round(y)`, the protocol output.
    pub y_rounded: IntPoly,
}

impl<C: OprfConf> ClientState<C> {
    /// Creates a client around an already-ingested secret polynomial.
    pub fn new(secret_polynomial: IntPoly) -> Self {
        Self {
            secret_polynomial,
            s: Poly::zero(),
            e_prime: Poly::zero(),
            a_x: Poly::zero(),
            d_x: Poly::zero(),
            y: Poly::zero(),
            y_rounded: IntPoly::default(),
        }
    }

    /// Creates a client from the fuzzy vault's secret polynomial, read as
    /// non-negative integer coefficients.
    pub fn from_vault_coefficients(coefficients: &[u32]) -> Self {
        Self::new(IntPoly::from_vault_coefficients(coefficients))
    }
}

/// The evaluator's protocol state.
///
/// `(a, k, e, c)` form the commitment: long-term in warm deployments, fresh
/// per run otherwise. The remaining fields are scratch for one execution.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EvaluatorState<C: OprfConf> {
    /// Public randomness.
    pub a: Poly<C>,
    /// The ternary OPRF key.
    pub k: Poly<C>,
    /// The ternary error committed alongside the key.
    pub e: Poly<C>,
    /// The public commitment `a·k + p·e`.
    pub c: Poly<C>,
    /// Fresh masking noise, uniform in `[-B, B]`.
    pub big_e: Poly<C>,
    /// The client's blinded input, received in step 4.
    pub c_x: Poly<C>,
}

impl<C: OprfConf> Default for EvaluatorState<C> {
    fn default() -> Self {
        Self {
            a: Poly::zero(),
            k: Poly::zero(),
            e: Poly::zero(),
            c: Poly::zero(),
            big_e: Poly::zero(),
            c_x: Poly::zero(),
        }
    }
}

impl<C: OprfConf> Oprf<C> {
    /// Validates the configured ring and returns the scheme context.
    ///
    /// Call once at startup; every sampler, lift, and protocol operation
    /// hangs off the returned value.
    pub fn new() -> Result<Self, ParameterError> {
        if C::MAX_POLY_DEGREE == 0 || !C::MAX_POLY_DEGREE.is_power_of_two() {
            return Err(ParameterError::DegreeNotPowerOfTwo(C::MAX_POLY_DEGREE));
        }
        if !is_prime(C::modulus_as_u128()) {
            return Err(ParameterError::ModulusNotPrime);
        }
        if C::NOISE_BOUND <= 0 {
            return Err(ParameterError::NoiseBoundNotPositive(C::NOISE_BOUND));
        }

        Ok(Self { _conf: PhantomData })
    }

    /// Samples a ternary polynomial: N coefficients uniform in `{-1, 0, 1}`,
    /// negative values in their `c mod q` representation.
    pub fn sample_ternary<R: Rng + CryptoRng>(&self, rng: &mut R) -> Poly<C> {
        let mut res = Poly::non_canonical_zeroes(C::MAX_POLY_DEGREE);
        for i in 0..C::MAX_POLY_DEGREE {
            let value: i64 = rng.gen_range(-1..=1);
            res[i] = C::Coeff::from(value);
        }

        // Raw coefficient access must be followed by a truncation check.
        res.truncate_to_canonical_form();
        res
    }

    /// Samples a polynomial with N coefficients uniform in `[0, q)`, via the
    /// field's rejection sampler (no biased modular reduction).
    pub fn sample_uniform<R: Rng + CryptoRng>(&self, mut rng: &mut R) -> Poly<C> {
        let mut res = Poly::non_canonical_zeroes(C::MAX_POLY_DEGREE);
        for i in 0..C::MAX_POLY_DEGREE {
            res[i] = C::Coeff::rand(&mut rng);
        }

        // Raw coefficient access must be followed by a truncation check.
        res.truncate_to_canonical_form();
        res
    }

    /// Samples the masking noise: N coefficients uniform in `[-B, B]`,
    /// negative values in their `c mod q` representation.
    pub fn sample_noise<R: Rng + CryptoRng>(&self, rng: &mut R) -> Poly<C> {
        let mut res = Poly::non_canonical_zeroes(C::MAX_POLY_DEGREE);
        for i in 0..C::MAX_POLY_DEGREE {
            let value: i128 = rng.gen_range(-C::NOISE_BOUND..=C::NOISE_BOUND);
            res[i] = if value < 0 {
                -C::Coeff::from(value.unsigned_abs())
            } else {
                C::Coeff::from(value as u128)
            };
        }

        // Raw coefficient access must be followed by a truncation check.
        res.truncate_to_canonical_form();
        res
    }

    /// Generates the evaluator's commitment: fresh `(a, k, e)` and
    /// `c = a·k + p·e`.
    ///
    /// A warm deployment calls this once and reuses the state across runs;
    /// refreshing `k` or `e` between runs breaks OPRF determinism.
    pub fn keygen<R: Rng + CryptoRng>(&self, evaluator: &mut EvaluatorState<C>, rng: &mut R) {
        self.keygen_timed(evaluator, rng, &mut |_, _| {});
    }

    fn keygen_timed<R: Rng + CryptoRng>(
        &self,
        evaluator: &mut EvaluatorState<C>,
        rng: &mut R,
        sink: &mut dyn FnMut(ProtocolStep, Duration),
    ) {
        let started = Instant::now();
        evaluator.a = self.sample_uniform(rng);
        sink(ProtocolStep::SamplePublicRandomness, started.elapsed());

        let started = Instant::now();
        evaluator.k = self.sample_ternary(rng);
        sink(ProtocolStep::SampleKey, started.elapsed());

        let started = Instant::now();
        evaluator.e = self.sample_ternary(rng);
        sink(ProtocolStep::SampleKeyError, started.elapsed());

        let started = Instant::now();
        let mut masked_error = evaluator.e.clone();
        masked_error *= C::plaintext_as_coeff();
        evaluator.c = &evaluator.a * &evaluator.k + masked_error;
        sink(ProtocolStep::ComputeCommitment, started.elapsed());
    }

    /// Executes one blinded evaluation between `client` and `evaluator`,
    /// returning the client's rounded output.
    ///
    /// With `warm` set, the evaluator's existing commitment `(a, k, e, c)` is
    /// reused; otherwise a fresh one is generated first. Messages between the
    /// parties are modeled as state writes in step order; any transport can
    /// be layered on top by splitting at the send points.
    ///
    /// Always returns an output: noise overflow is not detected here but by
    /// [`Oprf::check_unblinding`], at the deployment's discretion.
    pub fn run<R: Rng + CryptoRng>(
        &self,
        client: &mut ClientState<C>,
        evaluator: &mut EvaluatorState<C>,
        warm: bool,
        rng: &mut R,
    ) -> IntPoly {
        self.run_with_timings(client, evaluator, warm, rng, &mut |_, _| {})
    }

    /// [`Oprf::run`], reporting each step's duration through `sink`.
    pub fn run_with_timings<R: Rng + CryptoRng>(
        &self,
        client: &mut ClientState<C>,
        evaluator: &mut EvaluatorState<C>,
        warm: bool,
        rng: &mut R,
        sink: &mut dyn FnMut(ProtocolStep, Duration),
    ) -> IntPoly {
        if !warm {
            self.keygen_timed(evaluator, rng, sink);
        }

        let started = Instant::now();
        client.s = self.sample_ternary(rng);
        sink(ProtocolStep::SampleBlinding, started.elapsed());

        let started = Instant::now();
        client.e_prime = self.sample_ternary(rng);
        sink(ProtocolStep::SampleBlindingError, started.elapsed());

        let started = Instant::now();
        client.a_x = self.compute_a_x(&client.secret_polynomial);
        sink(ProtocolStep::ComputeHashedSecret, started.elapsed());

        // c_x = a·s + e' + a_x, sent to the evaluator.
        let started = Instant::now();
        evaluator.c_x = &evaluator.a * &client.s + &client.e_prime + &client.a_x;
        sink(ProtocolStep::ComputeBlindedInput, started.elapsed());

        let started = Instant::now();
        evaluator.big_e = self.sample_noise(rng);
        sink(ProtocolStep::SampleMaskingNoise, started.elapsed());

        // d_x = c_x·k + p·E, sent back to the client.
        let started = Instant::now();
        let mut masked_noise = evaluator.big_e.clone();
        masked_noise *= C::plaintext_as_coeff();
        client.d_x = &evaluator.c_x * &evaluator.k + masked_noise;
        sink(ProtocolStep::ComputeEvaluation, started.elapsed());

        // y = d_x - c·s: all that survives is a_x·k + k·e' - p·e·s + p·E.
        let started = Instant::now();
        client.y = &client.d_x - &(&evaluator.c * &client.s);
        sink(ProtocolStep::Unblind, started.elapsed());

        let started = Instant::now();
        client.y_rounded = round_element(&client.y);
        sink(ProtocolStep::Round, started.elapsed());

        client.y_rounded.clone()
    }
}

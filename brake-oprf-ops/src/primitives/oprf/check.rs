//! The unblinding correctness oracle.
//!
//! For testing and instrumentation: a production deployment relies on the
//! negligible-failure parameterization instead of checking every run.

use crate::primitives::{
    oprf::{round_element, ClientState, EvaluatorState, Oprf, OprfConf},
    poly::IntPoly,
};

/// The client's rounded output disagreed with `round(a_x·k)` modulo p: some
/// noise term crossed a rounding boundary.
///
/// Non-fatal at the protocol level; the reference deployment aborts the
/// handshake and reports an unblinding failure.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("OPRF unblinding failed at {} coefficient(s)", .failing_indices.len())]
pub struct RoundingMismatch {
    /// The coefficient indices where the two sides disagree.
    pub failing_indices: Vec<usize>,
}

impl<C: OprfConf> Oprf<C> {
    /// Recomputes the unblinded product `a_x·k`, rounds it, and compares it
    /// with the client's rounded output modulo p, coefficient-wise.
    pub fn check_unblinding(
        &self,
        client: &ClientState<C>,
        evaluator: &EvaluatorState<C>,
    ) -> Result<(), RoundingMismatch> {
        let lift = &client.a_x * &evaluator.k;
        let target = round_element::<C>(&lift);

        let failing_indices = mod_p_mismatches::<C>(&target, &client.y_rounded);
        if failing_indices.is_empty() {
            Ok(())
        } else {
            Err(RoundingMismatch { failing_indices })
        }
    }

    /// The chance that RLWE noise overflows the rounding somewhere in one
    /// run: `1 - (1 - (2N + B)/q)^N`.
    pub fn expected_failure_rate(&self) -> f64 {
        let one_coeff_fail =
            (2 * C::MAX_POLY_DEGREE as i128 + C::NOISE_BOUND) as f64 / C::modulus_as_u128() as f64;

        1.0 - (1.0 - one_coeff_fail).powi(C::MAX_POLY_DEGREE as i32)
    }
}

/// The indices where two integer polynomials differ modulo p, compared over
/// the whole ring dimension (both are zero-extended).
fn mod_p_mismatches<C: OprfConf>(a: &IntPoly, b: &IntPoly) -> Vec<usize> {
    let p = C::PLAINTEXT_MODULUS as i64;

    (0..C::MAX_POLY_DEGREE)
        .filter(|&i| a.coeff(i).rem_euclid(p) != b.coeff(i).rem_euclid(p))
        .collect()
}

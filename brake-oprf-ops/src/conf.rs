//! Configuration marker types.
//! Any or all of the configuration traits can be implemented on these types, or your own custom
//! types.

/// Full resolution ring dimensions, the recommended deployment parameters:
/// q = NextPrime(2^75), N = 2^12.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FullRes;

/// Middle resolution ring dimensions: the full-resolution modulus with N = 2^8.
///
/// The noise analysis still leaves a negligible unblinding failure rate, so
/// statistical tests can afford hundreds of runs.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct MiddleRes;

/// Tiny toy ring, used for hand-checked traces and for finding edge cases in tests.
///
/// The parameters are specifically chosen to make failing tests easy to read and diagnose.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TinyTest;

/// The ring config used in tests.
//
// We use the full resolution by default, but TinyTest when cfg(tiny_poly) is set.
#[cfg(not(tiny_poly))]
pub type TestRes = FullRes;

/// The ring config used in tests.
///
/// Temporarily switch to this tiny ring to make test errors easier to debug:
/// ```no_run
/// RUSTFLAGS="--cfg tiny_poly" cargo test
/// RUSTFLAGS="--cfg tiny_poly" cargo bench --features benchmark
/// ```
#[cfg(tiny_poly)]
pub type TestRes = TinyTest;

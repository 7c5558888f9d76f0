//! Constants and default parameters.

/// Tolerance used when checking that a distribution sums to `1`.
pub const SIMPLEX_TOLERANCE: f64 = 1e-9;


/// A weighted training error within this distance of `0` or `1`
/// is treated as a degenerate boosting round.
pub const DEGENERATE_TOLERANCE: f64 = 1e-10;


/// The largest hypothesis weight `AdaBoost` assigns.
/// This is `0.5 * ln((1 - tol) / tol)` for `tol = DEGENERATE_TOLERANCE`.
pub const MAX_HYPOTHESIS_WEIGHT: f64 = 11.512925464920228;


/// Default interval (in rounds) between two log lines of `Logger`.
pub const DEFAULT_PRINT_ROUND: usize = 1;

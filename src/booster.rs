//! Provides the boosting algorithms.

mod core;

mod adaboost;


/// Booster trait
pub use self::core::Booster;

// Empirical Risk Minimization
pub use self::adaboost::{
    AdaBoost,
    BoostRound,
    StumpCandidate,
};

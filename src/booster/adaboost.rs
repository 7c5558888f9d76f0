//! Defines `AdaBoost` over decision stumps.
//! This struct is based on the book:
//! [Boosting: Foundations and Algorithms](https://direct.mit.edu/books/oa-monograph/5342/BoostingFoundations-and-Algorithms)
//! by Robert E. Schapire and Yoav Freund.
pub mod adaboost_algorithm;

pub use adaboost_algorithm::{
    AdaBoost,
    BoostRound,
    StumpCandidate,
};

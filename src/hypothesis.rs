//! The core library for `Hypothesis` traits.

pub(crate) mod hypothesis_traits;
pub(crate) mod weighted_majority;


pub use hypothesis_traits::Classifier;

pub use weighted_majority::{
    WeightedHypothesis,
    WeightedMajority,
};

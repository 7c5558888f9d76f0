//! This file defines some functions that checks some pre-conditions
//! E.g., every training example has a label.

use crate::{Error, Result, Sample};
use super::constants::SIMPLEX_TOLERANCE;


/// Check whether the training sample is valid or not.
/// A valid training sample has at least one example,
/// at least one attribute, and a label on every example.
pub(crate) fn check_sample(sample: &Sample) -> Result<()> {
    let (n_examples, n_attributes) = sample.shape();

    if n_examples == 0 {
        return Err(Error::EmptySample);
    }

    if n_attributes == 0 {
        return Err(Error::EmptyAttributes);
    }

    if let Some(row) = sample.examples()
        .iter()
        .position(|example| example.label().is_none())
    {
        return Err(Error::MissingLabel { row });
    }
    Ok(())
}


/// Returns `true` if the weights over `sample` form a distribution.
pub(crate) fn is_distribution(sample: &Sample) -> bool {
    let weights = sample.weights();
    let sum = weights.iter().sum::<f64>();
    (sum - 1f64).abs() < SIMPLEX_TOLERANCE
        && weights.iter().all(|w| *w >= 0.0)
}

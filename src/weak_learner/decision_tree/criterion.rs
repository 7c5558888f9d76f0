//! Entropy and information gain over boolean attributes.
//!
//! The gain of an attribute is computed over label *counts*,
//! so the example weights do not change it.

use rayon::prelude::*;

use crate::{
    AttributeId,
    Error,
    Label,
    Result,
    Sample,
};


/// Returns the entropy (in bits) of a boolean outcome
/// whose success probability is `p`.
///
/// `p == 0`, `p == 1`, and `p == NaN` (from a `0/0` upstream) give `0`.
#[inline]
pub fn boolean_entropy(p: f64) -> f64 {
    if p.is_nan() || p <= 0.0 || p >= 1.0 {
        return 0.0;
    }
    let q = 1.0 - p;
    -(p * p.log2() + q * q.log2())
}


/// Class counts of a set of examples,
/// split by their answer to a single attribute.
/// `a` is the positive class and `b` is the negative class.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AttributeCounts {
    /// Positive examples answering `true`.
    pub a_true: f64,
    /// Positive examples answering `false`.
    pub a_false: f64,
    /// Negative examples answering `true`.
    pub b_true: f64,
    /// Negative examples answering `false`.
    pub b_false: f64,
}


impl AttributeCounts {
    /// Count the examples at `indices` by class and by answer to `attribute`.
    pub fn tally(sample: &Sample, indices: &[usize], attribute: AttributeId)
        -> Result<Self>
    {
        let mut counts = Self::default();
        for &row in indices {
            let example = &sample[row];
            let label = example.label()
                .ok_or(Error::MissingLabel { row })?;
            let answer = example.answer(attribute)
                .map_err(|e| e.at_row(row))?;

            let slot = match (label, answer) {
                (Label::Positive, true)  => &mut counts.a_true,
                (Label::Positive, false) => &mut counts.a_false,
                (Label::Negative, true)  => &mut counts.b_true,
                (Label::Negative, false) => &mut counts.b_false,
            };
            *slot += 1.0;
        }
        Ok(counts)
    }


    /// Number of positive examples.
    #[inline]
    pub fn a(&self) -> f64 {
        self.a_true + self.a_false
    }


    /// Number of negative examples.
    #[inline]
    pub fn b(&self) -> f64 {
        self.b_true + self.b_false
    }


    /// Number of examples.
    #[inline]
    pub fn total(&self) -> f64 {
        self.a() + self.b()
    }
}


/// Returns the expected entropy left after asking the attribute
/// the counts were taken on.
/// Each branch's entropy is weighted by its share of the examples.
pub fn remainder(counts: &AttributeCounts) -> f64 {
    let total = counts.total();
    if total <= 0.0 {
        return 0.0;
    }

    let n_true = counts.a_true + counts.b_true;
    let n_false = counts.a_false + counts.b_false;

    let h_true = boolean_entropy(counts.a_true / n_true);
    let h_false = boolean_entropy(counts.a_false / n_false);

    (n_true / total) * h_true + (n_false / total) * h_false
}


/// Returns the information gain of `attribute` over every example in `sample`.
pub fn importance(sample: &Sample, attribute: AttributeId) -> Result<f64> {
    let indices = (0..sample.shape().0).collect::<Vec<_>>();
    importance_on(sample, &indices[..], attribute)
}


/// Returns the information gain of `attribute`
/// over the examples at `indices`.
/// The value is never negative.
pub(crate) fn importance_on(
    sample: &Sample,
    indices: &[usize],
    attribute: AttributeId,
) -> Result<f64>
{
    let counts = AttributeCounts::tally(sample, indices, attribute)?;
    Ok(gain(&counts))
}


#[inline]
fn gain(counts: &AttributeCounts) -> f64 {
    let total = counts.total();
    if total <= 0.0 {
        return 0.0;
    }
    let before = boolean_entropy(counts.a() / total);

    // Rounding may push a zero gain slightly below zero.
    (before - remainder(counts)).max(0.0)
}


/// Returns the attribute with the strictly greatest information gain.
/// Ties keep the attribute that comes first in `attributes`.
///
/// The gains are evaluated in parallel,
/// but the choice does not depend on the evaluation order.
pub(crate) fn best_attribute(
    sample: &Sample,
    indices: &[usize],
    attributes: &[AttributeId],
) -> Result<(AttributeId, f64)>
{
    let gains = attributes.par_iter()
        .map(|&attribute| {
            importance_on(sample, indices, attribute)
                .map(|score| (attribute, score))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut iter = gains.into_iter();
    let first = iter.next().ok_or(Error::EmptyAttributes)?;
    let best = iter.fold(first, |best, cand| {
        if cand.1 > best.1 { cand } else { best }
    });
    Ok(best)
}

//! This file provides some common functions
//! such as the weighted training error of a hypothesis.
use crate::{
    Classifier,
    Error,
    Result,
    Sample,
};


/// Normalizes `items` so that `items.iter().sum() == 1.0`.
/// Fails if the total mass is not a positive finite number.
#[inline]
pub fn normalize(items: &mut [f64]) -> Result<()> {
    let total = items.iter().sum::<f64>();

    if !total.is_finite() || total <= 0.0 {
        return Err(Error::DegenerateWeights { total });
    }

    items.iter_mut()
        .for_each(|item| { *item /= total; });

    Ok(())
}


/// Returns a vector whose `i`-th entry is `true`
/// iff `h` predicts the label of the `i`-th example correctly.
/// Every example must carry a label.
pub fn correctness<H>(sample: &Sample, h: &H) -> Result<Vec<bool>>
    where H: Classifier,
{
    sample.examples()
        .iter()
        .enumerate()
        .map(|(row, example)| {
            let label = example.label()
                .ok_or(Error::MissingLabel { row })?;
            let prediction = h.predict(example)
                .map_err(|e| e.at_row(row))?;
            Ok(label == prediction)
        })
        .collect()
}


/// Returns the weighted training error of `h`,
/// i.e., the sum of weights over the misclassified examples.
pub fn weighted_error<H>(sample: &Sample, h: &H) -> Result<f64>
    where H: Classifier,
{
    let correct = correctness(sample, h)?;
    let err = sample.examples()
        .iter()
        .zip(correct)
        .filter_map(|(example, ok)| (!ok).then_some(example.weight()))
        .sum::<f64>();
    Ok(err)
}


/// Returns the fraction of examples in `sample` that `h` labels correctly.
pub fn accuracy<H>(sample: &Sample, h: &H) -> Result<f64>
    where H: Classifier,
{
    let n_examples = sample.shape().0;
    if n_examples == 0 {
        return Err(Error::EmptySample);
    }
    let n_correct = correctness(sample, h)?
        .into_iter()
        .filter(|ok| *ok)
        .count();
    Ok(n_correct as f64 / n_examples as f64)
}

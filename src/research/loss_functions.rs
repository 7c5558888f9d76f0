use crate::{Classifier, Error, Result, Sample};


/// Returns the fraction of examples in `sample` that `f` misclassifies.
pub fn zero_one_loss<H>(sample: &Sample, f: &H) -> Result<f64>
    where H: Classifier,
{
    let n_examples = sample.shape().0;
    if n_examples == 0 {
        return Err(Error::EmptySample);
    }

    let target = sample.target()?;
    let n_mistakes = f.predict_all(sample)?
        .into_iter()
        .zip(target)
        .filter(|(p, y)| p != y)
        .count();

    Ok(n_mistakes as f64 / n_examples as f64)
}

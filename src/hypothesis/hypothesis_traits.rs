use crate::{Example, Label, Result, Sample};


/// A trait that defines the behavor of classifier.
/// You only need to implement `confidence` method.
pub trait Classifier {
    /// Computes the confidence of `example`.
    /// A non-negative confidence means [`Label::Positive`].
    ///
    /// Fails if `example` does not answer an attribute
    /// this classifier asks.
    fn confidence(&self, example: &Example) -> Result<f64>;


    /// Predicts the label of `example`.
    fn predict(&self, example: &Example) -> Result<Label> {
        let conf = self.confidence(example)?;
        Ok(Label::from_confidence(conf))
    }


    /// Computes the confidence of every example in `sample`.
    fn confidence_all(&self, sample: &Sample) -> Result<Vec<f64>> {
        sample.examples()
            .iter()
            .enumerate()
            .map(|(row, example)| {
                self.confidence(example).map_err(|e| e.at_row(row))
            })
            .collect()
    }


    /// Predicts the labels of `sample`, one per example, in order.
    fn predict_all(&self, sample: &Sample) -> Result<Vec<Label>> {
        sample.examples()
            .iter()
            .enumerate()
            .map(|(row, example)| {
                self.predict(example).map_err(|e| e.at_row(row))
            })
            .collect()
    }
}

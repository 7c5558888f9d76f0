//! Provides `WeakLearner` trait.
use crate::{AttributeId, Result, Sample};


/// An interface for weak learners.
/// A weak learner reads the current weights of the examples in the sample
/// and returns a hypothesis.
pub trait WeakLearner {
    /// The hypothesis type returned by this weak learner.
    type Hypothesis;


    /// Returns the name of the weak learner.
    fn name(&self) -> &str;


    /// Returns the information of the weak learner as `Vec<(&str, String)>`.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Returns a hypothesis for the given sample.
    fn produce(&self, sample: &Sample) -> Result<Self::Hypothesis>;


    /// Returns a hypothesis that asks `attribute` first.
    /// Boosting algorithms over decision stumps call this method.
    fn produce_forced(&self, sample: &Sample, attribute: AttributeId)
        -> Result<Self::Hypothesis>;
}

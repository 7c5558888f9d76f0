use serde::{Serialize, Deserialize};
use crate::{
    Classifier,
    Example,
    Result,
};


/// A hypothesis together with the weight
/// a boosting algorithm assigned to it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WeightedHypothesis<H> {
    /// The hypothesis weight.
    pub weight: f64,
    /// The hypothesis.
    pub hypothesis: H,
}


/// A struct that the boosting algorithms in this library return.
/// The hypotheses are chained in the order they were produced.
/// You can read/write this struct by `Serde` trait.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WeightedMajority<H> {
    entries: Vec<WeightedHypothesis<H>>,
}


impl<H> Default for WeightedMajority<H> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}


impl<H> WeightedMajority<H> {
    /// Construct an empty chain.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }


    /// Append a pair `(weight, hypothesis)` to the end of the chain.
    #[inline]
    pub fn push(&mut self, weight: f64, hypothesis: H) {
        self.entries.push(WeightedHypothesis { weight, hypothesis });
    }


    /// Returns the number of hypotheses in the chain.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }


    /// Returns `true` if the chain has no hypothesis.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }


    /// Returns the head of the chain.
    #[inline]
    pub fn first(&self) -> Option<&WeightedHypothesis<H>> {
        self.entries.first()
    }


    /// Returns the entry that follows the `position`-th one.
    #[inline]
    pub fn next(&self, position: usize) -> Option<&WeightedHypothesis<H>> {
        self.entries.get(position + 1)
    }


    /// Iterates over the chain from its head.
    pub fn iter(&self) -> impl Iterator<Item = &WeightedHypothesis<H>> {
        self.entries.iter()
    }


    /// Returns the hypothesis weights in chain order.
    pub fn weights(&self) -> Vec<f64> {
        self.entries.iter()
            .map(|entry| entry.weight)
            .collect()
    }
}


impl<H> Classifier for WeightedMajority<H>
    where H: Classifier,
{
    /// Returns the weighted vote `Σ w · sign(h(x))`.
    fn confidence(&self, example: &Example) -> Result<f64> {
        self.entries.iter()
            .map(|entry| {
                let label = entry.hypothesis.predict(example)?;
                Ok(entry.weight * label.sign())
            })
            .sum::<Result<f64>>()
    }
}

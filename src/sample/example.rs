use fixedbitset::FixedBitSet;

use crate::{Error, Result};
use super::attribute::{AttributeId, Label};


/// A single example: one boolean answer per attribute,
/// an optional label, and a weight.
///
/// The weight is `1/N` when the example enters a [`Sample`]
/// and only boosting algorithms change it.
///
/// [`Sample`]: crate::Sample
#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    answers: FixedBitSet,
    defined: FixedBitSet,
    label: Option<Label>,
    weight: f64,
}


impl Example {
    /// Construct an example over `n_attributes` attributes
    /// with no answer defined yet.
    pub fn new(n_attributes: usize) -> Self {
        Self {
            answers: FixedBitSet::with_capacity(n_attributes),
            defined: FixedBitSet::with_capacity(n_attributes),
            label: None,
            weight: 0.0,
        }
    }


    /// Construct a fully defined example from a slice of answers.
    pub fn from_answers(answers: &[bool], label: Option<Label>) -> Self {
        let mut example = Self::new(answers.len());
        answers.iter()
            .enumerate()
            .for_each(|(i, &answer)| {
                example.set_answer(AttributeId(i), answer);
            });
        example.label = label;
        example
    }


    /// Set the answer to `attribute`.
    /// The answer vector grows if `attribute` is out of range.
    pub fn set_answer(&mut self, attribute: AttributeId, answer: bool) {
        let i = attribute.index();
        if i >= self.defined.len() {
            self.answers.grow(i + 1);
            self.defined.grow(i + 1);
        }
        self.answers.set(i, answer);
        self.defined.insert(i);
    }


    /// Set the label of this example.
    pub fn set_label(&mut self, label: Option<Label>) {
        self.label = label;
    }


    /// Returns the answer to `attribute`.
    /// An undefined answer is reported as [`Error::MalformedExample`].
    #[inline]
    pub fn answer(&self, attribute: AttributeId) -> Result<bool> {
        let i = attribute.index();
        if !self.defined.contains(i) {
            return Err(Error::MalformedExample { row: None, attribute });
        }
        Ok(self.answers.contains(i))
    }


    /// Returns `true` if every attribute in `attributes` has an answer.
    pub fn is_defined_on(&self, attributes: &[AttributeId]) -> bool {
        attributes.iter()
            .all(|attribute| self.defined.contains(attribute.index()))
    }


    /// Returns the label of this example, if any.
    #[inline(always)]
    pub fn label(&self) -> Option<Label> {
        self.label
    }


    /// Returns the current weight.
    #[inline(always)]
    pub fn weight(&self) -> f64 {
        self.weight
    }


    /// Overwrites the weight.
    #[inline(always)]
    pub(crate) fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }
}

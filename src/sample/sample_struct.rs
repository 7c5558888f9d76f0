use std::collections::HashMap;
use std::ops::Index;

use crate::{Error, Result};
use super::attribute::{AttributeId, Label};
use super::example::Example;


const DEFAULT_POSITIVE: &str = "positive";
const DEFAULT_NEGATIVE: &str = "negative";


/// Struct `Sample` holds the attribute list
/// and a batch of examples answering those attributes.
///
/// The weights of the examples always start
/// as the uniform distribution `1/N`.
#[derive(Debug, Clone)]
pub struct Sample {
    pub(super) attributes: Vec<String>,
    pub(super) name_to_index: HashMap<String, usize>,
    pub(super) class_names: [String; 2],
    pub(super) examples: Vec<Example>,
}


impl Sample {
    /// Construct a new sample over the given attribute names.
    /// Examples are appended by [`Sample::push`].
    pub fn new<I, S>(attributes: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>,
    {
        let attributes = attributes.into_iter()
            .map(Into::into)
            .collect::<Vec<String>>();
        let name_to_index = attributes.iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect::<HashMap<_, _>>();
        let class_names = [
            DEFAULT_POSITIVE.to_string(),
            DEFAULT_NEGATIVE.to_string(),
        ];

        Self {
            attributes,
            name_to_index,
            class_names,
            examples: Vec::new(),
        }
    }


    /// Construct a sample from examples.
    /// The weights are set to `1/N`.
    pub fn from_examples<I, S>(attributes: I, examples: Vec<Example>) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>,
    {
        let mut sample = Self::new(attributes);
        sample.examples = examples;
        sample.reset_weights();
        sample
    }


    /// Set the names of the positive and the negative classes.
    pub fn class_names<S, T>(mut self, positive: S, negative: T) -> Self
        where S: Into<String>,
              T: Into<String>,
    {
        self.class_names = [positive.into(), negative.into()];
        self
    }


    /// Appends an example and resets the weights to `1/N`.
    pub fn push(&mut self, example: Example) {
        self.examples.push(example);
        self.reset_weights();
    }


    /// Build an example from `(attribute name, answer)` pairs
    /// and append it.
    pub fn push_named<'a, I>(&mut self, answers: I, label: Option<Label>)
        -> Result<()>
        where I: IntoIterator<Item = (&'a str, bool)>,
    {
        let mut example = Example::new(self.attributes.len());
        for (name, answer) in answers {
            let attribute = self.attribute_id(name)?;
            example.set_answer(attribute, answer);
        }
        example.set_label(label);
        self.push(example);
        Ok(())
    }


    /// Returns the pair `(# of examples, # of attributes)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.examples.len(), self.attributes.len())
    }


    /// Returns the attribute names in order.
    #[inline]
    pub fn attributes(&self) -> &[String] {
        &self.attributes[..]
    }


    /// Returns every attribute id in order.
    pub fn attribute_ids(&self) -> Vec<AttributeId> {
        (0..self.attributes.len()).map(AttributeId).collect()
    }


    /// Returns the id of the attribute named `name`.
    pub fn attribute_id<S: AsRef<str>>(&self, name: S) -> Result<AttributeId> {
        let name = name.as_ref();
        self.name_to_index.get(name)
            .copied()
            .map(AttributeId)
            .ok_or_else(|| Error::UnknownAttribute(name.to_string()))
    }


    /// Returns the name of `attribute`.
    pub fn attribute_name(&self, attribute: AttributeId) -> Option<&str> {
        self.attributes.get(attribute.index()).map(String::as_str)
    }


    /// Returns the name of the class `label`.
    pub fn class_name(&self, label: Label) -> &str {
        &self.class_names[label.index()]
    }


    /// Returns the label whose class name is `name`.
    pub fn label_of<S: AsRef<str>>(&self, name: S) -> Option<Label> {
        let name = name.as_ref();
        if name == self.class_names[0] {
            Some(Label::Positive)
        } else if name == self.class_names[1] {
            Some(Label::Negative)
        } else {
            None
        }
    }


    /// Returns a slice of the examples.
    #[inline]
    pub fn examples(&self) -> &[Example] {
        &self.examples[..]
    }


    /// Returns a vector of the current weights.
    pub fn weights(&self) -> Vec<f64> {
        self.examples.iter()
            .map(Example::weight)
            .collect()
    }


    /// Overwrite the weights.
    /// `weights` must have one entry per example.
    pub(crate) fn set_weights(&mut self, weights: &[f64]) {
        debug_assert_eq!(weights.len(), self.examples.len());
        self.examples.iter_mut()
            .zip(weights)
            .for_each(|(example, &w)| { example.set_weight(w); });
    }


    /// Resets every weight to `1/N`.
    pub fn reset_weights(&mut self) {
        let n_examples = self.examples.len();
        if n_examples == 0 { return; }

        let uni = 1.0 / n_examples as f64;
        self.examples.iter_mut()
            .for_each(|example| { example.set_weight(uni); });
    }


    /// Returns the labels in order.
    /// Fails on the first unlabeled example.
    pub fn target(&self) -> Result<Vec<Label>> {
        self.examples.iter()
            .enumerate()
            .map(|(row, example)| {
                example.label().ok_or(Error::MissingLabel { row })
            })
            .collect()
    }
}


impl Index<usize> for Sample {
    type Output = Example;
    #[inline]
    fn index(&self, row: usize) -> &Self::Output {
        &self.examples[row]
    }
}

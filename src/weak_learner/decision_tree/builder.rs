use crate::{AttributeId, DecisionTree, Sample};


/// A struct that builds `DecisionTree`.
/// `DecisionTreeBuilder` keeps parameters for constructing `DecisionTree`.
///
/// # Example
///
/// ```no_run
/// use boolboost::prelude::*;
/// # let sample = Sample::new(["Q0", "Q1"]);
///
/// let weak_learner = DecisionTreeBuilder::new(&sample)
///     .max_depth(2)
///     .build();
/// ```
#[derive(Clone)]
pub struct DecisionTreeBuilder {
    attributes: Vec<AttributeId>,
    max_depth: Option<usize>,
}


impl DecisionTreeBuilder {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default, [`DecisionTreeBuilder`] sets the parameters as follows;
    /// ```text
    /// attributes: every attribute of `sample`, in order,
    /// max_depth: unbounded,
    /// ```
    pub fn new(sample: &Sample) -> Self {
        let attributes = sample.attribute_ids();
        Self { attributes, max_depth: None, }
    }


    /// Specify the maximal depth of the tree.
    /// A tree of depth `0` is a single leaf.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }


    /// Remove the depth limit.
    pub fn unbounded(mut self) -> Self {
        self.max_depth = None;
        self
    }


    /// Restrict the candidate attributes.
    /// The order of `attributes` decides which attribute wins a tie.
    pub fn attributes<I>(mut self, attributes: I) -> Self
        where I: IntoIterator<Item = AttributeId>,
    {
        self.attributes = attributes.into_iter().collect();
        self
    }


    /// Build a `DecisionTree`.
    /// This method consumes `self`.
    pub fn build(self) -> DecisionTree {
        DecisionTree::new(self.attributes, self.max_depth)
    }
}

use crate::{
    AttributeId,
    Error,
    Label,
    Result,
    Sample,
    WeakLearner,
};

use super::{
    criterion,
    node::*,
    dtree_classifier::DecisionTreeClassifier,
};

use std::fmt;


/// The Decision Tree algorithm.
/// Given a set of labeled examples over boolean attributes,
/// [`DecisionTree`] grows a tree greedily:
/// each branch node asks the attribute with the greatest information gain
/// over the examples reaching it, and no attribute is asked twice
/// along a path.
///
/// The code follows the `DECISION-TREE-LEARNING` procedure of
/// [Artificial Intelligence: A Modern Approach](https://aima.cs.berkeley.edu/)
/// by Stuart Russell and Peter Norvig.
///
/// [`DecisionTree`] is constructed
/// by [`DecisionTreeBuilder`](super::DecisionTreeBuilder).
///
/// # Example
/// ```no_run
/// use boolboost::prelude::*;
///
/// // Read the training data from the CSV file.
/// let file = "/path/to/data/file.csv";
/// let sample = SampleReader::default()
///     .file(file)
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
///
/// // Get an instance of decision tree weak learner.
/// // In this example, the output tree is at most depth 2.
/// let tree = DecisionTreeBuilder::new(&sample)
///     .max_depth(2)
///     .build();
///
/// let f = tree.produce(&sample).unwrap();
/// let predictions = f.predict_all(&sample).unwrap();
///
/// let n_sample = sample.shape().0;
/// let loss = sample.target()
///     .unwrap()
///     .into_iter()
///     .zip(predictions)
///     .filter(|(y, p)| y != p)
///     .count() as f64
///     / n_sample as f64;
/// println!("loss (train) is: {loss}");
/// ```
#[derive(Debug, Clone)]
pub struct DecisionTree {
    attributes: Vec<AttributeId>,
    max_depth:  Option<usize>,
}


impl DecisionTree {
    /// Initialize [`DecisionTree`].
    /// This method is called only via `DecisionTreeBuilder::build`.
    #[inline]
    pub(super) fn new(
        attributes: Vec<AttributeId>,
        max_depth:  Option<usize>,
    ) -> Self
    {
        Self { attributes, max_depth, }
    }


    /// Returns the candidate attributes.
    #[inline]
    pub fn attributes(&self) -> &[AttributeId] {
        &self.attributes[..]
    }


    /// Returns the maximal depth, `None` if unbounded.
    #[inline]
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }


    /// Induce a tree over every example in `sample`.
    ///
    /// Leaves take the majority label by count,
    /// so the example weights do not change the tree.
    ///
    /// If `forced` is `Some(attribute)`, the root asks `attribute`
    /// and both children are leaves, whatever the maximal depth is.
    /// These two leaves weigh each example by its current weight.
    pub fn induce(&self, sample: &Sample, forced: Option<AttributeId>)
        -> Result<Node>
    {
        let n_attributes = sample.shape().1;
        let unknown = self.attributes.iter()
            .chain(forced.as_ref())
            .find(|attribute| attribute.index() >= n_attributes);
        if let Some(attribute) = unknown {
            return Err(Error::UnknownAttribute(attribute.to_string()));
        }

        let indices = (0..sample.shape().0).collect::<Vec<usize>>();

        let root = match forced {
            None => {
                self.grow(sample, &indices[..], &self.attributes[..], &[], 0)?
            },
            Some(attribute) => {
                let parent = &indices[..];
                split_on(sample, parent, &self.attributes[..], attribute,
                    |part, _| leaf(sample, part, parent, Vote::Weight)
                )?
            },
        };
        Ok(*root)
    }


    /// Grows the subtree for the examples at `indices`.
    /// `parent` holds the examples of the parent node.
    fn grow(
        &self,
        sample:     &Sample,
        indices:    &[usize],
        attributes: &[AttributeId],
        parent:     &[usize],
        depth:      usize,
    ) -> Result<Box<Node>>
    {
        // All examples agree on their label.
        if let Some(label) = unanimous_label(sample, indices)? {
            return Ok(Box::new(Node::leaf(label)));
        }

        let depth_reached = self.max_depth
            .is_some_and(|max_depth| depth >= max_depth);

        // No question is left, or the tree is deep enough,
        // or no example reaches this node.
        if attributes.is_empty() || depth_reached || indices.is_empty() {
            return leaf(sample, indices, parent, Vote::Count);
        }

        let (attribute, gain) = criterion::best_attribute(
            sample, indices, attributes
        )?;
        log::debug!(
            "depth {depth}: split {} examples on {attribute} (gain {gain:.5})",
            indices.len(),
        );

        split_on(sample, indices, attributes, attribute, |part, remaining| {
            self.grow(sample, part, remaining, indices, depth + 1)
        })
    }
}


/// Partition `indices` by the answer to `attribute`
/// and build both children by `child`,
/// which receives the partition and the attributes left to ask.
fn split_on<F>(
    sample:     &Sample,
    indices:    &[usize],
    attributes: &[AttributeId],
    attribute:  AttributeId,
    mut child:  F,
) -> Result<Box<Node>>
    where F: FnMut(&[usize], &[AttributeId]) -> Result<Box<Node>>,
{
    let mut true_indices = Vec::new();
    let mut false_indices = Vec::new();
    for &row in indices {
        let answer = sample[row].answer(attribute)
            .map_err(|e| e.at_row(row))?;
        if answer {
            true_indices.push(row);
        } else {
            false_indices.push(row);
        }
    }

    let remaining = attributes.iter()
        .copied()
        .filter(|&a| a != attribute)
        .collect::<Vec<_>>();

    let true_branch = child(&true_indices[..], &remaining[..])?;
    let false_branch = child(&false_indices[..], &remaining[..])?;

    Ok(Box::new(Node::branch(attribute, true_branch, false_branch)))
}


/// How the examples at a leaf vote for its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Vote {
    /// One vote per example. Plain induction never reads the weights.
    Count,
    /// Each example votes with its current weight.
    /// Used by the stumps a booster asks for.
    Weight,
}


/// Returns a leaf predicting the majority label of `indices`,
/// or of `parent` if no example reaches this leaf.
fn leaf(sample: &Sample, indices: &[usize], parent: &[usize], vote: Vote)
    -> Result<Box<Node>>
{
    let indices = if indices.is_empty() { parent } else { indices };
    let label = majority_label(sample, indices, vote)?;
    Ok(Box::new(Node::leaf(label)))
}


/// Returns `Some(label)` if every example at `indices` has `label`.
/// An empty set has no unanimous label.
fn unanimous_label(sample: &Sample, indices: &[usize])
    -> Result<Option<Label>>
{
    let mut labels = indices.iter()
        .map(|&row| sample[row].label().ok_or(Error::MissingLabel { row }));

    let first = match labels.next() {
        Some(label) => label?,
        None => return Ok(None),
    };
    for label in labels {
        if label? != first {
            return Ok(None);
        }
    }
    Ok(Some(first))
}


/// Returns the label with more votes over `indices`.
/// Ties resolve to [`Label::Positive`].
///
/// Under the uniform weights of a freshly built sample,
/// both kinds of [`Vote`] pick the same label.
pub(crate) fn majority_label(sample: &Sample, indices: &[usize], vote: Vote)
    -> Result<Label>
{
    if indices.is_empty() {
        return Err(Error::EmptySample);
    }

    let mut mass = [0f64; 2];
    for &row in indices {
        let example = &sample[row];
        let label = example.label()
            .ok_or(Error::MissingLabel { row })?;
        mass[label.index()] += match vote {
            Vote::Count => 1.0,
            Vote::Weight => example.weight(),
        };
    }

    let label = if mass[0] >= mass[1] {
        Label::Positive
    } else {
        Label::Negative
    };
    Ok(label)
}


impl WeakLearner for DecisionTree {
    type Hypothesis = DecisionTreeClassifier;


    fn name(&self) -> &str {
        "Decision Tree"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("# of attributes", format!("{}", self.attributes.len())),
            ("Max depth", fmt_depth(self.max_depth)),
            ("Split criterion", "Information gain".to_string()),
        ]);
        Some(info)
    }


    fn produce(&self, sample: &Sample) -> Result<Self::Hypothesis> {
        let root = self.induce(sample, None)?;
        Ok(DecisionTreeClassifier::from(root))
    }


    fn produce_forced(&self, sample: &Sample, attribute: AttributeId)
        -> Result<Self::Hypothesis>
    {
        let root = self.induce(sample, Some(attribute))?;
        Ok(DecisionTreeClassifier::stump(root))
    }
}


fn fmt_depth(max_depth: Option<usize>) -> String {
    match max_depth {
        Some(depth) => format!("{depth}"),
        None => "Unbounded".to_string(),
    }
}


impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\
            ----------\n\
            # Decision Tree Weak Learner\n\n\
            - Max depth: {}\n\
            - Split criterion: Information gain\n\
            - # of attributes: {}\n\
            ----------\
            ",
            fmt_depth(self.max_depth),
            self.attributes.len(),
        )
    }
}

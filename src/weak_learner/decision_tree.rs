//! Defines the decision tree weak learner
//! grown by information gain over boolean attributes.

/// Defines the tree inducer.
pub mod dtree;
/// Defines the builder of `DecisionTree`.
pub mod builder;
/// Defines the classifier produced by `DecisionTree`.
pub mod dtree_classifier;
/// Defines entropy and information gain.
pub mod criterion;

/// Defines the inner representations of `DecisionTreeClassifier`.
mod node;


pub use dtree::DecisionTree;
pub use builder::DecisionTreeBuilder;
pub use dtree_classifier::{DecisionTreeClassifier, TreeKind};
pub use node::Node;
pub use criterion::{
    boolean_entropy,
    importance,
    remainder,
    AttributeCounts,
};

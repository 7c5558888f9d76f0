#![warn(missing_docs)]

//! 
//! A crate that learns binary classifiers over boolean attributes.
//! 
//! This crate provides two learners.
//! 
//! - Decision tree
//!     [`DecisionTree`] grows a tree greedily.
//!     Each branch asks the attribute with the greatest information gain
//!     over the examples reaching it.
//!     The depth can be capped by [`DecisionTreeBuilder::max_depth`].
//! 
//! 
//! - Boosting
//!     [`AdaBoost`] turns every attribute into one decision stump,
//!     visiting the attributes in descending order of information gain,
//!     and combines the stumps into a [`WeightedMajority`].
//! 
//! Both results can be wrapped in a [`Model`],
//! saved to and loaded from JSON, and used for prediction.
//! 
//! # Example
//! ```no_run
//! use boolboost::prelude::*;
//! 
//! let mut sample = SampleReader::default()
//!     .file("/path/to/file.csv")
//!     .has_header(true)
//!     .target_feature("class")
//!     .read()
//!     .unwrap();
//! 
//! let attributes = sample.attribute_ids();
//! let ensemble = boost(&mut sample, &attributes).unwrap();
//! let model = Model::from(ensemble);
//! let labels = classify(&model, &sample).unwrap();
//! ```

pub mod common;
pub mod error;
pub mod sample;
pub mod hypothesis;
pub mod weak_learner;
pub mod booster;
pub mod model;
pub mod learn;

/// Provides some features for research, such as logging.
pub mod research;

pub mod prelude;


pub use error::{Error, Result};

pub use sample::{
    AttributeId,
    Example,
    Label,
    Sample,
    SampleReader,
};

pub use hypothesis::{
    Classifier,
    WeightedHypothesis,
    WeightedMajority,
};

pub use weak_learner::{
    WeakLearner,
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    Node,
    TreeKind,
};

pub use booster::{
    Booster,
    AdaBoost,
    BoostRound,
    StumpCandidate,
};

pub use model::Model;

pub use learn::{induce, boost, classify};

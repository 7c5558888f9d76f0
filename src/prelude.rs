//! Exports the standard learners and traits.
//! 
pub use crate::error::{Error, Result};


pub use crate::sample::{
    AttributeId,
    Example,
    Label,
    Sample,
    SampleReader,
};


pub use crate::booster::{
    // Booster trait
    Booster,

    // Boosting over decision stumps
    AdaBoost,
};


pub use crate::weak_learner::{
    // Weak Learner trait
    WeakLearner,

    // Decision tree
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    Node,
};


pub use crate::hypothesis::{
    Classifier,
    WeightedMajority,
};


pub use crate::model::Model;


pub use crate::learn::{induce, boost, classify};


pub use crate::research::{
    Logger,
    Research,
};

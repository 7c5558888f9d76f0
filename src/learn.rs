//! One-call entry points for training and prediction.
//!
//! These functions wrap the builders in this crate
//! for callers that do not need to configure them further.
use crate::{
    AdaBoost,
    AttributeId,
    Booster,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    Label,
    Model,
    Node,
    Result,
    Sample,
    WeightedMajority,
};


/// Induce a decision tree over `sample` asking only `attributes`.
///
/// `max_depth: None` grows the tree until every leaf is pure
/// or no attribute is left.
/// With `forced: Some(attribute)` the root asks `attribute`
/// and both of its children are leaves.
pub fn induce(
    sample: &Sample,
    attributes: &[AttributeId],
    max_depth: Option<usize>,
    forced: Option<AttributeId>,
) -> Result<Node>
{
    let builder = DecisionTreeBuilder::new(sample)
        .attributes(attributes.iter().copied());
    let builder = match max_depth {
        Some(depth) => builder.max_depth(depth),
        None => builder.unbounded(),
    };
    builder.build().induce(sample, forced)
}


/// Run `AdaBoost` over one stump per attribute in `attributes`.
///
/// The example weights of `sample` are reset to uniform first
/// and hold the final distribution on return.
pub fn boost(sample: &mut Sample, attributes: &[AttributeId])
    -> Result<WeightedMajority<DecisionTreeClassifier>>
{
    let weak_learner = DecisionTreeBuilder::new(sample)
        .attributes(attributes.iter().copied())
        .max_depth(1)
        .build();

    AdaBoost::init(sample)
        .attributes(attributes.iter().copied())
        .run(&weak_learner)
}


/// Predict the label of every example in `sample`, in order.
pub fn classify(model: &Model, sample: &Sample) -> Result<Vec<Label>> {
    model.classify_all(sample)
}

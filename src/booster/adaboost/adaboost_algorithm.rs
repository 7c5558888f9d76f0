//! Provides [`AdaBoost`] over decision stumps by Freund & Schapire, 1995.
use crate::{
    AttributeId,
    Booster,
    Classifier,
    Error,
    Result,
    Sample,
    WeakLearner,
    WeightedMajority,

    common::{checker, utils},
    common::constants::{DEGENERATE_TOLERANCE, MAX_HYPOTHESIS_WEIGHT},
    research::Research,
    weak_learner::decision_tree::importance,
};

use std::collections::VecDeque;
use std::ops::ControlFlow;


/// An attribute waiting to become a stump,
/// together with its information gain over the initial sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StumpCandidate {
    /// The attribute the stump asks.
    pub attribute: AttributeId,
    /// Information gain over the unweighted training sample.
    pub importance: f64,
}


/// What happened in one boosting round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoostRound {
    /// 1-indexed round number.
    pub iteration: usize,
    /// The attribute asked by the stump of this round.
    pub attribute: AttributeId,
    /// Weighted training error of the stump.
    pub error: f64,
    /// The hypothesis weight assigned to the stump.
    pub weight: f64,
}


/// Defines `AdaBoost` over decision stumps.
/// This struct is based on the book:
/// [Boosting: Foundations and Algorithms](https://direct.mit.edu/books/oa-monograph/5342/BoostingFoundations-and-Algorithms)
/// by Robert E. Schapire and Yoav Freund.
///
/// Every attribute becomes exactly one stump.
/// The attributes are visited once each,
/// in descending order of their information gain
/// over the unweighted training sample.
///
/// In round `t`, the stump `h` on the next attribute is trained
/// on the current weights and its weighted error `err` is measured.
/// The weights of the examples `h` classifies correctly are multiplied by
/// `err / (1 - err)`, the weights are normalized,
/// and `h` receives the weight `0.5 * ln((1 - err) / err)`.
///
/// If `err` is `0` (or `1`), the weight is clamped to
/// `±MAX_HYPOTHESIS_WEIGHT` and boosting stops after that stump.
///
/// # Example
/// The following code shows a small example
/// for running [`AdaBoost`].
///
/// ```no_run
/// use boolboost::prelude::*;
///
/// // Read the training sample from the CSV file.
/// // We use the column named `class` as the label.
/// let mut sample = SampleReader::default()
///     .file("/path/to/file.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
///
/// // Stumps are grown on every attribute.
/// let weak_learner = DecisionTreeBuilder::new(&sample)
///     .max_depth(1)
///     .build();
///
/// let mut booster = AdaBoost::init(&mut sample);
///
/// // Run `AdaBoost` and obtain the resulting hypothesis `f`.
/// let f = booster.run(&weak_learner).unwrap();
///
/// // Get the predictions on the training set.
/// let predictions = f.predict_all(&sample).unwrap();
/// ```
pub struct AdaBoost<'a, H> {
    // Training sample. `AdaBoost` owns the example weights while it runs.
    sample: &'a mut Sample,

    // Attributes turned into stumps.
    attributes: Vec<AttributeId>,

    // Attributes not asked yet, best first.
    candidates: VecDeque<StumpCandidate>,

    // The stumps obtained so far with their weights.
    hypothesis: WeightedMajority<H>,

    history: Vec<BoostRound>,


    // Max iteration. Equals the number of attributes
    // unless `force_quit_at` is set.
    max_iter: usize,


    // Optional. If this value is `Some(it)`,
    // the algorithm terminates after `it` iterations.
    force_quit_at: Option<usize>,

    // Terminated iteration.
    terminated: usize,
}


impl<'a, H> AdaBoost<'a, H> {
    /// Initialize the `AdaBoost`.
    /// By default, every attribute of `sample` becomes a stump.
    pub fn init(sample: &'a mut Sample) -> Self {
        let attributes = sample.attribute_ids();
        AdaBoost {
            sample,
            attributes,
            candidates: VecDeque::new(),
            hypothesis: WeightedMajority::new(),
            history: Vec::new(),

            max_iter: usize::MAX,
            force_quit_at: None,
            terminated: usize::MAX,
        }
    }


    /// Restrict the attributes that become stumps.
    /// Repeated attributes are asked once, at their first position.
    pub fn attributes<I>(mut self, attributes: I) -> Self
        where I: IntoIterator<Item = AttributeId>,
    {
        self.attributes = attributes.into_iter().collect();
        self
    }


    /// Force quits after `it` iterations.
    pub fn force_quit_at(mut self, it: usize) -> Self {
        self.force_quit_at = Some(it);
        self
    }


    /// Returns the remaining candidates, best first.
    pub fn candidates(&self) -> impl Iterator<Item = &StumpCandidate> {
        self.candidates.iter()
    }


    /// Returns the record of every round so far.
    pub fn history(&self) -> &[BoostRound] {
        &self.history[..]
    }


    /// Returns the iteration at which boosting stopped,
    /// `None` if it has not stopped yet.
    pub fn terminated(&self) -> Option<usize> {
        (self.terminated != usize::MAX).then_some(self.terminated)
    }


    /// Returns the training sample with its current weights.
    pub fn sample(&self) -> &Sample {
        self.sample
    }


    /// Computes the information gain of every attribute once
    /// and sorts them in descending order.
    /// Equal gains keep the order of `self.attributes`.
    fn rank_attributes(&self) -> Result<VecDeque<StumpCandidate>> {
        let mut candidates = self.attributes.iter()
            .map(|&attribute| {
                importance(self.sample, attribute)
                    .map(|importance| StumpCandidate { attribute, importance })
            })
            .collect::<Result<Vec<_>>>()?;

        candidates.sort_by(|a, b| b.importance.total_cmp(&a.importance));
        Ok(candidates.into())
    }


    /// Multiplies the weights of the correctly classified examples
    /// by `err / (1 - err)` and normalizes the result.
    fn update_params(&mut self, correct: &[bool], err: f64) -> Result<()> {
        let beta = err / (1.0 - err);

        let mut weights = self.sample.weights();
        weights.iter_mut()
            .zip(correct)
            .filter(|(_, ok)| **ok)
            .for_each(|(w, _)| { *w *= beta; });

        utils::normalize(&mut weights[..])?;
        self.sample.set_weights(&weights[..]);

        debug_assert!(checker::is_distribution(self.sample));
        Ok(())
    }


    fn stop(&mut self, iteration: usize) -> ControlFlow<usize> {
        self.terminated = iteration;
        ControlFlow::Break(iteration)
    }
}


impl<H> Booster<H> for AdaBoost<'_, H>
    where H: Classifier + Clone,
{
    type Output = WeightedMajority<H>;


    fn name(&self) -> &str {
        "AdaBoost"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let (n_examples, _) = self.sample.shape();
        let quit = self.force_quit_at
            .map(|it| format!("{it}"))
            .unwrap_or_else(|| "None".to_string());
        let info = Vec::from([
            ("# of examples", format!("{n_examples}")),
            ("# of stumps (max)", format!("{}", self.attributes.len())),
            ("Force quit", quit),
        ]);
        Some(info)
    }


    fn preprocess(&mut self) -> Result<()> {
        checker::check_sample(self.sample)?;
        if self.attributes.is_empty() {
            return Err(Error::EmptyAttributes);
        }

        let n_attributes = self.sample.shape().1;
        if let Some(unknown) = self.attributes.iter()
            .find(|attribute| attribute.index() >= n_attributes)
        {
            return Err(Error::UnknownAttribute(unknown.to_string()));
        }

        // Each attribute becomes one stump at most.
        let mut seen = vec![false; n_attributes];
        self.attributes.retain(|attribute| {
            !std::mem::replace(&mut seen[attribute.index()], true)
        });

        self.sample.reset_weights();
        self.hypothesis = WeightedMajority::new();
        self.history = Vec::new();
        self.terminated = usize::MAX;

        self.candidates = self.rank_attributes()?;

        self.max_iter = self.candidates.len();
        if let Some(it) = self.force_quit_at {
            self.max_iter = self.max_iter.min(it);
        }
        Ok(())
    }


    fn boost<W>(
        &mut self,
        weak_learner: &W,
        iteration: usize,
    ) -> Result<ControlFlow<usize>>
        where W: WeakLearner<Hypothesis = H>,
    {
        if self.max_iter < iteration {
            return Ok(self.stop(self.max_iter));
        }
        let Some(candidate) = self.candidates.pop_front() else {
            return Ok(self.stop(iteration - 1));
        };


        // Get a stump on the next attribute.
        let h = weak_learner.produce_forced(self.sample, candidate.attribute)?;


        let correct = utils::correctness(self.sample, &h)?;
        let err = self.sample.examples()
            .iter()
            .zip(&correct)
            .filter_map(|(example, ok)| (!ok).then_some(example.weight()))
            .sum::<f64>();


        // `h` classifies every example correctly (or wrongly),
        // so `ln((1 - err) / err)` is not finite.
        // Keep `h` with a clamped weight and stop here.
        if err <= DEGENERATE_TOLERANCE || err >= 1.0 - DEGENERATE_TOLERANCE {
            let weight = if err <= DEGENERATE_TOLERANCE {
                MAX_HYPOTHESIS_WEIGHT
            } else {
                -MAX_HYPOTHESIS_WEIGHT
            };
            log::warn!(
                "round {iteration}: stump on {} has error {err}; \
                 weight clamped to {weight} and boosting stops",
                candidate.attribute,
            );
            self.record(iteration, candidate.attribute, err, weight, h);
            return Ok(self.stop(iteration));
        }


        self.update_params(&correct[..], err)?;

        // Compute the weight on the new hypothesis
        let weight = 0.5 * ((1.0 - err) / err).ln();
        log::debug!(
            "round {iteration}: stump on {} (gain {:.5}), \
             error {err:.5}, weight {weight:.5}",
            candidate.attribute,
            candidate.importance,
        );
        self.record(iteration, candidate.attribute, err, weight, h);


        if self.candidates.is_empty() || self.max_iter <= iteration {
            return Ok(self.stop(iteration));
        }
        Ok(ControlFlow::Continue(()))
    }


    fn postprocess(&mut self) -> Self::Output {
        self.hypothesis.clone()
    }
}


impl<H> AdaBoost<'_, H> {
    fn record(
        &mut self,
        iteration: usize,
        attribute: AttributeId,
        error: f64,
        weight: f64,
        h: H,
    )
    {
        self.history.push(BoostRound { iteration, attribute, error, weight });
        self.hypothesis.push(weight, h);
    }
}


impl<H> Research for AdaBoost<'_, H>
    where H: Classifier + Clone,
{
    type Output = WeightedMajority<H>;

    fn current_hypothesis(&self) -> Self::Output {
        self.hypothesis.clone()
    }

    fn training_sample(&self) -> &Sample {
        self.sample
    }

    fn last_error(&self) -> Option<f64> {
        self.history.last().map(|round| round.error)
    }
}

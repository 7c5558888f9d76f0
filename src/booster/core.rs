//! Provides `Booster` trait.

use crate::{Result, WeakLearner};
use std::ops::ControlFlow;


/// The trait [`Booster`] defines the standard framework of Boosting.
/// Here, the **standard framework** is defined as
/// a repeated game between **Booster** and **Weak Learner**
/// of the following form:
///
/// In each round `t = 1, 2, ...`,
/// 1. Booster chooses a probability distribution over
///    training instances.
/// 2. Weak Learner chooses a hypothesis that achieves
///    some **accuracy** with respect to the distribution.
///
/// After sufficient rounds, Booster outputs a combined hypothesis.
///
/// # Required Methods
/// - [`Booster::name`]
/// - [`Booster::preprocess`]
/// - [`Booster::boost`]
/// - [`Booster::postprocess`]
/// - [`Booster::info`] ... optional.
///
/// # Provided Methods
/// - [`Booster::run`]
pub trait Booster<H> {
    /// The final hypothesis output by a boosting algorithm.
    type Output;


    /// Returns the name of the boosting algorithm.
    fn name(&self) -> &str;


    /// Returns the information of boosting algorithm as `String`.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// A main function that runs boosting algorithm.
    fn run<W>(&mut self, weak_learner: &W) -> Result<Self::Output>
        where W: WeakLearner<Hypothesis = H>
    {
        self.preprocess()?;

        let flow = (1..).try_for_each(|iter| {
            match self.boost(weak_learner, iter) {
                Ok(ControlFlow::Continue(())) => ControlFlow::Continue(()),
                Ok(ControlFlow::Break(it)) => ControlFlow::Break(Ok(it)),
                Err(e) => ControlFlow::Break(Err(e)),
            }
        });
        if let ControlFlow::Break(Err(e)) = flow {
            return Err(e);
        }

        Ok(self.postprocess())
    }


    /// Pre-processing for `self`.
    /// As you can see in [`Booster::run`],
    /// this method is called before the boosting process.
    fn preprocess(&mut self) -> Result<()>;


    /// Boosting step per iteration.
    /// This method returns
    /// `ControlFlow::Continue(())` if boosting goes on,
    /// `ControlFlow::Break(terminated_iter)` otherwise.
    fn boost<W>(
        &mut self,
        weak_learner: &W,
        iteration: usize,
    ) -> Result<ControlFlow<usize>>
        where W: WeakLearner<Hypothesis = H>;


    /// Post-processing.
    fn postprocess(&mut self) -> Self::Output;
}

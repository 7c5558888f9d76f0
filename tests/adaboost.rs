use boolboost::prelude::*;
use boolboost::common::constants::MAX_HYPOTHESIS_WEIGHT;
use boolboost::common::utils;

use rand::prelude::*;
use rand::rngs::StdRng;

use std::ops::ControlFlow;


const EPS: f64 = 1e-9;


/// Every answer vector over `A`, `B`, `C` once,
/// labeled by `A or (B and C)`.
/// `A` alone gets 7 of 8 right; `B` and `C` alone get 5 of 8.
fn cube() -> Sample {
    let examples = (0..8_usize)
        .map(|code| {
            let a = code & 4 == 0;
            let b = code & 2 == 0;
            let c = code & 1 == 0;
            let label = if a || (b && c) {
                Label::Positive
            } else {
                Label::Negative
            };
            Example::from_answers(&[a, b, c], Some(label))
        })
        .collect();
    Sample::from_examples(["A", "B", "C"], examples)
}


fn stump_learner(sample: &Sample) -> DecisionTree {
    DecisionTreeBuilder::new(sample)
        .max_depth(1)
        .build()
}


/// Tests for `AdaBoost`.
#[cfg(test)]
pub mod adaboost_tests {
    use super::*;

    #[test]
    fn one_stump_per_attribute_in_gain_order() {
        let mut sample = cube();
        let wl = stump_learner(&sample);

        let mut booster: AdaBoost<'_, DecisionTreeClassifier>
            = AdaBoost::init(&mut sample);
        booster.preprocess().unwrap();
        let order = booster.candidates()
            .map(|c| c.attribute)
            .collect::<Vec<_>>();
        let gains = booster.candidates()
            .map(|c| c.importance)
            .collect::<Vec<_>>();
        assert_eq!(order, [AttributeId(0), AttributeId(1), AttributeId(2)]);
        assert!(gains.windows(2).all(|w| w[0] >= w[1]));

        let f = booster.run(&wl).unwrap();
        assert_eq!(f.len(), 3);
        let asked = f.iter()
            .map(|entry| entry.hypothesis.root_attribute())
            .collect::<Vec<_>>();
        assert_eq!(
            asked,
            [Some(AttributeId(0)), Some(AttributeId(1)), Some(AttributeId(2))]
        );

        let history = booster.history();
        assert!((history[0].error - 0.125).abs() < EPS);
        assert!((history[0].weight - 0.5 * 7f64.ln()).abs() < EPS);
        for (round, entry) in history.iter().zip(f.iter()) {
            assert_eq!(round.weight, entry.weight);
            assert!(round.error > 0.0 && round.error < 0.5);
        }
        assert_eq!(booster.terminated(), Some(3));
    }


    #[test]
    fn ensemble_is_no_worse_than_the_best_stump() {
        let sample = cube();
        let wl = stump_learner(&sample);

        let best_stump = sample.attribute_ids()
            .into_iter()
            .map(|attribute| {
                let h = wl.produce_forced(&sample, attribute).unwrap();
                utils::accuracy(&sample, &h).unwrap()
            })
            .fold(0.0_f64, f64::max);
        assert!((best_stump - 0.875).abs() < EPS);

        let h = wl.produce_forced(&sample, AttributeId(0)).unwrap();
        let err = utils::weighted_error(&sample, &h).unwrap();
        assert!((err - 0.125).abs() < EPS);

        let mut train = cube();
        let attributes = train.attribute_ids();
        let f = boost(&mut train, &attributes).unwrap();
        let accuracy = utils::accuracy(&sample, &f).unwrap();
        assert!(accuracy >= best_stump - EPS);
    }


    #[test]
    fn equal_gains_keep_attribute_order() {
        // label = majority(A, B, C): the three attributes are symmetric.
        let examples = (0..8_usize)
            .map(|code| {
                let x = [code & 4 == 0, code & 2 == 0, code & 1 == 0];
                let votes = x.iter().filter(|b| **b).count();
                let label = if votes >= 2 {
                    Label::Positive
                } else {
                    Label::Negative
                };
                Example::from_answers(&x[..], Some(label))
            })
            .collect();
        let mut sample = Sample::from_examples(["A", "B", "C"], examples);
        let target = sample.target().unwrap();
        let wl = stump_learner(&sample);

        let mut booster = AdaBoost::init(&mut sample)
            .attributes([AttributeId(2), AttributeId(0), AttributeId(1)]);
        let f = booster.run(&wl).unwrap();
        let asked = booster.history()
            .iter()
            .map(|round| round.attribute)
            .collect::<Vec<_>>();
        assert_eq!(asked, [AttributeId(2), AttributeId(0), AttributeId(1)]);

        // The weighted vote of the three stumps is the majority itself.
        assert_eq!(f.predict_all(booster.sample()).unwrap(), target);
    }


    #[test]
    fn weights_stay_a_distribution() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..30 {
            let n_attributes = rng.gen_range(1..6);
            let n_examples = rng.gen_range(2..40);
            let names = (0..n_attributes).map(|i| format!("Q{i}"));
            let examples = (0..n_examples)
                .map(|_| {
                    let x = (0..n_attributes)
                        .map(|_| rng.gen_bool(0.5))
                        .collect::<Vec<_>>();
                    let y = if rng.gen_bool(0.4) {
                        Label::Positive
                    } else {
                        Label::Negative
                    };
                    Example::from_answers(&x[..], Some(y))
                })
                .collect();
            let mut sample = Sample::from_examples(names, examples);
            let wl = stump_learner(&sample);

            let mut booster: AdaBoost<'_, DecisionTreeClassifier>
                = AdaBoost::init(&mut sample);
            booster.preprocess().unwrap();
            for iteration in 1.. {
                let flow = booster.boost(&wl, iteration).unwrap();

                let weights = booster.sample().weights();
                let total = weights.iter().sum::<f64>();
                assert!((total - 1.0).abs() < EPS, "total = {total}");
                assert!(weights.iter().all(|w| *w >= 0.0));

                let weight = booster.history()[iteration - 1].weight;
                assert!(weight.is_finite());

                if let ControlFlow::Break(_) = flow { break; }
            }
            assert!(booster.history().len() <= n_attributes);
        }
    }


    #[test]
    fn perfect_stump_is_clamped_and_stops_boosting() {
        // `A` decides the label, so its stump makes no mistake.
        let examples = vec![
            Example::from_answers(&[true, true], Some(Label::Positive)),
            Example::from_answers(&[true, false], Some(Label::Positive)),
            Example::from_answers(&[false, true], Some(Label::Negative)),
            Example::from_answers(&[false, false], Some(Label::Negative)),
        ];
        let mut sample = Sample::from_examples(["A", "B"], examples);
        let wl = stump_learner(&sample);

        let mut booster = AdaBoost::init(&mut sample);
        let f = booster.run(&wl).unwrap();

        assert_eq!(f.len(), 1);
        assert_eq!(booster.terminated(), Some(1));
        let round = booster.history()[0];
        assert_eq!(round.attribute, AttributeId(0));
        assert_eq!(round.error, 0.0);
        assert_eq!(round.weight, MAX_HYPOTHESIS_WEIGHT);
        assert_eq!(booster.sample().weights(), vec![0.25; 4]);
    }


    #[test]
    fn repeated_attributes_become_one_stump() {
        let mut sample = cube();
        let wl = stump_learner(&sample);
        let mut booster = AdaBoost::init(&mut sample).attributes([
            AttributeId(1), AttributeId(0), AttributeId(1), AttributeId(0),
        ]);
        let f = booster.run(&wl).unwrap();

        let asked = booster.history()
            .iter()
            .map(|round| round.attribute)
            .collect::<Vec<_>>();
        assert_eq!(asked, [AttributeId(0), AttributeId(1)]);
        assert_eq!(f.len(), 2);
    }


    #[test]
    fn out_of_range_attribute_is_unknown() {
        let mut sample = cube();
        let attributes = [AttributeId(0), AttributeId(3)];
        assert!(matches!(
            boost(&mut sample, &attributes),
            Err(Error::UnknownAttribute(_))
        ));
    }


    #[test]
    fn force_quit_limits_the_chain() {
        let mut sample = cube();
        let wl = stump_learner(&sample);
        let mut booster = AdaBoost::init(&mut sample).force_quit_at(2);
        let f = booster.run(&wl).unwrap();
        assert_eq!(f.len(), 2);
        assert_eq!(booster.terminated(), Some(2));
    }


    #[test]
    fn unlabeled_or_empty_samples_are_rejected() {
        let mut empty = Sample::new(["A"]);
        let attributes = empty.attribute_ids();
        assert!(matches!(
            boost(&mut empty, &attributes),
            Err(Error::EmptySample)
        ));

        let mut sample = cube();
        sample.push(Example::from_answers(&[true, true, true], None));
        let attributes = sample.attribute_ids();
        assert!(matches!(
            boost(&mut sample, &attributes),
            Err(Error::MissingLabel { row: 8 })
        ));

        let mut sample = cube();
        assert!(matches!(boost(&mut sample, &[]), Err(Error::EmptyAttributes)));
    }
}

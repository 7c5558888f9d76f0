use boolboost::prelude::*;
use boolboost::research::zero_one_loss;

use std::fs;


fn sample() -> Sample {
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


/// Tests for `Logger`.
#[cfg(test)]
pub mod logger_tests {
    use super::*;

    #[test]
    fn writes_one_line_per_round() {
        let mut train = sample();
        let test = sample();
        let wl = DecisionTreeBuilder::new(&train)
            .max_depth(1)
            .build();
        let booster = AdaBoost::init(&mut train);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.csv");

        let mut logger = Logger::new(booster, wl)
            .test_sample(&test)
            .print_every(usize::MAX);
        let f = logger.run(&path).unwrap();
        assert_eq!(logger.booster().history().len(), 3);

        let log = fs::read_to_string(&path).unwrap();
        let lines = log.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "Round,Error,TrainLoss,TestLoss,Time");
        assert_eq!(lines.len(), 1 + 3);

        let last = lines[3].split(',').collect::<Vec<_>>();
        assert_eq!(last[0], "3");
        let train_loss = last[2].parse::<f64>().unwrap();
        let test_loss = last[3].parse::<f64>().unwrap();
        assert_eq!(train_loss, zero_one_loss(&test, &f).unwrap());
        assert_eq!(train_loss, test_loss);
    }


    #[test]
    fn test_loss_is_left_empty_without_a_test_sample() {
        let mut train = sample();
        let wl = DecisionTreeBuilder::new(&train)
            .max_depth(1)
            .build();
        let booster = AdaBoost::init(&mut train).force_quit_at(1);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.csv");
        Logger::new(booster, wl)
            .print_every(usize::MAX)
            .run(&path)
            .unwrap();

        let log = fs::read_to_string(&path).unwrap();
        let row = log.lines().nth(1).unwrap();
        let cells = row.split(',').collect::<Vec<_>>();
        assert_eq!(cells.len(), 5);
        assert_eq!(cells[3], "");
        assert!(cells[1].parse::<f64>().unwrap() > 0.0);
    }
}

use colored::Colorize;

use crate::{
    Booster,
    Classifier,
    Result,
    Sample,
    WeakLearner,
    common::constants::DEFAULT_PRINT_ROUND,
};
use super::loss_functions::zero_one_loss;

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use std::time::Instant;
use std::ops::ControlFlow;

const WIDTH: usize = 8;
const PREC_WIDTH: usize = 5;
const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;
const HEADER: &str = "Round,Error,TrainLoss,TestLoss,Time\n";


/// Implementing this trait allows you to use [`Logger`] to
/// log the algorithm's behavior.
pub trait Research {
    /// The combined hypothesis.
    type Output;

    /// Returns the combined hypothesis at current state.
    fn current_hypothesis(&self) -> Self::Output;

    /// Returns the training sample.
    fn training_sample(&self) -> &Sample;

    /// Returns the weighted error of the latest hypothesis, if any.
    fn last_error(&self) -> Option<f64> {
        None
    }
}


/// Struct `Logger` provides a generic function that
/// logs the weighted error, train/test loss value, and running time
/// for each step of boosting.
pub struct Logger<'a, B, W> {
    booster: B,
    weak_learner: W,
    test: Option<&'a Sample>,
    round: usize,
}


impl<'a, B, W> Logger<'a, B, W> {
    /// Create a new instance of `Logger`.
    pub fn new(booster: B, weak_learner: W) -> Self {
        Self {
            booster,
            weak_learner,
            test: None,
            round: DEFAULT_PRINT_ROUND,
        }
    }


    /// Set the test sample.
    /// Without a test sample, the test loss column is left empty.
    pub fn test_sample(mut self, test: &'a Sample) -> Self {
        self.test = Some(test);
        self
    }


    /// Set the interval to print the current status.
    /// By default, the method `run` prints its status every round.
    /// If you don't want to print the log,
    /// set `usize::MAX`.
    pub fn print_every(mut self, round: usize) -> Self {
        self.round = round.max(1);
        self
    }


    /// Returns the booster.
    pub fn booster(&self) -> &B {
        &self.booster
    }
}


impl<H, B, W, O> Logger<'_, B, W>
    where B: Booster<H, Output = O> + Research<Output = O>,
          O: Classifier,
          W: WeakLearner<Hypothesis = H>,
{
    fn print_log_header(&self) {
        println!(
            "      {:>WIDTH$}\t\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}",
            "".bold().red(),
            "WEIGHTED".bold().blue(),
            "TRAIN".bold().green(),
            "TEST".bold().yellow(),
            "ACC.".bold().cyan(),
        );
        println!(
            "      {:>WIDTH$}\t\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\n",
            "ROUND".bold().red(),
            "ERROR".bold().blue(),
            "ERROR".bold().green(),
            "ERROR".bold().yellow(),
            "TIME".bold().cyan(),
        );
    }


    /// print current settings.
    fn print_stats(&self) {
        let header = format!(
            "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
            "", "STATS".bold(), "",
        );
        println!(
            "\n{header}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "Booster".bold(),
            self.booster.name().bold().green(),
        );
        if let Some(info) = self.booster.info() {
            println!("{}", fmt_info(info));
        }

        println!(
            "+ {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "Weak Learner".bold(),
            self.weak_learner.name().bold().green(),
        );
        if let Some(info) = self.weak_learner.info() {
            println!("{}", fmt_info(info));
        }
        println!("{:=^FULL_WIDTH$}\n", "".bold());
    }


    /// Run the given boosting algorithm with logging.
    /// Note that this method is almost the same as `Booster::run`.
    /// This method measures running time per iteration
    /// and writes one CSV line per iteration to `filename`.
    pub fn run<P: AsRef<Path>>(&mut self, filename: P) -> Result<O> {
        // Open file
        let mut file = File::create(filename)?;

        // Write header to the file
        file.write_all(HEADER.as_bytes())?;

        // ---------------------------------------------------------------------
        // Pre-processing
        self.booster.preprocess()?;
        let verbose = self.round != usize::MAX;
        if verbose {
            self.print_stats();
            self.print_log_header();
        }

        // Cumulative time
        let mut time_acc = 0;

        // ---------------------------------------------------------------------
        // Boosting step
        for iter in 1.. {
            // Start measuring time
            let now = Instant::now();

            let flow = self.booster.boost(&self.weak_learner, iter)?;

            // Stop measuring and convert `Duration` to Milliseconds.
            time_acc += now.elapsed().as_millis();

            let f = self.booster.current_hypothesis();
            let err = self.booster.last_error().unwrap_or(f64::NAN);
            let train = zero_one_loss(self.booster.training_sample(), &f)?;
            let test = self.test
                .map(|test| zero_one_loss(test, &f))
                .transpose()?;

            // Write the results to `file`.
            let test_col = test.map(|t| t.to_string()).unwrap_or_default();
            let line = format!("{iter},{err},{train},{test_col},{time_acc}\n");
            file.write_all(line.as_bytes())?;

            let test = test.unwrap_or(f64::NAN);
            if let ControlFlow::Break(_) = flow {
                if verbose {
                    println!(
                        "{} {}\t\t{}\t{}\t{}\t{}\n",
                        "[FIN]".bold().bright_green(),
                        format!("{:>WIDTH$}", iter).red(),
                        format!("{:>WIDTH$.PREC_WIDTH$}", err).bold().blue(),
                        format!("{:>WIDTH$.PREC_WIDTH$}", train).bold().green(),
                        format!("{:>WIDTH$.PREC_WIDTH$}", test).bold().yellow(),
                        time_format(time_acc).bold().cyan(),
                    );
                }
                break;
            }

            if verbose && iter % self.round == 0 {
                println!(
                    "{} {}\t\t{}\t{}\t{}\t{}",
                    "[LOG]".bold().magenta(),
                    format!("{:>WIDTH$}", iter).red(),
                    format!("{:>WIDTH$.PREC_WIDTH$}", err).blue(),
                    format!("{:>WIDTH$.PREC_WIDTH$}", train).green(),
                    format!("{:>WIDTH$.PREC_WIDTH$}", test).yellow(),
                    time_format(time_acc).bold().cyan(),
                );
            }
        }

        let f = self.booster.postprocess();
        Ok(f)
    }
}


fn fmt_info(info: Vec<(&str, String)>) -> String {
    info.into_iter()
        .map(|(key, val)| {
            format!(
                "    + {:<STAT_WIDTH$}\t{:>width$}",
                key,
                val.bold().yellow(),
                width = STAT_WIDTH - 8
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}


fn time_format(millisec: u128) -> String {
    if millisec < 1_000 {
        return format!("  0.{:0>3}s", millisec);
    }
    let sec = millisec / 1_000;
    let millisec = millisec % 1_000;
    if sec < 60 {
        return format!(" {:0>2}.{:0>3}s", sec, millisec);
    }
    let min = sec / 60;
    let sec = sec % 60;
    if min < 60 {
        return format!(" {:0>2}m {:0>2}s", min, sec);
    }
    let hours = min / 60;
    let min = min % 60;
    format!(" {:0>2}h {:0>2}m", hours, min)
}

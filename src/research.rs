//! This directory provides some features for research
//! Measure the followings of boosting algorithm per iteration
//! - Running time
//! - Weighted error of the new hypothesis
//! - Training loss
//! - Test loss

/// Defines a struct that runs a boosting algorithm with logging.
pub mod logger;

/// Defines loss functions (e.g., zero-one loss).
pub mod loss_functions;

pub use logger::{Logger, Research};

pub use loss_functions::zero_one_loss;

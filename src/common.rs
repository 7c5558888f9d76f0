//! Defines some common functions used in this library.

/// Constants shared by the learners.
pub mod constants;

/// Defines some useful functions such as weighted error calculation.
pub mod utils;

/// Defines some checker functions.
pub(crate) mod checker;

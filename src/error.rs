//! Defines the error type shared by every learner in this crate.
use crate::AttributeId;

use std::io;
use thiserror::Error;


/// Convenient alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;


/// Errors reported by the learners, the classifiers,
/// and the readers/writers around them.
#[derive(Debug, Error)]
pub enum Error {
    /// An example has no answer for an attribute under test.
    #[error("malformed example{}: no answer for attribute {attribute}", fmt_row(.row))]
    MalformedExample {
        /// Position of the example in its sample, if known.
        row: Option<usize>,
        /// The attribute whose answer is missing.
        attribute: AttributeId,
    },

    /// A training example carries no label.
    #[error("example at row {row} has no label")]
    MissingLabel {
        /// Position of the example in its sample.
        row: usize,
    },

    /// Induction was asked for a leaf of an empty example set
    /// whose parent is empty as well.
    #[error("the example set is empty")]
    EmptySample,

    /// Training requires at least one attribute.
    #[error("no attribute is given")]
    EmptyAttributes,

    /// The example weights cannot be normalized.
    #[error("cannot normalize weights with total mass {total}")]
    DegenerateWeights {
        /// The total mass found.
        total: f64,
    },

    /// A name or id does not refer to any attribute of the sample.
    #[error("unknown attribute `{0}`")]
    UnknownAttribute(String),

    /// An input file has an unexpected token.
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// 1-indexed line number.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// Reading or writing a file failed.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A model could not be (de)serialized.
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}


impl Error {
    /// Attach the row of the offending example
    /// to a `MalformedExample` error.
    /// Other variants are returned unchanged.
    pub(crate) fn at_row(self, row: usize) -> Self {
        match self {
            Self::MalformedExample { row: None, attribute } => {
                Self::MalformedExample { row: Some(row), attribute }
            },
            other => other,
        }
    }
}


fn fmt_row(row: &Option<usize>) -> String {
    match row {
        Some(row) => format!(" at row {row}"),
        None => String::new(),
    }
}

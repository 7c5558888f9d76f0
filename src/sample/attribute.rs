use serde::{Serialize, Deserialize};

use std::fmt;


/// Index of a boolean attribute in the fixed attribute list of a [`Sample`].
///
/// [`Sample`]: crate::Sample
#[repr(transparent)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
    Serialize, Deserialize,
)]
pub struct AttributeId(pub usize);


impl AttributeId {
    /// Returns the position of this attribute.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0
    }
}


impl From<usize> for AttributeId {
    #[inline(always)]
    fn from(index: usize) -> Self {
        Self(index)
    }
}


impl fmt::Display for AttributeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}


/// One of the two classes.
/// `Positive` wins every tie.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default,
    Serialize, Deserialize,
)]
pub enum Label {
    /// The designated default class.
    #[default]
    Positive,
    /// The other class.
    Negative,
}


impl Label {
    /// Returns `+1.0` for `Positive` and `-1.0` for `Negative`.
    #[inline(always)]
    pub fn sign(self) -> f64 {
        match self {
            Self::Positive =>  1.0,
            Self::Negative => -1.0,
        }
    }


    /// Returns the label of a confidence value.
    /// Zero is mapped to `Positive`.
    #[inline(always)]
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 0.0 { Self::Positive } else { Self::Negative }
    }


    /// Returns the index of this label (`0` for `Positive`).
    #[inline(always)]
    pub(crate) fn index(self) -> usize {
        match self {
            Self::Positive => 0,
            Self::Negative => 1,
        }
    }
}


impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Positive => "+1",
            Self::Negative => "-1",
        };
        write!(f, "{name}")
    }
}

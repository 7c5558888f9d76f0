//! Defines the decision tree classifier.
use crate::{
    AttributeId,
    Classifier,
    Example,
    Result,
    Sample,
};


use super::node::*;
use serde::{Serialize, Deserialize};

use std::path::Path;
use std::fs::File;
use std::io::prelude::*;


/// How a tree was grown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreeKind {
    /// A tree grown greedily by information gain.
    Full,
    /// A depth-1 tree on a forced attribute,
    /// used as a member of a boosted ensemble.
    Stump,
}


/// Decision tree classifier.
/// This struct is just a wrapper of `Node`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    root: Node,
    // `kind` is the tag of `Model`.
    #[serde(rename = "tree_kind")]
    kind: TreeKind,
}


impl From<Node> for DecisionTreeClassifier {
    #[inline]
    fn from(root: Node) -> Self {
        Self { root, kind: TreeKind::Full }
    }
}


impl Classifier for DecisionTreeClassifier {
    fn confidence(&self, example: &Example) -> Result<f64> {
        self.root.confidence(example)
    }
}


impl DecisionTreeClassifier {
    /// Wrap `root` as a boosting stump.
    #[inline]
    pub(crate) fn stump(root: Node) -> Self {
        Self { root, kind: TreeKind::Stump }
    }


    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Returns how this tree was grown.
    #[inline]
    pub fn kind(&self) -> TreeKind {
        self.kind
    }


    /// Returns the attribute asked at the root, if any.
    #[inline]
    pub fn root_attribute(&self) -> Option<AttributeId> {
        self.root.attribute()
    }


    /// Write the current decision tree to dot file.
    /// Attribute names are taken from `sample`.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P, sample: &Sample) -> Result<()>
        where P: AsRef<Path>
    {
        let name_of = |attribute: AttributeId| {
            sample.attribute_name(attribute)
                .map(str::to_string)
                .unwrap_or_else(|| attribute.to_string())
        };

        let mut f = File::create(path)?;
        f.write_all(b"graph DecisionTree {\n")?;

        let info = self.root.to_dot_info(0, &name_of).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;

        Ok(())
    }
}

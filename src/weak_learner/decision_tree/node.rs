//! A node struct used in the decision tree algorithm.
use serde::{Serialize, Deserialize};

use crate::{
    AttributeId,
    Classifier,
    Example,
    Label,
    Result,
};


/// A node of a decision tree.
/// A `Branch` always owns both of its children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A node that asks `attribute`
    /// and moves to the child matching the answer.
    Branch {
        /// The attribute asked at this node.
        attribute:    AttributeId,
        /// The child for the answer `true`.
        true_branch:  Box<Node>,
        /// The child for the answer `false`.
        false_branch: Box<Node>,
    },
    /// A node that predicts `label`.
    Leaf {
        /// The predicted class.
        label: Label,
    },
}


impl Node {
    pub(crate) fn branch(
        attribute:    AttributeId,
        true_branch:  Box<Node>,
        false_branch: Box<Node>,
    ) -> Self
    {
        Self::Branch { attribute, true_branch, false_branch, }
    }


    pub(crate) fn leaf(label: Label) -> Self {
        Self::Leaf { label, }
    }


    /// Returns `true` if this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }


    /// Returns the attribute asked at this node, if any.
    #[inline]
    pub fn attribute(&self) -> Option<AttributeId> {
        match self {
            Self::Branch { attribute, .. } => Some(*attribute),
            Self::Leaf { .. } => None,
        }
    }


    /// Returns the child reached by `answer`.
    /// Leaves have no child.
    #[inline]
    pub fn child(&self, answer: bool) -> Option<&Node> {
        match self {
            Self::Branch { true_branch, false_branch, .. } => {
                Some(if answer { &**true_branch } else { &**false_branch })
            },
            Self::Leaf { .. } => None,
        }
    }


    /// Returns the depth of the tree rooted at this node.
    /// A single leaf has depth `0`.
    pub fn depth(&self) -> usize {
        match self {
            Self::Branch { true_branch, false_branch, .. } => {
                1 + true_branch.depth().max(false_branch.depth())
            },
            Self::Leaf { .. } => 0,
        }
    }


    /// Returns the number of leaves under this node.
    pub fn n_leaves(&self) -> usize {
        match self {
            Self::Branch { true_branch, false_branch, .. } => {
                true_branch.n_leaves() + false_branch.n_leaves()
            },
            Self::Leaf { .. } => 1,
        }
    }


    /// Walks from this node to a leaf along the answers of `example`
    /// and returns the label of that leaf.
    pub fn traverse(&self, example: &Example) -> Result<Label> {
        let mut node = self;
        loop {
            match node {
                Self::Branch { attribute, true_branch, false_branch } => {
                    node = if example.answer(*attribute)? {
                        &**true_branch
                    } else {
                        &**false_branch
                    };
                },
                Self::Leaf { label } => { return Ok(*label); },
            }
        }
    }


    pub(crate) fn to_dot_info<F>(&self, id: usize, name_of: &F)
        -> (Vec<String>, usize)
        where F: Fn(AttributeId) -> String,
    {
        match self {
            Node::Branch { attribute, true_branch, false_branch } => {
                let question = format!(
                    "\tnode_{id} [ label = \"{name} ?\" ];\n",
                    name = name_of(*attribute),
                );

                let true_id = id + 1;
                let (yes, false_id) = true_branch.to_dot_info(true_id, name_of);
                let (mut no, return_id) = false_branch
                    .to_dot_info(false_id, name_of);

                let mut info = yes;
                info.push(question);
                info.append(&mut no);

                let true_edge = format!(
                    "\tnode_{id} -- node_{true_id} [ label = \"True\" ];\n",
                );
                info.push(true_edge);
                let false_edge = format!(
                    "\tnode_{id} -- node_{false_id} [ label = \"False\" ];\n",
                );
                info.push(false_edge);

                (info, return_id)
            },
            Node::Leaf { label } => {
                let info = format!(
                    "\tnode_{id} [ label = \"{label}\", shape = box ];\n",
                );

                (vec![info], id + 1)
            }
        }
    }
}


impl Classifier for Node {
    fn confidence(&self, example: &Example) -> Result<f64> {
        self.traverse(example).map(Label::sign)
    }
}

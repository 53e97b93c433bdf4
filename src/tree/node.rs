//! Defines the nodes of the decision tree.
use serde::{Serialize, Deserialize};

use crate::error::TreeError;
use super::export::TreeExport;


/// Enumeration of `BranchNode` and `LeafNode`.
///
/// A tree is built once, bottom-up, and never mutated afterwards.
/// Branch nodes exclusively own their children,
/// so dropping the root releases the whole structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TreeNode {
    /// A node that splits on a feature
    /// and owns one subtree per observed value.
    Branch(BranchNode),
    /// A node that predicts a single class value.
    Leaf(LeafNode),
}


/// Represents the branch nodes of a decision tree.
/// Children are `(feature value, subtree)` pairs kept in
/// insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchNode {
    pub(super) label:    String,
    pub(super) children: Vec<(String, TreeNode)>,
}


/// Represents the leaf nodes of a decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafNode {
    pub(super) value: String,
}


impl BranchNode {
    /// Construct a branch node that splits on the feature named
    /// `label`, with no children attached yet.
    #[inline]
    pub fn new<S: ToString>(label: S) -> Self {
        Self {
            label: label.to_string(),
            children: Vec::new(),
        }
    }


    /// The feature label this node splits on.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }


    /// The `(feature value, subtree)` pairs in insertion order.
    #[inline]
    pub fn children(&self) -> &[(String, TreeNode)] {
        &self.children[..]
    }


    /// Attach `child` under the feature value `value`.
    ///
    /// Overwriting is disallowed:
    /// the builder partitions records into disjoint groups,
    /// so a second child for the same value
    /// fails with [`TreeError::DuplicateChildKey`]
    /// and leaves the existing child untouched.
    pub fn add_child<S>(&mut self, value: S, child: TreeNode)
        -> Result<(), TreeError>
        where S: ToString,
    {
        let value = value.to_string();
        if self.children.iter().any(|(v, _)| *v == value) {
            return Err(TreeError::DuplicateChildKey { value });
        }
        self.children.push((value, child));
        Ok(())
    }


    /// The subtree attached under `value`, if any.
    pub fn child(&self, value: &str) -> Option<&TreeNode> {
        self.children.iter()
            .find(|(v, _)| v == value)
            .map(|(_, child)| child)
    }
}


impl LeafNode {
    /// Construct a leaf node that predicts `value`.
    #[inline]
    pub fn new<S: ToString>(value: S) -> Self {
        Self { value: value.to_string() }
    }


    /// The predicted class value.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }
}


impl TreeNode {
    /// Construct a leaf predicting the class `value`.
    #[inline]
    pub fn leaf<S: ToString>(value: S) -> Self {
        Self::Leaf(LeafNode::new(value))
    }


    /// Construct a childless branch splitting on the feature `label`.
    #[inline]
    pub fn branch<S: ToString>(label: S) -> Self {
        Self::Branch(BranchNode::new(label))
    }


    /// `true` for leaf nodes.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }


    /// The predicted class value, or `None` on branch nodes.
    pub fn predicted_class(&self) -> Option<&str> {
        match self {
            Self::Leaf(leaf) => Some(leaf.value()),
            Self::Branch(_) => None,
        }
    }


    /// The splitting feature label, or `None` on leaf nodes.
    pub fn feature_label(&self) -> Option<&str> {
        match self {
            Self::Branch(branch) => Some(branch.label()),
            Self::Leaf(_) => None,
        }
    }


    /// The `(feature value, subtree)` pairs of a branch node,
    /// or `None` on leaf nodes.
    pub fn children(&self) -> Option<&[(String, TreeNode)]> {
        match self {
            Self::Branch(branch) => Some(branch.children()),
            Self::Leaf(_) => None,
        }
    }


    /// Attach `child` under the feature value `value`.
    ///
    /// Fails with [`TreeError::DuplicateChildKey`]
    /// when `value` already has a subtree.
    /// Calling this on a leaf node is a logic error and panics.
    pub fn add_child<S>(&mut self, value: S, child: TreeNode)
        -> Result<(), TreeError>
        where S: ToString,
    {
        match self {
            Self::Branch(branch) => branch.add_child(value, child),
            Self::Leaf(_) => panic!("Tried to attach a child to a leaf node"),
        }
    }


    /// Returns the number of leaves of this sub-tree.
    pub fn leaves(&self) -> usize {
        match self {
            Self::Branch(branch) => {
                branch.children.iter()
                    .map(|(_, child)| child.leaves())
                    .sum()
            },
            Self::Leaf(_) => 1,
        }
    }


    /// Returns the depth of this sub-tree.
    /// A single leaf has depth `0`.
    pub fn depth(&self) -> usize {
        match self {
            Self::Branch(branch) => {
                let below = branch.children.iter()
                    .map(|(_, child)| child.depth())
                    .max()
                    .unwrap_or(0);
                1 + below
            },
            Self::Leaf(_) => 0,
        }
    }


    /// Shape this sub-tree into the canonical export structure:
    /// `{ "value": class }` for a leaf and
    /// `{ "label": feature, "children": [(value, subtree), ...] }`
    /// for a branch, children in insertion order.
    pub fn export(&self) -> TreeExport {
        match self {
            Self::Leaf(leaf) => {
                TreeExport::Leaf { value: leaf.value.clone() }
            },
            Self::Branch(branch) => {
                let children = branch.children.iter()
                    .map(|(value, child)| (value.clone(), child.export()))
                    .collect();
                TreeExport::Branch {
                    label: branch.label.clone(),
                    children,
                }
            },
        }
    }


    /// Returns the `dot` file content of this sub-tree
    /// and the next unused node id.
    pub(super) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Self::Branch(branch) => {
                let mut info = vec![format!(
                    "\tnode_{id} [ label = \"{label}?\" ];\n",
                    label = branch.label,
                )];
                let mut next_id = id + 1;
                for (value, child) in branch.children.iter() {
                    let child_id = next_id;
                    let (mut child_info, ret_id) = child.to_dot_info(child_id);
                    info.append(&mut child_info);
                    info.push(format!(
                        "\tnode_{id} -- node_{child_id} [ label = \"{value}\" ];\n",
                    ));
                    next_id = ret_id;
                }
                (info, next_id)
            },
            Self::Leaf(leaf) => {
                let info = format!(
                    "\tnode_{id} [ label = \"{value}\", shape = box ];\n",
                    value = leaf.value,
                );
                (vec![info], id + 1)
            },
        }
    }
}

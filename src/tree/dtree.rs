//! Defines the decision tree produced by the builder.
use serde::{Serialize, Deserialize};

use std::fmt;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use super::export::TreeExport;
use super::node::TreeNode;


/// A classification decision tree over categorical records.
///
/// This struct pairs the root [`TreeNode`]
/// with the feature labels the tree was built from.
/// The labels locate each branch's feature
/// inside a full-width record at prediction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    root:   TreeNode,
    labels: Vec<String>,
}


impl DecisionTree {
    /// Assemble a tree from a root node
    /// and the feature labels of the records it classifies.
    /// Branch labels resolve to their first position in `labels`
    /// at prediction time, so the labels should be distinct.
    #[inline]
    pub fn from_parts(root: TreeNode, labels: Vec<String>) -> Self {
        Self { root, labels, }
    }


    /// The root node.
    /// This handle stays valid for the lifetime of the tree.
    #[inline]
    pub fn root(&self) -> &TreeNode {
        &self.root
    }


    /// The feature labels the tree was built from.
    #[inline]
    pub fn labels(&self) -> &[String] {
        &self.labels[..]
    }


    /// Predict the class of a record
    /// given as its feature tokens in label order,
    /// without the class column.
    ///
    /// Returns `None` when `features` does not match the label list
    /// in width, or when the walk reaches a feature value
    /// the training records never showed under that branch.
    pub fn predict<S: AsRef<str>>(&self, features: &[S]) -> Option<&str> {
        if features.len() != self.labels.len() {
            return None;
        }

        let mut node = &self.root;
        loop {
            match node {
                TreeNode::Leaf(leaf) => {
                    return Some(leaf.value());
                },
                TreeNode::Branch(branch) => {
                    let position = self.labels.iter()
                        .position(|label| label == branch.label())?;
                    node = branch.child(features[position].as_ref())?;
                },
            }
        }
    }


    /// Shape the whole tree into its canonical export structure.
    #[inline]
    pub fn export(&self) -> TreeExport {
        self.root.export()
    }


    /// Render the tree as a Graphviz document.
    /// Branch nodes are ellipses labeled `feature?`,
    /// leaves are boxes, and edges carry the feature value.
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("graph DecisionTree {\n");
        let (info, _) = self.root.to_dot_info(0);
        for row in info {
            dot.push_str(&row);
        }
        dot.push('}');
        dot
    }


    /// Write the current decision tree to a dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> std::io::Result<()>
        where P: AsRef<Path>,
    {
        let mut f = File::create(path)?;
        f.write_all(self.to_dot().as_bytes())?;
        Ok(())
    }
}


impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DecisionTree [{} leaves, depth {}]",
            self.root.leaves(),
            self.root.depth(),
        )
    }
}

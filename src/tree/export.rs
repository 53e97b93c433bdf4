//! Defines the canonical export structure of a decision tree.
use serde::{Serialize, Deserialize};

use crate::error::TreeError;
use super::node::{BranchNode, TreeNode};


/// The nested structure produced by [`TreeNode::export`].
///
/// Under `serde_json`, a leaf serializes to `{"value": c}`
/// and a branch to `{"label": l, "children": [[v, subtree], ...]}`.
/// The children keep their insertion order,
/// so equal trees always serialize to equal documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeExport {
    /// Export of a leaf node.
    Leaf {
        /// The predicted class value.
        value: String,
    },
    /// Export of a branch node.
    Branch {
        /// The splitting feature label.
        label: String,
        /// The `(feature value, subtree)` pairs in insertion order.
        children: Vec<(String, TreeExport)>,
    },
}


impl TryFrom<TreeExport> for TreeNode {
    type Error = TreeError;


    /// Rebuild a tree from its export.
    /// The only failure is a duplicate feature value
    /// among one branch's children,
    /// which a well-formed export never contains.
    fn try_from(export: TreeExport) -> Result<Self, Self::Error> {
        match export {
            TreeExport::Leaf { value } => Ok(TreeNode::leaf(value)),
            TreeExport::Branch { label, children } => {
                let mut branch = BranchNode::new(label);
                for (value, child) in children {
                    branch.add_child(value, TreeNode::try_from(child)?)?;
                }
                Ok(TreeNode::Branch(branch))
            },
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_json_01() {
        let export = TreeExport::Leaf { value: "hard".to_string() };
        let json = serde_json::to_string(&export).unwrap();
        assert_eq!(json, r#"{"value":"hard"}"#);
    }


    #[test]
    fn test_export_json_02() {
        let export = TreeExport::Branch {
            label: "f1".to_string(),
            children: vec![
                ("a".to_string(), TreeExport::Leaf { value: "x".to_string() }),
                ("b".to_string(), TreeExport::Leaf { value: "y".to_string() }),
            ],
        };
        let json = serde_json::to_string(&export).unwrap();
        assert_eq!(
            json,
            r#"{"label":"f1","children":[["a",{"value":"x"}],["b",{"value":"y"}]]}"#
        );
    }


    #[test]
    fn test_export_json_03() {
        let json = r#"{"label":"f1","children":[["a",{"value":"x"}]]}"#;
        let export = serde_json::from_str::<TreeExport>(json).unwrap();
        assert!(matches!(export, TreeExport::Branch { .. }));
    }


    #[test]
    fn test_reconstruction_01() {
        let mut node = TreeNode::branch("f1");
        node.add_child("a", TreeNode::leaf("x")).unwrap();
        node.add_child("b", TreeNode::leaf("y")).unwrap();

        let export = node.export();
        let rebuilt = TreeNode::try_from(export.clone()).unwrap();
        assert_eq!(rebuilt, node);
        assert_eq!(rebuilt.export(), export);
    }


    #[test]
    fn test_reconstruction_02() {
        let export = TreeExport::Branch {
            label: "f1".to_string(),
            children: vec![
                ("a".to_string(), TreeExport::Leaf { value: "x".to_string() }),
                ("a".to_string(), TreeExport::Leaf { value: "y".to_string() }),
            ],
        };
        assert!(matches!(
            TreeNode::try_from(export),
            Err(TreeError::DuplicateChildKey { .. })
        ));
    }
}

//! The decision tree data structure and the builder that grows it.

/// Defines the builder that grows a tree from a sample.
pub mod builder;
/// Defines the splitting criteria and the impurity measures.
pub mod criterion;
/// Defines the decision tree produced by the builder.
pub mod dtree;
/// Defines the canonical export structure.
pub mod export;
/// Defines the nodes of the tree.
pub mod node;


pub use builder::DecisionTreeBuilder;
pub use criterion::SplitCriterion;
pub use dtree::DecisionTree;
pub use export::TreeExport;
pub use node::{BranchNode, LeafNode, TreeNode};

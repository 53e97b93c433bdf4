//! Exports the decision tree types and the sample utilities.
//!
pub use crate::tree::{
    // The tree and its builder -----------------
    DecisionTree,
    DecisionTreeBuilder,
    SplitCriterion,


    // The tree structure -----------------------
    TreeNode,
    BranchNode,
    LeafNode,
    TreeExport,
};


pub use crate::sample::{
    Record,
    Sample,
    SampleReader,
};


pub use crate::error::TreeError;

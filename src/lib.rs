#![warn(missing_docs)]

//!
//! A crate that builds classification decision trees
//! over categorical records.
//!
//! The tree grows ID3-style:
//! at every node the builder scores the remaining feature columns
//! by information gain,
//! splits the records on the best column's values,
//! and recurses until a node is pure or no feature columns remain.
//! The same sample always grows the same tree,
//! so exports and renderings are reproducible byte for byte.
//!
//! ```
//! use minitree::prelude::*;
//!
//! let sample = Sample::from_records(
//!     [
//!         ["sunny",    "hot",  "no" ],
//!         ["sunny",    "mild", "no" ],
//!         ["overcast", "hot",  "yes"],
//!         ["rainy",    "mild", "yes"],
//!     ],
//!     ["outlook", "temperature"],
//! );
//!
//! let tree = DecisionTreeBuilder::new(&sample)
//!     .criterion(SplitCriterion::InformationGain)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(tree.predict(&["sunny", "hot"]), Some("no"));
//! ```

pub mod error;
pub mod prelude;
pub mod sample;
pub mod tree;


pub use error::TreeError;

pub use sample::{Record, Sample, SampleReader};

pub use tree::{
    BranchNode,
    DecisionTree,
    DecisionTreeBuilder,
    LeafNode,
    SplitCriterion,
    TreeExport,
    TreeNode,
};

//! Defines the error type for sample validation and tree construction.

use std::io;

/// Errors raised while reading a sample or building a decision tree.
///
/// Every variant is fatal for the current call:
/// the caller either supplies well-formed input
/// or gets an error back before any tree is returned.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// An I/O failure while reading a sample file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The sample cannot be grown into a tree.
    /// Raised for an empty record set, ragged records,
    /// and a label list whose length does not match the feature columns.
    #[error("invalid dataset: {0}")]
    InvalidDataset(String),

    /// A branch node already has a child for this feature value.
    /// The partitioning step never produces duplicates,
    /// so this only fires for hand-assembled trees or corrupted exports.
    #[error("duplicate child key `{value}`")]
    DuplicateChildKey {
        /// The feature value that already has a subtree attached.
        value: String,
    },
}

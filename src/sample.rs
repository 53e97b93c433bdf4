//! Struct `Sample` represents a batch of categorical records.

// Provides the sample struct.
pub(crate) mod sample_struct;

// Provides a struct that reads a file.
pub(crate) mod reader;


pub use reader::SampleReader;
pub use sample_struct::{Record, Sample};

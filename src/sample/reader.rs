//! Defines `SampleReader`, a struct that reads a delimited text file.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::TreeError;
use super::sample_struct::Sample;


/// A struct that reads a delimited text file into [`Sample`].
///
/// Every non-blank line of the file is one record.
/// A line containing a tab is split on tabs,
/// so class values with inner spaces such as `no lenses` survive;
/// any other line is split on whitespace.
/// The last token of every record is the class.
///
/// # Example
/// The following code reads a local file `lenses.txt`
/// and names its four feature columns.
///
/// ```no_run
/// use minitree::SampleReader;
///
/// let sample = SampleReader::default()
///     .file("lenses.txt")
///     .labels(["age", "prescript", "astigmatic", "tearRate"])
///     .read()
///     .unwrap();
/// ```
#[derive(Default)]
pub struct SampleReader<P> {
    file: Option<P>,
    has_header: bool,
    labels: Option<Vec<String>>,
}


impl<P> SampleReader<P> {
    /// Set the flag whether the file has a header row or not.
    /// Default is `false`.
    /// The header names the feature columns;
    /// its last token names the class column.
    #[inline]
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }


    /// Set the feature (column) names, overriding any header row.
    #[inline]
    pub fn labels<I>(mut self, labels: I) -> Self
        where I: IntoIterator,
              I::Item: ToString,
    {
        let labels = labels.into_iter()
            .map(|label| label.to_string())
            .collect();
        self.labels = Some(labels);
        self
    }
}


impl<P: AsRef<Path>> SampleReader<P> {
    /// Set the file name.
    #[inline]
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }


    /// Reads the file based on the arguments and returns a [`Sample`].
    /// This method consumes `self`.
    pub fn read(self) -> Result<Sample, TreeError> {
        if self.file.is_none() {
            panic!("The file name for the sample is not set");
        }
        let file = File::open(self.file.unwrap())?;
        let mut lines = BufReader::new(file).lines();

        let mut labels = self.labels;
        let mut target_name = None;

        if self.has_header {
            if let Some(line) = lines.next() {
                let mut header = split_tokens(&line?);
                target_name = header.pop();
                if labels.is_none() {
                    labels = Some(header);
                }
            }
        }

        let mut records = Vec::new();
        for line in lines {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            records.push(split_tokens(&line));
        }

        // One dummy name per feature column when neither a header row
        // nor explicit labels name them.
        let labels = labels.unwrap_or_else(|| {
            let width = records.first().map_or(0, |record| record.len());
            (1..width).map(|k| format!("Feat. [{k}]")).collect()
        });

        let mut sample = Sample::from_records(records, labels);
        sample.target_name = target_name;
        Ok(sample)
    }
}


/// Split a line into tokens.
/// Tab-separated when a tab is present, whitespace-separated otherwise.
fn split_tokens(line: &str) -> Vec<String> {
    if line.contains('\t') {
        line.trim()
            .split('\t')
            .map(|token| token.trim().to_string())
            .collect()
    } else {
        line.split_whitespace()
            .map(String::from)
            .collect()
    }
}

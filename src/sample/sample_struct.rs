//! Defines a batch sample of categorical records.

/// A single record.
/// Feature tokens in label order, then the class token last.
pub type Record = Vec<String>;


/// Struct `Sample` holds a batch of categorical records
/// together with the feature (column) names.
///
/// `Sample` itself is a permissive container:
/// shape checks happen once when a tree build starts,
/// so partially assembled samples are representable.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub(super) records: Vec<Record>,
    pub(super) labels: Vec<String>,
    pub(super) target_name: Option<String>,
}


impl Sample {
    /// Construct a `Sample` from in-memory rows and feature labels.
    /// Each row lists its feature tokens followed by the class token,
    /// so rows are one longer than `labels`.
    pub fn from_records<R, L>(records: R, labels: L) -> Self
        where R: IntoIterator,
              R::Item: IntoIterator,
              <R::Item as IntoIterator>::Item: ToString,
              L: IntoIterator,
              L::Item: ToString,
    {
        let records = records.into_iter()
            .map(|record| {
                record.into_iter()
                    .map(|token| token.to_string())
                    .collect()
            })
            .collect();
        let labels = labels.into_iter()
            .map(|label| label.to_string())
            .collect();

        Self { records, labels, target_name: None, }
    }


    /// Returns a slice of the records.
    #[inline]
    pub fn records(&self) -> &[Record] {
        &self.records[..]
    }


    /// Returns a slice of the feature labels.
    #[inline]
    pub fn labels(&self) -> &[String] {
        &self.labels[..]
    }


    /// The class-column name taken from a header row, if one was read.
    #[inline]
    pub fn target_name(&self) -> Option<&str> {
        self.target_name.as_deref()
    }


    /// Returns the pair of the number of records
    /// and the number of feature labels.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.records.len(), self.labels.len())
    }
}

//! Defines the splitting criteria
//! and the impurity measures behind them.
use rayon::prelude::*;

use std::fmt;

use crate::sample::Record;


/// Splitting criteria for growing a decision tree.
/// Each criterion scores a candidate feature column;
/// higher scores mean a more informative split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitCriterion {
    /// Plain information gain:
    /// the class entropy of the parent
    /// minus the size-weighted class entropy of the partition.
    /// This is the default criterion.
    InformationGain,
    /// C4.5-style gain ratio:
    /// the information gain divided by the split information
    /// of the feature's own value distribution.
    GainRatio,
}


impl Default for SplitCriterion {
    fn default() -> Self {
        Self::InformationGain
    }
}


impl fmt::Display for SplitCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InformationGain => "Information gain",
            Self::GainRatio => "Gain ratio",
        };
        write!(f, "{name}")
    }
}


impl SplitCriterion {
    /// Score of splitting `records` on the feature column `index`.
    /// `index` must point at a feature column,
    /// not the trailing class column.
    pub fn score(&self, records: &[Record], index: usize) -> f64 {
        match self {
            Self::InformationGain => information_gain(records, index),
            Self::GainRatio => {
                let iv = split_info(records, index);
                if iv > 0.0 {
                    information_gain(records, index) / iv
                } else {
                    0.0
                }
            },
        }
    }


    /// Returns the index of the best feature column of `records`.
    ///
    /// The columns score in parallel;
    /// the selection scan runs sequentially over the score vector.
    /// A negative score disqualifies its column,
    /// and a later column must score strictly greater
    /// than the current candidate,
    /// so score ties resolve to the lowest column index.
    /// When no column qualifies, the split falls back to column `0`.
    pub(super) fn best_feature(&self, records: &[Record]) -> usize {
        let n_feature = records[0].len() - 1;
        let scores = (0..n_feature).into_par_iter()
            .map(|index| self.score(records, index))
            .collect::<Vec<_>>();

        let mut best_index = 0;
        let mut best_score = None;
        for (index, &score) in scores.iter().enumerate() {
            if score < 0.0 {
                continue;
            }
            match best_score {
                Some(best) if score <= best => {},
                _ => {
                    best_index = index;
                    best_score = Some(score);
                },
            }
        }
        best_index
    }
}


/// Class entropy of `records` in bits:
/// `H = - Σ p_c log2( p_c )` over the class values present.
pub fn entropy(records: &[Record]) -> f64 {
    let counts = value_counts(records.iter().map(|record| class_of(record)));
    entropy_of_counts(&counts, records.len())
}


/// Information gain of splitting `records` on feature column `index`:
/// the class entropy minus the size-weighted class entropy
/// of each value group.
/// A feature that tells nothing about the class scores `0.0`.
pub fn information_gain(records: &[Record], index: usize) -> f64 {
    let total = records.len() as f64;
    let values = value_counts(
        records.iter().map(|record| record[index].as_str())
    );

    let conditional = values.iter()
        .map(|&(value, count)| {
            let classes = value_counts(
                records.iter()
                    .filter(|record| record[index] == value)
                    .map(|record| class_of(record))
            );
            (count as f64 / total) * entropy_of_counts(&classes, count)
        })
        .sum::<f64>();

    entropy(records) - conditional
}


/// Split information (intrinsic value) of feature column `index`:
/// the entropy in bits of the feature's own value distribution.
/// A single-valued column scores `0.0`.
pub fn split_info(records: &[Record], index: usize) -> f64 {
    let values = value_counts(
        records.iter().map(|record| record[index].as_str())
    );
    entropy_of_counts(&values, records.len())
}


/// Entropy in bits of a count distribution.
/// `counts` never holds a zero count,
/// so no term takes the logarithm of zero.
fn entropy_of_counts(counts: &[(&str, usize)], total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    counts.iter()
        .map(|&(_, count)| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum::<f64>()
}


/// Frequencies of `values` in first-encounter order.
/// The fixed order pins down majority-vote tie-breaking
/// and the float summation order of the measures above.
pub(crate) fn value_counts<'a, I>(values: I) -> Vec<(&'a str, usize)>
    where I: Iterator<Item = &'a str>,
{
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for value in values {
        match counts.iter_mut().find(|(seen, _)| *seen == value) {
            Some((_, count)) => { *count += 1; },
            None => { counts.push((value, 1)); },
        }
    }
    counts
}


/// The class token of `record`.
pub(crate) fn class_of(record: &Record) -> &str {
    record.last()
        .expect("every record keeps its class column")
        .as_str()
}

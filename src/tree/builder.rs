//! Defines the builder that grows a decision tree from a sample.
use crate::error::TreeError;
use crate::sample::{Record, Sample};
use super::criterion::{class_of, value_counts, SplitCriterion};
use super::dtree::DecisionTree;
use super::node::{BranchNode, TreeNode};


/// A struct that builds [`DecisionTree`] from [`Sample`].
///
/// The tree grows recursively.
/// A pure record set becomes a leaf;
/// a record set with no feature columns left
/// becomes a leaf predicting the majority class;
/// everything else splits on the best-scoring feature column
/// with one subtree per observed value.
///
/// # Example
/// ```
/// use minitree::{DecisionTreeBuilder, Sample, SplitCriterion};
///
/// let sample = Sample::from_records(
///     [["a", "x"], ["a", "y"], ["b", "y"], ["b", "y"]],
///     ["f1"],
/// );
///
/// let tree = DecisionTreeBuilder::new(&sample)
///     .criterion(SplitCriterion::InformationGain)
///     .build()
///     .unwrap();
///
/// assert_eq!(tree.root().feature_label(), Some("f1"));
/// ```
#[derive(Clone)]
pub struct DecisionTreeBuilder<'a> {
    sample:    &'a Sample,
    criterion: SplitCriterion,
}


impl<'a> DecisionTreeBuilder<'a> {
    /// Construct a new instance of `DecisionTreeBuilder`.
    #[inline]
    pub fn new(sample: &'a Sample) -> Self {
        Self {
            sample,
            criterion: SplitCriterion::default(),
        }
    }


    /// Set the splitting criterion.
    /// Default is [`SplitCriterion::InformationGain`].
    #[inline]
    pub fn criterion(mut self, criterion: SplitCriterion) -> Self {
        self.criterion = criterion;
        self
    }


    /// Build a [`DecisionTree`].
    /// This method consumes `self`.
    ///
    /// The sample shape is checked once here;
    /// the recursion below keeps the record/label invariant
    /// by construction.
    pub fn build(self) -> Result<DecisionTree, TreeError> {
        check_sample(self.sample)?;

        let records = self.sample.records().to_vec();
        let labels  = self.sample.labels().to_vec();
        let root = grow(records, labels.clone(), self.criterion)?;

        Ok(DecisionTree::from_parts(root, labels))
    }
}


/// Check whether `sample` can be grown into a tree:
/// at least one record, all records of one width of at least two,
/// and one unique label per feature column.
fn check_sample(sample: &Sample) -> Result<(), TreeError> {
    let records = sample.records();
    if records.is_empty() {
        return Err(TreeError::InvalidDataset(
            "the sample has no records".into()
        ));
    }

    let width = records[0].len();
    if width < 2 {
        return Err(TreeError::InvalidDataset(
            "records need at least one feature column \
             and the class column".into()
        ));
    }

    if let Some(pos) = records.iter().position(|record| record.len() != width) {
        return Err(TreeError::InvalidDataset(format!(
            "record {pos} has {} columns, expected {width}",
            records[pos].len(),
        )));
    }

    let labels = sample.labels();
    let n_label = labels.len();
    if n_label != width - 1 {
        return Err(TreeError::InvalidDataset(format!(
            "{n_label} labels for {} feature columns",
            width - 1,
        )));
    }

    // Prediction resolves features by name; names must be unique.
    for (k, label) in labels.iter().enumerate() {
        if labels[..k].contains(label) {
            return Err(TreeError::InvalidDataset(format!(
                "duplicate feature label `{label}`"
            )));
        }
    }
    Ok(())
}


/// Grow the sub-tree classifying `records`.
/// `records` always holds at least one row
/// of exactly `labels.len() + 1` columns, the class column last.
fn grow(
    records: Vec<Record>,
    mut labels: Vec<String>,
    criterion: SplitCriterion,
) -> Result<TreeNode, TreeError>
{
    let classes = value_counts(records.iter().map(|record| class_of(record)));

    // A pure record set needs no further splitting.
    if classes.len() == 1 {
        return Ok(TreeNode::leaf(classes[0].0));
    }

    // Out of feature columns: predict the majority class.
    // Ties resolve to the class encountered first in record order.
    if labels.is_empty() {
        return Ok(TreeNode::leaf(majority_class(&classes)));
    }

    let index = criterion.best_feature(&records);
    let label = labels.remove(index);

    let mut branch = BranchNode::new(label);
    for (value, group) in partition(records, index) {
        let child = grow(group, labels.clone(), criterion)?;
        branch.add_child(value, child)?;
    }

    Ok(TreeNode::Branch(branch))
}


/// The most frequent class of `counts`.
/// The first-encountered class wins ties.
fn majority_class<'a>(counts: &[(&'a str, usize)]) -> &'a str {
    let mut best = counts[0];
    for &(class, count) in &counts[1..] {
        if count > best.1 {
            best = (class, count);
        }
    }
    best.0
}


/// Group `records` by the value in column `index`,
/// in first-encounter order,
/// removing that column from every record.
fn partition(records: Vec<Record>, index: usize)
    -> Vec<(String, Vec<Record>)>
{
    let mut groups: Vec<(String, Vec<Record>)> = Vec::new();
    for mut record in records {
        let value = record.remove(index);
        match groups.iter_mut().find(|(v, _)| *v == value) {
            Some((_, group)) => { group.push(record); },
            None => { groups.push((value, vec![record])); },
        }
    }
    groups
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_sample_01() {
        let sample = Sample::from_records(
            [["a", "x"], ["b", "y"]],
            ["f1"],
        );
        assert!(check_sample(&sample).is_ok());
    }


    #[test]
    fn test_check_sample_02() {
        let sample = Sample::from_records(Vec::<Vec<String>>::new(), ["f1"]);
        assert!(matches!(
            check_sample(&sample),
            Err(TreeError::InvalidDataset(_))
        ));
    }


    #[test]
    fn test_check_sample_03() {
        // A ragged record set is rejected.
        let sample = Sample::from_records(
            vec![vec!["a", "x"], vec!["a"]],
            ["f1"],
        );
        assert!(matches!(
            check_sample(&sample),
            Err(TreeError::InvalidDataset(_))
        ));
    }


    #[test]
    fn test_check_sample_04() {
        // The label count must match the feature columns.
        let sample = Sample::from_records(
            [["a", "x"]],
            ["f1", "f2"],
        );
        assert!(matches!(
            check_sample(&sample),
            Err(TreeError::InvalidDataset(_))
        ));
    }


    #[test]
    fn test_check_sample_05() {
        // A lone class column has nothing to split on.
        let sample = Sample::from_records(
            [["x"], ["y"]],
            Vec::<String>::new(),
        );
        assert!(matches!(
            check_sample(&sample),
            Err(TreeError::InvalidDataset(_))
        ));
    }


    #[test]
    fn test_check_sample_06() {
        // Feature labels must be pairwise distinct.
        let sample = Sample::from_records(
            [["a", "b", "1"], ["a", "d", "0"]],
            ["f", "f"],
        );
        assert!(matches!(
            check_sample(&sample),
            Err(TreeError::InvalidDataset(_))
        ));
    }


    #[test]
    fn test_partition_01() {
        let records = vec![
            vec!["a".to_string(), "x".to_string()],
            vec!["b".to_string(), "y".to_string()],
            vec!["a".to_string(), "z".to_string()],
        ];
        let groups = partition(records, 0);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "a");
        assert_eq!(
            groups[0].1,
            vec![vec!["x".to_string()], vec!["z".to_string()]]
        );
        assert_eq!(groups[1].0, "b");
        assert_eq!(groups[1].1, vec![vec!["y".to_string()]]);
    }


    #[test]
    fn test_majority_class_01() {
        assert_eq!(majority_class(&[("x", 1), ("y", 3)]), "y");
    }


    #[test]
    fn test_majority_class_02() {
        // Ties keep the first-encountered class.
        assert_eq!(majority_class(&[("x", 2), ("y", 2)]), "x");
    }
}

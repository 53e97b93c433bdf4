//! Builds a decision tree over the classic lenses table
//! and prints its JSON export.
use colored::Colorize;
use minitree::prelude::*;


fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tests/dataset/lenses.txt".to_string());

    let sample = SampleReader::default()
        .file(path)
        .labels(["age", "prescript", "astigmatic", "tearRate"])
        .read()
        .expect("Failed to read the lenses table");

    let tree = DecisionTreeBuilder::new(&sample)
        .build()
        .expect("Failed to build the decision tree");

    let (n_record, n_feature) = sample.shape();
    println!(
        "{header} {n_record} records, {n_feature} features, {tree}",
        header = "[lenses]".bold().green(),
    );

    let json = serde_json::to_string(&tree.export())
        .expect("The export is serializable");
    println!("{json}");
}

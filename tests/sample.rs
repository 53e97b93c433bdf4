use minitree::prelude::*;

use std::io::Write;


#[test]
fn read_the_lenses_table() {
    let mut path = std::env::current_dir().unwrap();
    path.push("tests/dataset/lenses.txt");

    let sample = SampleReader::default()
        .file(path)
        .labels(["age", "prescript", "astigmatic", "tearRate"])
        .read()
        .unwrap();

    assert_eq!(sample.shape(), (24, 4));
    assert_eq!(sample.labels()[3], "tearRate");
    // Tab-separated class values keep their inner spaces.
    assert_eq!(
        sample.records()[0].last().map(String::as_str),
        Some("no lenses"),
    );
}


#[test]
fn read_whitespace_records_with_a_header() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "outlook temperature play").unwrap();
    writeln!(file, "sunny hot no").unwrap();
    writeln!(file, "rainy mild yes").unwrap();

    let sample = SampleReader::default()
        .file(file.path().to_path_buf())
        .has_header(true)
        .read()
        .unwrap();

    assert_eq!(sample.shape(), (2, 2));
    assert_eq!(sample.labels(), ["outlook", "temperature"]);
    assert_eq!(sample.target_name(), Some("play"));
    assert_eq!(sample.records()[1], vec!["rainy", "mild", "yes"]);
}


#[test]
fn synthesize_labels_without_a_header() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "a b c").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "d e f").unwrap();

    let sample = SampleReader::default()
        .file(file.path().to_path_buf())
        .read()
        .unwrap();

    // Blank lines vanish; the feature columns get dummy names.
    assert_eq!(sample.shape(), (2, 2));
    assert_eq!(sample.labels(), ["Feat. [1]", "Feat. [2]"]);
    assert_eq!(sample.target_name(), None);
}


#[test]
fn explicit_labels_override_the_header() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "h1 h2 class").unwrap();
    writeln!(file, "a b yes").unwrap();

    let sample = SampleReader::default()
        .file(file.path().to_path_buf())
        .has_header(true)
        .labels(["f1", "f2"])
        .read()
        .unwrap();

    assert_eq!(sample.labels(), ["f1", "f2"]);
    assert_eq!(sample.target_name(), Some("class"));
    assert_eq!(sample.shape(), (1, 2));
}


#[test]
fn missing_files_report_io_errors() {
    let ret = SampleReader::default()
        .file("tests/dataset/no_such_file.txt")
        .read();
    assert!(matches!(ret, Err(TreeError::Io(_))));
}


#[test]
fn building_rejects_bad_shapes() {
    // Ragged records.
    let sample = Sample::from_records(
        vec![vec!["a", "x"], vec!["a"]],
        ["f1"],
    );
    assert!(matches!(
        DecisionTreeBuilder::new(&sample).build(),
        Err(TreeError::InvalidDataset(_))
    ));

    // No records at all.
    let sample = Sample::from_records(Vec::<Vec<String>>::new(), ["f1"]);
    assert!(matches!(
        DecisionTreeBuilder::new(&sample).build(),
        Err(TreeError::InvalidDataset(_))
    ));

    // A label count that does not match the feature columns.
    let sample = Sample::from_records([["a", "x"]], ["f1", "f2"]);
    assert!(matches!(
        DecisionTreeBuilder::new(&sample).build(),
        Err(TreeError::InvalidDataset(_))
    ));

    // Two columns sharing a name cannot be resolved at prediction time.
    let sample = Sample::from_records(
        [["a", "b", "1"], ["a", "d", "0"]],
        ["f", "f"],
    );
    assert!(matches!(
        DecisionTreeBuilder::new(&sample).build(),
        Err(TreeError::InvalidDataset(_))
    ));
}

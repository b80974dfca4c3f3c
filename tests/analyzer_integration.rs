//! Integration tests for the full analysis pipeline.
//!
//! These tests run the analyzer against the testdata fixtures and check
//! that each fixture produces exactly the findings it was written for.

use std::path::PathBuf;

use bloatcheck::{build_tree, parser, AnalysisResult, CodeAnalyzer};

fn testdata_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

fn analyze_fixture(name: &str) -> AnalysisResult {
    let path = testdata_path().join(name);
    let raw = parser::parse_file(&path).expect("fixture should parse");
    let tree = build_tree(raw.root_node());
    let mut analyzer = CodeAnalyzer::new(&tree, name);
    analyzer.analyze();
    analyzer.into_results()
}

#[test]
fn test_clean_fixture_has_no_findings() {
    let results = analyze_fixture("clean.py");
    assert!(
        results.is_empty(),
        "expected no findings, got: {}",
        results
    );
}

#[test]
fn test_bloated_fixture_trips_function_count_error() {
    let results = analyze_fixture("bloated.py");
    assert_eq!(results.errors().len(), 1);
    assert!(results.warnings().is_empty(), "error supersedes warning");
    assert!(results.errors()[0].message.contains("8 functions"));
    assert_eq!(results.errors()[0].file, "bloated.py");
}

#[test]
fn test_undocumented_fixture_trips_docstring_error() {
    let results = analyze_fixture("undocumented.py");
    assert_eq!(results.errors().len(), 1);
    assert!(results.warnings().is_empty());
    assert!(results.errors()[0]
        .message
        .contains("5 undocumented definitions"));
}

#[test]
fn test_complex_fixture_trips_complexity_warning() {
    let results = analyze_fixture("complex.py");
    assert_eq!(results.warnings().len(), 1);
    assert!(results.errors().is_empty());
    assert!(results.warnings()[0].message.contains("complexity 10"));
}

#[test]
fn test_long_function_fixture_trips_line_warning() {
    let results = analyze_fixture("long_function.py");
    assert_eq!(results.warnings().len(), 1);
    assert!(results.errors().is_empty());
    assert!(results.warnings()[0].message.contains("spans 58 lines"));
}

#[test]
fn test_fixture_results_merge_into_run_accumulator() {
    let merged = &(&analyze_fixture("clean.py") + &analyze_fixture("bloated.py"))
        + &analyze_fixture("complex.py");

    assert_eq!(merged.errors().len(), 1);
    assert_eq!(merged.warnings().len(), 1);
    let files: Vec<&str> = merged.files().iter().map(String::as_str).collect();
    assert_eq!(files, vec!["bloated.py", "complex.py"]);
}

#[test]
fn test_collector_finds_all_fixtures() {
    let files = bloatcheck::FileCollector::new(testdata_path())
        .collect()
        .expect("collection should succeed");
    let names: Vec<String> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            "bloated.py",
            "clean.py",
            "complex.py",
            "long_function.py",
            "undocumented.py"
        ]
    );
}

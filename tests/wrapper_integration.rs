//! Integration tests for tree wrapping over real fixture files.

use std::path::PathBuf;

use bloatcheck::{build_tree, parser, NodeKind};

fn parse_fixture(name: &str) -> tree_sitter::Tree {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("testdata")
        .join(name);
    parser::parse_file(&path).expect("fixture should parse")
}

#[test]
fn test_root_children_mirror_module_statements() {
    let raw = parse_fixture("clean.py");
    let tree = build_tree(raw.root_node());
    let root = tree.root();

    assert_eq!(root.kind(), NodeKind::Module);
    // Docstring, two functions, one class.
    assert_eq!(root.child_count(), 4);
    assert!(root.has_docstring());
}

#[test]
fn test_definition_metadata() {
    let raw = parse_fixture("clean.py");
    let tree = build_tree(raw.root_node());

    let functions: Vec<_> = tree
        .root()
        .children()
        .filter(|c| c.kind().is_function())
        .collect();
    assert_eq!(functions.len(), 2);
    for func in &functions {
        assert!(func.has_docstring());
        assert_eq!(func.num_lines(), 3);
    }

    let class = tree
        .root()
        .children()
        .find(|c| c.kind() == NodeKind::Class)
        .expect("fixture has a class");
    assert!(class.has_docstring());
}

#[test]
fn test_wrappers_of_one_parse_share_identity() {
    let raw = parse_fixture("clean.py");
    let first = build_tree(raw.root_node());
    let second = build_tree(raw.root_node());
    assert_eq!(first.root(), second.root());
}

#[test]
fn test_wrappers_of_distinct_parses_differ() {
    let raw_a = parse_fixture("clean.py");
    let raw_b = parse_fixture("clean.py");
    let a = build_tree(raw_a.root_node());
    let b = build_tree(raw_b.root_node());
    assert_ne!(a.root(), b.root());
}

#[test]
fn test_parent_links_point_upward() {
    let raw = parse_fixture("complex.py");
    let tree = build_tree(raw.root_node());

    let func = tree
        .root()
        .children()
        .find(|c| c.kind().is_function())
        .expect("fixture has a function");
    assert_eq!(func.parent().unwrap(), tree.root());

    // Every node's parent chain terminates at the root.
    let mut deepest = func;
    while let Some(child) = deepest.child(0) {
        deepest = child;
    }
    let mut cursor = deepest;
    while let Some(parent) = cursor.parent() {
        cursor = parent;
    }
    assert_eq!(cursor, tree.root());
}

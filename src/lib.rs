//! Bloatcheck - code quality analyzer for Python sources.
//!
//! Bloatcheck statically analyzes Python files without executing them. It
//! flags modules with too many functions or classes, missing docstrings,
//! oversized functions, and high branching complexity.
//!
//! # Architecture
//!
//! The engine is built around a wrapped syntax tree and visitors:
//!
//! - `syntax`: arena-backed tree wrapper with per-node derived metadata
//! - `visit`: dispatch-by-category traversal protocol
//! - `check`: metric visitors and the rule engine that applies thresholds
//! - `result`: categorized findings, merged across files
//! - `parser`: the tree-sitter front door (the raw parser is a black box)
//! - `files`: source file collection and filtering
//! - `report`: output formatting (pretty, JSON)
//!
//! # Adding a New Check
//!
//! Implement a visitor in `src/check/` that accumulates a value over the
//! walk, then give `CodeAnalyzer` a `check_*` method that classifies the
//! value against its cutoffs.

pub mod check;
pub mod cli;
pub mod files;
pub mod parser;
pub mod report;
pub mod result;
pub mod syntax;
pub mod visit;

pub use check::{
    ClassCounter, CodeAnalyzer, ComplexityCounter, FunctionCounter, FunctionLineCounter,
    MissingDocstringCounter,
};
pub use files::FileCollector;
pub use report::{JsonReport, RunMetrics};
pub use result::{AnalysisResult, CategoryError, Finding, Severity};
pub use syntax::{build_tree, NodeId, NodeKind, SyntaxNode, SyntaxTree};
pub use visit::Visitor;

//! Wrapped syntax trees with per-node derived metadata.
//!
//! The raw tree-sitter tree is wrapped once per file into a [`SyntaxTree`]:
//! an immutable arena of node records, each carrying the metadata the
//! checks need (dispatch category, docstring presence, line span). Checks
//! never touch tree-sitter types; they see [`SyntaxNode`] handles only.

mod kind;
mod node;

pub use kind::NodeKind;
pub use node::{build_tree, NodeId, SyntaxNode, SyntaxTree};

//! Front door to the tree-sitter Python grammar.

use std::path::Path;

use anyhow::Context;
use once_cell::sync::Lazy;
use tree_sitter::{Language, Parser, Tree};

static PYTHON: Lazy<Language> = Lazy::new(|| tree_sitter_python::LANGUAGE.into());

/// Parse Python source into a raw syntax tree.
pub fn parse_source(source: &[u8]) -> anyhow::Result<Tree> {
    let mut parser = Parser::new();
    parser.set_language(&PYTHON)?;
    parser
        .parse(source, None)
        .ok_or_else(|| anyhow::anyhow!("parser produced no tree"))
}

/// Read and parse one file.
pub fn parse_file(path: &Path) -> anyhow::Result<Tree> {
    let source =
        std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    parse_source(&source).with_context(|| format!("parsing {}", path.display()))
}

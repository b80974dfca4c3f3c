//! Command-line interface for bloatcheck.

use std::path::{Path, PathBuf};

use clap::Parser;
use rayon::prelude::*;

use crate::check::{CodeAnalyzer, FunctionCounter};
use crate::files::FileCollector;
use crate::parser;
use crate::report::{self, RunMetrics};
use crate::result::AnalysisResult;
use crate::syntax::build_tree;
use crate::visit::Visitor;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Static analyzer that flags bloated Python code.
///
/// bloatcheck wraps each file's syntax tree with derived metadata, walks it
/// with per-check visitors, and reports modules with too many definitions,
/// missing docstrings, oversized functions, and high branching complexity.
#[derive(Parser)]
#[command(name = "bloatcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to scan (file or directory)
    pub path: PathBuf,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Gitignore-style ignore file applied to the scan
    #[arg(long, default_value = ".gitignore")]
    pub ignore_file: PathBuf,

    /// Skip paths containing any of these substrings
    #[arg(short = 'x', long = "exclude")]
    pub excludes: Vec<String>,

    /// Scan files sequentially instead of in parallel
    #[arg(long)]
    pub no_parallel: bool,
}

/// One file's contribution to the run.
struct FileOutcome {
    results: AnalysisResult,
    metrics: RunMetrics,
}

/// Run a scan and return the process exit code.
pub fn run(cli: &Cli) -> anyhow::Result<i32> {
    if cli.format != "pretty" && cli.format != "json" {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            cli.format
        );
        return Ok(EXIT_ERROR);
    }

    let root = match cli.path.canonicalize() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: cannot access path {:?}: {}", cli.path, e);
            return Ok(EXIT_ERROR);
        }
    };

    let files = if root.is_dir() {
        FileCollector::new(&root)
            .with_excludes(cli.excludes.clone())
            .with_ignore_file(&root.join(&cli.ignore_file))
            .collect()?
    } else {
        vec![root.clone()]
    };

    if files.is_empty() {
        eprintln!("Warning: no Python files to scan");
        return Ok(EXIT_SUCCESS);
    }

    let (results, metrics) = scan_files(&root, &files, cli.no_parallel);

    let path_str = cli.path.to_string_lossy();
    match cli.format.as_str() {
        "json" => report::write_json(&path_str, &results, &metrics)?,
        _ => report::write_pretty(&path_str, &results, &metrics),
    }

    if results.has_errors() {
        Ok(EXIT_FAILED)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

/// Analyze every file, accumulating findings and run metrics.
///
/// Each file gets its own accumulator; shards are reduced with the merge
/// operator afterwards, so parallel and sequential scans produce the same
/// findings. A file that fails to read or parse is reported and skipped
/// without losing what other files contributed.
fn scan_files(root: &Path, files: &[PathBuf], sequential: bool) -> (AnalysisResult, RunMetrics) {
    let outcomes: Vec<Option<FileOutcome>> = if sequential {
        files.iter().map(|f| scan_one(root, f)).collect()
    } else {
        files.par_iter().map(|f| scan_one(root, f)).collect()
    };

    let mut results = AnalysisResult::new();
    let mut metrics = RunMetrics::new();
    for outcome in outcomes.into_iter().flatten() {
        results = results + outcome.results;
        metrics.merge(outcome.metrics);
    }
    (results, metrics)
}

fn scan_one(root: &Path, path: &Path) -> Option<FileOutcome> {
    match analyze_file(root, path) {
        Ok(outcome) => Some(outcome),
        Err(e) => {
            eprintln!("Warning: skipping {}: {}", path.display(), e);
            None
        }
    }
}

fn analyze_file(root: &Path, path: &Path) -> anyhow::Result<FileOutcome> {
    let raw = parser::parse_file(path)?;
    let tree = build_tree(raw.root_node());

    let display = path
        .strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string();
    let display = if display.is_empty() {
        path.to_string_lossy().to_string()
    } else {
        display
    };

    let mut analyzer = CodeAnalyzer::new(&tree, display);
    analyzer.analyze();

    let mut functions = FunctionCounter::new();
    functions.visit(tree.root());

    let mut metrics = RunMetrics::new();
    metrics.record_file(functions.count, tree.root().num_lines());

    Ok(FileOutcome {
        results: analyzer.into_results(),
        metrics,
    })
}

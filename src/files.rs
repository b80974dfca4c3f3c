//! Source file collection and filtering.

use std::path::{Path, PathBuf};

use anyhow::Context;
use globset::{Glob, GlobSet, GlobSetBuilder};
use lazy_static::lazy_static;
use walkdir::WalkDir;

lazy_static! {
    /// Paths never worth scanning: virtualenvs, tool caches, VCS internals.
    static ref DEFAULT_IGNORES: GlobSet = {
        let mut builder = GlobSetBuilder::new();
        for dir in [
            "venv",
            ".venv",
            "env",
            "__pycache__",
            ".mypy_cache",
            ".pytest_cache",
            ".ruff_cache",
            ".git",
        ] {
            builder.add(Glob::new(&format!("**/{}/**", dir)).unwrap());
            builder.add(Glob::new(&format!("{}/**", dir)).unwrap());
        }
        builder.build().unwrap()
    };
}

/// Collects the Python files under a root, applying the ignore chain:
/// default skips, gitignore-style patterns, and caller substring excludes.
pub struct FileCollector {
    root: PathBuf,
    excludes: Vec<String>,
    ignore: Option<GlobSet>,
}

impl FileCollector {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            excludes: Vec::new(),
            ignore: None,
        }
    }

    /// Skip any path whose string form contains one of these substrings.
    pub fn with_excludes(mut self, excludes: Vec<String>) -> Self {
        self.excludes = excludes;
        self
    }

    /// Load gitignore-style patterns from `path`. A missing or unreadable
    /// ignore file disables this stage rather than failing the scan.
    pub fn with_ignore_file(mut self, path: &Path) -> Self {
        match load_ignore_patterns(path) {
            Ok(set) => self.ignore = Some(set),
            Err(_) => {
                if path.exists() {
                    eprintln!(
                        "Warning: could not read ignore file {}, skipping ignore filtering",
                        path.display()
                    );
                }
                self.ignore = None;
            }
        }
        self
    }

    /// Walk the root and return every matching `.py` file, sorted.
    pub fn collect(&self) -> anyhow::Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_skipped_dir(e))
        {
            let entry = entry.with_context(|| format!("walking {}", self.root.display()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("py") {
                continue;
            }

            let rel = path.strip_prefix(&self.root).unwrap_or(path);
            if DEFAULT_IGNORES.is_match(rel) {
                continue;
            }
            if let Some(ignore) = &self.ignore {
                if ignore.is_match(rel) {
                    continue;
                }
            }
            let lossy = path.to_string_lossy();
            if self.excludes.iter().any(|m| lossy.contains(m.as_str())) {
                continue;
            }

            files.push(path.to_path_buf());
        }

        files.sort();
        Ok(files)
    }
}

fn is_skipped_dir(entry: &walkdir::DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.')
        || matches!(
            name.as_ref(),
            "venv" | "env" | "__pycache__" | "node_modules"
        )
}

/// Build a glob set from a gitignore-style file: one pattern per line,
/// blank lines and `#` comments skipped.
fn load_ignore_patterns(path: &Path) -> anyhow::Result<GlobSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading ignore file {}", path.display()))?;

    let mut builder = GlobSetBuilder::new();
    for line in content.lines() {
        let pattern = line.trim();
        if pattern.is_empty() || pattern.starts_with('#') {
            continue;
        }
        for glob in globs_for_pattern(pattern) {
            builder.add(glob);
        }
    }
    builder
        .build()
        .with_context(|| format!("compiling patterns from {}", path.display()))
}

/// Expand one ignore pattern into the glob variants that approximate
/// gitignore matching: names match anywhere in the tree, trailing `/`
/// means the whole directory.
fn globs_for_pattern(pattern: &str) -> Vec<Glob> {
    let mut candidates = Vec::new();
    if let Some(dir) = pattern.strip_suffix('/') {
        candidates.push(format!("{}/**", dir));
        candidates.push(format!("**/{}/**", dir));
    } else {
        candidates.push(pattern.to_string());
        candidates.push(format!("**/{}", pattern));
    }
    candidates
        .into_iter()
        .filter_map(|c| Glob::new(&c).ok())
        .collect()
}

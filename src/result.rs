//! Categorized findings accumulated across checks and files.

use std::collections::BTreeSet;
use std::fmt;
use std::ops::Add;

use serde::Serialize;
use thiserror::Error;

/// Severity levels for findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// One warning or error tied to the file it was found in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub file: String,
    pub message: String,
}

/// Lookup failure for an unknown findings category.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown findings category {key:?}, expected \"warnings\" or \"errors\"")]
pub struct CategoryError {
    pub key: String,
}

/// Append-only container of categorized findings.
///
/// Per-file results merge into a run-level accumulator with `+`, which
/// concatenates each category (left operand first) and unions the file
/// sets without touching either operand. Merging anything that is not an
/// `AnalysisResult` is rejected by the compiler, so there is no runtime
/// type-mismatch path.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnalysisResult {
    warnings: Vec<Finding>,
    errors: Vec<Finding>,
    files: BTreeSet<String>,
}

impl AnalysisResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning against `file`.
    pub fn append_warning(&mut self, message: impl Into<String>, file: impl Into<String>) {
        let file = file.into();
        self.files.insert(file.clone());
        self.warnings.push(Finding {
            file,
            message: message.into(),
        });
    }

    /// Record an error against `file`.
    pub fn append_error(&mut self, message: impl Into<String>, file: impl Into<String>) {
        let file = file.into();
        self.files.insert(file.clone());
        self.errors.push(Finding {
            file,
            message: message.into(),
        });
    }

    /// Record a finding under the given severity.
    pub fn append(
        &mut self,
        severity: Severity,
        message: impl Into<String>,
        file: impl Into<String>,
    ) {
        match severity {
            Severity::Warning => self.append_warning(message, file),
            Severity::Error => self.append_error(message, file),
        }
    }

    pub fn warnings(&self) -> &[Finding] {
        &self.warnings
    }

    pub fn errors(&self) -> &[Finding] {
        &self.errors
    }

    /// Files that contributed at least one finding.
    pub fn files(&self) -> &BTreeSet<String> {
        &self.files
    }

    /// Total number of findings across both categories.
    pub fn len(&self) -> usize {
        self.warnings.len() + self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Truthiness of the container: any finding at all.
    pub fn has_findings(&self) -> bool {
        !self.is_empty()
    }

    /// Whether any finding carries error severity.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// All findings, warnings first, each category in append order.
    pub fn iter(&self) -> impl Iterator<Item = &Finding> {
        self.warnings.iter().chain(self.errors.iter())
    }

    /// Findings for one category key, `"warnings"` or `"errors"`.
    pub fn category(&self, key: &str) -> Result<&[Finding], CategoryError> {
        match key {
            "warnings" => Ok(&self.warnings),
            "errors" => Ok(&self.errors),
            other => Err(CategoryError {
                key: other.to_string(),
            }),
        }
    }

    fn merged(&self, other: &AnalysisResult) -> AnalysisResult {
        let mut out = self.clone();
        out.warnings.extend(other.warnings.iter().cloned());
        out.errors.extend(other.errors.iter().cloned());
        out.files.extend(other.files.iter().cloned());
        out
    }
}

impl Add for &AnalysisResult {
    type Output = AnalysisResult;

    fn add(self, rhs: &AnalysisResult) -> AnalysisResult {
        self.merged(rhs)
    }
}

impl Add for AnalysisResult {
    type Output = AnalysisResult;

    fn add(self, rhs: AnalysisResult) -> AnalysisResult {
        self.merged(&rhs)
    }
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Analysis complete! No changes to implement.");
        }

        writeln!(
            f,
            "Analysis complete! There are {} changes to implement",
            self.len()
        )?;
        writeln!(
            f,
            "{} warnings, {} errors across {} files",
            self.warnings.len(),
            self.errors.len(),
            self.files.len()
        )?;
        if !self.warnings.is_empty() {
            writeln!(f, "Warnings:")?;
            for finding in &self.warnings {
                writeln!(f, "  - {}: {}", finding.file, finding.message)?;
            }
        }
        if !self.errors.is_empty() {
            writeln!(f, "Errors:")?;
            for finding in &self.errors {
                writeln!(f, "  - {}: {}", finding.file, finding.message)?;
            }
        }
        Ok(())
    }
}

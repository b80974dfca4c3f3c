//! Report rendering for scan results.
//!
//! Two output formats:
//! - Pretty: colored terminal output for human readability
//! - JSON: structured output for programmatic consumption

use colored::*;
use serde::Serialize;

use crate::result::{AnalysisResult, Finding, Severity};

/// Aggregate counters for one scan run.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct RunMetrics {
    pub files_scanned: usize,
    pub total_functions: usize,
    pub total_lines: usize,
}

impl RunMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one file's counters into the run totals.
    pub fn record_file(&mut self, functions: usize, lines: usize) {
        self.files_scanned += 1;
        self.total_functions += functions;
        self.total_lines += lines;
    }

    /// Combine totals from another shard of the run.
    pub fn merge(&mut self, other: RunMetrics) {
        self.files_scanned += other.files_scanned;
        self.total_functions += other.total_functions;
        self.total_lines += other.total_lines;
    }

    pub fn avg_functions_per_file(&self) -> f64 {
        if self.files_scanned == 0 {
            0.0
        } else {
            self.total_functions as f64 / self.files_scanned as f64
        }
    }
}

/// JSON report envelope.
#[derive(Serialize)]
pub struct JsonReport<'a> {
    pub version: String,
    pub path: String,
    pub files_scanned: usize,
    pub total_functions: usize,
    pub total_lines: usize,
    pub warning_count: usize,
    pub error_count: usize,
    pub files_with_findings: Vec<&'a str>,
    pub warnings: &'a [Finding],
    pub errors: &'a [Finding],
}

impl<'a> JsonReport<'a> {
    pub fn build(path: &str, results: &'a AnalysisResult, metrics: &RunMetrics) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            path: path.to_string(),
            files_scanned: metrics.files_scanned,
            total_functions: metrics.total_functions,
            total_lines: metrics.total_lines,
            warning_count: results.warnings().len(),
            error_count: results.errors().len(),
            files_with_findings: results.files().iter().map(String::as_str).collect(),
            warnings: results.warnings(),
            errors: results.errors(),
        }
    }
}

/// Write results in JSON format.
pub fn write_json(
    path: &str,
    results: &AnalysisResult,
    metrics: &RunMetrics,
) -> anyhow::Result<()> {
    let report = JsonReport::build(path, results, metrics);
    let json = serde_json::to_string_pretty(&report)?;
    println!("{}", json);
    Ok(())
}

/// Write results in pretty (human-readable) format.
pub fn write_pretty(path: &str, results: &AnalysisResult, metrics: &RunMetrics) {
    println!();
    print!("  ");
    print!("{}", "bloatcheck".cyan().bold());
    println!(" v{}", env!("CARGO_PKG_VERSION"));
    println!();

    print!("  {}", "Scanning: ".dimmed());
    println!("{}", path);
    println!();

    write_summary(results);
    println!();

    if !results.warnings().is_empty() {
        write_findings("Warnings", results.warnings(), Severity::Warning);
        println!();
    }
    if !results.errors().is_empty() {
        write_findings("Errors", results.errors(), Severity::Error);
        println!();
    }

    write_metrics(metrics);
    println!();
}

fn write_summary(results: &AnalysisResult) {
    if results.is_empty() {
        println!("  {}  no changes to implement", "✓ CLEAN".green());
        return;
    }

    print!("  {}", "✗ FINDINGS".red());
    print!("  {} to implement", pluralize(results.len(), "change"));
    print!(
        "  {}",
        format!(
            "({} warnings, {} errors, {} files)",
            results.warnings().len(),
            results.errors().len(),
            results.files().len()
        )
        .dimmed()
    );
    println!();
}

fn write_findings(title: &str, findings: &[Finding], severity: Severity) {
    println!("  {} ({}):", title.bold(), findings.len());
    println!();
    for finding in findings {
        match severity {
            Severity::Error => print!("    {} ", "ERROR".red()),
            Severity::Warning => print!("    {} ", "WARN ".yellow()),
        }
        print!("{}", finding.file.blue());
        println!("  {}", finding.message);
    }
}

fn write_metrics(metrics: &RunMetrics) {
    println!(
        "  {}",
        format!(
            "Scanned {} ({} functions, {} lines, {:.1} functions/file)",
            pluralize(metrics.files_scanned, "file"),
            metrics.total_functions,
            metrics.total_lines,
            metrics.avg_functions_per_file()
        )
        .dimmed()
    );
}

fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

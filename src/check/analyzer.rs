//! Rule engine that converts accumulated metrics into findings.

use crate::check::{
    ClassCounter, ComplexityCounter, FunctionCounter, FunctionLineCounter,
    MissingDocstringCounter,
};
use crate::result::{AnalysisResult, Severity};
use crate::syntax::SyntaxTree;
use crate::visit::Visitor;

/// Warning/error cutoffs for one check. Error wins when both are met.
#[derive(Debug, Clone, Copy)]
struct Cutoffs {
    warn: usize,
    error: usize,
}

const FUNCTION_COUNT: Cutoffs = Cutoffs { warn: 5, error: 8 };
const CLASS_COUNT: Cutoffs = Cutoffs { warn: 5, error: 8 };
const MISSING_DOCSTRINGS: Cutoffs = Cutoffs { warn: 1, error: 5 };
const FUNCTION_LINES: Cutoffs = Cutoffs {
    warn: 50,
    error: 100,
};
const COMPLEXITY: Cutoffs = Cutoffs {
    warn: 10,
    error: 15,
};

/// Classify a metric against its cutoffs; returns the severity and the
/// cutoff that tripped.
fn classify(value: usize, cutoffs: Cutoffs) -> Option<(Severity, usize)> {
    if value >= cutoffs.error {
        Some((Severity::Error, cutoffs.error))
    } else if value >= cutoffs.warn {
        Some((Severity::Warning, cutoffs.warn))
    } else {
        None
    }
}

/// Runs every check over one file's wrapped tree.
///
/// `analyze` is a single linear pass appending into the results
/// accumulator, which may be shared across files. Each call appends a
/// fresh round of findings: running `analyze` twice against the same
/// accumulator duplicates every finding. Use [`CodeAnalyzer::into_results`]
/// to take the accumulator when done.
pub struct CodeAnalyzer<'t> {
    tree: &'t SyntaxTree,
    filename: String,
    results: AnalysisResult,
}

impl<'t> CodeAnalyzer<'t> {
    pub fn new(tree: &'t SyntaxTree, filename: impl Into<String>) -> Self {
        Self::with_results(tree, filename, AnalysisResult::new())
    }

    /// Continue accumulating into results carried over from earlier files.
    pub fn with_results(
        tree: &'t SyntaxTree,
        filename: impl Into<String>,
        results: AnalysisResult,
    ) -> Self {
        Self {
            tree,
            filename: filename.into(),
            results,
        }
    }

    /// Run all checks in a fixed order and expose the accumulated findings.
    pub fn analyze(&mut self) -> &AnalysisResult {
        self.check_function_count();
        self.check_class_count();
        self.check_docstrings();
        self.check_function_line_count();
        self.check_complexity();
        self.check_unused_imports();
        self.check_circular_imports();
        self.check_nesting_depth();
        self.check_naming_conventions();
        &self.results
    }

    /// Take the accumulator out of the analyzer.
    pub fn into_results(self) -> AnalysisResult {
        self.results
    }

    fn record(&mut self, verdict: Option<(Severity, usize)>, describe: impl Fn(usize) -> String) {
        if let Some((severity, cutoff)) = verdict {
            let file = self.filename.clone();
            self.results.append(severity, describe(cutoff), file);
        }
    }

    fn check_function_count(&mut self) {
        let mut counter = FunctionCounter::new();
        counter.visit(self.tree.root());
        let count = counter.count;
        self.record(classify(count, FUNCTION_COUNT), |cutoff| {
            format!("module has {} functions (threshold {})", count, cutoff)
        });
    }

    fn check_class_count(&mut self) {
        let mut counter = ClassCounter::new();
        counter.visit(self.tree.root());
        let count = counter.count;
        self.record(classify(count, CLASS_COUNT), |cutoff| {
            format!("module has {} classes (threshold {})", count, cutoff)
        });
    }

    fn check_docstrings(&mut self) {
        let mut counter = MissingDocstringCounter::new();
        counter.visit(self.tree.root());
        let count = counter.count;
        self.record(classify(count, MISSING_DOCSTRINGS), |cutoff| {
            format!(
                "module has {} undocumented definitions (threshold {})",
                count, cutoff
            )
        });
    }

    fn check_function_line_count(&mut self) {
        let mut counter = FunctionLineCounter::new();
        counter.visit(self.tree.root());
        let num_lines = counter.num_lines;
        self.record(classify(num_lines, FUNCTION_LINES), |cutoff| {
            format!("function spans {} lines (threshold {})", num_lines, cutoff)
        });
    }

    fn check_complexity(&mut self) {
        let mut counter = ComplexityCounter::new();
        counter.visit(self.tree.root());
        let score = counter.score;
        self.record(classify(score, COMPLEXITY), |cutoff| {
            format!("module has complexity {} (threshold {})", score, cutoff)
        });
    }

    // Planned checks, inert until the engine grows binding resolution.
    // TODO: unused/circular imports need per-name binding and an import
    // graph; nesting depth and naming conventions need agreed cutoffs.

    fn check_unused_imports(&mut self) {}

    fn check_circular_imports(&mut self) {}

    fn check_nesting_depth(&mut self) {}

    fn check_naming_conventions(&mut self) {}
}

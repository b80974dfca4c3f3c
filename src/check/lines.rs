//! Function line span metric.

use crate::syntax::SyntaxNode;
use crate::visit::Visitor;

/// Records the line span of the most recently visited function definition.
///
/// Each function overwrites the previous value, so after a full walk this
/// holds the span of the *last* function in traversal order rather than a
/// maximum or a per-function record. That overwrite is long-standing
/// observed behavior and is kept as-is; see DESIGN.md before changing it.
#[derive(Debug, Default)]
pub struct FunctionLineCounter {
    pub num_lines: usize,
}

impl FunctionLineCounter {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, node: SyntaxNode<'_>) {
        self.num_lines = node.num_lines();
    }
}

impl Visitor for FunctionLineCounter {
    fn visit_function(&mut self, node: SyntaxNode<'_>) {
        self.record(node);
        self.generic_visit(node);
    }

    fn visit_async_function(&mut self, node: SyntaxNode<'_>) {
        self.record(node);
        self.generic_visit(node);
    }
}

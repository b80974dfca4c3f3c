//! Function count metric.

use crate::syntax::SyntaxNode;
use crate::visit::Visitor;

/// Counts function definitions, async ones included.
#[derive(Debug, Default)]
pub struct FunctionCounter {
    pub count: usize,
}

impl FunctionCounter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Visitor for FunctionCounter {
    fn visit_function(&mut self, node: SyntaxNode<'_>) {
        self.count += 1;
        // Nested definitions count too.
        self.generic_visit(node);
    }

    fn visit_async_function(&mut self, node: SyntaxNode<'_>) {
        self.count += 1;
        self.generic_visit(node);
    }
}

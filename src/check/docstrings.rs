//! Missing docstring metric.

use crate::syntax::{NodeKind, SyntaxNode};
use crate::visit::Visitor;

/// Counts documentable definitions whose body does not open with a string
/// literal.
///
/// The check probes the wrapped structure itself (body block, first
/// statement, string expression) instead of trusting the docstring flag
/// computed at construction time.
#[derive(Debug, Default)]
pub struct MissingDocstringCounter {
    pub count: usize,
}

impl MissingDocstringCounter {
    pub fn new() -> Self {
        Self::default()
    }

    fn check(&mut self, node: SyntaxNode<'_>) {
        if !opens_with_string(node) {
            self.count += 1;
        }
    }
}

/// Whether the definition's first statement is a standalone string literal.
fn opens_with_string(node: SyntaxNode<'_>) -> bool {
    let body = match node.kind() {
        NodeKind::Module => Some(node),
        _ => node.children().find(|c| c.raw_kind() == "block"),
    };
    let Some(body) = body else {
        return false;
    };
    match body.child(0) {
        Some(stmt) => {
            stmt.raw_kind() == "expression_statement"
                && stmt.child(0).map_or(false, |e| e.raw_kind() == "string")
        }
        None => false,
    }
}

impl Visitor for MissingDocstringCounter {
    fn visit_module(&mut self, node: SyntaxNode<'_>) {
        self.check(node);
        self.generic_visit(node);
    }

    fn visit_function(&mut self, node: SyntaxNode<'_>) {
        self.check(node);
        self.generic_visit(node);
    }

    fn visit_async_function(&mut self, node: SyntaxNode<'_>) {
        self.check(node);
        self.generic_visit(node);
    }

    fn visit_class(&mut self, node: SyntaxNode<'_>) {
        self.check(node);
        self.generic_visit(node);
    }
}

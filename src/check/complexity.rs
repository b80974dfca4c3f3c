//! Branching complexity metric.

use crate::syntax::SyntaxNode;
use crate::visit::Visitor;

/// Accumulates one point per branching construct.
///
/// Branches, loops, comprehensions, generator expressions, and exception
/// handlers all contribute equally to the score.
#[derive(Debug, Default)]
pub struct ComplexityCounter {
    pub score: usize,
}

impl ComplexityCounter {
    pub fn new() -> Self {
        Self::default()
    }

    fn bump(&mut self, node: SyntaxNode<'_>) {
        self.score += 1;
        self.generic_visit(node);
    }
}

impl Visitor for ComplexityCounter {
    fn visit_if(&mut self, node: SyntaxNode<'_>) {
        self.bump(node);
    }

    fn visit_elif(&mut self, node: SyntaxNode<'_>) {
        self.bump(node);
    }

    fn visit_ternary(&mut self, node: SyntaxNode<'_>) {
        self.bump(node);
    }

    fn visit_for(&mut self, node: SyntaxNode<'_>) {
        self.bump(node);
    }

    fn visit_while(&mut self, node: SyntaxNode<'_>) {
        self.bump(node);
    }

    fn visit_list_comp(&mut self, node: SyntaxNode<'_>) {
        self.bump(node);
    }

    fn visit_set_comp(&mut self, node: SyntaxNode<'_>) {
        self.bump(node);
    }

    fn visit_dict_comp(&mut self, node: SyntaxNode<'_>) {
        self.bump(node);
    }

    fn visit_generator(&mut self, node: SyntaxNode<'_>) {
        self.bump(node);
    }

    fn visit_except_handler(&mut self, node: SyntaxNode<'_>) {
        self.bump(node);
    }
}

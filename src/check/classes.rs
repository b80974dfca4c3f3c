//! Class count metric.

use crate::syntax::SyntaxNode;
use crate::visit::Visitor;

/// Counts class definitions, nested ones included.
#[derive(Debug, Default)]
pub struct ClassCounter {
    pub count: usize,
}

impl ClassCounter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Visitor for ClassCounter {
    fn visit_class(&mut self, node: SyntaxNode<'_>) {
        self.count += 1;
        self.generic_visit(node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;
    use crate::syntax::build_tree;

    fn count(source: &str) -> usize {
        let raw = parser::parse_source(source.as_bytes()).unwrap();
        let tree = build_tree(raw.root_node());
        let mut counter = ClassCounter::new();
        counter.visit(tree.root());
        counter.count
    }

    #[test]
    fn test_counts_nested_classes() {
        let source = "class Outer:\n    class Inner:\n        pass\n";
        assert_eq!(count(source), 2);
    }

    #[test]
    fn test_functions_do_not_count() {
        assert_eq!(count("def f():\n    pass\n"), 0);
    }
}

//! Visitor dispatch over wrapped syntax trees.

use crate::syntax::{NodeKind, SyntaxNode};

/// Tree walker with one handler per syntax category.
///
/// [`Visitor::visit`] dispatches on the node's category; categories without
/// an overridden handler fall through to [`Visitor::generic_visit`], which
/// recurses into children. A handler that overrides a category must call
/// `generic_visit` itself to keep walking below its node — skipping that
/// call silently truncates the traversal there, so every concrete visitor
/// in this crate recurses after processing.
///
/// Traversal is pre-order, depth-first, in source order. Visitors never
/// mutate the tree.
pub trait Visitor {
    /// Dispatch `node` to its category handler.
    fn visit(&mut self, node: SyntaxNode<'_>) {
        match node.kind() {
            NodeKind::Module => self.visit_module(node),
            NodeKind::Function => self.visit_function(node),
            NodeKind::AsyncFunction => self.visit_async_function(node),
            NodeKind::Class => self.visit_class(node),
            NodeKind::If => self.visit_if(node),
            NodeKind::Elif => self.visit_elif(node),
            NodeKind::Ternary => self.visit_ternary(node),
            NodeKind::For => self.visit_for(node),
            NodeKind::While => self.visit_while(node),
            NodeKind::ListComp => self.visit_list_comp(node),
            NodeKind::SetComp => self.visit_set_comp(node),
            NodeKind::DictComp => self.visit_dict_comp(node),
            NodeKind::Generator => self.visit_generator(node),
            NodeKind::ExceptHandler => self.visit_except_handler(node),
            NodeKind::Other => self.generic_visit(node),
        }
    }

    /// Default traversal action: visit every child in source order.
    fn generic_visit(&mut self, node: SyntaxNode<'_>) {
        for child in node.children() {
            self.visit(child);
        }
    }

    fn visit_module(&mut self, node: SyntaxNode<'_>) {
        self.generic_visit(node)
    }

    fn visit_function(&mut self, node: SyntaxNode<'_>) {
        self.generic_visit(node)
    }

    fn visit_async_function(&mut self, node: SyntaxNode<'_>) {
        self.generic_visit(node)
    }

    fn visit_class(&mut self, node: SyntaxNode<'_>) {
        self.generic_visit(node)
    }

    fn visit_if(&mut self, node: SyntaxNode<'_>) {
        self.generic_visit(node)
    }

    fn visit_elif(&mut self, node: SyntaxNode<'_>) {
        self.generic_visit(node)
    }

    fn visit_ternary(&mut self, node: SyntaxNode<'_>) {
        self.generic_visit(node)
    }

    fn visit_for(&mut self, node: SyntaxNode<'_>) {
        self.generic_visit(node)
    }

    fn visit_while(&mut self, node: SyntaxNode<'_>) {
        self.generic_visit(node)
    }

    fn visit_list_comp(&mut self, node: SyntaxNode<'_>) {
        self.generic_visit(node)
    }

    fn visit_set_comp(&mut self, node: SyntaxNode<'_>) {
        self.generic_visit(node)
    }

    fn visit_dict_comp(&mut self, node: SyntaxNode<'_>) {
        self.generic_visit(node)
    }

    fn visit_generator(&mut self, node: SyntaxNode<'_>) {
        self.generic_visit(node)
    }

    fn visit_except_handler(&mut self, node: SyntaxNode<'_>) {
        self.generic_visit(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;
    use crate::syntax::build_tree;

    /// Records the category of every function/class it reaches, in order.
    #[derive(Default)]
    struct Recorder {
        seen: Vec<&'static str>,
    }

    impl Visitor for Recorder {
        fn visit_function(&mut self, node: SyntaxNode<'_>) {
            self.seen.push("function");
            self.generic_visit(node);
        }

        fn visit_class(&mut self, node: SyntaxNode<'_>) {
            self.seen.push("class");
            self.generic_visit(node);
        }
    }

    /// Matches classes but never recurses below them.
    #[derive(Default)]
    struct Truncating {
        functions: usize,
    }

    impl Visitor for Truncating {
        fn visit_class(&mut self, _node: SyntaxNode<'_>) {
            // No generic_visit: traversal stops here.
        }

        fn visit_function(&mut self, node: SyntaxNode<'_>) {
            self.functions += 1;
            self.generic_visit(node);
        }
    }

    fn source_tree(source: &str) -> (tree_sitter::Tree, crate::syntax::SyntaxTree) {
        let raw = parser::parse_source(source.as_bytes()).unwrap();
        let tree = build_tree(raw.root_node());
        (raw, tree)
    }

    #[test]
    fn test_preorder_source_order() {
        let source = "def a():\n    pass\n\nclass B:\n    def c(self):\n        pass\n\ndef d():\n    pass\n";
        let (_raw, tree) = source_tree(source);
        let mut recorder = Recorder::default();
        recorder.visit(tree.root());
        assert_eq!(
            recorder.seen,
            vec!["function", "class", "function", "function"]
        );
    }

    #[test]
    fn test_unhandled_kinds_still_recurse() {
        // The function is nested under an `if`, which Recorder does not
        // handle; the generic fallback must reach it anyway.
        let source = "if True:\n    def hidden():\n        pass\n";
        let (_raw, tree) = source_tree(source);
        let mut recorder = Recorder::default();
        recorder.visit(tree.root());
        assert_eq!(recorder.seen, vec!["function"]);
    }

    #[test]
    fn test_handler_without_recursion_truncates() {
        let source = "class A:\n    def inside(self):\n        pass\n\ndef outside():\n    pass\n";
        let (_raw, tree) = source_tree(source);
        let mut visitor = Truncating::default();
        visitor.visit(tree.root());
        // `inside` is below the class and must not be reached.
        assert_eq!(visitor.functions, 1);
    }
}

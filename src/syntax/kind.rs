//! Syntax categories the engine dispatches on.

use std::fmt;

/// Node categories recognized by the checks.
///
/// Everything else in the grammar maps to [`NodeKind::Other`]. Those nodes
/// still appear in the wrapped tree, so traversal reaches matches nested
/// below them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Module,
    Function,
    AsyncFunction,
    Class,
    If,
    Elif,
    Ternary,
    For,
    While,
    ListComp,
    SetComp,
    DictComp,
    Generator,
    ExceptHandler,
    Other,
}

impl NodeKind {
    /// Classify a raw tree-sitter-python node.
    pub(crate) fn of(node: &tree_sitter::Node) -> Self {
        match node.kind() {
            "module" => NodeKind::Module,
            "function_definition" => {
                if is_async(node) {
                    NodeKind::AsyncFunction
                } else {
                    NodeKind::Function
                }
            }
            "class_definition" => NodeKind::Class,
            "if_statement" => NodeKind::If,
            "elif_clause" => NodeKind::Elif,
            "conditional_expression" => NodeKind::Ternary,
            "for_statement" => NodeKind::For,
            "while_statement" => NodeKind::While,
            "list_comprehension" => NodeKind::ListComp,
            "set_comprehension" => NodeKind::SetComp,
            "dictionary_comprehension" => NodeKind::DictComp,
            "generator_expression" => NodeKind::Generator,
            "except_clause" => NodeKind::ExceptHandler,
            _ => NodeKind::Other,
        }
    }

    /// Canonical type name, used as the dispatch key and in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Module => "Module",
            NodeKind::Function => "Function",
            NodeKind::AsyncFunction => "AsyncFunction",
            NodeKind::Class => "Class",
            NodeKind::If => "If",
            NodeKind::Elif => "Elif",
            NodeKind::Ternary => "Ternary",
            NodeKind::For => "For",
            NodeKind::While => "While",
            NodeKind::ListComp => "ListComp",
            NodeKind::SetComp => "SetComp",
            NodeKind::DictComp => "DictComp",
            NodeKind::Generator => "Generator",
            NodeKind::ExceptHandler => "ExceptHandler",
            NodeKind::Other => "Other",
        }
    }

    /// Whether this category can carry a docstring.
    pub fn is_documentable(&self) -> bool {
        matches!(
            self,
            NodeKind::Module | NodeKind::Function | NodeKind::AsyncFunction | NodeKind::Class
        )
    }

    /// Whether this category is a function definition of either flavor.
    pub fn is_function(&self) -> bool {
        matches!(self, NodeKind::Function | NodeKind::AsyncFunction)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The grammar marks `async def` with a leading `async` token on the
/// function_definition node itself.
fn is_async(node: &tree_sitter::Node) -> bool {
    node.child(0).map_or(false, |c| c.kind() == "async")
}

//! Arena-backed syntax tree wrapper.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::syntax::NodeKind;

/// Index of a node within its [`SyntaxTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

/// One wrapped node: category, identity of the raw node, tree links, and
/// the metadata derived at construction time.
#[derive(Debug)]
struct NodeData {
    kind: NodeKind,
    raw_kind: &'static str,
    raw_id: usize,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    has_docstring: bool,
    num_lines: usize,
}

/// An immutable wrapped syntax tree for one file.
///
/// Built in a single pass over the raw tree; node 0 is always the root.
/// Parents are plain indices into the arena, never owning references, so
/// the structure stays an acyclic ownership tree.
#[derive(Debug)]
pub struct SyntaxTree {
    nodes: Vec<NodeData>,
}

impl SyntaxTree {
    /// Handle to the root node.
    pub fn root(&self) -> SyntaxNode<'_> {
        SyntaxNode {
            tree: self,
            id: NodeId(0),
        }
    }

    /// Total number of wrapped nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Handle to an arbitrary node by id.
    pub fn node(&self, id: NodeId) -> Option<SyntaxNode<'_>> {
        ((id.0 as usize) < self.nodes.len()).then_some(SyntaxNode { tree: self, id })
    }
}

/// Wrap a raw parsed tree, computing per-node metadata as it goes.
///
/// Children mirror the named, non-comment children of each raw node in
/// source order. The walk uses an explicit work stack, so arbitrarily deep
/// input cannot overflow the call stack during construction.
pub fn build_tree(root: tree_sitter::Node<'_>) -> SyntaxTree {
    let mut nodes: Vec<NodeData> = Vec::new();
    let mut work: Vec<(tree_sitter::Node, Option<NodeId>)> = vec![(root, None)];

    while let Some((raw, parent)) = work.pop() {
        let id = NodeId(nodes.len() as u32);
        let kind = NodeKind::of(&raw);
        nodes.push(NodeData {
            kind,
            raw_kind: raw.kind(),
            raw_id: raw.id(),
            parent,
            children: Vec::new(),
            has_docstring: kind.is_documentable() && leads_with_string(&raw, kind),
            num_lines: line_span(&raw),
        });
        if let Some(p) = parent {
            nodes[p.0 as usize].children.push(id);
        }

        let mut cursor = raw.walk();
        let children: Vec<_> = raw
            .named_children(&mut cursor)
            .filter(|c| c.kind() != "comment")
            .collect();
        // Reverse push keeps pop order equal to source order.
        for child in children.into_iter().rev() {
            work.push((child, Some(id)));
        }
    }

    SyntaxTree { nodes }
}

/// `end_line - start_line + 1`, degrading to 0 if the positions disagree.
fn line_span(raw: &tree_sitter::Node) -> usize {
    let start = raw.start_position().row;
    let end = raw.end_position().row;
    match end.checked_sub(start) {
        Some(span) => span + 1,
        None => 0,
    }
}

/// True when the node's first statement is a standalone string literal.
fn leads_with_string(raw: &tree_sitter::Node, kind: NodeKind) -> bool {
    let body = match kind {
        NodeKind::Module => Some(*raw),
        _ => raw.child_by_field_name("body"),
    };
    let Some(body) = body else {
        return false;
    };
    let mut cursor = body.walk();
    let first = body
        .named_children(&mut cursor)
        .find(|n| n.kind() != "comment");
    match first {
        Some(stmt) => {
            stmt.kind() == "expression_statement"
                && stmt.named_child(0).map_or(false, |e| e.kind() == "string")
        }
        None => false,
    }
}

/// A cheap copyable handle to one node of a [`SyntaxTree`].
#[derive(Clone, Copy)]
pub struct SyntaxNode<'t> {
    tree: &'t SyntaxTree,
    id: NodeId,
}

impl<'t> SyntaxNode<'t> {
    fn data(&self) -> &'t NodeData {
        &self.tree.nodes[self.id.0 as usize]
    }

    /// Arena id of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Dispatch category.
    pub fn kind(&self) -> NodeKind {
        self.data().kind
    }

    /// Canonical type name; the raw grammar kind for uncategorized nodes.
    ///
    /// This is how downstream code asks "what kind of node is this"
    /// without depending on parser-internal representations.
    pub fn type_name(&self) -> &'t str {
        match self.data().kind {
            NodeKind::Other => self.data().raw_kind,
            kind => kind.as_str(),
        }
    }

    /// Raw grammar kind of the wrapped node.
    pub fn raw_kind(&self) -> &'static str {
        self.data().raw_kind
    }

    /// Parent handle, if this is not the root.
    pub fn parent(&self) -> Option<SyntaxNode<'t>> {
        self.data().parent.map(|id| SyntaxNode {
            tree: self.tree,
            id,
        })
    }

    /// Children in source order.
    pub fn children(self) -> impl Iterator<Item = SyntaxNode<'t>> {
        let tree = self.tree;
        self.data()
            .children
            .iter()
            .map(move |&id| SyntaxNode { tree, id })
    }

    /// Child at position `i`, if any.
    pub fn child(&self, i: usize) -> Option<SyntaxNode<'t>> {
        self.data().children.get(i).map(|&id| SyntaxNode {
            tree: self.tree,
            id,
        })
    }

    /// Number of immediate children.
    pub fn child_count(&self) -> usize {
        self.data().children.len()
    }

    /// Whether the node opens with a docstring.
    ///
    /// Always false for categories that cannot carry one.
    pub fn has_docstring(&self) -> bool {
        self.data().has_docstring
    }

    /// Source line span of the node.
    pub fn num_lines(&self) -> usize {
        self.data().num_lines
    }

    fn parent_raw_id(&self) -> Option<usize> {
        self.data()
            .parent
            .map(|p| self.tree.nodes[p.0 as usize].raw_id)
    }
}

/// Identity semantics: two handles are equal only when they wrap the same
/// raw parser node. Wrappers built separately over textually identical but
/// distinct parses are never equal.
impl PartialEq for SyntaxNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.data().raw_id == other.data().raw_id
    }
}

impl Eq for SyntaxNode<'_> {}

impl Hash for SyntaxNode<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data().raw_id.hash(state);
        self.parent_raw_id().hash(state);
    }
}

impl fmt::Debug for SyntaxNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SyntaxNode({})", self.type_name())
    }
}

impl fmt::Display for SyntaxNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | children: {}", self.type_name(), self.child_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;

    fn wrap(source: &str) -> (tree_sitter::Tree, SyntaxTree) {
        let raw = parser::parse_source(source.as_bytes()).unwrap();
        let tree = build_tree(raw.root_node());
        (raw, tree)
    }

    #[test]
    fn test_root_mirrors_module_statements() {
        let (_raw, tree) = wrap("x = 1\ny = 2\nz = 3\n");
        let root = tree.root();
        assert_eq!(root.kind(), NodeKind::Module);
        assert_eq!(root.child_count(), 3);
    }

    #[test]
    fn test_empty_module() {
        let (_raw, tree) = wrap("");
        assert_eq!(tree.root().child_count(), 0);
        assert_eq!(tree.node_count(), 1);
    }

    #[test]
    fn test_children_in_source_order() {
        let (_raw, tree) = wrap("def first():\n    pass\n\ndef second():\n    pass\n");
        let kinds: Vec<&str> = tree.root().children().map(|c| c.type_name()).collect();
        assert_eq!(kinds, vec!["Function", "Function"]);
        // Deeper nodes come after their parent in the arena but keep order.
        let first = tree.root().child(0).unwrap();
        assert!(first.child_count() > 0);
    }

    #[test]
    fn test_parent_links() {
        let (_raw, tree) = wrap("def f():\n    return 1\n");
        let func = tree.root().child(0).unwrap();
        assert!(tree.root().parent().is_none());
        assert_eq!(func.parent().unwrap(), tree.root());
    }

    #[test]
    fn test_async_function_kind() {
        let (_raw, tree) = wrap("async def fetch():\n    pass\n");
        let func = tree.root().child(0).unwrap();
        assert_eq!(func.kind(), NodeKind::AsyncFunction);
    }

    #[test]
    fn test_docstring_metadata() {
        let source = "\"\"\"module doc\"\"\"\n\ndef documented():\n    \"\"\"doc\"\"\"\n    return 1\n\ndef bare():\n    return 2\n";
        let (_raw, tree) = wrap(source);
        let root = tree.root();
        assert!(root.has_docstring());

        let funcs: Vec<_> = root
            .children()
            .filter(|c| c.kind().is_function())
            .collect();
        assert_eq!(funcs.len(), 2);
        assert!(funcs[0].has_docstring());
        assert!(!funcs[1].has_docstring());
    }

    #[test]
    fn test_docstring_only_for_documentable_kinds() {
        let (_raw, tree) = wrap("if True:\n    \"not a docstring\"\n");
        let if_node = tree.root().child(0).unwrap();
        assert_eq!(if_node.kind(), NodeKind::If);
        assert!(!if_node.has_docstring());
    }

    #[test]
    fn test_num_lines() {
        let source = "def f():\n    a = 1\n    b = 2\n    return a + b\n";
        let (_raw, tree) = wrap(source);
        let func = tree.root().child(0).unwrap();
        assert_eq!(func.num_lines(), 4);
    }

    #[test]
    fn test_identity_equality_same_parse() {
        let raw = parser::parse_source(b"x = 1\n").unwrap();
        let a = build_tree(raw.root_node());
        let b = build_tree(raw.root_node());
        // Two wraps of the same raw tree agree on identity.
        assert_eq!(a.root(), b.root());
        assert_eq!(a.root().child(0).unwrap(), b.root().child(0).unwrap());
    }

    #[test]
    fn test_identity_inequality_across_parses() {
        let raw_a = parser::parse_source(b"x = 1\n").unwrap();
        let raw_b = parser::parse_source(b"x = 1\n").unwrap();
        let a = build_tree(raw_a.root_node());
        let b = build_tree(raw_b.root_node());
        // Textually identical, but distinct raw nodes.
        assert_ne!(a.root(), b.root());
    }

    #[test]
    fn test_display() {
        let (_raw, tree) = wrap("x = 1\n");
        assert_eq!(tree.root().to_string(), "Module | children: 1");
    }

    #[test]
    fn test_deeply_nested_construction() {
        // Construction is iterative; a pathologically nested expression
        // must not overflow the stack while wrapping.
        let source = format!("x = {}1{}\n", "(".repeat(2000), ")".repeat(2000));
        let (_raw, tree) = wrap(&source);
        assert!(tree.node_count() > 2000);
    }
}

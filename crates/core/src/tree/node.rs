use super::{NodeKind, SyntaxTree};

/// Index of a node in its tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Byte range of a node in the tree's source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Half-open containment: `start <= offset < end`.
    pub fn contains(self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

/// A borrowed handle to one node of a [`SyntaxTree`].
///
/// Handles are `Copy`; all navigation goes through parent/sibling/child
/// links and never mutates the tree.
#[derive(Clone, Copy)]
pub struct Node<'t> {
    tree: &'t SyntaxTree,
    id: NodeId,
}

impl<'t> Node<'t> {
    pub(crate) fn new(tree: &'t SyntaxTree, id: NodeId) -> Self {
        Self { tree, id }
    }

    pub fn id(self) -> NodeId {
        self.id
    }

    pub fn tree(self) -> &'t SyntaxTree {
        self.tree
    }

    fn data(self) -> &'t super::NodeData {
        &self.tree.nodes[self.id.index()]
    }

    pub fn kind(self) -> NodeKind {
        self.data().kind
    }

    pub fn range(self) -> TextRange {
        self.data().range
    }

    /// The node's source text, sliced from the tree's reconstructed source.
    pub fn text(self) -> &'t str {
        let range = self.data().range;
        &self.tree.source[range.start..range.end]
    }

    pub fn is_file(self) -> bool {
        self.kind() == NodeKind::File
    }

    pub fn parent(self) -> Option<Node<'t>> {
        self.data().parent.map(|id| Node::new(self.tree, id))
    }

    pub fn prev_sibling(self) -> Option<Node<'t>> {
        self.data().prev_sibling.map(|id| Node::new(self.tree, id))
    }

    pub fn next_sibling(self) -> Option<Node<'t>> {
        self.data().next_sibling.map(|id| Node::new(self.tree, id))
    }

    pub fn first_child(self) -> Option<Node<'t>> {
        self.data().first_child.map(|id| Node::new(self.tree, id))
    }

    /// Direct children, left to right.
    pub fn children(self) -> Children<'t> {
        Children {
            next: self.first_child(),
        }
    }
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for Node<'_> {}

impl std::fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}@{}", self.kind(), self.id.0)
    }
}

pub struct Children<'t> {
    next: Option<Node<'t>>,
}

impl<'t> Iterator for Children<'t> {
    type Item = Node<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next_sibling();
        Some(node)
    }
}

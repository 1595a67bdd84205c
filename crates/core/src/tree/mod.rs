//! The syntax-tree data model the plugin layer navigates.
//!
//! Trees are immutable once built: nodes carry parent, sibling and child
//! links plus a byte range into the reconstructed source. Navigation hands
//! out cheap [`Node`] handles borrowing the tree, in the style of a
//! tree-sitter cursor-free API.

mod builder;
mod kind;
mod node;

pub use builder::TreeBuilder;
pub use kind::{NodeClass, NodeKind};
pub use node::{Children, Node, NodeId, TextRange};

pub(crate) struct NodeData {
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
    pub(crate) first_child: Option<NodeId>,
    pub(crate) prev_sibling: Option<NodeId>,
    pub(crate) next_sibling: Option<NodeId>,
    pub(crate) range: TextRange,
}

/// An immutable arena-backed syntax tree for one Lua file.
pub struct SyntaxTree {
    pub(crate) nodes: Vec<NodeData>,
    pub(crate) source: String,
    pub(crate) root: NodeId,
}

impl SyntaxTree {
    /// The file-root node.
    pub fn root(&self) -> Node<'_> {
        Node::new(self, self.root)
    }

    /// The source text the tree was built from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn node(&self, id: NodeId) -> Node<'_> {
        Node::new(self, id)
    }
}

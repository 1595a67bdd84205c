use super::{NodeData, NodeId, NodeKind, SyntaxTree, TextRange};
use crate::error::{LuanavError, Result};

/// Event-style builder for [`SyntaxTree`] fixtures and host front ends.
///
/// Interior nodes are opened with [`start_node`](Self::start_node) and
/// closed with [`finish_node`](Self::finish_node); leaves are emitted with
/// [`token`](Self::token), which appends the token text to the source and
/// advances the byte cursor. Parent ranges are the hull of their children.
///
/// Misuse (unbalanced open/close, content outside the root, a root that is
/// not a `File`) is reported by [`build`](Self::build), never panicked on.
pub struct TreeBuilder {
    nodes: Vec<NodeData>,
    last_child: Vec<Option<NodeId>>,
    source: String,
    stack: Vec<NodeId>,
    root: Option<NodeId>,
    error: Option<String>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            last_child: Vec::new(),
            source: String::new(),
            stack: Vec::new(),
            root: None,
            error: None,
        }
    }

    fn fail(&mut self, msg: impl Into<String>) {
        if self.error.is_none() {
            self.error = Some(msg.into());
        }
    }

    fn push_node(&mut self, kind: NodeKind, range: TextRange) -> Option<NodeId> {
        let parent = self.stack.last().copied();
        if parent.is_none() {
            if self.root.is_some() {
                self.fail(format!("{kind:?} outside the root node"));
                return None;
            }
            self.root = Some(NodeId(self.nodes.len() as u32));
        }

        let id = NodeId(self.nodes.len() as u32);
        let prev = parent.and_then(|p| self.last_child[p.index()]);
        self.nodes.push(NodeData {
            kind,
            parent,
            first_child: None,
            prev_sibling: prev,
            next_sibling: None,
            range,
        });
        self.last_child.push(None);

        if let Some(prev) = prev {
            self.nodes[prev.index()].next_sibling = Some(id);
        } else if let Some(parent) = parent {
            self.nodes[parent.index()].first_child = Some(id);
        }
        if let Some(parent) = parent {
            self.last_child[parent.index()] = Some(id);
        }
        Some(id)
    }

    /// Open an interior node; its range starts at the current cursor.
    pub fn start_node(&mut self, kind: NodeKind) -> &mut Self {
        let start = self.source.len();
        if let Some(id) = self.push_node(kind, TextRange::new(start, start)) {
            self.stack.push(id);
        }
        self
    }

    /// Close the most recently opened node, sealing its range.
    pub fn finish_node(&mut self) -> &mut Self {
        match self.stack.pop() {
            Some(id) => self.nodes[id.index()].range.end = self.source.len(),
            None => self.fail("finish_node with no node open"),
        }
        self
    }

    /// Emit a leaf token, appending `text` to the source.
    pub fn token(&mut self, kind: NodeKind, text: &str) -> &mut Self {
        let start = self.source.len();
        self.source.push_str(text);
        let range = TextRange::new(start, self.source.len());
        self.push_node(kind, range);
        self
    }

    /// Shorthand for a whitespace token.
    pub fn ws(&mut self, text: &str) -> &mut Self {
        self.token(NodeKind::Whitespace, text)
    }

    pub fn build(mut self) -> Result<SyntaxTree> {
        if let Some(&open) = self.stack.last() {
            let kind = self.nodes[open.index()].kind;
            self.fail(format!("unclosed {kind:?} node"));
        }
        if let Some(msg) = self.error {
            return Err(LuanavError::TreeBuild(msg));
        }
        let root = match self.root {
            Some(root) if self.nodes[root.index()].kind == NodeKind::File => root,
            Some(root) => {
                let kind = self.nodes[root.index()].kind;
                return Err(LuanavError::TreeBuild(format!(
                    "root must be a File node, got {kind:?}"
                )));
            }
            None => return Err(LuanavError::TreeBuild("empty tree".into())),
        };
        Ok(SyntaxTree {
            nodes: self.nodes,
            source: self.source,
            root,
        })
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

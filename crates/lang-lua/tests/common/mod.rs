//! Shared fixtures: an in-memory short-name index and a canned
//! type-guessing service, so resolution runs against hand-built trees.

#![allow(dead_code)]

use indexmap::IndexMap;
use luanav_core::model::Ty;
use luanav_core::search::{SearchContext, ShortNamesIndex, TypeGuessing};
use luanav_core::tree::{Node, NodeId, NodeKind, SyntaxTree};

#[derive(Default)]
pub struct FixtureIndex<'t> {
    classes: IndexMap<String, Node<'t>>,
    types: IndexMap<String, Node<'t>>,
}

impl<'t> FixtureIndex<'t> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_class(&mut self, name: &str, decl: Node<'t>) {
        self.classes.insert(name.to_string(), decl);
    }

    pub fn add_type(&mut self, name: &str, decl: Node<'t>) {
        self.types.insert(name.to_string(), decl);
    }
}

impl<'t> ShortNamesIndex<'t> for FixtureIndex<'t> {
    fn find_class(&self, name: &str, _ctx: &SearchContext<'t>) -> Option<Node<'t>> {
        self.classes.get(name).copied()
    }

    fn find_type(&self, name: &str, _ctx: &SearchContext<'t>) -> Option<Node<'t>> {
        self.types.get(name).copied()
    }
}

/// Canned per-node guesses; everything unlisted guesses `Unknown`.
#[derive(Default)]
pub struct FixtureTypes {
    guesses: IndexMap<NodeId, Ty>,
}

impl FixtureTypes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, node: Node<'_>, ty: Ty) {
        self.guesses.insert(node.id(), ty);
    }
}

impl<'t> TypeGuessing<'t> for FixtureTypes {
    fn guess_parent_type(&self, node: Node<'t>, _ctx: &SearchContext<'t>) -> Ty {
        self.guesses.get(&node.id()).cloned().unwrap_or_default()
    }
}

fn dfs<'t>(node: Node<'t>, out: &mut Vec<Node<'t>>) {
    out.push(node);
    for child in node.children() {
        dfs(child, out);
    }
}

pub fn all_nodes(tree: &SyntaxTree) -> Vec<Node<'_>> {
    let mut out = Vec::new();
    dfs(tree.root(), &mut out);
    out
}

/// First node of `kind` in document order; panics if the fixture lacks one.
pub fn node_of_kind(tree: &SyntaxTree, kind: NodeKind) -> Node<'_> {
    all_nodes(tree)
        .into_iter()
        .find(|n| n.kind() == kind)
        .unwrap_or_else(|| panic!("fixture has no {kind:?} node"))
}

pub fn nodes_of_kind(tree: &SyntaxTree, kind: NodeKind) -> Vec<Node<'_>> {
    all_nodes(tree)
        .into_iter()
        .filter(|n| n.kind() == kind)
        .collect()
}

/// First node of `kind` whose text equals `text`.
pub fn node_with_text<'t>(tree: &'t SyntaxTree, kind: NodeKind, text: &str) -> Node<'t> {
    all_nodes(tree)
        .into_iter()
        .find(|n| n.kind() == kind && n.text() == text)
        .unwrap_or_else(|| panic!("fixture has no {kind:?} node with text {text:?}"))
}

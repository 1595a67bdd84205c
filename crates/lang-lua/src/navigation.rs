//! Ancestor, sibling and offset navigation primitives.
//!
//! All walks are strictly monotonic toward the file root and stop there;
//! absent input is a no-op, never a fault.

use luanav_core::tree::{Node, NodeClass, NodeKind, SyntaxTree};

/// Nearest strict ancestor matching `target` and not matched by any class
/// in `skips`.
///
/// Skipped ancestors are passed over without blocking the upward walk.
/// Returns `None` once the file root is reached without a match, and never
/// returns the start node itself.
pub fn find_ancestor_of_type<'t>(
    node: Option<Node<'t>>,
    target: NodeClass,
    skips: &[NodeClass],
) -> Option<Node<'t>> {
    let mut cur = node?.parent();
    while let Some(n) = cur {
        if target.matches(n) && !skips.iter().any(|s| s.matches(n)) {
            return Some(n);
        }
        if n.is_file() {
            return None;
        }
        cur = n.parent();
    }
    None
}

fn skip_siblings_backward<'t>(
    node: Option<Node<'t>>,
    skip: impl Fn(NodeKind) -> bool,
) -> Option<Node<'t>> {
    let mut cur = node?.prev_sibling();
    while let Some(n) = cur {
        if !skip(n.kind()) {
            return Some(n);
        }
        cur = n.prev_sibling();
    }
    None
}

fn skip_siblings_forward<'t>(
    node: Option<Node<'t>>,
    skip: impl Fn(NodeKind) -> bool,
) -> Option<Node<'t>> {
    let mut cur = node?.next_sibling();
    while let Some(n) = cur {
        if !skip(n.kind()) {
            return Some(n);
        }
        cur = n.next_sibling();
    }
    None
}

fn is_ws(kind: NodeKind) -> bool {
    kind == NodeKind::Whitespace
}

fn is_ws_or_comment(kind: NodeKind) -> bool {
    matches!(
        kind,
        NodeKind::Whitespace | NodeKind::Comment | NodeKind::DocComment
    )
}

/// Nearest preceding sibling that is not whitespace.
pub fn skip_whitespaces_backward(node: Option<Node<'_>>) -> Option<Node<'_>> {
    skip_siblings_backward(node, is_ws)
}

/// Nearest following sibling that is not whitespace.
pub fn skip_whitespaces_forward(node: Option<Node<'_>>) -> Option<Node<'_>> {
    skip_siblings_forward(node, is_ws)
}

/// Nearest preceding sibling that is neither whitespace nor a comment.
pub fn skip_whitespaces_and_comments_backward(node: Option<Node<'_>>) -> Option<Node<'_>> {
    skip_siblings_backward(node, is_ws_or_comment)
}

/// Nearest following sibling that is neither whitespace nor a comment.
pub fn skip_whitespaces_and_comments_forward(node: Option<Node<'_>>) -> Option<Node<'_>> {
    skip_siblings_forward(node, is_ws_or_comment)
}

/// Walk backward through lexical scope, visiting label statements.
///
/// Preceding siblings are visited first; when a sibling chain is exhausted
/// the walk continues from the parent's preceding siblings. Descendant
/// subtrees are never entered. `visit` returning `false` stops the walk,
/// as does reaching the file root.
pub fn walk_up_label<'t>(node: Node<'t>, mut visit: impl FnMut(Node<'t>) -> bool) {
    let mut current = node;
    let mut prev = current.prev_sibling();
    loop {
        let candidate = match prev {
            Some(p) => p,
            None => match current.parent() {
                Some(p) => p,
                None => break,
            },
        };
        if candidate.is_file() {
            break;
        }
        if candidate.kind() == NodeKind::LabelStat && !visit(candidate) {
            break;
        }
        current = candidate;
        prev = candidate.prev_sibling();
    }
}

/// Visit top-level statements preceding the one containing `node`.
///
/// First ascends to the top-level statement (the ancestor whose parent is
/// the file root), then iterates backward over its preceding siblings at
/// that depth, visiting those matching `target`. `visit` returning `false`
/// stops the iteration. The containing statement itself is visited first
/// when it matches.
pub fn walk_top_level_in_file<'t>(
    node: Option<Node<'t>>,
    target: NodeClass,
    mut visit: impl FnMut(Node<'t>) -> bool,
) {
    let Some(node) = node else { return };
    let mut top = node;
    loop {
        match top.parent() {
            Some(p) if p.is_file() => break,
            Some(p) => top = p,
            None => return,
        }
    }

    let mut child = Some(top);
    while let Some(c) = child {
        if target.matches(c) && !visit(c) {
            break;
        }
        child = c.prev_sibling();
    }
}

/// Innermost node of class `target` covering `offset`, with a one-byte
/// backward retry.
///
/// The retry handles a caret sitting exactly on a node's trailing boundary.
/// With `strict_start` the node must also begin exactly at the queried
/// offset.
pub fn find_element_of_class_at_offset<'t>(
    tree: &'t SyntaxTree,
    offset: usize,
    target: NodeClass,
    strict_start: bool,
) -> Option<Node<'t>> {
    element_of_class_at_offset(tree, offset, target, strict_start).or_else(|| {
        offset
            .checked_sub(1)
            .and_then(|prev| element_of_class_at_offset(tree, prev, target, strict_start))
    })
}

fn element_of_class_at_offset<'t>(
    tree: &'t SyntaxTree,
    offset: usize,
    target: NodeClass,
    strict_start: bool,
) -> Option<Node<'t>> {
    let mut node = tree.root();
    if !node.range().contains(offset) {
        return None;
    }
    // descend to the innermost node covering the offset
    'down: loop {
        for child in node.children() {
            if child.range().contains(offset) {
                node = child;
                continue 'down;
            }
        }
        break;
    }
    // then take the first covering ancestor (the leaf included) that matches
    let mut cur = Some(node);
    while let Some(n) = cur {
        if target.matches(n) && (!strict_start || n.range().start == offset) {
            return Some(n);
        }
        cur = n.parent();
    }
    None
}

/// Visit the direct children of `parent` left to right; `visit` returning
/// `false` stops the iteration.
pub fn process_children<'t>(parent: Node<'t>, mut visit: impl FnMut(Node<'t>) -> bool) {
    let mut child = parent.first_child();
    while let Some(c) = child {
        if !visit(c) {
            break;
        }
        child = c.next_sibling();
    }
}

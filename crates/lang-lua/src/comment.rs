//! Association between declarations and their documentation comments.
//!
//! Doc comments attach *inside* their owner statement: the `DocComment`
//! node is a direct child of the declaration it documents.

use crate::ast;
use luanav_core::tree::{Node, NodeKind};

/// The comment containing a documentation element.
///
/// Well-formed doc elements always live under a `DocComment`; a `None`
/// here means the element was not part of a comment subtree at all.
pub fn find_container(doc_elem: Node<'_>) -> Option<Node<'_>> {
    let mut cur = doc_elem.parent();
    while let Some(n) = cur {
        if n.kind() == NodeKind::DocComment {
            return Some(n);
        }
        cur = n.parent();
    }
    None
}

/// The doc comment attached to a declaration, if any.
pub fn comment_of(owner: Node<'_>) -> Option<Node<'_>> {
    if !owner.kind().is_comment_owner() {
        return None;
    }
    owner.children().find(|c| c.kind() == NodeKind::DocComment)
}

/// The declaration a doc comment is attached to, if any.
///
/// Inverse of [`comment_of`]: the comment's parent, when that parent is a
/// comment-owner declaration.
pub fn find_owner(comment: Node<'_>) -> Option<Node<'_>> {
    if comment.kind() != NodeKind::DocComment {
        return None;
    }
    comment.parent().filter(|p| p.kind().is_comment_owner())
}

/// Look up `name` in the comment's own generic registry.
///
/// Only the comment's direct `DocGenericDef` children count; generics
/// declared by a nested `DocFunctionTy` signature belong to that signature's
/// scope, not to the comment.
pub fn find_generic<'t>(comment: Node<'t>, name: &str) -> Option<Node<'t>> {
    ast::generic_defs(comment).find(|def| ast::generic_name(*def) == Some(name))
}

//! Structural accessors over the closed node-kind set.
//!
//! These are the Lua-shape conventions the resolver relies on: an
//! `AssignStat` carries its target list and value list as its first and
//! second `ExprList` children, doc generics hang directly under their
//! declaring `DocFunctionTy`/`DocTagClass`/`DocComment`, and a
//! `DocGenericDef` names itself through its `Name` child.

use crate::comment;
use crate::navigation::find_ancestor_of_type;
use luanav_core::tree::{Node, NodeClass, NodeKind};

pub const WORD_SELF: &str = "self";

/// Classification of a literal expression by its token text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    String,
    Bool,
    Number,
    Nil,
    Unknown,
}

/// Classify a `LiteralExpr` leaf.
pub fn literal_kind(node: Node<'_>) -> LiteralKind {
    if node.kind() != NodeKind::LiteralExpr {
        return LiteralKind::Unknown;
    }
    let text = node.text();
    match text {
        "true" | "false" => LiteralKind::Bool,
        "nil" => LiteralKind::Nil,
        _ if text.starts_with('"') || text.starts_with('\'') || text.starts_with("[[") => {
            LiteralKind::String
        }
        _ if text.bytes().next().is_some_and(|b| b.is_ascii_digit()) => LiteralKind::Number,
        _ => LiteralKind::Unknown,
    }
}

/// The function-body owner a parameter name is declared in.
pub fn func_body_owner_of(param: Node<'_>) -> Option<Node<'_>> {
    find_ancestor_of_type(Some(param), NodeClass::FuncBodyOwner, &[])
}

/// The target list (left-hand side) of an assignment statement.
pub fn assign_var_list(assign: Node<'_>) -> Option<Node<'_>> {
    if assign.kind() != NodeKind::AssignStat {
        return None;
    }
    assign.children().find(|c| c.kind() == NodeKind::ExprList)
}

/// The value list (right-hand side) of an assignment statement.
pub fn assign_value_list(assign: Node<'_>) -> Option<Node<'_>> {
    if assign.kind() != NodeKind::AssignStat {
        return None;
    }
    assign
        .children()
        .filter(|c| c.kind() == NodeKind::ExprList)
        .nth(1)
}

/// The expression children of an `ExprList` or `IndexExpr`.
pub fn exprs(node: Node<'_>) -> impl Iterator<Item = Node<'_>> {
    node.children().filter(|c| c.kind().is_expr())
}

pub fn expr_at(list: Node<'_>, idx: usize) -> Option<Node<'_>> {
    exprs(list).nth(idx)
}

/// The prefix of an index expression (`a` in `a.b`).
pub fn index_expr_prefix(index: Node<'_>) -> Option<Node<'_>> {
    if index.kind() != NodeKind::IndexExpr {
        return None;
    }
    index.first_child()
}

/// Direct generic-parameter declarations of a signature, class tag or comment.
pub fn generic_defs(node: Node<'_>) -> impl Iterator<Item = Node<'_>> {
    node.children()
        .filter(|c| c.kind() == NodeKind::DocGenericDef)
}

/// The declared name of a generic definition.
pub fn generic_name(def: Node<'_>) -> Option<&str> {
    def.children()
        .find(|c| c.kind() == NodeKind::Name)
        .map(|n| n.text())
}

/// Pair the given declared name of a `local a, b = x, y` statement with its
/// initializer expression, by position.
pub fn local_def_expr_for<'t>(local: Node<'t>, name_def: Node<'t>) -> Option<Node<'t>> {
    if local.kind() != NodeKind::LocalDef {
        return None;
    }
    let values = local.children().find(|c| c.kind() == NodeKind::ExprList)?;
    let idx = local
        .children()
        .filter(|c| c.kind() == NodeKind::Name)
        .position(|c| c == name_def)?;
    expr_at(values, idx)
}

/// The program-side name a class tag aliases, for `Target = ...` owners:
/// the text of the assignment's first target expression.
///
/// Local definitions initialized with an anonymous table take their alias
/// from the table-type naming service, which lives outside this crate;
/// such tags yield `None` here.
pub fn alias_name(tag: Node<'_>) -> Option<&str> {
    if tag.kind() != NodeKind::DocTagClass {
        return None;
    }
    let owner = comment::find_owner(comment::find_container(tag)?)?;
    if owner.kind() != NodeKind::AssignStat {
        return None;
    }
    Some(expr_at(assign_var_list(owner)?, 0)?.text())
}

//! Generic-definition resolution and the class/type lookup facade.
//!
//! A type-parameter name used inside an annotation is bound by the nearest
//! of three declaration channels: explicit `DocFunctionTy` signature
//! generics, doc-comment generics, and owning-class generics, in that
//! order, repeated outward through enclosing declaration owners. Only when
//! no generic binds the name does the project short-name index answer.

use crate::navigation::find_ancestor_of_type;
use crate::{ast, comment};
use luanav_core::model::Ty;
use luanav_core::search::SearchContext;
use luanav_core::tree::{Node, NodeClass, NodeKind};
use tracing::{debug, trace};

fn generic_def_in<'t>(scope: Node<'t>, name: &str) -> Option<Node<'t>> {
    ast::generic_defs(scope).find(|def| ast::generic_name(*def) == Some(name))
}

/// Look up `name` among the generics of the class owning `owner`.
///
/// A single-value assignment statement is first unwrapped to its value
/// expression (`Owner.method = function(...) end` declarations). For a
/// function-body owner the parent type is guessed; when it is a class, the
/// class's indexed declaration is scanned for a matching generic.
pub fn find_owner_class_generic_def<'t>(
    owner: Node<'t>,
    name: &str,
    ctx: &SearchContext<'t>,
) -> Option<Node<'t>> {
    let mut owner = owner;
    if owner.kind() == NodeKind::AssignStat {
        let values = ast::assign_value_list(owner)?;
        let mut values = ast::exprs(values);
        let single = values.next()?;
        if values.next().is_some() {
            return None;
        }
        owner = single;
    }

    if !owner.kind().is_func_body_owner() {
        return None;
    }

    let cls = ctx.types.guess_parent_type(owner, ctx);
    let cls = cls.as_class()?;
    let decl = ctx.index.find_class(cls.class_name(), ctx)?;
    if decl.kind() != NodeKind::DocTagClass {
        return None;
    }
    generic_def_in(decl, name)
}

/// Resolve `name` to its declaring generic definition, walking outward from
/// `current`.
///
/// Lookup order: nested `DocFunctionTy` signature scopes, the containing
/// comment's registry (for doc elements), the current owner's attached
/// comment (suppressed by `ancestral_only`), the current owner's class
/// generics, then each outward comment-owner ancestor's comment and class
/// generics. First match wins; `None` when nothing binds the name.
pub fn find_generic_def<'t>(
    name: &str,
    current: Node<'t>,
    ancestral_only: bool,
    ctx: &SearchContext<'t>,
) -> Option<Node<'t>> {
    // innermost signature binders shadow everything else
    let fn_ty_class = NodeClass::Kind(NodeKind::DocFunctionTy);
    let mut fn_ty = find_ancestor_of_type(Some(current), fn_ty_class, &[]);
    while let Some(sig) = fn_ty {
        if let Some(def) = generic_def_in(sig, name) {
            trace!(name, "generic bound by enclosing signature");
            return Some(def);
        }
        fn_ty = find_ancestor_of_type(Some(sig), fn_ty_class, &[]);
    }

    if current.kind().is_doc_element() {
        if let Some(container) = comment::find_container(current) {
            if let Some(def) = comment::find_generic(container, name) {
                trace!(name, "generic bound by containing comment");
                return Some(def);
            }
        }
    }

    if current.kind().is_comment_owner() {
        if !ancestral_only {
            if let Some(def) =
                comment::comment_of(current).and_then(|c| comment::find_generic(c, name))
            {
                trace!(name, "generic bound by owner comment");
                return Some(def);
            }
        }
        if let Some(def) = find_owner_class_generic_def(current, name, ctx) {
            trace!(name, "generic bound by owner class");
            return Some(def);
        }
    }

    // Ancestral owners' comments are consulted even under ancestral_only;
    // the flag gates only the current owner's own comment.
    let mut owner = find_ancestor_of_type(Some(current), NodeClass::CommentOwner, &[]);
    while let Some(ancestor) = owner {
        if let Some(def) =
            comment::comment_of(ancestor).and_then(|c| comment::find_generic(c, name))
        {
            trace!(name, "generic bound by ancestral owner comment");
            return Some(def);
        }
        if let Some(def) = find_owner_class_generic_def(ancestor, name, ctx) {
            trace!(name, "generic bound by ancestral owner class");
            return Some(def);
        }
        owner = find_ancestor_of_type(Some(ancestor), NodeClass::CommentOwner, &[]);
    }

    None
}

/// [`find_generic_def`] with ancestral-only suppression off.
pub fn find_generic_def_at<'t>(
    name: &str,
    current: Node<'t>,
    ctx: &SearchContext<'t>,
) -> Option<Node<'t>> {
    find_generic_def(name, current, false, ctx)
}

/// [`find_generic_def_at`] from the context's current element, `None` when
/// the context holds no element.
pub fn find_generic_def_in_context<'t>(name: &str, ctx: &SearchContext<'t>) -> Option<Node<'t>> {
    ctx.element.and_then(|e| find_generic_def_at(name, e, ctx))
}

/// Resolve a class name: an in-scope generic parameter shadows any indexed
/// class of the same name.
pub fn find_class<'t>(name: &str, ctx: &SearchContext<'t>) -> Option<Node<'t>> {
    if let Some(def) = find_generic_def_in_context(name, ctx) {
        debug!(name, "class name resolved to generic parameter");
        return Some(def);
    }
    ctx.index.find_class(name, ctx)
}

/// Resolve a type name: an in-scope generic parameter shadows any indexed
/// type of the same name.
pub fn find_type<'t>(name: &str, ctx: &SearchContext<'t>) -> Option<Node<'t>> {
    if let Some(def) = find_generic_def_in_context(name, ctx) {
        debug!(name, "type name resolved to generic parameter");
        return Some(def);
    }
    ctx.index.find_type(name, ctx)
}

/// "What class's method am I lexically inside."
///
/// Walks from `current` to file scope. Function-body owners answer with
/// their guessed parent type; `Owner.method = function() end` assignments
/// answer with the index target's guessed parent type, except for a bare
/// single-segment `self` index which carries no receiver information.
pub fn find_context_class<'t>(current: Node<'t>, ctx: &SearchContext<'t>) -> Ty {
    let mut cur = Some(current);
    while let Some(n) = cur {
        if n.is_file() {
            break;
        }
        if n.kind().is_func_body_owner() {
            let ty = ctx.types.guess_parent_type(n, ctx);
            if !ty.is_unknown() {
                return ty;
            }
        } else if n.kind() == NodeKind::AssignStat {
            if let Some(ty) = assign_receiver_type(n, ctx) {
                return ty;
            }
        }
        cur = n.parent();
    }
    Ty::Unknown
}

fn assign_receiver_type<'t>(assign: Node<'t>, ctx: &SearchContext<'t>) -> Option<Ty> {
    let mut values = ast::exprs(ast::assign_value_list(assign)?);
    let value = values.next()?;
    if values.next().is_some() {
        return None;
    }
    let var = ast::expr_at(ast::assign_var_list(assign)?, 0)?;
    if !value.kind().is_func_body_owner() || var.kind() != NodeKind::IndexExpr {
        return None;
    }

    let segments = ast::exprs(var).count();
    let prefix = ast::index_expr_prefix(var)?;
    if segments == 1 && prefix.text() == ast::WORD_SELF {
        return None;
    }

    let ty = ctx.types.guess_parent_type(var, ctx);
    if ty.is_unknown() { None } else { Some(ty) }
}

mod common;

use common::{node_of_kind, node_with_text, nodes_of_kind, FixtureIndex, FixtureTypes};
use luanav_core::model::Ty;
use luanav_core::search::SearchContext;
use luanav_core::tree::{Node, NodeKind, SyntaxTree, TreeBuilder};
use luanav_lua::{
    find_class, find_context_class, find_generic_def, find_generic_def_at,
    find_owner_class_generic_def, find_type,
};

/// A class declaration plus an `Foo.m = function() end` method:
///
/// ```lua
/// ---@class Foo<T, K>
/// local Foo
/// ---@generic T            (comment-level, optional)
/// ---fun<T>(x: T)          (signature-level, optional)
/// Foo.m = function() body end
/// ```
fn class_method_tree(sig_generic: bool, comment_generic: bool) -> SyntaxTree {
    let mut b = TreeBuilder::new();
    b.start_node(NodeKind::File)
        .start_node(NodeKind::LocalDef)
        .start_node(NodeKind::DocComment)
        .start_node(NodeKind::DocTagClass)
        .token(NodeKind::Name, "Foo")
        .start_node(NodeKind::DocGenericDef)
        .token(NodeKind::Name, "T")
        .finish_node()
        .start_node(NodeKind::DocGenericDef)
        .token(NodeKind::Name, "K")
        .finish_node()
        .finish_node()
        .finish_node()
        .ws(" ")
        .token(NodeKind::Name, "Foo")
        .finish_node()
        .ws("\n");
    b.start_node(NodeKind::AssignStat).start_node(NodeKind::DocComment);
    if comment_generic {
        b.start_node(NodeKind::DocGenericDef)
            .token(NodeKind::Name, "T")
            .finish_node();
    }
    b.start_node(NodeKind::DocFunctionTy);
    if sig_generic {
        b.start_node(NodeKind::DocGenericDef)
            .token(NodeKind::Name, "T")
            .finish_node();
    }
    b.token(NodeKind::DocTypeRef, "T")
        .finish_node()
        .finish_node();
    b.start_node(NodeKind::ExprList)
        .start_node(NodeKind::IndexExpr)
        .token(NodeKind::NameExpr, "Foo")
        .ws(".")
        .token(NodeKind::Name, "m")
        .finish_node()
        .finish_node()
        .ws(" = ")
        .start_node(NodeKind::ExprList)
        .start_node(NodeKind::ClosureExpr)
        .start_node(NodeKind::Block)
        .token(NodeKind::NameExpr, "body")
        .finish_node()
        .finish_node()
        .finish_node()
        .finish_node()
        .finish_node();
    b.build().unwrap()
}

/// The generic definition named `name` declared directly under a node of
/// `parent_kind`; fixtures bind the same name in several scopes.
fn def_under<'t>(tree: &'t SyntaxTree, parent_kind: NodeKind, name: &str) -> Node<'t> {
    nodes_of_kind(tree, NodeKind::DocGenericDef)
        .into_iter()
        .find(|def| {
            def.parent().map(|p| p.kind()) == Some(parent_kind)
                && def.children().any(|c| c.kind() == NodeKind::Name && c.text() == name)
        })
        .unwrap_or_else(|| panic!("no generic {name:?} under {parent_kind:?}"))
}

fn foo_setup<'t>(tree: &'t SyntaxTree) -> (FixtureIndex<'t>, FixtureTypes) {
    let mut index = FixtureIndex::new();
    index.add_class("Foo", node_of_kind(tree, NodeKind::DocTagClass));
    let mut types = FixtureTypes::new();
    types.set(node_of_kind(tree, NodeKind::ClosureExpr), Ty::class("Foo"));
    (index, types)
}

#[test]
fn signature_generics_shadow_comment_and_class() {
    let tree = class_method_tree(true, true);
    let (index, types) = foo_setup(&tree);
    let ctx = SearchContext::new(&index, &types);

    let reference = node_of_kind(&tree, NodeKind::DocTypeRef);
    let def = find_generic_def_at("T", reference, &ctx).unwrap();
    assert_eq!(def, def_under(&tree, NodeKind::DocFunctionTy, "T"));
}

#[test]
fn comment_generics_shadow_class_generics() {
    let tree = class_method_tree(false, true);
    let (index, types) = foo_setup(&tree);
    let ctx = SearchContext::new(&index, &types);

    let reference = node_of_kind(&tree, NodeKind::DocTypeRef);
    let def = find_generic_def_at("T", reference, &ctx).unwrap();
    assert_eq!(def, def_under(&tree, NodeKind::DocComment, "T"));
}

#[test]
fn class_generics_are_the_last_binder() {
    let tree = class_method_tree(false, false);
    let (index, types) = foo_setup(&tree);
    let ctx = SearchContext::new(&index, &types);

    let reference = node_of_kind(&tree, NodeKind::DocTypeRef);
    let def = find_generic_def_at("T", reference, &ctx).unwrap();
    assert_eq!(def, def_under(&tree, NodeKind::DocTagClass, "T"));
}

#[test]
fn method_body_reaches_enclosing_class_generics() {
    // the method has no own generics for K and no comment binding for it;
    // resolution must climb to the class declaration
    let tree = class_method_tree(true, true);
    let (index, types) = foo_setup(&tree);
    let ctx = SearchContext::new(&index, &types);

    let body = node_with_text(&tree, NodeKind::NameExpr, "body");
    let def = find_generic_def_at("K", body, &ctx).unwrap();
    assert_eq!(def, def_under(&tree, NodeKind::DocTagClass, "K"));
}

#[test]
fn ancestral_only_suppresses_only_the_own_comment() {
    let tree = class_method_tree(false, true);
    let (index, types) = foo_setup(&tree);
    let ctx = SearchContext::new(&index, &types);

    let assign = node_of_kind(&tree, NodeKind::AssignStat);

    // normally the owner's attached comment binds first
    let def = find_generic_def("T", assign, false, &ctx).unwrap();
    assert_eq!(def, def_under(&tree, NodeKind::DocComment, "T"));

    // ancestral-only skips that comment but still consults class generics
    let def = find_generic_def("T", assign, true, &ctx).unwrap();
    assert_eq!(def, def_under(&tree, NodeKind::DocTagClass, "T"));
}

#[test]
fn ancestral_owner_comments_ignore_the_suppression_flag() {
    let tree = class_method_tree(false, true);
    let (index, types) = foo_setup(&tree);
    let ctx = SearchContext::new(&index, &types);

    // from inside the method body the assignment is an ancestral owner, and
    // its comment is consulted even with the suppression flag set
    let body = node_with_text(&tree, NodeKind::NameExpr, "body");
    let def = find_generic_def("T", body, true, &ctx).unwrap();
    assert_eq!(def, def_under(&tree, NodeKind::DocComment, "T"));
}

#[test]
fn non_class_parent_type_yields_no_class_generics() {
    let tree = class_method_tree(false, false);
    let mut index = FixtureIndex::new();
    index.add_class("Foo", node_of_kind(&tree, NodeKind::DocTagClass));
    let mut types = FixtureTypes::new();
    types.set(node_of_kind(&tree, NodeKind::ClosureExpr), Ty::Table);
    let ctx = SearchContext::new(&index, &types);

    let body = node_with_text(&tree, NodeKind::NameExpr, "body");
    assert!(find_generic_def_at("K", body, &ctx).is_none());
}

#[test]
fn multi_value_assignments_are_not_unwrapped() {
    // Foo.m, Foo.n = function() end, function() end
    let mut b = TreeBuilder::new();
    b.start_node(NodeKind::File)
        .start_node(NodeKind::AssignStat)
        .start_node(NodeKind::ExprList)
        .token(NodeKind::NameExpr, "m")
        .ws(", ")
        .token(NodeKind::NameExpr, "n")
        .finish_node()
        .ws(" = ")
        .start_node(NodeKind::ExprList)
        .start_node(NodeKind::ClosureExpr)
        .finish_node()
        .ws(", ")
        .start_node(NodeKind::ClosureExpr)
        .finish_node()
        .finish_node()
        .finish_node()
        .finish_node();
    let tree = b.build().unwrap();

    let index = FixtureIndex::new();
    let mut types = FixtureTypes::new();
    for closure in nodes_of_kind(&tree, NodeKind::ClosureExpr) {
        types.set(closure, Ty::class("Foo"));
    }
    let ctx = SearchContext::new(&index, &types);

    let assign = node_of_kind(&tree, NodeKind::AssignStat);
    assert!(find_owner_class_generic_def(assign, "T", &ctx).is_none());
}

#[test]
fn in_scope_generics_shadow_the_global_index() {
    let tree = class_method_tree(true, false);
    let mut index = FixtureIndex::new();
    index.add_class("Foo", node_of_kind(&tree, NodeKind::DocTagClass));
    // a global class and type that happen to be named like the generic
    index.add_class("T", node_of_kind(&tree, NodeKind::DocTagClass));
    index.add_type("T", node_of_kind(&tree, NodeKind::DocTagClass));
    let mut types = FixtureTypes::new();
    types.set(node_of_kind(&tree, NodeKind::ClosureExpr), Ty::class("Foo"));

    let reference = node_of_kind(&tree, NodeKind::DocTypeRef);
    let ctx = SearchContext::new(&index, &types).with_element(reference);

    let sig_def = def_under(&tree, NodeKind::DocFunctionTy, "T");
    assert_eq!(find_class("T", &ctx), Some(sig_def));
    assert_eq!(find_type("T", &ctx), Some(sig_def));

    // without a current element the generic channel is empty and the
    // global index answers
    let bare = SearchContext::new(&index, &types);
    assert_eq!(
        find_class("T", &bare),
        Some(node_of_kind(&tree, NodeKind::DocTagClass))
    );
}

#[test]
fn context_class_from_method_assignment_target() {
    let tree = class_method_tree(false, false);
    let index = FixtureIndex::new();
    let mut types = FixtureTypes::new();
    // the closure itself guesses nothing; the index target knows its owner
    types.set(node_of_kind(&tree, NodeKind::IndexExpr), Ty::class("Foo"));
    let ctx = SearchContext::new(&index, &types);

    let body = node_with_text(&tree, NodeKind::NameExpr, "body");
    assert_eq!(find_context_class(body, &ctx), Ty::class("Foo"));
}

#[test]
fn context_class_from_function_body_owner() {
    let tree = class_method_tree(false, false);
    let index = FixtureIndex::new();
    let mut types = FixtureTypes::new();
    types.set(node_of_kind(&tree, NodeKind::ClosureExpr), Ty::class("Foo"));
    let ctx = SearchContext::new(&index, &types);

    let body = node_with_text(&tree, NodeKind::NameExpr, "body");
    assert_eq!(find_context_class(body, &ctx), Ty::class("Foo"));
}

#[test]
fn bare_self_assignment_gives_no_context_class() {
    // self.m = function() body end
    let mut b = TreeBuilder::new();
    b.start_node(NodeKind::File)
        .start_node(NodeKind::AssignStat)
        .start_node(NodeKind::ExprList)
        .start_node(NodeKind::IndexExpr)
        .token(NodeKind::NameExpr, "self")
        .ws(".")
        .token(NodeKind::Name, "m")
        .finish_node()
        .finish_node()
        .ws(" = ")
        .start_node(NodeKind::ExprList)
        .start_node(NodeKind::ClosureExpr)
        .start_node(NodeKind::Block)
        .token(NodeKind::NameExpr, "body")
        .finish_node()
        .finish_node()
        .finish_node()
        .finish_node()
        .finish_node();
    let tree = b.build().unwrap();

    let index = FixtureIndex::new();
    let mut types = FixtureTypes::new();
    types.set(node_of_kind(&tree, NodeKind::IndexExpr), Ty::class("Foo"));
    let ctx = SearchContext::new(&index, &types);

    let body = node_with_text(&tree, NodeKind::NameExpr, "body");
    assert_eq!(find_context_class(body, &ctx), Ty::Unknown);
}

#[test]
fn resolution_is_deterministic() {
    let tree = class_method_tree(true, true);
    let (index, types) = foo_setup(&tree);
    let ctx = SearchContext::new(&index, &types);

    let reference = node_of_kind(&tree, NodeKind::DocTypeRef);
    let first = find_generic_def("T", reference, false, &ctx);
    for _ in 0..3 {
        assert_eq!(find_generic_def("T", reference, false, &ctx), first);
    }
}

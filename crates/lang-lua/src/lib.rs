//! Lua language plugin: syntax-tree navigation and generic resolution.
//!
//! Built on the tree model and collaborator seams of `luanav-core`. Two
//! layers: [`navigation`] holds the raw ancestor/sibling/offset primitives,
//! [`generics`] the layered lookup that resolves a type-parameter name to
//! its declaring node (signature generics, then doc-comment generics, then
//! owning-class generics, then the project short-name index).

pub mod ast;
pub mod comment;
pub mod generics;
pub mod navigation;

pub use generics::{
    find_class, find_context_class, find_generic_def, find_generic_def_at,
    find_generic_def_in_context, find_owner_class_generic_def, find_type,
};
pub use navigation::{
    find_ancestor_of_type, find_element_of_class_at_offset, process_children,
    skip_whitespaces_and_comments_backward, skip_whitespaces_and_comments_forward,
    skip_whitespaces_backward, skip_whitespaces_forward, walk_top_level_in_file, walk_up_label,
};

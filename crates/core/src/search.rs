//! Injected collaborator seams: the project short-name index, the
//! type-guessing service, and the per-call search context.
//!
//! Both services are capabilities handed in through [`SearchContext`],
//! never process-wide singletons, so the resolver runs unchanged against
//! fixture trees and fixture indices.

use crate::model::Ty;
use crate::tree::Node;

/// Project-wide lookup of declarations by short name.
///
/// Implemented by the host's index; consulted only after every in-scope
/// generic binder has been ruled out.
pub trait ShortNamesIndex<'t> {
    /// Find the declaration node of the class named `name`, if indexed.
    fn find_class(&self, name: &str, ctx: &SearchContext<'t>) -> Option<Node<'t>>;

    /// Find the declaration node of the type named `name`, if indexed.
    fn find_type(&self, name: &str, ctx: &SearchContext<'t>) -> Option<Node<'t>>;
}

/// Host type inference, reduced to the one question the resolver asks.
pub trait TypeGuessing<'t> {
    /// Guess the enclosing (receiver) type of a declaration-owner or index
    /// expression. Absence is `Ty::Unknown`, never an optional.
    fn guess_parent_type(&self, node: Node<'t>, ctx: &SearchContext<'t>) -> Ty;
}

/// Immutable per-resolution context.
///
/// Carries the injected project services and an optional "current element"
/// the caller is resolving from.
#[derive(Clone, Copy)]
pub struct SearchContext<'t> {
    pub index: &'t dyn ShortNamesIndex<'t>,
    pub types: &'t dyn TypeGuessing<'t>,
    pub element: Option<Node<'t>>,
}

impl<'t> SearchContext<'t> {
    pub fn new(index: &'t dyn ShortNamesIndex<'t>, types: &'t dyn TypeGuessing<'t>) -> Self {
        Self {
            index,
            types,
            element: None,
        }
    }

    pub fn with_element(self, element: Node<'t>) -> Self {
        Self {
            element: Some(element),
            ..self
        }
    }
}

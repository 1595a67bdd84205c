//! Inferred-type model shared between the plugin layer and host services.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named class type produced by the type-guessing service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct TyClass {
    pub name: String,
}

impl TyClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn class_name(&self) -> &str {
        &self.name
    }
}

/// The result of a type guess.
///
/// `Unknown` is a sentinel, not an absence: the type-guessing protocol
/// always yields a `Ty`, never an optional.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Ty {
    #[default]
    Unknown,
    Table,
    Function,
    Class(TyClass),
}

impl Ty {
    pub fn class(name: impl Into<String>) -> Self {
        Ty::Class(TyClass::new(name))
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Ty::Unknown)
    }

    pub fn as_class(&self) -> Option<&TyClass> {
        match self {
            Ty::Class(cls) => Some(cls),
            _ => None,
        }
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ty::Unknown => write!(f, "unknown"),
            Ty::Table => write!(f, "table"),
            Ty::Function => write!(f, "function"),
            Ty::Class(cls) => write!(f, "{}", cls.name),
        }
    }
}

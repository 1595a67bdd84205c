pub mod ty;

pub use ty::{Ty, TyClass};

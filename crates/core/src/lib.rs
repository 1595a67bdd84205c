pub mod error;
pub mod logging;
pub mod model;
pub mod search;
pub mod tree;

pub use error::Result;
pub use model::{Ty, TyClass};
pub use search::{SearchContext, ShortNamesIndex, TypeGuessing};
pub use tree::{Node, NodeClass, NodeId, NodeKind, SyntaxTree, TreeBuilder};

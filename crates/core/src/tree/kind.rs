use serde::{Deserialize, Serialize};

use super::Node;

/// The closed set of syntactic variants the resolver dispatches on.
///
/// `Doc*` kinds live inside a `DocComment` subtree; everything else is
/// ordinary program syntax.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    File,
    Block,
    Whitespace,
    Comment,
    DocComment,
    DocTagClass,
    DocGenericDef,
    DocFunctionTy,
    DocTypeRef,
    Name,
    ParamName,
    LabelStat,
    GotoStat,
    LocalDef,
    AssignStat,
    FuncDef,
    LocalFuncDef,
    ClosureExpr,
    ExprList,
    IndexExpr,
    NameExpr,
    LiteralExpr,
    TableExpr,
}

impl NodeKind {
    /// Declarations that may carry an attached doc comment.
    pub fn is_comment_owner(self) -> bool {
        matches!(
            self,
            NodeKind::LocalDef | NodeKind::AssignStat | NodeKind::FuncDef | NodeKind::LocalFuncDef
        )
    }

    /// Declarations that own a function body (and so have a parent type to guess).
    pub fn is_func_body_owner(self) -> bool {
        matches!(
            self,
            NodeKind::FuncDef | NodeKind::LocalFuncDef | NodeKind::ClosureExpr
        )
    }

    /// Elements of a documentation-comment subtree.
    pub fn is_doc_element(self) -> bool {
        matches!(
            self,
            NodeKind::DocTagClass
                | NodeKind::DocGenericDef
                | NodeKind::DocFunctionTy
                | NodeKind::DocTypeRef
        )
    }

    pub fn is_expr(self) -> bool {
        matches!(
            self,
            NodeKind::NameExpr
                | NodeKind::IndexExpr
                | NodeKind::ClosureExpr
                | NodeKind::LiteralExpr
                | NodeKind::TableExpr
        )
    }
}

/// A type test over nodes: either one concrete kind, or one of the
/// capability groups the resolver filters ancestors by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeClass {
    Kind(NodeKind),
    CommentOwner,
    FuncBodyOwner,
    DocElement,
}

impl NodeClass {
    pub fn matches(self, node: Node<'_>) -> bool {
        match self {
            NodeClass::Kind(kind) => node.kind() == kind,
            NodeClass::CommentOwner => node.kind().is_comment_owner(),
            NodeClass::FuncBodyOwner => node.kind().is_func_body_owner(),
            NodeClass::DocElement => node.kind().is_doc_element(),
        }
    }
}

impl From<NodeKind> for NodeClass {
    fn from(kind: NodeKind) -> Self {
        NodeClass::Kind(kind)
    }
}

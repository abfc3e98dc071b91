//! The boundary to an external semantic authority.
//!
//! The traversal core never resolves names itself. Whoever produced the tree
//! answers [`SemanticModel::resolve`]; symbols stay opaque on this side and
//! are only ever compared for identity.

use nuthatch_tree::{QueryError, SyntaxNode};

pub trait SemanticModel<'t> {
    /// Opaque resolution result.
    type Symbol: PartialEq;

    /// The meaning of `node`, if the authority knows one.
    fn resolve(&self, node: SyntaxNode<'t>) -> Option<Self::Symbol>;

    /// Like [`SemanticModel::resolve`], but a missing resolution is an error
    /// instead of a silent `None`.
    fn resolve_required(&self, node: SyntaxNode<'t>) -> Result<Self::Symbol, QueryError> {
        self.resolve(node).ok_or(QueryError::NotFound)
    }

    /// Whether `a` and `b` resolve to the same symbol. Unresolved nodes
    /// compare unequal, including to each other.
    fn same_resolution(&self, a: SyntaxNode<'t>, b: SyntaxNode<'t>) -> bool {
        match (self.resolve(a), self.resolve(b)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

//! Query operators over node iterators.

use thiserror::Error;

use crate::syntax::SyntaxNode;
use crate::syntax_kind::SyntaxKind;
use crate::syntax_set::SyntaxSet;

/// Failure of a query that demanded a specific shape from the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A query demanding a result matched nothing.
    #[error("no node matched the query")]
    NotFound,
    /// A query demanding exactly one result matched more than one node.
    #[error("more than one node matched the query")]
    Ambiguous,
    /// A node was taken for one kind but turned out to be another.
    #[error("expected {expected}, found {found:?}")]
    KindMismatch { expected: &'static str, found: SyntaxKind },
}

/// Chainable operators available on every iterator of nodes.
///
/// Arbitrary predicates compose through plain [`Iterator::filter`]; the
/// operators here cover kind dispatch and the exactly-one demand.
pub trait NodeIterator<'a>: Iterator<Item = SyntaxNode<'a>> + Sized {
    /// Keeps only nodes of the given kind.
    fn of_kind(self, kind: SyntaxKind) -> OfKind<Self> {
        OfKind { inner: self, kind }
    }

    /// Keeps only nodes whose kind is in the given set.
    fn of_set(self, set: SyntaxSet) -> OfSet<Self> {
        OfSet { inner: self, set }
    }

    /// Demands that exactly one node remains, and returns it.
    fn single(mut self) -> Result<SyntaxNode<'a>, QueryError> {
        let found = self.next().ok_or(QueryError::NotFound)?;
        if self.next().is_some() {
            return Err(QueryError::Ambiguous);
        }
        Ok(found)
    }
}

impl<'a, I: Iterator<Item = SyntaxNode<'a>>> NodeIterator<'a> for I {}

/// Iterator adapter for [`NodeIterator::of_kind`].
#[derive(Clone)]
pub struct OfKind<I> {
    inner: I,
    kind: SyntaxKind,
}

impl<'a, I: Iterator<Item = SyntaxNode<'a>>> Iterator for OfKind<I> {
    type Item = SyntaxNode<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let kind = self.kind;
        self.inner.find(|node| node.kind() == kind)
    }
}

/// Iterator adapter for [`NodeIterator::of_set`].
#[derive(Clone)]
pub struct OfSet<I> {
    inner: I,
    set: SyntaxSet,
}

impl<'a, I: Iterator<Item = SyntaxNode<'a>>> Iterator for OfSet<I> {
    type Item = SyntaxNode<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let set = self.set;
        self.inner.find(|node| set.contains(node.kind()))
    }
}

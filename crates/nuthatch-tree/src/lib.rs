//! Immutable syntax tree with parent pointers, lazy traversal, and typed
//! queries over trees handed over by an external front end.
//!
//! The tree is built once through [`Builder`] and then navigated by
//! lifetime-guided handles without allocation or refcounting.

/// Typed AST wrappers around the raw syntax tree.
pub mod ast;
mod builder;
mod nodes;
mod query;
mod syntax;
mod syntax_kind;
mod syntax_set;


/// Incremental builder for constructing a `SyntaxTree`.
pub use builder::Builder;
/// Query operators over node iterators, and their failure modes.
pub use query::{NodeIterator, OfKind, OfSet, QueryError};
/// Primary syntax tree API types and adapters.
pub use syntax::{Children, Descendants, Preorder, SyntaxNode, SyntaxTree, WalkEvent};
/// Node kinds used throughout the tree.
pub use syntax_kind::SyntaxKind;
/// Compact set for grouping `SyntaxKind` values.
pub use syntax_set::SyntaxSet;

//! Predicate-driven collection over whole subtrees.

use nuthatch_tree::{SyntaxKind, SyntaxNode, SyntaxSet};

use crate::{VisitControl, Visitor};

/// Accumulates every node of the target kinds that satisfies a predicate.
///
/// Collection never prunes: a match nested inside another match is still
/// found. [`Collector::run`] appends to the live accumulator, so reuse across
/// collection cycles goes through [`Collector::reset`].
pub struct Collector<'t, P> {
    targets: SyntaxSet,
    predicate: P,
    matches: Vec<SyntaxNode<'t>>,
}

impl<'t, P: FnMut(SyntaxNode<'t>) -> bool> Collector<'t, P> {
    pub fn new(targets: SyntaxSet, predicate: P) -> Self {
        Self { targets, predicate, matches: Vec::new() }
    }

    pub fn of_kind(kind: SyntaxKind, predicate: P) -> Self {
        Self::new(SyntaxSet::new([kind]), predicate)
    }

    /// Walks the subtree under `root`, appending matches in preorder.
    pub fn run(&mut self, root: SyntaxNode<'t>) {
        let Self { targets, predicate, matches } = self;

        let mut visitor = Visitor::new();
        visitor.on_kinds(*targets, |node| {
            if predicate(node) {
                matches.push(node);
            }
            VisitControl::Continue
        });
        visitor.visit(root);
    }

    /// The nodes collected so far, in visitation order.
    pub fn matches(&self) -> &[SyntaxNode<'t>] {
        &self.matches
    }

    /// Consumes the collector, handing out the accumulated matches.
    pub fn into_matches(self) -> Vec<SyntaxNode<'t>> {
        self.matches
    }

    /// Clears the accumulator for the next collection cycle.
    pub fn reset(&mut self) {
        self.matches.clear();
    }
}

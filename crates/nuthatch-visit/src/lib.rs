//! Kind-dispatched visitors and collectors over nuthatch syntax trees.
//!
//! Handlers register per node kind and only decide what happens next;
//! recursion stays inside the engine.

mod collector;
mod visitor;

/// Predicate-driven accumulation of matching nodes.
pub use collector::Collector;
/// The dispatch engine and the verdicts handlers steer it with.
pub use visitor::{VisitControl, Visitor};

//! Demo layer over the tree, visitor, and semantics crates.
//!
//! The fixtures stand in for an external front end; the walkthroughs narrate
//! what the API finds in them.

pub mod fixtures;
mod model;
pub mod walkthrough;

/// Table-backed semantic model for the fixture trees.
pub use model::{Symbol, TableModel};

//! Data structures the figure emitters accept.
//!
//! Lists need no type of their own: anything iterable with displayable
//! items can be drawn.

pub mod bst;
pub mod tree;

pub use bst::{Bst, BstNode};
pub use tree::{Nested, Tree, TreeSource};

//! An unbalanced [`BinarySearchTree`] and its iterators.
//!
//! The tree keeps every value in order by comparing it against the nodes on the way down, so the
//! cost of each operation depends on the height of the tree rather than the number of values. No
//! balancing is done: values added in sorted order produce a tree as tall as it is long.
#![warn(missing_docs)]

mod iter;
mod node;
mod search_tree;
mod tests;

pub use iter::*;
pub(crate) use node::*;
pub use search_tree::*;

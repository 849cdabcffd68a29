//! A general [`Tree`], where every node owns any number of children.
#![warn(missing_docs)]

mod iter;
mod node;
mod tests;
mod tree;

pub use iter::*;
pub use node::*;
pub use tree::*;

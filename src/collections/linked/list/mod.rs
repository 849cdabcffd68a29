//! A singly linked [`LinkedList`] and its iterators.
#![warn(missing_docs)]

mod iter;
mod linked_list;
mod node;

pub use iter::*;
pub use linked_list::*;
pub(crate) use node::*;

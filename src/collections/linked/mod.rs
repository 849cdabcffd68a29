//! Linked collection types. Currently just the singly linked [`LinkedList`], where each node owns
//! the next one in the chain.

pub mod list;

#[doc(inline)]
pub use list::LinkedList;

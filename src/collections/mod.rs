//! The container types, one module per family.
//!
//! # Purpose
//! Each container teaches a different strategy for trading off the cost of accessing, searching,
//! inserting and deleting values. None of them depend on each other, although several share
//! [`Vector`](contiguous::Vector) as their growable storage.
//!
//! | Container | Access | Search | Insert | Delete |
//! |-|-|-|-|-|
//! | [`List`](contiguous::List) | `O(1)` | `O(n)` | `O(1)`* | `O(1)`* |
//! | [`LinkedList`](linked::LinkedList) | `O(n)` | `O(n)` | `O(1)`** | `O(1)`** |
//! | [`Queue`](queue::Queue) | `O(1)` | `O(n)` | `O(1)` | `O(n)` |
//! | [`BinarySearchTree`](binary_tree::BinarySearchTree) | `O(h)` | `O(h)` | `O(h)` | `O(h)` |
//! | [`Tree`](tree::Tree) | `O(n)` | `O(n)` | `O(n)` | - |
//! | [`Graph`](graph::Graph) | `O(n)` | `O(n)` | `O(1)` | - |
//! | [`HashTable`](hash::HashTable) | `O(1)` | - | `O(1)` | `O(1)` |
//!
//! \* At the end of the List, the start is `O(n)`.
//!
//! \** Once the position has been found, which takes `O(n)`.
//!
//! # Errors
//! The error types used across all containers are re-exported here, along with
//! [`CollectionError`] which wraps any one of them.

#[cfg(feature = "binary_tree")]
pub mod binary_tree;
#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "graph")]
pub mod graph;
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "queue")]
pub mod queue;
#[cfg(feature = "tree")]
pub mod tree;


#[doc(inline)]
pub use crate::util::error::{
    CapacityExceeded, CollectionError, Endpoint, InvalidLine, InvalidPosition, OutOfBounds,
};

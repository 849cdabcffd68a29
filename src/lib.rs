//! A small library of fundamental data structures, written to show how each one works on the
//! inside rather than to replace the standard library.
//!
//! # Purpose
//! Every container here trades access, search, insertion and deletion cost in a different way.
//! The implementations stay deliberately plain: the [`BinarySearchTree`] is never rebalanced,
//! the [`HashTable`] never resizes and lets colliding keys overwrite each other, and no
//! container synchronizes access to itself. Those are the simplifications being taught, not bugs
//! waiting for a fix.
//!
//! # Memory
//! The contiguous containers sit directly on top of [`Memory`](memory::Memory), a fixed-size
//! region of addressable slots allocated once with the global allocator. [`List`] and
//! [`HashTable`] use it as is, while [`Vector`] grows by moving its slots into a bigger region.
//! None of the containers are built on [`Vec`].
//!
//! # Error Handling
//! Operations that can fail come in pairs: a `try_` method which returns a [`Result`] and a
//! plain method which panics with the error's message. Running out of elements is never an error,
//! `pop`, `shift`, `dequeue` and friends return [`None`] instead.
//!
//! Errors are small structs deriving [`Error`](std::error::Error), so they can be matched
//! statically. [`CollectionError`] collects all of them for callers who want to use `?` across
//! several containers.
//!
//! [`List`]: collections::contiguous::List
//! [`Vector`]: collections::contiguous::Vector
//! [`BinarySearchTree`]: collections::binary_tree::BinarySearchTree
//! [`HashTable`]: collections::hash::HashTable
//! [`CollectionError`]: collections::CollectionError

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;
pub mod memory;

pub(crate) mod util;

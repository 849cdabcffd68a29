//! A fixed-capacity [`HashTable`] along with [`KeyHasher`], the hasher it uses by default.
#![warn(missing_docs)]

mod hash_table;
mod hasher;
mod tests;

pub use hash_table::*;
pub use hasher::*;

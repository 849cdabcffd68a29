//! Contiguous collection types. [`List`] stores its elements in a fixed-size block of memory, while
//! [`Vector`] moves into a bigger block whenever it runs out of room.
#![warn(missing_docs)]

pub mod list;
pub mod vector;

#[doc(inline)]
pub use list::List;
#[doc(inline)]
pub use vector::Vector;

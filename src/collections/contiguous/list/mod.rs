//! A module containing [`List`], the fixed-capacity sequence that works directly with
//! [`Memory`](crate::memory::Memory) addresses, along with its borrowed [`Iter`]ator.
//!
//! [`List`] is also re-exported under the parent module.

mod list;

pub use list::*;

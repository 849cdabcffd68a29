//! A module containing [`Vector`] and associtated types.
//!
//! The other included types are [`Iter`], [`IterMut`] and [`IntoIter`] for borrowed and owned
//! iteration over a Vector.
//!
//! [`Vector`] is also re-exported under the parent module.

mod iter;
mod tests;
mod vector;

pub use iter::*;
pub use vector::*;

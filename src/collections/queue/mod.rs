//! A first-in, first-out [`Queue`], stored in a [`Vector`](crate::collections::contiguous::Vector).
#![warn(missing_docs)]

mod queue;

pub use queue::*;

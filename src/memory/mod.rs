//! A module containing [`Memory`], the fixed-size region of addressable slots that the contiguous
//! collections are built on.
//!
//! A computer's memory is just a long run of ordered slots, each identified by an address. Memory
//! mimics that: it is allocated once, with exactly the requested number of slots, and never grows
//! or shrinks. Collections that want to grow have to move their contents into a new Memory
//! themselves.
#![warn(missing_docs)]

mod memory;

pub use memory::*;

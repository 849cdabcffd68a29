//! A directed [`Graph`], where each [`GraphNode`] keeps a list of lines to other nodes.
//!
//! Nodes are owned by the Graph alone. Lines refer to their targets by [`NodeId`], a handle into
//! the Graph's nodes, so following a line always goes back through the Graph.
#![warn(missing_docs)]

mod graph;
mod node;
mod tests;

pub use graph::*;
pub use node::*;

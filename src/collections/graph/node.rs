use std::fmt::{self, Debug, Formatter};

use derive_more::Display;

use crate::collections::contiguous::Vector;
use crate::collections::contiguous::vector::Iter;
use crate::util::fmt::DebugWith;

/// A handle identifying a node within the [`Graph`](super::Graph) that created it. Handles are
/// never reused, because nodes can't be removed.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display("#{_0}")]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Returns the position of the node in the order nodes were added to its Graph.
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A node of a [`Graph`](super::Graph), holding a value and the outgoing lines to other nodes.
pub struct GraphNode<T> {
    pub(crate) id: NodeId,
    pub(crate) value: T,
    pub(crate) lines: Vector<NodeId>,
}

impl<T> GraphNode<T> {
    pub(crate) const fn new(id: NodeId, value: T) -> GraphNode<T> {
        GraphNode {
            id,
            value,
            lines: Vector::new(),
        }
    }

    /// Returns the handle of this node.
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// Returns a reference to the value held by this node.
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Returns an iterator over the targets of this node's lines, in the order they were added.
    /// The same target appears once for every line drawn to it.
    pub fn lines(&self) -> Iter<'_, NodeId> {
        self.lines.iter()
    }
}

impl<T: Clone> Clone for GraphNode<T> {
    fn clone(&self) -> Self {
        GraphNode {
            id: self.id,
            value: self.value.clone(),
            lines: self.lines.clone(),
        }
    }
}

impl<T: Debug> Debug for GraphNode<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphNode")
            .field("id", &self.id.0)
            .field("value", &self.value)
            .field("lines", &DebugWith(
                |f: &mut Formatter<'_>| f.debug_list().entries(self.lines().map(|id| id.0)).finish()
            ))
            .finish()
    }
}

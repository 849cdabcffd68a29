use std::fmt::{self, Debug, Display, Formatter};

use log::debug;

use super::{GraphNode, NodeId};
use crate::collections::contiguous::Vector;
use crate::collections::contiguous::vector::Iter;
#[doc(inline)]
pub use crate::util::error::{Endpoint, InvalidLine};
use crate::util::fmt::DebugWith;
use crate::util::result::ResultExtension;

/// A directed graph of values, stored as a list of nodes that each keep their own outgoing lines.
///
/// Nodes are found by comparing values, so the Graph works best when every value is unique, but
/// this isn't enforced: lookups by value stop at the first node that matches. Parallel lines
/// between the same pair of nodes are allowed.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of nodes in the Graph.
///
/// | Method | Complexity |
/// |-|-|
/// | `add_node` | `O(1)`* |
/// | `node` | `O(1)` |
/// | `find` | `O(n)` |
/// | `add_line` | `O(n)` to find both ends, then `O(1)`* |
///
/// \* Amortized, a node's lines and the Graph's nodes are both stored in growable
/// [`Vector`]s.
pub struct Graph<T> {
    pub(crate) nodes: Vector<GraphNode<T>>,
}

impl<T> Graph<T> {
    /// Creates a new Graph with no nodes.
    pub const fn new() -> Graph<T> {
        Graph {
            nodes: Vector::new(),
        }
    }

    /// Returns the number of nodes in the Graph.
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the Graph has no nodes.
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds a new node holding `value`, with no lines, and returns its handle.
    ///
    /// # Panics
    /// Panics if the Graph can't grow to hold another node.
    pub fn add_node(&mut self, value: T) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(GraphNode::new(id, value));
        id
    }

    /// Returns the node identified by `id`, or None if it belongs to another, larger Graph.
    pub fn node(&self, id: NodeId) -> Option<&GraphNode<T>> {
        self.nodes.get(id.0)
    }

    /// Returns an iterator over the nodes at the end of each of `node`'s lines.
    pub fn neighbours<'a>(
        &'a self,
        node: &'a GraphNode<T>,
    ) -> impl Iterator<Item = &'a GraphNode<T>> + 'a {
        node.lines().filter_map(|id| self.node(*id))
    }

    /// Returns an iterator over every node, in the order they were added.
    pub fn iter(&self) -> Iter<'_, GraphNode<T>> {
        self.nodes.iter()
    }
}

impl<T: PartialEq> Graph<T> {
    /// Returns the first node, in the order they were added, that holds a value equal to `value`.
    ///
    /// # Examples
    /// ```
    /// # use bitsy_collections::collections::graph::Graph;
    /// let mut graph = Graph::new();
    /// let first = graph.add_node("a");
    /// graph.add_node("a");
    /// assert_eq!(graph.find(&"a").map(|node| node.id()), Some(first));
    /// assert!(graph.find(&"b").is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&GraphNode<T>> {
        self.iter().find(|node| node.value == *value)
    }

    /// Returns the handle of the node [`find`](Graph::find) would return.
    pub fn find_id(&self, value: &T) -> Option<NodeId> {
        self.find(value).map(GraphNode::id)
    }

    /// Adds a line from the node holding `start` to the node holding `end`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if either endpoint can't be found.
    pub fn add_line(&mut self, start: &T, end: &T) {
        self.try_add_line(start, end).throw()
    }

    /// Adds a line from the node holding `start` to the node holding `end`, returning an [`Err`]
    /// naming the missing endpoint(s) if either can't be found. Nothing is changed on a failure.
    ///
    /// # Examples
    /// ```
    /// # use bitsy_collections::collections::graph::{Endpoint, Graph, InvalidLine};
    /// let mut graph = Graph::new();
    /// graph.add_node(1);
    /// graph.add_node(2);
    /// assert_eq!(graph.try_add_line(&1, &2), Ok(()));
    /// assert_eq!(graph.try_add_line(&1, &3), Err(InvalidLine { missing: Endpoint::End }));
    /// ```
    pub fn try_add_line(&mut self, start: &T, end: &T) -> Result<(), InvalidLine> {
        let end_id = self.find_id(end);
        let start_node = self.nodes.iter_mut().find(|node| node.value == *start);

        match (start_node, end_id) {
            (Some(node), Some(end_id)) => {
                node.lines.push(end_id);
                Ok(())
            },
            (Some(_), None) => Err(Self::invalid_line(Endpoint::End)),
            (None, Some(_)) => Err(Self::invalid_line(Endpoint::Start)),
            (None, None) => Err(Self::invalid_line(Endpoint::Both)),
        }
    }

    fn invalid_line(missing: Endpoint) -> InvalidLine {
        debug!("can't add line to graph, {missing} endpoint not found");
        InvalidLine { missing }
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Graph<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut graph = Graph::new();
        for value in iter {
            graph.add_node(value);
        }
        graph
    }
}

impl<T: Clone> Clone for Graph<T> {
    fn clone(&self) -> Self {
        Graph {
            nodes: self.nodes.clone(),
        }
    }
}

impl<T: Debug> Debug for Graph<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("nodes", &DebugWith(
                |f: &mut Formatter<'_>| f.debug_list().entries(self.iter()).finish()
            ))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for Graph<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|node| (node.value(), DebugWith(
                move |f: &mut Formatter<'_>| f.debug_list()
                    .entries(self.neighbours(node).map(GraphNode::value))
                    .finish()
            ))))
            .finish()
    }
}

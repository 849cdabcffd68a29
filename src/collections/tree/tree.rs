use std::fmt::{self, Debug, Display, Formatter};

use super::{Iter, TreeNode};
use crate::collections::contiguous::Vector;

/// A rooted tree where each node can have any number of children, in no particular order.
///
/// Values aren't kept in any order either, so finding one means visiting every node. Everything is
/// built on a pre-order walk: [`traverse`](Tree::traverse) visits a node before any of its
/// children, and the children in the order they were added.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of nodes in the Tree.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `traverse` | `O(n)` |
/// | `add` | `O(n)` |
/// | `contains` | `O(n)` |
pub struct Tree<T> {
    pub(crate) root: Option<TreeNode<T>>,
    pub(crate) len: usize,
}

impl<T> Tree<T> {
    /// Creates a new, empty Tree.
    pub const fn new() -> Tree<T> {
        Tree {
            root: None,
            len: 0,
        }
    }

    /// Creates a new Tree with a single root node holding `value`.
    pub const fn with_root(value: T) -> Tree<T> {
        Tree {
            root: Some(TreeNode::new(value)),
            len: 1,
        }
    }

    /// Returns the root node, if the Tree has one.
    pub const fn root(&self) -> Option<&TreeNode<T>> {
        self.root.as_ref()
    }

    /// Returns the number of nodes in the Tree.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Tree has no nodes.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Calls `visit` on every node in pre-order, doing nothing if the Tree is empty.
    ///
    /// # Examples
    /// ```
    /// # use bitsy_collections::collections::tree::Tree;
    /// let mut tree = Tree::with_root(1);
    /// tree.add(2, &1);
    /// tree.add(3, &1);
    /// tree.add(4, &2);
    ///
    /// let mut order = Vec::new();
    /// tree.traverse(|node| order.push(*node.value()));
    /// assert_eq!(order, [1, 2, 4, 3]);
    /// ```
    pub fn traverse<'a, F: FnMut(&'a TreeNode<T>)>(&'a self, mut visit: F) {
        if let Some(root) = &self.root {
            root.walk(&mut visit);
        }
    }

    /// Calls `visit` on every node in pre-order, with mutable access to each node's value.
    ///
    /// Children added to a node while it is being visited aren't visited themselves.
    pub fn traverse_mut<F: FnMut(&mut TreeNode<T>)>(&mut self, mut visit: F) {
        if let Some(root) = &mut self.root {
            root.walk_mut(&mut visit);
        }
    }

    /// Returns a pre-order iterator over the values in the Tree.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> Tree<T> {
    /// Returns true if any node in the Tree holds a value equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|item| item == value)
    }
}

impl<T: PartialEq + Clone> Tree<T> {
    /// Adds a new child holding `value` under every node whose value equals `parent`, returning
    /// the number of children added. An empty Tree takes `value` as its root instead, ignoring
    /// `parent`.
    ///
    /// Nothing happens if no node matches `parent`.
    pub fn add(&mut self, value: T, parent: &T) -> usize {
        if self.root.is_none() {
            self.root = Some(TreeNode::new(value));
            self.len = 1;
            return 1;
        }

        let mut added = 0;
        self.traverse_mut(|node| {
            if node.value == *parent {
                node.push_child(value.clone());
                added += 1;
            }
        });
        self.len += added;
        added
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        // Detach children before dropping each node, so that a deep Tree doesn't drop recursively.
        let mut pending = Vector::new();
        pending.extend(self.root.take());
        while let Some(mut node) = pending.pop() {
            while let Some(child) = node.children.pop() {
                pending.push(child);
            }
        }
    }
}

impl<T: Clone> Clone for Tree<T> {
    fn clone(&self) -> Self {
        Tree {
            root: self.root.clone(),
            len: self.len,
        }
    }
}

impl<T: PartialEq> PartialEq for Tree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
    }
}

impl<T: Eq> Eq for Tree<T> {}

impl<T: Debug> Debug for Tree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("root", &self.root)
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Debug> Display for Tree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

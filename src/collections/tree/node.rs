use std::fmt::{self, Debug, Formatter};

use crate::collections::contiguous::Vector;
use crate::collections::contiguous::vector::Iter as Children;
use crate::util::fmt::DebugWith;

/// A single node of a [`Tree`](super::Tree), owning its value and its children. Children are kept
/// in the order they were added, but that order carries no meaning.
pub struct TreeNode<T> {
    pub(crate) value: T,
    pub(crate) children: Vector<TreeNode<T>>,
}

impl<T> TreeNode<T> {
    pub(crate) const fn new(value: T) -> TreeNode<T> {
        TreeNode {
            value,
            children: Vector::new(),
        }
    }

    /// Returns a reference to the value held by this node.
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Returns a mutable reference to the value held by this node.
    pub const fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Returns an iterator over the direct children of this node.
    pub fn children(&self) -> Children<'_, TreeNode<T>> {
        self.children.iter()
    }

    /// Returns true if this node has no children.
    pub const fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub(crate) fn push_child(&mut self, value: T) {
        self.children.push(TreeNode::new(value));
    }

    pub(crate) fn walk<'a, F: FnMut(&'a TreeNode<T>)>(&'a self, visit: &mut F) {
        visit(self);
        for child in self.children.iter() {
            child.walk(visit);
        }
    }

    /// Like [`walk`](TreeNode::walk), but only descends into the children this node had before it
    /// was visited.
    pub(crate) fn walk_mut<F: FnMut(&mut TreeNode<T>)>(&mut self, visit: &mut F) {
        let count = self.children.len();
        visit(self);
        for child in self.children.iter_mut().take(count) {
            child.walk_mut(visit);
        }
    }
}

impl<T: Clone> Clone for TreeNode<T> {
    fn clone(&self) -> Self {
        TreeNode {
            value: self.value.clone(),
            children: self.children.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for TreeNode<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.children == other.children
    }
}

impl<T: Eq> Eq for TreeNode<T> {}

impl<T: Debug> Debug for TreeNode<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut node = f.debug_struct("TreeNode");
        node.field("value", &self.value);
        if !self.is_leaf() {
            node.field("children", &DebugWith(
                |f: &mut Formatter<'_>| f.debug_list().entries(self.children()).finish()
            ));
        }
        node.finish()
    }
}

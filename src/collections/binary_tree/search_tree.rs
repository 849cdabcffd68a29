use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};

use super::{Branch, Iter};
use crate::collections::contiguous::Vector;
use crate::util::fmt::DebugWith;

/// An unbalanced binary search tree holding distinct, ordered values.
///
/// Every value in a node's left subtree is less than the node's value, and every value in its
/// right subtree is greater. Adding a value equal to one already in the tree does nothing.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the BinarySearchTree.
/// - `h`: The height of the BinarySearchTree, between `log2(n)` and `n`.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `contains` | `O(h)` |
/// | `add` | `O(h)` |
/// | `remove` | `O(h)` |
/// | `first`/`last` | `O(h)` |
/// | `height` | `O(n)` |
pub struct BinarySearchTree<T> {
    pub(crate) root: Branch<T>,
    pub(crate) len: usize,
}

impl<T> BinarySearchTree<T> {
    /// Creates a new, empty BinarySearchTree.
    pub const fn new() -> BinarySearchTree<T> {
        BinarySearchTree {
            root: Branch(None),
            len: 0,
        }
    }

    /// Returns the number of values in the BinarySearchTree.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the BinarySearchTree contains no values.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes on the longest path from the root to a leaf, or 0 for an empty
    /// tree.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// Returns the smallest value in the tree, if there is one.
    pub fn first(&self) -> Option<&T> {
        self.root.first()
    }

    /// Returns the largest value in the tree, if there is one.
    pub fn last(&self) -> Option<&T> {
        self.root.last()
    }

    /// Removes and returns the smallest value in the tree, if there is one.
    pub fn pop_first(&mut self) -> Option<T> {
        let value = self.root.pop_first()?;
        self.len -= 1;
        Some(value)
    }

    /// Removes and returns the largest value in the tree, if there is one.
    pub fn pop_last(&mut self) -> Option<T> {
        let value = self.root.pop_last()?;
        self.len -= 1;
        Some(value)
    }

    /// Returns an iterator over the values of the tree in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: Ord> BinarySearchTree<T> {
    /// Adds `value` to the tree as a new leaf, returning true if it was added. If an equal value
    /// is already present, the tree is left as it was and false is returned.
    ///
    /// # Examples
    /// ```
    /// # use bitsy_collections::collections::binary_tree::BinarySearchTree;
    /// let mut tree = BinarySearchTree::new();
    /// assert!(tree.add(5));
    /// assert!(tree.add(3));
    /// assert!(!tree.add(5));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn add(&mut self, value: T) -> bool {
        let added = self.root.insert(value);
        if added {
            self.len += 1;
        }
        added
    }

    /// Returns true if the tree contains a value equal to `value`. Only the path from the root to
    /// where the value would be is visited.
    ///
    /// # Examples
    /// ```
    /// # use bitsy_collections::collections::binary_tree::BinarySearchTree;
    /// let tree: BinarySearchTree<_> = [5, 3, 8, 1, 4].into_iter().collect();
    /// assert!(tree.contains(&4));
    /// assert!(!tree.contains(&9));
    /// ```
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(value).is_some()
    }

    /// Returns a reference to the value in the tree equal to `value`, if there is one.
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.get(value)
    }

    /// Removes the value equal to `value` from the tree and returns it, if there is one.
    ///
    /// A removed node with two children is replaced by its in-order successor, the smallest value
    /// in its right subtree.
    pub fn remove<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let removed = self.root.remove(value)?;
        self.len -= 1;
        Some(removed)
    }
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        // Detach every node before dropping it, so that a tall tree doesn't drop recursively.
        let mut pending = Vector::new();
        pending.extend(self.root.0.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.0.take());
            pending.extend(node.right.0.take());
        }
    }
}

impl<T: Clone> Clone for BinarySearchTree<T> {
    fn clone(&self) -> Self {
        BinarySearchTree {
            root: self.root.clone(),
            len: self.len,
        }
    }
}

impl<T: PartialEq> PartialEq for BinarySearchTree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for BinarySearchTree<T> {}

impl<T: Debug> Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearchTree")
            .field("nodes", &DebugWith(
                |f: &mut Formatter<'_>| write!(f, "\n{:?}\n", self.root)
            ))
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Debug> Display for BinarySearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

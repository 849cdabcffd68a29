use std::iter::FusedIterator;

use super::{BinarySearchTree, Branch, Node};
use crate::collections::contiguous::Vector;

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut iter = Iter {
            stack: Vector::new(),
            len: self.len,
        };
        iter.push_left(&self.root);
        iter
    }
}

impl<T> IntoIterator for BinarySearchTree<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

/// A borrowed, in-order iterator over a [`BinarySearchTree`], yielding values in ascending order.
///
/// The iterator keeps a stack of the nodes whose left subtree is being visited, so it never holds
/// more than `h` nodes at once.
pub struct Iter<'a, T> {
    pub(crate) stack: Vector<&'a Node<T>>,
    pub(crate) len: usize,
}

impl<'a, T> Iter<'a, T> {
    /// Stacks `branch` and every node down its left edge.
    fn push_left(&mut self, mut branch: &'a Branch<T>) {
        while let Some(node) = branch.0.as_deref() {
            self.stack.push(node);
            branch = &node.left;
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(&node.right);
        self.len -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owned iterator over a [`BinarySearchTree`], taking values out smallest first.
pub struct IntoIter<T>(pub(crate) BinarySearchTree<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.pop_last()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

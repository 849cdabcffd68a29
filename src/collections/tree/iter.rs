use std::iter::FusedIterator;

use super::{Tree, TreeNode};
use crate::collections::contiguous::Vector;

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut stack = Vector::new();
        stack.extend(self.root.as_ref());
        Iter {
            stack,
            len: self.len,
        }
    }
}

/// A lazy pre-order iterator over the values of a [`Tree`].
///
/// Nodes waiting to be visited are kept on a stack, with each node's children pushed in reverse so
/// that the first child comes off next.
pub struct Iter<'a, T> {
    pub(crate) stack: Vector<&'a TreeNode<T>>,
    pub(crate) len: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        self.len -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

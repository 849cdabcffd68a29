use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Index, IndexMut};

use log::debug;

use super::{Iter, IterMut, Link, Node};
#[doc(inline)]
pub use crate::util::error::InvalidPosition;
use crate::util::fmt::DebugWith;
use crate::util::result::ResultExtension;

/// A singly linked list: a chain of nodes where each one owns the next.
///
/// Reaching a position means walking the chain from the head, but once there, adding or removing
/// a node only rewires a single link.
///
/// The splicing rules are strict. Adding at a position other than 0 needs both a node before the
/// position and a node already at it, so the list can't be extended past its last node this way.
/// Removing needs the removed node to have a successor, so neither the last node nor a lone head
/// can be removed. Failures are detected before anything is changed.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `i`: The position of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `get` | `O(i)` |
/// | `add` | `O(i)`, `O(1)` once found |
/// | `remove` | `O(i)`, `O(1)` once found |
/// | `contains` | `O(n)` |
pub struct LinkedList<T> {
    pub(crate) head: Link<T>,
    pub(crate) len: usize,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no nodes.
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            head: None,
            len: 0,
        }
    }

    /// Creates a new LinkedList with a single node holding `value`.
    pub fn with_head(value: T) -> LinkedList<T> {
        LinkedList {
            head: Some(Node::boxed(value, None)),
            len: 1,
        }
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the LinkedList contains no nodes.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    /// Returns a reference to the element at `position`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if there is no node at `position`.
    pub fn get(&self, position: usize) -> &T {
        self.try_get(position).throw()
    }

    /// Returns a reference to the element at `position` by walking from the head, returning an
    /// [`Err`] if the chain ends first.
    pub fn try_get(&self, position: usize) -> Result<&T, InvalidPosition> {
        match self.seek(position) {
            Some(node) => Ok(&node.value),
            None => Err(Self::invalid(position, self.len)),
        }
    }

    /// Returns a mutable reference to the element at `position`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if there is no node at `position`.
    pub fn get_mut(&mut self, position: usize) -> &mut T {
        self.try_get_mut(position).throw()
    }

    /// Returns a mutable reference to the element at `position`, returning an [`Err`] if the chain
    /// ends first.
    pub fn try_get_mut(&mut self, position: usize) -> Result<&mut T, InvalidPosition> {
        let len = self.len;
        match self.seek_mut(position) {
            Some(node) => Ok(&mut node.value),
            None => Err(Self::invalid(position, len)),
        }
    }

    /// Adds `value` so that it ends up at `position`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if the value can't be spliced in at `position`.
    pub fn add(&mut self, value: T, position: usize) {
        self.try_add(value, position).throw()
    }

    /// Adds `value` so that it ends up at `position`, returning an [`Err`] rather than panicking on
    /// a failure.
    ///
    /// Position 0 always succeeds, making the new node the head. Any other position needs a node
    /// at `position - 1` with a successor, which the new node is placed in front of.
    ///
    /// # Examples
    /// ```
    /// # use bitsy_collections::collections::linked::LinkedList;
    /// let mut list = LinkedList::new();
    /// list.add('c', 0);
    /// list.add('a', 0);
    /// list.add('b', 1);
    /// assert_eq!(list.to_string(), "('a') -> ('b') -> ('c')");
    /// assert!(list.try_add('d', 3).is_err());
    /// ```
    pub fn try_add(&mut self, value: T, position: usize) -> Result<(), InvalidPosition> {
        match position.checked_sub(1) {
            None => {
                let old_head = self.head.take();
                self.head = Some(Node::boxed(value, old_head));
            },
            Some(prev_position) => {
                let len = self.len;
                let prev = match self.seek_mut(prev_position) {
                    Some(prev) if prev.has_next() => prev,
                    _ => return Err(Self::invalid(position, len)),
                };

                let next = prev.next.take();
                prev.next = Some(Node::boxed(value, next));
            },
        }

        self.len += 1;
        Ok(())
    }

    /// Removes the node at `position` and returns its value, panicking on a failure.
    ///
    /// # Panics
    /// Panics if the node at `position` can't be unlinked.
    pub fn remove(&mut self, position: usize) -> T {
        self.try_remove(position).throw()
    }

    /// Removes the node at `position` and returns its value, returning an [`Err`] rather than
    /// panicking on a failure.
    ///
    /// The removed node must have a successor to take its place, so the last node (including a
    /// lone head) can't be removed.
    ///
    /// # Examples
    /// ```
    /// # use bitsy_collections::collections::linked::LinkedList;
    /// let mut list: LinkedList<_> = [1, 2, 3].into_iter().collect();
    /// assert_eq!(list.try_remove(1), Ok(2));
    /// assert!(list.try_remove(1).is_err());
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn try_remove(&mut self, position: usize) -> Result<T, InvalidPosition> {
        let len = self.len;

        // Whatever gets taken out of a link is put back before failing, so the list is unchanged.
        let removed = match position.checked_sub(1) {
            None => match self.head.take() {
                Some(mut head) if head.has_next() => {
                    self.head = head.next.take();
                    head
                },
                other => {
                    self.head = other;
                    return Err(Self::invalid(position, len));
                },
            },
            Some(prev_position) => {
                let Some(prev) = self.seek_mut(prev_position) else {
                    return Err(Self::invalid(position, len));
                };
                match prev.next.take() {
                    Some(mut node) if node.has_next() => {
                        prev.next = node.next.take();
                        node
                    },
                    other => {
                        prev.next = other;
                        return Err(Self::invalid(position, len));
                    },
                }
            },
        };

        self.len -= 1;
        Ok(removed.value)
    }

    /// Returns an iterator over all elements, from the head onwards, as references.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over all elements, from the head onwards, as mutable references.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns the position of the first element equal to `item`, if there is one.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    /// Returns true if the LinkedList contains an element equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }
}

impl<T> LinkedList<T> {
    /// Walks `position` links from the head, returning the node reached or None if the chain ends
    /// first.
    pub(crate) fn seek(&self, position: usize) -> Option<&Node<T>> {
        let mut node = self.head.as_deref()?;
        for _ in 0..position {
            node = node.next.as_deref()?;
        }
        Some(node)
    }

    pub(crate) fn seek_mut(&mut self, position: usize) -> Option<&mut Node<T>> {
        let mut node = self.head.as_deref_mut()?;
        for _ in 0..position {
            node = node.next.as_deref_mut()?;
        }
        Some(node)
    }

    fn invalid(position: usize, len: usize) -> InvalidPosition {
        debug!("position {position} is invalid for linked list with {len} nodes");
        InvalidPosition { position, len }
    }
}

impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    fn index(&self, position: usize) -> &Self::Output {
        self.get(position)
    }
}

impl<T> IndexMut<usize> for LinkedList<T> {
    fn index_mut(&mut self, position: usize) -> &mut Self::Output {
        self.get_mut(position)
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        let mut tail = &mut list.head;
        for value in iter {
            let node = tail.insert(Node::boxed(value, None));
            tail = &mut node.next;
            list.len += 1;
        }
        list
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        // Unlink nodes one at a time, otherwise dropping the head would recurse down the whole
        // chain.
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
        }
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &DebugWith(
                |f: &mut Formatter<'_>| f.debug_list().entries(self.iter()).finish()
            ))
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Debug> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (position, value) in self.iter().enumerate() {
            if position > 0 {
                write!(f, ") -> (")?;
            }
            write!(f, "{value:?}")?;
        }
        write!(f, ")")
    }
}

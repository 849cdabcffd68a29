use std::fmt::{self, Debug, Display, Formatter};

use crate::collections::contiguous::vector::Iter;
use crate::collections::contiguous::Vector;
use crate::util::fmt::DebugWith;

/// A first-in, first-out queue. Values are enqueued at the back and dequeued from the front, so
/// they leave in the order they arrived.
///
/// The values are kept in a [`Vector`] with the front at index 0, which makes dequeueing shift
/// every remaining value forward.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Queue.
///
/// | Method | Complexity |
/// |-|-|
/// | `enqueue` | `O(1)`*, `O(n)` |
/// | `dequeue` | `O(n)` |
/// | `peek` | `O(1)` |
/// | `len` | `O(1)` |
///
/// \* If the backing Vector has to grow, `enqueue` will take `O(n)`.
pub struct Queue<T> {
    pub(crate) items: Vector<T>,
    pub(crate) len: usize,
}

impl<T> Queue<T> {
    /// Creates a new, empty Queue. Nothing is allocated until the first value is enqueued.
    pub const fn new() -> Queue<T> {
        Queue {
            items: Vector::new(),
            len: 0,
        }
    }

    /// Returns the number of values waiting in the Queue.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Queue holds no values.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds `value` to the back of the Queue.
    ///
    /// # Panics
    /// Panics if the backing Vector can't grow any further.
    pub fn enqueue(&mut self, value: T) {
        self.items.push(value);
        self.len += 1;
    }

    /// Removes the value at the front of the Queue and returns it, or None if the Queue is empty.
    ///
    /// # Examples
    /// ```
    /// # use bitsy_collections::collections::queue::Queue;
    /// let mut queue = Queue::new();
    /// queue.enqueue(1);
    /// queue.enqueue(2);
    /// assert_eq!(queue.dequeue(), Some(1));
    /// assert_eq!(queue.peek(), Some(&2));
    /// ```
    pub fn dequeue(&mut self) -> Option<T> {
        let value = self.items.remove(0)?;
        self.len -= 1;
        Some(value)
    }

    /// Returns a reference to the value at the front of the Queue without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Returns a mutable reference to the value at the front of the Queue without removing it.
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.items.get_mut(0)
    }

    /// Returns an iterator over the values from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> Clone for Queue<T> {
    fn clone(&self) -> Self {
        Queue {
            items: self.items.clone(),
            len: self.len,
        }
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for Queue<T> {}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("contents", &DebugWith(
                |f: &mut Formatter<'_>| f.debug_list().entries(self.iter()).finish()
            ))
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Debug> Display for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::mem;

use log::trace;

use super::{IntoIter, Iter, IterMut};
use crate::memory::Memory;
use crate::util::fmt::DebugWith;

const MIN_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection, based on a [`Memory`] of optional slots.
///
/// Unlike [`List`](super::super::List), a Vector never runs out of room: when every slot is
/// occupied, it allocates a bigger Memory and moves its elements across.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `remove` | `O(n-i)` |
///
/// \* If the Vector doesn't have enough capacity for the new element, `push` will take `O(n)`.
pub struct Vector<T> {
    pub(crate) memory: Memory<Option<T>>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length and capacity 0. Memory will be allocated when the first
    /// element is pushed.
    ///
    /// # Examples
    /// ```
    /// # use bitsy_collections::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub const fn new() -> Vector<T> {
        Vector {
            memory: Memory::new(),
            len: 0,
        }
    }

    /// Creates a new Vector with capacity exactly equal to `cap`, allowing that many values to be
    /// added without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector {
            memory: Memory::repeat_default(cap),
            len: 0,
        }
    }

    /// Returns the length of the Vector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the Vector.
    pub const fn cap(&self) -> usize {
        self.memory.size()
    }

    /// Push the provided value onto the end of the Vector, increasing the capacity if required.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use bitsy_collections::collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=5 {
    ///     vec.push(i);
    /// }
    /// assert!(vec.iter().eq(&[0, 1, 2, 3, 4, 5]));
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }
        self.memory[self.len] = Some(value);
        self.len += 1;
    }

    /// Pops the last value off the end of the Vector, returning it if the Vector wasn't empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        self.memory[self.len].take()
    }

    /// Returns a reference to the element at `index`, or None if it is out of bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            self.memory[index].as_ref()
        } else {
            None
        }
    }

    /// Returns a mutable reference to the element at `index`, or None if it is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            self.memory[index].as_mut()
        } else {
            None
        }
    }

    /// Returns a reference to the first element, if there is one.
    pub fn first(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a reference to the last element, if there is one.
    pub fn last(&self) -> Option<&T> {
        self.get(self.len.checked_sub(1)?)
    }

    /// Removes the element at `index` and returns it, moving every later element one slot to the
    /// left. Returns None if `index` is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use bitsy_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<char> = "abcd".chars().collect();
    /// assert_eq!(vec.remove(1), Some('b'));
    /// assert_eq!(vec.remove(3), None);
    /// assert!(vec.iter().eq(&['a', 'c', 'd']));
    /// ```
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }

        let removed = self.memory[index].take();
        for address in index..self.len - 1 {
            self.memory[address] = self.memory[address + 1].take();
        }
        self.len -= 1;

        removed
    }

    /// Removes every element from the Vector, keeping the capacity.
    pub fn clear(&mut self) {
        for slot in self.memory[..self.len].iter_mut() {
            *slot = None;
        }
        self.len = 0;
    }

    /// Returns an iterator over all elements, as references.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over all elements, as mutable references.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> Vector<T> {
    /// Returns true if the Vector contains an element equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }
}

impl<T> Vector<T> {
    /// Grows the Vector by the growth factor, moving every element into a new Memory.
    pub(crate) fn grow(&mut self) {
        let new_cap = cmp::max(self.cap() * GROWTH_FACTOR, MIN_CAP);
        trace!("growing vector from {} to {} slots", self.cap(), new_cap);

        let mut old = mem::replace(&mut self.memory, Memory::repeat_default(new_cap));
        for (slot, value) in self.memory.iter_mut().zip(old.iter_mut()) {
            *slot = value.take();
        }
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Vector::new();
        vec.extend(iter);
        vec
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        Vector {
            memory: self.memory.clone(),
            len: self.len,
        }
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &DebugWith(
                |f: &mut Formatter<'_>| f.debug_list().entries(self.iter()).finish()
            ))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            back: self.len,
            front: 0,
            memory: self.memory,
        }
    }
}

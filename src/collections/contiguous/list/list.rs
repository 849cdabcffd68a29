use std::fmt::{self, Debug, Display, Formatter};
use std::iter::{FusedIterator, Flatten};
use std::mem;
use std::ops::Index;
use std::slice;

use log::debug;

use crate::memory::Memory;
#[doc(inline)]
pub use crate::util::error::{CapacityExceeded, OutOfBounds};
use crate::util::fmt::DebugWith;
use crate::util::result::ResultExtension;

/// The capacity of a List created with [`List::new`].
pub const DEFAULT_CAP: usize = 100;

/// An ordered sequence stored directly in a fixed-size [`Memory`], keeping track of its own
/// length because memory doesn't have one to read.
///
/// Every slot below the length holds an element and every slot from the length onwards is empty.
/// The List never reallocates, so once it is full, adding another element fails with
/// [`CapacityExceeded`].
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the List.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `push` | `O(1)` |
/// | `pop` | `O(1)` |
/// | `unshift` | `O(n)` |
/// | `shift` | `O(n)` |
///
/// Adding or removing at the end of the List only touches one slot, while the start requires every
/// element to slide over by one address.
pub struct List<T> {
    pub(crate) memory: Memory<Option<T>>,
    pub(crate) len: usize,
}

impl<T> List<T> {
    /// Creates a new, empty List with room for [`DEFAULT_CAP`] elements.
    pub fn new() -> List<T> {
        List::with_cap(DEFAULT_CAP)
    }

    /// Creates a new, empty List with room for exactly `cap` elements.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> List<T> {
        List {
            memory: Memory::repeat_default(cap),
            len: 0,
        }
    }

    /// Returns the length of the List.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the List contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the fixed capacity of the List.
    pub const fn cap(&self) -> usize {
        self.memory.size()
    }

    /// Returns true if there is no room left for another element.
    pub const fn is_full(&self) -> bool {
        self.len == self.cap()
    }

    /// Returns a reference to the element at `address`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `address` is out of bounds of the List.
    pub fn get(&self, address: usize) -> &T {
        self.try_get(address).throw()
    }

    /// Returns a reference to the element at `address`, returning an [`Err`] on a failure rather
    /// than panicking.
    ///
    /// # Examples
    /// ```
    /// # use bitsy_collections::collections::contiguous::List;
    /// let mut list = List::new();
    /// list.push('a');
    /// assert_eq!(list.try_get(0), Ok(&'a'));
    /// assert!(list.try_get(1).is_err());
    /// ```
    pub fn try_get(&self, address: usize) -> Result<&T, OutOfBounds> {
        let len = self.len;
        match self.memory.get(address) {
            Some(Some(value)) if address < len => Ok(value),
            _ => Err(OutOfBounds { address, len }),
        }
    }

    /// Returns a mutable reference to the element at `address`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `address` is out of bounds of the List.
    pub fn get_mut(&mut self, address: usize) -> &mut T {
        self.try_get_mut(address).throw()
    }

    /// Returns a mutable reference to the element at `address`, returning an [`Err`] on a failure
    /// rather than panicking.
    pub fn try_get_mut(&mut self, address: usize) -> Result<&mut T, OutOfBounds> {
        let len = self.len;
        match self.memory.get_mut(address) {
            Some(Some(value)) if address < len => Ok(value),
            _ => Err(OutOfBounds { address, len }),
        }
    }

    /// Adds `value` to the end of the List, panicking on a failure.
    ///
    /// # Panics
    /// Panics if the List is already full.
    pub fn push(&mut self, value: T) {
        self.try_push(value).throw()
    }

    /// Adds `value` to the end of the List, returning an [`Err`] rather than panicking if the List
    /// is already full. The List is left unchanged on a failure.
    ///
    /// # Examples
    /// ```
    /// # use bitsy_collections::collections::contiguous::List;
    /// let mut list = List::with_cap(1);
    /// assert!(list.try_push(1).is_ok());
    /// assert!(list.try_push(2).is_err());
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn try_push(&mut self, value: T) -> Result<(), CapacityExceeded> {
        self.check_room()?;

        self.memory[self.len] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Removes the last element of the List and returns it, or None if the List is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        self.memory[self.len].take()
    }

    /// Adds `value` to the start of the List, panicking on a failure.
    ///
    /// # Panics
    /// Panics if the List is already full.
    pub fn unshift(&mut self, value: T) {
        self.try_unshift(value).throw()
    }

    /// Adds `value` to the start of the List, returning an [`Err`] rather than panicking if the
    /// List is already full. The List is left unchanged on a failure.
    ///
    /// Every element slides one address to the right to make room:
    ///
    /// ```text
    ///     [a, b, c, d, e]
    ///      0  1  2  3  4
    ///       ⬊  ⬊  ⬊  ⬊  ⬊
    ///      1  2  3  4  5
    ///  [x, a, b, c, d, e]
    /// ```
    ///
    /// # Examples
    /// ```
    /// # use bitsy_collections::collections::contiguous::List;
    /// let mut list = List::new();
    /// list.push(2);
    /// list.unshift(1);
    /// assert_eq!(list.get(0), &1);
    /// assert_eq!(list.get(1), &2);
    /// ```
    pub fn try_unshift(&mut self, value: T) -> Result<(), CapacityExceeded> {
        self.check_room()?;

        // Walk from the start, leaving the carried value in each slot and picking up whatever was
        // there. The slot at len is empty, so nothing is carried out of the end.
        let mut carried = Some(value);
        for slot in self.memory[..=self.len].iter_mut() {
            carried = mem::replace(slot, carried);
        }
        self.len += 1;
        Ok(())
    }

    /// Removes the first element of the List and returns it, or None if the List is empty.
    ///
    /// Every remaining element slides one address to the left to fill the gap.
    pub fn shift(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        let value = self.memory[0].take();
        for address in 0..self.len - 1 {
            self.memory[address] = self.memory[address + 1].take();
        }
        self.len -= 1;
        value
    }

    /// Returns an iterator over all elements in address order, as references.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(self.memory[..self.len].iter().flatten())
    }
}

impl<T> List<T> {
    fn check_room(&self) -> Result<(), CapacityExceeded> {
        if self.is_full() {
            debug!("list rejected an element, all {} slots are occupied", self.cap());
            Err(CapacityExceeded { cap: self.cap() })
        } else {
            Ok(())
        }
    }
}

/// A borrowed iterator over the elements of a [`List`].
pub struct Iter<'a, T>(Flatten<slice::Iter<'a, Option<T>>>);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Index<usize> for List<T> {
    type Output = T;

    fn index(&self, address: usize) -> &Self::Output {
        self.get(address)
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        List {
            memory: self.memory.clone(),
            len: self.len,
        }
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("contents", &DebugWith(
                |f: &mut Formatter<'_>| f.debug_list().entries(self.iter()).finish()
            ))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

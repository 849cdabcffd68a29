use std::alloc::{self, Layout};
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use crate::util::fmt::DebugWith;

/// A fixed-size, heap-allocated run of slots, addressed by index. Similar to a [`Box<[T]>`](Box)
/// that can only be created with every slot initialized.
///
/// Memory dereferences to `[T]`, so an address is simply a slice index and all of the usual slice
/// methods (`swap`, `iter_mut`, etc.) are available.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of slots in the Memory.
///
/// | Method | Complexity |
/// |-|-|
/// | `repeat_default` / `repeat_with` | `O(n)` |
/// | `size` | `O(1)` |
/// | indexing | `O(1)` |
pub struct Memory<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Memory<T> {
    /// Creates a new Memory with no slots. Nothing is allocated.
    ///
    /// # Examples
    /// ```
    /// # use bitsy_collections::memory::Memory;
    /// let mem: Memory<u8> = Memory::new();
    /// assert_eq!(mem.size(), 0);
    /// assert!(mem.is_empty());
    /// ```
    pub const fn new() -> Memory<T> {
        Memory {
            ptr: NonNull::dangling(),
            size: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a new Memory with `size` slots, initializing each one, in address order, with the
    /// result of calling `init`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use bitsy_collections::memory::Memory;
    /// let mut next = 0;
    /// let mem = Memory::repeat_with(4, || { next += 2; next });
    /// assert_eq!(&*mem, &[2, 4, 6, 8]);
    /// ```
    pub fn repeat_with<F: FnMut() -> T>(size: usize, mut init: F) -> Memory<T> {
        let layout = Memory::<T>::make_layout(size);
        let ptr = Memory::<T>::make_ptr(layout);
        let mut guard = PartialInit {
            ptr,
            layout,
            initialized: 0,
        };

        while guard.initialized < size {
            // SAFETY: The layout was created for exactly size elements, so every address in
            // 0..size is within the allocation and properly aligned.
            unsafe { ptr.add(guard.initialized).write(init()); }
            guard.initialized += 1;
        }
        mem::forget(guard);

        Memory {
            ptr,
            size,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of slots in the Memory. This never changes after creation.
    pub const fn size(&self) -> usize {
        self.size
    }
}

impl<T: Default> Memory<T> {
    /// Creates a new Memory with `size` slots, each holding the default value of `T`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use bitsy_collections::memory::Memory;
    /// let mem: Memory<Option<char>> = Memory::repeat_default(3);
    /// assert_eq!(&*mem, &[None, None, None]);
    /// ```
    pub fn repeat_default(size: usize) -> Memory<T> {
        Memory::repeat_with(size, T::default)
    }
}

impl<T> Memory<T> {
    /// A helper function to create a [`Layout`] for `size` elements of type `T`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub(crate) fn make_layout(size: usize) -> Layout {
        match Layout::array::<T>(size) {
            Ok(layout) => layout,
            Err(_) => panic!("Capacity overflow!"),
        }
    }

    /// A helper function to allocate a [`NonNull`] for the provided [`Layout`]. Returns a
    /// dangling pointer for a zero-sized layout.
    ///
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] rather
    /// than panicking.
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<T> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

/// Owns the slots of a new allocation that have been initialized so far, dropping them and freeing
/// the allocation if `init` unwinds partway through [`Memory::repeat_with`].
struct PartialInit<T> {
    ptr: NonNull<T>,
    layout: Layout,
    initialized: usize,
}

impl<T> Drop for PartialInit<T> {
    fn drop(&mut self) {
        // SAFETY: Exactly the slots in 0..initialized have been written, and the Memory that would
        // have owned them was never created.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.initialized));
        }

        if self.layout.size() != 0 {
            // SAFETY: ptr was allocated in the global allocator with this exact layout by make_ptr.
            unsafe {
                alloc::dealloc(self.ptr.as_ptr().cast(), self.layout)
            }
        }
    }
}

impl<T> Default for Memory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Memory<T> {
    fn drop(&mut self) {
        // SAFETY: Every slot in 0..size is initialized and nothing can observe them after this.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.size));
        }

        let layout = Memory::<T>::make_layout(self.size);
        if layout.size() != 0 {
            // SAFETY: ptr was allocated in the global allocator with this exact layout. Zero-sized
            // layouts are never allocated and are guarded against here.
            unsafe {
                alloc::dealloc(self.ptr.as_ptr().cast(), layout)
            }
        }
    }
}

impl<T> Deref for Memory<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The held data uses Layout::array(size) and is therefore valid and properly
        // aligned for size elements, all of which are initialized. The borrow checker prevents
        // mutation for the lifetime of the returned slice.
        unsafe {
            slice::from_raw_parts(self.ptr.as_ptr(), self.size)
        }
    }
}

impl<T> DerefMut for Memory<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As with deref, and the mutable borrow of self guarantees exclusive access.
        unsafe {
            slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size)
        }
    }
}

impl<T> AsRef<[T]> for Memory<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for Memory<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

// SAFETY: Memory uniquely owns its allocation, so it can be sent when T can.
unsafe impl<T: Send> Send for Memory<T> {}
// SAFETY: Memory's safe API obeys the borrow checker and has no interior mutability, so it can be
// shared when T can.
unsafe impl<T: Sync> Sync for Memory<T> {}

impl<T: Clone> Clone for Memory<T> {
    fn clone(&self) -> Self {
        let mut source = self.iter();
        // Both Memories have the same size, so source is never exhausted early.
        Memory::repeat_with(self.size, || match source.next() {
            Some(item) => item.clone(),
            None => unreachable!(),
        })
    }
}

impl<T: PartialEq> PartialEq for Memory<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Memory<T> {}

impl<T: Debug> Debug for Memory<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memory")
            .field("slots", &DebugWith(
                |f: &mut Formatter<'_>| f.debug_list().entries(self.iter()).finish()
            ))
            .field("size", &self.size)
            .finish()
    }
}

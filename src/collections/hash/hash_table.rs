use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

use log::debug;

use super::BuildKeyHasher;
use crate::memory::Memory;
use crate::util::fmt::{DebugRaw, DebugWith};

/// The number of slots in every HashTable.
pub const DEFAULT_CAP: usize = 100;

/// A table of values addressed by key, where each key is hashed down to the address of a slot in
/// a fixed-size [`Memory`].
///
/// Only the values are stored, never the keys, so the table can't tell which key put a value in a
/// slot. Two keys that hash to the same address share a slot: setting one silently replaces the
/// value set by the other. The table never grows to spread its keys out.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `k`: The length of the key, in bytes hashed.
///
/// | Method | Complexity |
/// |-|-|
/// | `hash_key` | `O(k)` |
/// | `get` | `O(k)` |
/// | `set` | `O(k)` |
/// | `remove` | `O(k)` |
/// | `occupied` | `O(1)`* |
///
/// \* Counting occupied slots walks every slot, but there are always [`DEFAULT_CAP`] of them.
pub struct HashTable<K: ?Sized, V, B = BuildKeyHasher> {
    pub(crate) memory: Memory<Option<V>>,
    pub(crate) hasher: B,
    pub(crate) _phantom: PhantomData<K>,
}

impl<K: ?Sized, V> HashTable<K, V> {
    /// Creates a new HashTable with [`DEFAULT_CAP`] empty slots, hashing keys with a
    /// [`KeyHasher`](super::KeyHasher).
    ///
    /// # Examples
    /// ```
    /// # use bitsy_collections::collections::hash::HashTable;
    /// let mut table: HashTable<str, &str> = HashTable::new();
    /// table.set("foo", "bar");
    /// assert_eq!(table.get("foo"), Some(&"bar"));
    /// assert_eq!(table.remove("foo"), Some("bar"));
    /// assert_eq!(table.get("foo"), None);
    /// ```
    pub fn new() -> HashTable<K, V> {
        HashTable::with_hasher(BuildKeyHasher::default())
    }
}

impl<K: ?Sized, V, B> HashTable<K, V, B> {
    /// Creates a new HashTable with [`DEFAULT_CAP`] empty slots, hashing keys with the provided
    /// `hasher`.
    pub fn with_hasher(hasher: B) -> HashTable<K, V, B> {
        HashTable {
            memory: Memory::repeat_default(DEFAULT_CAP),
            hasher,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of slots in the HashTable, which is always [`DEFAULT_CAP`].
    pub const fn cap(&self) -> usize {
        self.memory.size()
    }

    /// Returns the number of slots currently holding a value. Because colliding keys share a slot,
    /// this can be less than the number of keys that have been set.
    pub fn occupied(&self) -> usize {
        self.values().count()
    }

    /// Returns an iterator over the stored values, in the order of their addresses.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.memory.iter().flatten()
    }

    /// Returns a reference to the hasher used by this HashTable.
    pub const fn hasher(&self) -> &B {
        &self.hasher
    }
}

impl<K: Hash + ?Sized, V, B: BuildHasher> HashTable<K, V, B> {
    /// Hashes `key` and reduces it to the address of a slot, somewhere in `0..cap`.
    ///
    /// The address only depends on the key and the hasher, so equal keys always share a slot.
    pub fn hash_key<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + ?Sized,
    {
        (self.hasher.hash_one(key) % self.cap() as u64) as usize
    }

    /// Returns a reference to the value in the slot `key` hashes to, if there is one. The value
    /// may have been set with another key that hashes to the same slot.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + ?Sized,
    {
        self.memory[self.hash_key(key)].as_ref()
    }

    /// Returns a mutable reference to the value in the slot `key` hashes to, if there is one.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + ?Sized,
    {
        let address = self.hash_key(key);
        self.memory[address].as_mut()
    }

    /// Returns true if the slot `key` hashes to holds a value.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Puts `value` in the slot `key` hashes to, returning whatever value it replaced. The
    /// replaced value may belong to another key, as collisions aren't detected.
    ///
    /// # Examples
    /// ```
    /// # use bitsy_collections::collections::hash::HashTable;
    /// let mut table: HashTable<str, u32> = HashTable::new();
    /// assert_eq!(table.set("one", 1), None);
    /// assert_eq!(table.set("one", 11), Some(1));
    /// assert_eq!(table.get("one"), Some(&11));
    /// ```
    pub fn set<Q>(&mut self, key: &Q, value: V) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + ?Sized,
    {
        let address = self.hash_key(key);
        let replaced = self.memory[address].replace(value);
        if replaced.is_some() {
            debug!("overwriting occupied hash table slot {address}");
        }
        replaced
    }

    /// Empties the slot `key` hashes to, returning the value it held, if any.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + ?Sized,
    {
        let address = self.hash_key(key);
        self.memory[address].take()
    }
}

impl<K: ?Sized, V> Default for HashTable<K, V> {
    fn default() -> Self {
        HashTable::new()
    }
}

impl<K: ?Sized, V: Clone, B: Clone> Clone for HashTable<K, V, B> {
    fn clone(&self) -> Self {
        HashTable {
            memory: self.memory.clone(),
            hasher: self.hasher.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<K: ?Sized, V: Debug, B: Debug> Debug for HashTable<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashTable")
            .field("slots", &DebugWith(|f: &mut Formatter<'_>| f.debug_list().entries(
                self.memory.iter()
                    .map(|slot| DebugRaw(match slot {
                        Some(value) => format!("{value:?}"),
                        None => "-".into(),
                    }))
            ).finish()))
            .field("occupied", &self.occupied())
            .field("cap", &self.cap())
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl<K: ?Sized, V: Debug, B> Display for HashTable<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map()
            .entries(self.memory.iter().enumerate().filter_map(
                |(address, slot)| Some((address, slot.as_ref()?))
            ))
            .finish()
    }
}

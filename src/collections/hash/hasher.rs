use std::hash::{BuildHasherDefault, Hasher};

/// The default [`BuildHasher`](std::hash::BuildHasher) for a
/// [`HashTable`](super::HashTable), creating [`KeyHasher`]s.
pub type BuildKeyHasher = BuildHasherDefault<KeyHasher>;

/// A simple, deterministic [`Hasher`] that folds in every byte written to it as
/// `hash * 31 + byte`, the classic string hash.
///
/// The same key always hashes to the same value, across runs and machines. This makes the hasher
/// easy to follow by hand, but also easy to collide on purpose, so it shouldn't be used with
/// untrusted keys.
///
/// # Examples
/// ```
/// # use std::hash::Hasher;
/// # use bitsy_collections::collections::hash::KeyHasher;
/// let mut hasher = KeyHasher::default();
/// hasher.write(b"abc");
/// assert_eq!(hasher.finish(), 96354);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyHasher {
    state: u64,
}

impl Hasher for KeyHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            // Equivalent to (hash << 5) - hash + byte.
            self.state = self.state.wrapping_mul(31).wrapping_add(*byte as u64);
        }
    }
}

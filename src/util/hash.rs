use std::hash::{BuildHasher, Hash, Hasher};

/// A key carrying the hash it should produce, so that tests can line up collisions on purpose.
/// Pair it with [`PassthroughHasherBuilder`].
#[derive(Debug)]
pub struct ManualHash<T: Eq> {
    hash: u64,
    value: T,
}

impl<T: Eq> ManualHash<T> {
    pub const fn new(hash: u64, value: T) -> ManualHash<T> {
        ManualHash {
            hash,
            value,
        }
    }
}

impl<T: Eq> Hash for ManualHash<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl<T: Eq> PartialEq for ManualHash<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for ManualHash<T> {}

/// A hasher that finishes with the last `u64` written to it. Other writes are folded in with xor
/// so the hasher still works for arbitrary keys.
#[derive(Debug)]
pub struct PassthroughHasher {
    state: u64,
}

impl Hasher for PassthroughHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for (offset, byte) in bytes.iter().enumerate() {
            self.state ^= (*byte as u64) << ((offset % 8) * 8);
        }
    }

    fn write_u64(&mut self, i: u64) {
        self.state = i;
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughHasherBuilder;

impl BuildHasher for PassthroughHasherBuilder {
    type Hasher = PassthroughHasher;

    fn build_hasher(&self) -> Self::Hasher {
        PassthroughHasher {
            state: 0
        }
    }
}

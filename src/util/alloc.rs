use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ZeroSizedType;

/// Counts how many of its clones have been dropped. Every clone shares the same counter.
#[derive(Debug, Clone, Default)]
pub struct DropCounter(pub Rc<Cell<usize>>);

impl DropCounter {
    pub fn new() -> DropCounter {
        DropCounter::default()
    }

    pub fn dropped(&self) -> usize {
        self.0.get()
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

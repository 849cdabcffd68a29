pub(crate) type Link<T> = Option<Box<Node<T>>>;

// Each node exclusively owns its successor, so the chain can't contain a cycle and the whole list
// is freed by dropping the head.

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

impl<T> Node<T> {
    pub fn boxed(value: T, next: Link<T>) -> Box<Node<T>> {
        Box::new(Node {
            value,
            next,
        })
    }

    pub const fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

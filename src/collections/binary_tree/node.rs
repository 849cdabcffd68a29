use std::borrow::Borrow;
use std::cmp::{self, Ordering};
use std::fmt::{self, Debug, Formatter};
use std::mem;

use crate::collections::contiguous::Vector;

pub(crate) struct Branch<T>(pub Option<Box<Node<T>>>);

pub(crate) struct Node<T> {
    pub left: Branch<T>,
    pub right: Branch<T>,
    pub value: T,
}

impl<T> Node<T> {
    pub fn leaf(value: T) -> Box<Node<T>> {
        Box::new(Node {
            left: Branch(None),
            right: Branch(None),
            value,
        })
    }
}

impl<T: Ord> Branch<T> {
    /// Places `value` in the first empty branch found by descending from this one, returning false
    /// without changing anything if an equal value is found on the way.
    pub fn insert(&mut self, value: T) -> bool {
        let branch = self.seek_mut(&value);
        if branch.0.is_some() {
            return false;
        }
        branch.0 = Some(Node::leaf(value));
        true
    }

    pub fn remove<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.seek_mut(value).take_root()
    }

    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut branch = self;
        while let Some(node) = &branch.0 {
            branch = match value.cmp(node.value.borrow()) {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => return Some(&node.value),
            };
        }
        None
    }

    /// Walks down from this branch towards `value`, returning the branch that holds an equal value,
    /// or the empty branch where it would be placed.
    pub fn seek_mut<Q>(&mut self, value: &Q) -> &mut Branch<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut branch = self;
        loop {
            // Compare through a shared borrow, the cursor is only reborrowed mutably to step down.
            let ordering = match &branch.0 {
                Some(node) => value.cmp(node.value.borrow()),
                None => return branch,
            };
            if ordering == Ordering::Equal {
                return branch;
            }

            let Branch(Some(node)) = branch else {
                return branch;
            };
            branch = match ordering {
                Ordering::Less => &mut node.left,
                _ => &mut node.right,
            };
        }
    }
}

impl<T> Branch<T> {
    /// Removes the node at the top of this branch, replacing it with its in-order successor if it
    /// has two children, or with its only child otherwise.
    pub fn take_root(&mut self) -> Option<T> {
        let mut node = self.0.take()?;
        *self = if node.left.0.is_none() {
            mem::take(&mut node.right)
        } else {
            match node.right.take_first() {
                Some(mut successor) => {
                    successor.left = mem::take(&mut node.left);
                    successor.right = mem::take(&mut node.right);
                    Branch(Some(successor))
                },
                None => mem::take(&mut node.left),
            }
        };
        Some(node.value)
    }

    /// Detaches the leftmost node below this branch, moving its right subtree up into its place.
    /// The returned node has no children.
    pub fn take_first(&mut self) -> Option<Box<Node<T>>> {
        let mut branch = self;
        loop {
            let descend = match &branch.0 {
                Some(node) => node.left.0.is_some(),
                None => return None,
            };
            if !descend {
                let mut first = branch.0.take()?;
                *branch = mem::take(&mut first.right);
                return Some(first);
            }

            let Branch(Some(node)) = branch else {
                return None;
            };
            branch = &mut node.left;
        }
    }

    /// The mirror image of [`take_first`](Branch::take_first).
    pub fn take_last(&mut self) -> Option<Box<Node<T>>> {
        let mut branch = self;
        loop {
            let descend = match &branch.0 {
                Some(node) => node.right.0.is_some(),
                None => return None,
            };
            if !descend {
                let mut last = branch.0.take()?;
                *branch = mem::take(&mut last.left);
                return Some(last);
            }

            let Branch(Some(node)) = branch else {
                return None;
            };
            branch = &mut node.right;
        }
    }

    pub fn pop_first(&mut self) -> Option<T> {
        self.take_first().map(|first| first.value)
    }

    pub fn pop_last(&mut self) -> Option<T> {
        self.take_last().map(|last| last.value)
    }

    pub fn first(&self) -> Option<&T> {
        let mut node = self.0.as_deref()?;
        while let Some(left) = node.left.0.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    pub fn last(&self) -> Option<&T> {
        let mut node = self.0.as_deref()?;
        while let Some(right) = node.right.0.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut pending = Vector::new();
        pending.extend(self.0.as_deref().map(|node| (node, 1)));

        while let Some((node, depth)) = pending.pop() {
            height = cmp::max(height, depth);
            pending.extend(node.left.0.as_deref().map(|left| (left, depth + 1)));
            pending.extend(node.right.0.as_deref().map(|right| (right, depth + 1)));
        }
        height
    }
}

impl<T> Default for Branch<T> {
    fn default() -> Self {
        Branch(None)
    }
}

impl<T: Clone> Clone for Branch<T> {
    fn clone(&self) -> Self {
        let mut root = Branch(None);
        {
            // Pairs each source branch with the empty branch its copy belongs in.
            let mut pending: Vector<(&Branch<T>, &mut Branch<T>)> = Vector::new();
            pending.push((self, &mut root));

            while let Some((source, target)) = pending.pop() {
                let Some(node) = source.0.as_deref() else {
                    continue;
                };
                let copy = target.0.insert(Node::leaf(node.value.clone()));
                pending.push((&node.left, &mut copy.left));
                pending.push((&node.right, &mut copy.right));
            }
        }
        root
    }
}

impl<T: Debug> Debug for Branch<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(node) => {
                for line in format!("{:?}", node.left).lines() {
                    writeln!(f, "┌    {line}")?;
                }
                write!(f, "({:?})", node.value)?;
                for line in format!("{:?}", node.right).lines() {
                    write!(f, "\n└    {line}")?;
                }
                Ok(())
            },
            None => write!(f, "-"),
        }
    }
}

#![cfg(test)]

use super::*;
use crate::util::alloc::DropCounter;

#[test]
fn test_growth() {
    let mut vec = Vector::new();
    assert_eq!(vec.cap(), 0, "A new Vector shouldn't allocate.");

    vec.push(0_usize);
    assert_eq!(vec.cap(), 2, "The first growth should reach the minimum capacity.");

    for i in 1..5 {
        vec.push(i);
    }
    assert_eq!(vec.cap(), 8, "Capacity should double each time the Vector fills up.");
    assert_eq!(vec.len(), 5);
    assert!(
        vec.iter().copied().eq(0..5),
        "All elements should survive being moved into a larger Memory."
    );

    let vec: Vector<u8> = Vector::with_cap(3);
    assert_eq!(vec.cap(), 3);
    assert!(vec.is_empty());
}

#[test]
fn test_push_pop_get() {
    let mut vec: Vector<_> = (0..4).collect();
    assert_eq!(vec.get(2), Some(&2));
    assert_eq!(vec.get(4), None, "Reading past the length should return None.");
    assert_eq!(vec.first(), Some(&0));
    assert_eq!(vec.last(), Some(&3));

    if let Some(value) = vec.get_mut(1) {
        *value = 10;
    }
    assert_eq!(vec.get(1), Some(&10));

    assert_eq!(vec.pop(), Some(3));
    assert_eq!(vec.pop(), Some(2));
    assert_eq!(vec.pop(), Some(10));
    assert_eq!(vec.pop(), Some(0));
    assert_eq!(vec.pop(), None, "Popping an empty Vector should return None.");
    assert_eq!(vec.last(), None);
}

#[test]
fn test_remove_shifts_left() {
    let mut vec: Vector<_> = "abcde".chars().collect();

    assert_eq!(vec.remove(0), Some('a'), "Removing the front should return it.");
    assert!(vec.iter().eq(&['b', 'c', 'd', 'e']));

    assert_eq!(vec.remove(3), Some('e'), "Removing the back should return it.");
    assert_eq!(vec.remove(3), None, "Removing past the length should return None.");
    assert!(vec.iter().eq(&['b', 'c', 'd']));

    vec.clear();
    assert!(vec.is_empty());
    assert_eq!(vec.remove(0), None);
}

#[test]
fn test_iterators() {
    let mut vec: Vector<_> = (1..=4).collect();

    for value in vec.iter_mut() {
        *value *= 2;
    }
    assert!(vec.iter().eq(&[2, 4, 6, 8]));
    assert!(vec.iter().rev().eq(&[8, 6, 4, 2]), "Borrowed iteration should be double ended.");
    assert_eq!(vec.iter().len(), 4);

    let mut iter = vec.clone().into_iter();
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.next_back(), Some(6));
    assert_eq!(iter.next(), Some(4));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);

    let counter = DropCounter::new();
    let vec: Vector<_> = (0..6).map(|_| counter.clone()).collect();
    let mut iter = vec.into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(counter.dropped(), 6, "Dropping an owned iterator should drop the remaining items.");
}

#[test]
fn test_equality_and_format() {
    let vec: Vector<_> = [1, 2, 3].into_iter().collect();
    let mut other = Vector::with_cap(10);
    other.extend([1, 2, 3]);

    assert_eq!(vec, other, "Equality shouldn't depend on capacity.");
    assert!(vec.contains(&2));
    assert!(!vec.contains(&4));

    assert_eq!(format!("{vec}"), "[1, 2, 3]");
    assert_eq!(format!("{vec:?}"), "Vector { contents: [1, 2, 3], len: 3, cap: 4 }");
}

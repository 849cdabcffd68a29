#![cfg(test)]

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;

fn sample_tree() -> BinarySearchTree<i32> {
    [5, 3, 8, 1, 4].into_iter().collect()
}

#[test]
fn test_add_and_contains() {
    let mut tree = sample_tree();

    assert!(tree.contains(&4), "An added value should be found.");
    assert!(!tree.contains(&9), "A value that was never added shouldn't be found.");
    assert!(tree.iter().eq(&[1, 3, 4, 5, 8]), "In-order iteration should be sorted.");
    assert_eq!(tree.len(), 5);
    assert_eq!(tree.height(), 3);

    assert!(!tree.add(5), "Adding a duplicate should report that nothing was added.");
    assert!(tree.iter().eq(&[1, 3, 4, 5, 8]), "Adding a duplicate shouldn't change the tree.");
    assert_eq!(tree.len(), 5);
}

#[test]
fn test_borrowed_lookup() {
    let tree: BinarySearchTree<String> =
        ["pear", "apple", "fig"].into_iter().map(String::from).collect();
    assert!(tree.contains("fig"), "Lookups should accept a borrowed form of the value.");
    assert_eq!(tree.get("apple").map(String::as_str), Some("apple"));
    assert_eq!(tree.first().map(String::as_str), Some("apple"));
    assert_eq!(tree.last().map(String::as_str), Some("pear"));
}

#[test]
fn test_remove() {
    let mut tree: BinarySearchTree<_> = [50, 30, 70, 20, 40, 60, 80, 65].into_iter().collect();

    assert_eq!(tree.remove(&20), Some(20), "Removing a leaf should return it.");
    assert_eq!(tree.remove(&60), Some(60), "Removing a node with one child should return it.");
    assert!(tree.iter().eq(&[30, 40, 50, 65, 70, 80]));

    assert_eq!(tree.remove(&50), Some(50), "Removing the root should return it.");
    assert!(tree.iter().eq(&[30, 40, 65, 70, 80]), "The successor should take the root's place.");
    assert_eq!(tree.first(), Some(&30));

    assert_eq!(tree.remove(&50), None, "Removing a missing value should give nothing back.");
    assert_eq!(tree.len(), 5);

    while let Some(value) = tree.first().copied() {
        assert_eq!(tree.remove(&value), Some(value));
    }
    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);
}

#[test]
fn test_pop_and_iterators() {
    let mut tree = sample_tree();
    assert_eq!(tree.pop_first(), Some(1));
    assert_eq!(tree.pop_last(), Some(8));
    assert_eq!(tree.len(), 3);

    let cloned = tree.clone();
    assert_eq!(cloned, tree, "A clone should hold the same values.");
    assert_eq!(cloned.height(), tree.height(), "A clone should keep the same shape.");

    assert!(tree.into_iter().rev().eq([5, 4, 3]), "Owned iteration should run in either order.");
    assert_eq!(cloned.iter().len(), 3);

    let mut empty = BinarySearchTree::<u8>::new();
    assert_eq!(empty.pop_first(), None);
    assert_eq!(empty.pop_last(), None);
    assert_eq!(empty.first(), None);
}

/// Links `0..len` into a chain of right children directly, without the quadratic cost of adding
/// each value in sorted order.
fn right_chain(len: u32) -> BinarySearchTree<u32> {
    let mut root = Branch(None);
    for value in (0..len).rev() {
        let mut node = Node::leaf(value);
        node.right = root;
        root = Branch(Some(node));
    }
    BinarySearchTree { root, len: len as usize }
}

#[test]
fn test_degenerate_shape() {
    let tree: BinarySearchTree<_> = (0..25_000).collect();
    assert_eq!(tree.len(), 25_000);
    assert_eq!(tree.height(), 25_000, "Sorted input should produce a chain of right children.");
    assert!(tree.contains(&24_999));
    assert!(tree.iter().copied().eq(0..25_000));
}

#[test]
fn test_deep_chain_operations() {
    let mut tree = right_chain(200_000);
    assert_eq!(tree.height(), 200_000);

    assert!(tree.add(200_000), "Adding below the deepest node should succeed.");
    assert!(!tree.add(150_000), "A deep duplicate should still be found.");
    assert!(tree.contains(&200_000));
    assert_eq!(tree.len(), 200_001);
    assert_eq!(tree.height(), 200_001);

    assert_eq!(tree.remove(&200_000), Some(200_000), "The deepest value should be removable.");
    assert_eq!(tree.remove(&100_000), Some(100_000));
    assert_eq!(tree.pop_last(), Some(199_999));
    assert_eq!(tree.last(), Some(&199_998));
    assert_eq!(tree.len(), 199_998);
    assert_eq!(tree.height(), 199_998);

    let cloned = tree.clone();
    assert_eq!(cloned.height(), tree.height(), "A deep clone should keep the chain shape.");
    assert_eq!(cloned, tree);

    assert_eq!(tree.pop_first(), Some(0));
    assert_eq!(tree.first(), Some(&1));
    drop(tree);
    assert_eq!(cloned.len(), 199_998);
}

#[test]
fn test_format() {
    let mut tree = BinarySearchTree::new();
    tree.add(5);
    assert_eq!(format!("{tree:?}"), "BinarySearchTree { nodes: \n┌    -\n(5)\n└    -\n, len: 1 }");

    tree.add(3);
    tree.add(8);
    assert_eq!(format!("{tree}"), "{3, 5, 8}");
}

#[test]
fn test_random_operations() {
    let mut rng = StdRng::seed_from_u64(0xB57);
    let mut tree = BinarySearchTree::new();
    let mut model = BTreeSet::new();

    for _ in 0..3_000 {
        let value: u8 = rng.random();
        match rng.random_range(0..4) {
            0 | 1 => assert_eq!(tree.add(value), model.insert(value)),
            2 => assert_eq!(tree.remove(&value), model.take(&value)),
            _ => assert_eq!(tree.pop_first(), model.pop_first()),
        }

        assert_eq!(tree.len(), model.len());
        assert_eq!(tree.contains(&value), model.contains(&value));
    }
    assert!(tree.iter().eq(model.iter()), "The tree should hold the same values as the model.");
}

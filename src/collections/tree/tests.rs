#![cfg(test)]

use super::*;

fn sample_tree() -> Tree<i32> {
    let mut tree = Tree::with_root(1);
    tree.add(2, &1);
    tree.add(3, &1);
    tree
}

fn pre_order<T: Copy>(tree: &Tree<T>) -> Vec<T> {
    let mut order = Vec::new();
    tree.traverse(|node| order.push(*node.value()));
    order
}

#[test]
fn test_traverse_pre_order() {
    let mut tree = sample_tree();
    assert_eq!(tree.add(4, &2), 1, "One node should match the parent.");

    assert_eq!(pre_order(&tree), [1, 2, 4, 3], "Parents should come before their children.");
    assert!(tree.iter().eq(&[1, 2, 4, 3]), "The iterator should agree with traverse.");
    assert_eq!(tree.iter().len(), 4);
    assert_eq!(tree.len(), 4);

    let root = tree.root().map(|root| root.children().count());
    assert_eq!(root, Some(2), "The root should have two direct children.");
}

#[test]
fn test_add_to_empty() {
    let mut tree = Tree::new();
    assert!(tree.is_empty());
    assert_eq!(pre_order(&tree), Vec::<u8>::new(), "Traversing an empty Tree should do nothing.");

    assert_eq!(tree.add(7, &99), 1, "An empty Tree should take the value as its root.");
    assert_eq!(tree.root().map(TreeNode::value), Some(&7));
    assert!(tree.root().is_some_and(TreeNode::is_leaf));
}

#[test]
fn test_add_under_every_match() {
    let mut tree = sample_tree();
    tree.add(1, &2);
    tree.add(1, &3);

    assert_eq!(tree.add(5, &1), 3, "Every node holding the parent value should get a child.");
    assert_eq!(pre_order(&tree), [1, 2, 1, 5, 3, 1, 5, 5]);
    assert_eq!(tree.len(), 8);

    assert_eq!(tree.add(6, &42), 0, "An unmatched parent should add nothing.");
    assert_eq!(tree.len(), 8);
    assert!(!tree.contains(&6));
}

#[test]
fn test_add_under_own_value() {
    let mut tree = Tree::with_root('a');
    assert_eq!(tree.add('a', &'a'), 1, "A new child shouldn't be visited by the walk adding it.");
    assert_eq!(tree.add('a', &'a'), 2);
    assert_eq!(tree.len(), 4);
}

#[test]
fn test_traverse_mut() {
    let mut tree = sample_tree();
    tree.traverse_mut(|node| *node.value_mut() *= 10);

    assert!(tree.contains(&30));
    assert!(!tree.contains(&3));
    assert_eq!(format!("{tree}"), "[10, 20, 30]");
}

#[test]
fn test_clone_and_format() {
    let tree = sample_tree();
    let cloned = tree.clone();
    assert_eq!(cloned, tree);
    assert_eq!(
        format!("{tree:?}"),
        "Tree { root: Some(TreeNode { value: 1, children: [TreeNode { value: 2 }, \
        TreeNode { value: 3 }] }), len: 3 }"
    );
}

#[test]
fn test_deep_drop() {
    let mut tree = Tree::with_root(0);
    for value in 1..200 {
        tree.add(value, &(value - 1));
    }
    assert_eq!(tree.len(), 200);
    assert!(tree.iter().copied().eq(0..200), "A chain should be walked from the root down.");
    drop(tree);
}

#![cfg(test)]

use super::*;
use crate::util::panic::assert_panics;

fn values<'a, T>(nodes: impl Iterator<Item = &'a GraphNode<T>>) -> Vec<&'a T> {
    nodes.map(GraphNode::value).collect()
}

#[test]
fn test_add_line() {
    let mut graph = Graph::new();
    let one = graph.add_node(1);
    let two = graph.add_node(2);

    graph.add_line(&1, &2);
    let start = graph.find(&1);
    assert!(
        start.is_some_and(|node| node.lines().eq(&[two])),
        "The start node should have a line to the end node."
    );
    assert!(graph.node(two).is_some_and(|node| node.lines().len() == 0), "Lines are directed.");

    assert_eq!(
        graph.try_add_line(&1, &3),
        Err(InvalidLine { missing: Endpoint::End }),
        "A line to a missing value should fail."
    );
    assert!(
        graph.node(one).is_some_and(|node| node.lines().eq(&[two])),
        "A failed line shouldn't change the start node's lines."
    );
}

#[test]
fn test_missing_endpoints() {
    let mut graph: Graph<_> = ["x", "y"].into_iter().collect();

    let missing = |result: Result<(), InvalidLine>| result.err().map(|error| error.missing);
    assert_eq!(missing(graph.try_add_line(&"z", &"x")), Some(Endpoint::Start));
    assert_eq!(missing(graph.try_add_line(&"z", &"w")), Some(Endpoint::Both));
    assert_eq!(missing(graph.try_add_line(&"x", &"w")), Some(Endpoint::End));
    assert!(
        graph.iter().all(|node| node.lines().len() == 0),
        "Failed lines shouldn't be added to any node."
    );

    assert_eq!(missing(graph.try_add_line(&"y", &"y")), None, "A node can have a line to itself.");
    let y = graph.find_id(&"y");
    assert!(
        graph.find(&"y").is_some_and(|node| node.lines().eq(y.as_ref())),
        "A successful line should always be recorded on its start node."
    );

    assert_panics!({
        graph.add_line(&"x", &"q");
    }, "The panicking add_line should panic when an endpoint is missing.");
}

#[test]
fn test_find_and_neighbours() {
    let mut graph = Graph::new();
    let first = graph.add_node('a');
    let second = graph.add_node('a');
    graph.add_node('b');
    graph.add_node('c');

    assert_eq!(graph.find_id(&'a'), Some(first), "Find should stop at the first match.");
    assert_ne!(first, second);
    assert_eq!(graph.find(&'z').map(GraphNode::id), None);

    graph.add_line(&'a', &'c');
    graph.add_line(&'a', &'b');
    graph.add_line(&'a', &'c');
    let start = graph.node(first);
    assert_eq!(
        start.map(|node| values(graph.neighbours(node))),
        Some(vec![&'c', &'b', &'c']),
        "Parallel lines should be kept, in the order they were added."
    );
    assert!(graph.node(second).is_some_and(|node| node.lines().len() == 0));
}

#[test]
fn test_handles() {
    let mut graph = Graph::new();
    let ids: Vec<_> = (10..15).map(|value| graph.add_node(value)).collect();

    assert_eq!(graph.len(), 5);
    assert!(ids.iter().enumerate().all(|(index, id)| id.index() == index));
    assert_eq!(graph.node(ids[3]).map(GraphNode::value), Some(&13));
    assert!(graph.node(NodeId(5)).is_none(), "A handle past the last node finds nothing.");
    assert_eq!(ids[2].to_string(), "#2");
    assert!(graph.iter().map(GraphNode::id).eq(ids.iter().copied()));
    assert!(Graph::<u8>::new().is_empty());
}

#[test]
fn test_format() {
    let mut graph: Graph<_> = [1, 2, 3].into_iter().collect();
    graph.add_line(&1, &2);
    graph.add_line(&1, &3);
    graph.add_line(&3, &1);

    assert_eq!(format!("{graph}"), "{1: [2, 3], 2: [], 3: [1]}");
    assert_eq!(
        format!("{:?}", graph.find(&3)),
        "Some(GraphNode { id: 2, value: 3, lines: [0] })"
    );

    let cloned = graph.clone();
    assert_eq!(cloned.to_string(), graph.to_string(), "A clone should keep every line.");
}

#![cfg(test)]

use std::hash::{BuildHasher, Hasher};

use super::*;
use crate::util::hash::{ManualHash, PassthroughHasherBuilder};

#[test]
fn test_set_get_remove() {
    let mut table: HashTable<str, &str> = HashTable::new();
    assert_eq!(table.cap(), DEFAULT_CAP);
    assert_eq!(table.get("foo"), None, "A new HashTable should be empty.");

    assert_eq!(table.set("foo", "bar"), None);
    assert_eq!(table.get("foo"), Some(&"bar"), "A set value should be found by its key.");
    assert!(table.contains("foo"));
    assert_eq!(table.occupied(), 1);

    assert_eq!(table.remove("foo"), Some("bar"));
    assert_eq!(table.get("foo"), None, "A removed value shouldn't be found.");
    assert_eq!(table.remove("foo"), None, "Removing from an empty slot should do nothing.");
    assert_eq!(table.occupied(), 0);
}

#[test]
fn test_borrowed_keys() {
    let mut table: HashTable<String, Vec<u8>> = HashTable::default();
    table.set("owned", vec![1]);

    assert_eq!(
        table.hash_key("owned"),
        table.hash_key(&String::from("owned")),
        "A borrowed key should hash to the same address as the owned key."
    );
    if let Some(value) = table.get_mut(&String::from("owned")) {
        value.push(2);
    }
    assert_eq!(table.get("owned"), Some(&vec![1, 2]));
}

#[test]
fn test_key_hasher() {
    let mut hasher = KeyHasher::default();
    hasher.write(b"abc");
    assert_eq!(hasher.finish(), 96354, "Bytes should be folded as hash * 31 + byte.");

    let mut hasher = KeyHasher::default();
    hasher.write(b"xyz");
    assert_eq!(hasher.finish(), 119193);

    let builder = BuildKeyHasher::default();
    assert_eq!(builder.hash_one("key"), builder.hash_one("key"), "Hashing should be repeatable.");

    let table: HashTable<str, ()> = HashTable::new();
    assert!(
        ["", "a", "some longer key", "🦀"].iter().all(|key| table.hash_key(*key) < table.cap()),
        "Every address should be inside the table."
    );
}

#[test]
fn test_manual_collision() {
    let mut table = HashTable::<ManualHash<&str>, u8, _>::with_hasher(PassthroughHasherBuilder);
    let first = ManualHash::new(5, "first");
    let second = ManualHash::new(105, "second");
    assert_eq!(table.hash_key(&first), table.hash_key(&second));

    table.set(&first, 1);
    assert_eq!(table.set(&second, 2), Some(1), "The colliding key should replace the first value.");
    assert_eq!(table.get(&first), Some(&2), "Both keys should now read the second value.");
    assert_eq!(table.occupied(), 1, "Colliding keys should share a single slot.");

    assert_eq!(table.remove(&first), Some(2));
    assert!(!table.contains(&second), "Removing one key should clear the shared slot.");
}

#[test]
fn test_string_collision() {
    let mut table: HashTable<str, usize> = HashTable::new();
    let keys: Vec<String> = (0..=DEFAULT_CAP).map(|index| format!("key{index}")).collect();

    // There are more keys than slots, so at least two of them have to share an address.
    let (first, second) = (0..keys.len())
        .flat_map(|i| (i + 1..keys.len()).map(move |j| (i, j)))
        .find(|(i, j)| table.hash_key(keys[*i].as_str()) == table.hash_key(keys[*j].as_str()))
        .map(|(i, j)| (keys[i].as_str(), keys[j].as_str()))
        .unwrap_or_default();
    assert_ne!(first, second, "Two of the keys should collide.");

    table.set(first, 1);
    table.set(second, 2);
    assert_eq!(table.get(first), Some(&2), "The second set should win.");
}

#[test]
fn test_values_and_format() {
    let mut table: HashTable<str, i32> = HashTable::new();
    table.set("a", 1);
    table.set("b", 2);

    let mut values: Vec<_> = table.values().copied().collect();
    values.sort();
    assert_eq!(values, [1, 2]);

    let mut empty: HashTable<str, i32> = table.clone();
    empty.remove("a");
    empty.remove("b");
    assert_eq!(format!("{empty}"), "#{}");
    assert_eq!(table.occupied(), 2, "Changing a clone shouldn't affect the original.");

    let mut single: HashTable<str, &str> = HashTable::new();
    single.set("foo", "bar");
    assert_eq!(format!("{single}"), format!("#{{{}: \"bar\"}}", single.hash_key("foo")));

    let debug = format!("{single:?}");
    assert!(debug.starts_with("HashTable { slots: ["), "Debug should list every slot.");
    assert_eq!(debug.matches('-').count(), DEFAULT_CAP - 1, "Empty slots should show as '-'.");
}

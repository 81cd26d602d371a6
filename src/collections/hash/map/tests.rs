#![cfg(test)]

use std::collections::HashMap as StdHashMap;
use std::mem;

use proptest::prelude::*;

use super::*;

#[test]
fn test_upsert_and_get() {
    let mut map = HashMap::new();
    assert_eq!(map.cap(), 17);
    assert!(map.is_empty());

    map.insert(10, 100);
    map.insert(20, 200);
    map.insert(-5, 50);
    assert_eq!(map.get(10), Some(100));
    assert_eq!(map.get(-5), Some(50));
    assert_eq!(map.len(), 3);

    map.insert(10, 111);
    assert_eq!(map.get(10), Some(111), "Inserting an existing key should overwrite its value.");
    assert_eq!(map.len(), 3, "Overwriting shouldn't change the length.");

    if let Some(value) = map.get_mut(20) {
        *value += 1;
    }
    assert_eq!(map.get(20), Some(201));
    assert_eq!(map.get(30), None);
    assert!(map.get_mut(30).is_none());
}

#[test]
fn test_negative_keys_are_normalized() {
    let map: HashMap = [(-1, 1), (i32::MIN, 2), (i32::MAX, 3)].into_iter().collect();
    assert_eq!(map.index_for(-1), 16);
    assert_eq!(map.get(-1), Some(1));
    assert_eq!(map.get(i32::MIN), Some(2));
    assert_eq!(map.get(i32::MAX), Some(3));
}

#[test]
fn test_chain_collisions() {
    let mut map = HashMap::new();
    for key in [0, 17, 34, 51] {
        map.insert(key, key * 2);
    }
    assert_eq!(map.cap(), 17);
    assert_eq!(
        format!("{:?}", map.buckets[0]),
        "(51: 102) -> (34: 68) -> (17: 34) -> (0: 0)",
        "Colliding keys should share a chain, newest first."
    );

    assert_eq!(map.remove(34), Some(68));
    assert_eq!(map.remove(0), Some(0));
    assert_eq!(map.remove(51), Some(102));
    assert_eq!(map.remove(51), None, "Removing an absent key should do nothing.");
    assert_eq!(map.len(), 1);
    assert_eq!(format!("{:?}", map.buckets[0]), "(17: 34)");
    assert!(map.contains(17));
    assert!(!map.contains(0));
}

#[test]
fn test_rehash_threshold() {
    let mut map = HashMap::new();
    for key in 0..11 {
        map.insert(key, key);
    }
    assert_eq!(map.cap(), 17, "A load factor of 11/17 shouldn't trigger a rehash.");

    map.insert(11, 11);
    assert_eq!(map.cap(), 34, "A load factor of 12/17 should double the capacity.");
    assert_eq!(map.len(), 12, "Rehashing shouldn't change the length.");
    assert!(map.load_factor() <= 0.7);

    for key in 0..12 {
        assert_eq!(map.get(key), Some(key), "Every key should survive a rehash.");
    }

    map.insert(5, 55);
    assert_eq!(map.cap(), 34, "Overwriting shouldn't trigger a rehash.");
}

#[test]
fn test_display_order() {
    let mut map = HashMap::with_cap(4);
    map.insert(1, 10);
    map.insert(5, 50);
    assert_eq!(map.to_string(), "{5: 50, 1: 10}");

    map.insert(2, 20);
    assert_eq!(map.cap(), 8);
    assert_eq!(map.to_string(), "{1: 10, 2: 20, 5: 50}");

    let mut out = Vec::new();
    HashMap::new().print_to(&mut out).unwrap();
    assert_eq!(out, b"{}\n");
}

#[test]
fn test_clear_clone_take() {
    let mut map: HashMap = (0..30).map(|key| (key, -key)).collect();
    let cap = map.cap();

    let copy = map.clone();
    assert_eq!(copy, map);
    assert_eq!(copy.cap(), cap, "Cloning should keep the capacity.");

    let moved = mem::take(&mut map);
    assert_eq!(moved.len(), 30);
    assert!(map.is_empty());
    assert_eq!(map.cap(), 17, "A taken map should be left as a fresh default map.");

    let mut copy = copy;
    copy.clear();
    assert!(copy.is_empty());
    assert_eq!(copy.cap(), cap, "Clearing shouldn't release buckets.");
    assert!(!copy.contains(3));
}

#[test]
fn test_long_chain_drop() {
    let mut map = HashMap::with_cap(1);
    // Build one long chain directly, skipping the lookup and growth check.
    for key in 0..200_000 {
        map.buckets[0].push_front(key, key);
    }
    map.len = 200_000;
    assert_eq!(map.get(0), Some(0));
    drop(map);
}

#[derive(Debug, Clone)]
enum Op {
    Insert(i32, i32),
    Remove(i32),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (-50_i32..50, any::<i32>()).prop_map(|(k, v)| Op::Insert(k, v)),
        1 => (-50_i32..50).prop_map(Op::Remove),
    ]
}

proptest! {
    #[test]
    fn prop_matches_std_hash_map(ops in prop::collection::vec(op_strategy(), 0..300)) {
        let mut map = HashMap::new();
        let mut expected = StdHashMap::new();

        for op in ops {
            match op {
                Op::Insert(key, value) => {
                    map.insert(key, value);
                    expected.insert(key, value);
                },
                Op::Remove(key) => {
                    prop_assert_eq!(map.remove(key), expected.remove(&key));
                    prop_assert!(!map.contains(key));
                },
            }
            prop_assert!(map.load_factor() <= 0.7);
        }

        prop_assert_eq!(map.len(), expected.len());
        for (key, value) in expected {
            prop_assert_eq!(map.get(key), Some(value));
        }
        for (index, chain) in map.buckets.iter().enumerate() {
            for entry in chain.iter() {
                prop_assert_eq!(map.index_for(entry.key), index);
            }
        }
    }
}

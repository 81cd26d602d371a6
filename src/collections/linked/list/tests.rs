#![cfg(test)]

use std::mem;

use proptest::prelude::*;

use super::*;
use crate::util::error::{EmptyCollection, IndexOutOfBounds};
use crate::util::panic::assert_panics;

#[test]
fn test_push_pop_front_back() {
    let mut list = LinkedList::new();
    assert!(list.is_empty());

    list.push_front(2.0);
    assert_eq!((list.front(), list.back()), (2.0, 2.0));
    list.push_front(1.0);
    list.push_back(3.0);
    assert_eq!(list.len(), 3);
    assert_eq!((list.front(), list.back()), (1.0, 3.0));
    list.verify_links();

    list.pop_back();
    assert_eq!(list.back(), 2.0, "Popping the back should promote the second-to-last node.");
    list.verify_links();

    list.pop_front();
    assert_eq!((list.front(), list.back()), (2.0, 2.0));
    list.verify_links();

    list.pop_back();
    assert!(list.is_empty());
    assert!(list.state.is_empty(), "Removing the last node should return the list to Empty.");

    list.pop_back();
    list.pop_front();
    assert!(list.is_empty(), "Popping an empty list should do nothing.");

    list.push_back(5.0);
    assert_eq!((list.front(), list.back()), (5.0, 5.0));
    list.verify_links();
}

#[test]
fn test_insert_erase() {
    let mut list = LinkedList::new();
    list.insert(0, 1.0);
    list.insert(1, 3.0);
    list.insert(1, 2.0);
    list.insert(3, 4.0);
    list.insert(0, 0.0);
    assert_eq!(list.values().collect::<Vec<_>>(), [0.0, 1.0, 2.0, 3.0, 4.0]);
    assert_eq!(list.back(), 4.0, "Inserting at the length should update the tail.");
    list.verify_links();

    list.erase(2);
    assert_eq!(list.values().collect::<Vec<_>>(), [0.0, 1.0, 3.0, 4.0]);
    list.erase(3);
    assert_eq!(list.back(), 3.0, "Erasing the last index should update the tail.");
    list.erase(0);
    assert_eq!(list.values().collect::<Vec<_>>(), [1.0, 3.0]);
    list.verify_links();

    assert_eq!(list.try_insert(3, 9.0), Err(IndexOutOfBounds { index: 3, len: 2 }));
    assert_eq!(list.try_erase(2), Err(IndexOutOfBounds { index: 2, len: 2 }));
    assert_eq!(list.len(), 2, "Failed operations shouldn't modify the list.");
}

#[test]
fn test_preconditions() {
    assert_eq!(LinkedList::new().try_front(), Err(EmptyCollection));
    assert_eq!(LinkedList::new().try_back(), Err(EmptyCollection));

    assert_panics!({ LinkedList::new().front() }, "empty collection");
    assert_panics!({ LinkedList::new().back() }, "empty collection");
    assert_panics!({ LinkedList::new().insert(1, 1.0) }, "Index 1 out of bounds");
    assert_panics!({ LinkedList::new().erase(0) }, "Index 0 out of bounds");
}

#[test]
fn test_find_contains() {
    let list: LinkedList = [3.0, 1.0, 4.0, 1.0, 5.0].into_iter().collect();
    assert_eq!(list.find(1.0), Some(1), "The first match should win.");
    assert_eq!(list.find(5.0), Some(4));
    assert_eq!(list.find(9.0), None);
    assert!(list.contains(4.0));
    assert!(!list.contains(2.0));
    assert!(!LinkedList::new().contains(0.0));
}

#[test]
fn test_clone_take_clear() {
    let mut list: LinkedList = (0..10).map(f64::from).collect();

    let mut copy = list.clone();
    assert_eq!(copy, list);
    copy.push_back(10.0);
    assert_ne!(copy, list, "A clone shouldn't share nodes with the original.");
    assert_eq!(list.len(), 10);

    let moved = mem::take(&mut list);
    assert_eq!(moved.len(), 10);
    assert!(list.is_empty(), "A taken list should be left empty.");

    copy.clear();
    assert!(copy.is_empty());
    copy.push_back(1.0);
    copy.verify_links();
}

#[test]
fn test_display() {
    let mut list = LinkedList::new();
    assert_eq!(list.to_string(), "(Size = 0) Head -> Null");

    list.push_back(1.0);
    list.push_back(2.5);
    assert_eq!(list.to_string(), "(Size = 2) Head -> 1 -> 2.5 -> Null");

    let mut out = Vec::new();
    list.print_to(&mut out).unwrap();
    assert_eq!(out, b"(Size = 2) Head -> 1 -> 2.5 -> Null\n");
}

#[test]
fn test_long_list_drop() {
    let list: LinkedList = (0..1_000_000).map(f64::from).collect();
    assert_eq!(list.len(), 1_000_000);
    drop(list);
}

proptest! {
    #[test]
    fn prop_insert_then_erase_round_trips(
        values in prop::collection::vec(-1e6_f64..1e6, 0..40),
        index_seed in any::<prop::sample::Index>(),
        value in -1e6_f64..1e6,
    ) {
        let mut list: LinkedList = values.iter().copied().collect();
        let index = index_seed.index(values.len() + 1);

        list.insert(index, value);
        prop_assert_eq!(list.len(), values.len() + 1);
        list.erase(index);

        list.verify_links();
        prop_assert_eq!(list.values().collect::<Vec<_>>(), values);
    }

    #[test]
    fn prop_find_returns_first_match(
        values in prop::collection::vec(0_u8..8, 0..40),
        needle in 0_u8..8,
    ) {
        let list: LinkedList = values.iter().map(|v| f64::from(*v)).collect();
        let expected = values.iter().position(|v| *v == needle);

        prop_assert_eq!(list.find(f64::from(needle)), expected);
    }
}

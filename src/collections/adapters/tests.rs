#![cfg(test)]

use super::*;
use crate::util::error::EmptyCollection;
use crate::util::panic::assert_panics;

#[test]
fn test_stack_lifo() {
    let mut stack = Stack::new();
    assert!(stack.is_empty());

    for i in 1..=3 {
        stack.push(f64::from(i));
    }
    assert_eq!(stack.len(), 3);
    assert_eq!(stack.top(), 3.0);

    stack.pop();
    assert_eq!(stack.top(), 2.0);
    stack.pop();
    stack.pop();
    assert!(stack.is_empty());

    stack.pop();
    assert!(stack.is_empty(), "Popping an empty stack should do nothing.");

    assert_eq!(stack.try_top(), Err(EmptyCollection));
    assert_panics!({ Stack::new().top() }, "empty collection");
}

#[test]
fn test_stack_clear_and_display() {
    let mut stack = Stack::new();
    stack.push(1.0);
    stack.push(2.0);
    assert_eq!(stack.to_string(), "[1, 2]", "A stack should print bottom to top.");

    let mut out = Vec::new();
    stack.print_to(&mut out).unwrap();
    assert_eq!(out, b"[1, 2]\n");

    stack.clear();
    assert!(stack.is_empty());
    assert_eq!(stack.to_string(), "[]");
}

#[test]
fn test_queue_fifo() {
    let mut queue = Queue::new();
    assert!(queue.is_empty());

    for i in 1..=3 {
        queue.enqueue(f64::from(i));
    }
    assert_eq!(queue.len(), 3);
    assert_eq!((queue.front(), queue.back()), (1.0, 3.0));

    queue.dequeue();
    assert_eq!((queue.front(), queue.back()), (2.0, 3.0));
    queue.dequeue();
    queue.dequeue();
    assert!(queue.is_empty());

    queue.dequeue();
    assert!(queue.is_empty(), "Dequeuing an empty queue should do nothing.");

    assert_eq!(queue.try_front(), Err(EmptyCollection));
    assert_eq!(queue.try_back(), Err(EmptyCollection));
    assert_panics!({ Queue::new().front() }, "empty collection");
    assert_panics!({ Queue::new().back() }, "empty collection");
}

#[test]
fn test_queue_clear_and_display() {
    let mut queue = Queue::new();
    queue.enqueue(1.0);
    queue.enqueue(2.0);
    assert_eq!(queue.to_string(), "(Size = 2) Head -> 1 -> 2 -> Null");

    let copy = queue.clone();
    queue.clear();
    assert!(queue.is_empty());
    assert_eq!(copy.len(), 2, "Clearing a queue shouldn't affect its clones.");
}

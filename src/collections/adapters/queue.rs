use std::fmt::{self, Debug, Display, Formatter};
use std::io::{self, Write};

use crate::collections::linked::LinkedList;
use crate::util::error::EmptyCollection;
use crate::util::result::ResultExtension;

/// A first-in-first-out collection of [`f64`]s, stored in a [`LinkedList`]. Elements are enqueued
/// at the tail and dequeued from the head, so both ends are `O(1)`.
///
/// # Examples
/// ```
/// # use basic_collections::collections::adapters::Queue;
/// let mut queue = Queue::new();
/// queue.enqueue(1.0);
/// queue.enqueue(2.0);
/// assert_eq!((queue.front(), queue.back()), (1.0, 2.0));
/// queue.dequeue();
/// assert_eq!(queue.front(), 2.0);
/// ```
#[derive(Default, Clone, PartialEq)]
pub struct Queue {
    pub(crate) inner: LinkedList,
}

impl Queue {
    /// Creates a new, empty Queue.
    pub const fn new() -> Queue {
        Queue {
            inner: LinkedList::new(),
        }
    }

    /// Returns the number of elements in the Queue.
    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the Queue contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Adds `value` at the back of the Queue.
    pub fn enqueue(&mut self, value: f64) {
        self.inner.push_back(value);
    }

    /// Removes the oldest element. Does nothing if the queue is empty.
    pub fn dequeue(&mut self) {
        self.inner.pop_front();
    }

    /// Returns the oldest element.
    ///
    /// # Panics
    /// Panics if the queue is empty.
    pub fn front(&self) -> f64 {
        self.try_front().throw()
    }

    /// Returns the oldest element, or an [`Err`] if the Queue is empty.
    pub fn try_front(&self) -> Result<f64, EmptyCollection> {
        self.inner.try_front()
    }

    /// Returns the newest element.
    ///
    /// # Panics
    /// Panics if the queue is empty.
    pub fn back(&self) -> f64 {
        self.try_back().throw()
    }

    /// Returns the newest element, or an [`Err`] if the Queue is empty.
    pub fn try_back(&self) -> Result<f64, EmptyCollection> {
        self.inner.try_back()
    }

    /// Removes all elements from the Queue.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Writes the [`Display`] form of the Queue to stdout, followed by a newline.
    pub fn print(&self) {
        self.inner.print();
    }

    /// Writes the [`Display`] form of the Queue to `out`, followed by a newline.
    pub fn print_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.inner.print_to(out)
    }
}

impl Debug for Queue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("contents", &self.inner.values().collect::<Vec<_>>())
            .field("len", &self.len())
            .finish()
    }
}

impl Display for Queue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

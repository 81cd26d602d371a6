use std::fmt::{self, Debug, Display, Formatter};
use std::io::{self, Write};
use std::marker::PhantomData;
use std::mem;
use std::num::NonZero;

use derive_more::IsVariant;

use super::{Link, Node, NodePtr};
use crate::util::error::{EmptyCollection, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// A list of [`f64`]s with links in the forward direction only.
///
/// The head owns the first node and each node owns the one after it. A pointer to the last node is
/// kept as well, so that pushing onto the back doesn't require a traversal. Removing from the back
/// still does, because there is no way to step backwards from the tail.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `pop_back` | `O(n)` |
/// | `insert` | `O(i)` |
/// | `erase` | `O(i)` |
/// | `find` | `O(n)` |
/// | `contains` | `O(n)` |
pub struct LinkedList {
    pub(crate) state: ListState,
}

#[derive(Default, IsVariant)]
pub(crate) enum ListState {
    #[default]
    Empty,
    Full(ListContents),
}

use ListState::*;

pub(crate) struct ListContents {
    pub len: NonZero<usize>,
    pub head: NodePtr,
    pub tail: NodePtr,
}

impl LinkedList {
    /// Creates a new LinkedList with no elements.
    pub const fn new() -> LinkedList {
        LinkedList {
            state: Empty,
        }
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        match &self.state {
            Empty => 0,
            Full(contents) => contents.len.get(),
        }
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns the first element of the list.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn front(&self) -> f64 {
        self.try_front().throw()
    }

    /// Returns the first element of the list, or an [`Err`] if the list is empty.
    pub fn try_front(&self) -> Result<f64, EmptyCollection> {
        match &self.state {
            Empty => Err(EmptyCollection),
            Full(ListContents { head, .. }) => Ok(head.value()),
        }
    }

    /// Returns the last element of the list.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn back(&self) -> f64 {
        self.try_back().throw()
    }

    /// Returns the last element of the list, or an [`Err`] if the list is empty.
    pub fn try_back(&self) -> Result<f64, EmptyCollection> {
        match &self.state {
            Empty => Err(EmptyCollection),
            Full(ListContents { tail, .. }) => Ok(tail.value()),
        }
    }

    /// Adds the provided element to the front of the LinkedList.
    pub fn push_front(&mut self, value: f64) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_front(value),
        }
    }

    /// Adds the provided element to the back of the LinkedList.
    pub fn push_back(&mut self, value: f64) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_back(value),
        }
    }

    /// Removes the first element from the list. Does nothing if the list is empty.
    pub fn pop_front(&mut self) {
        if let Full(contents) = &mut self.state {
            // SAFETY: The head is unlinked straight away by either replacing it or emptying the
            // list.
            let node = unsafe { contents.head.take_node() };

            match (node.next, contents.len.get().checked_sub(1).and_then(NonZero::new)) {
                (Some(next), Some(new_len)) => {
                    contents.head = next;
                    contents.len = new_len;
                },
                _ => self.state = Empty,
            }
        }
    }

    /// Removes the last element from the list. Does nothing if the list is empty.
    ///
    /// This walks the list to find the second-to-last node, which becomes the new tail.
    pub fn pop_back(&mut self) {
        let contents = match &mut self.state {
            Empty => return,
            Full(contents) => contents,
        };

        match NonZero::new(contents.len.get() - 1) {
            None => self.pop_front(),
            Some(new_len) => {
                let new_tail = contents.seek(new_len.get() - 1);

                // SAFETY: The old tail is unlinked from new_tail and replaced immediately.
                unsafe { contents.tail.take_node(); }
                new_tail.set_next(None);
                contents.tail = new_tail;
                contents.len = new_len;
            },
        }
    }

    /// Inserts `value` so that it ends up at `index`. An index equal to the length appends.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the list.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::linked::LinkedList;
    /// let mut list: LinkedList = [1.0, 3.0].into_iter().collect();
    /// list.insert(1, 2.0);
    /// list.insert(3, 4.0);
    /// assert_eq!(list.to_string(), "(Size = 4) Head -> 1 -> 2 -> 3 -> 4 -> Null");
    /// ```
    pub fn insert(&mut self, index: usize, value: f64) {
        self.try_insert(index, value).throw()
    }

    /// Inserts `value` so that it ends up at `index`, returning an [`Err`] rather than panicking if
    /// `index` is greater than the length of the list.
    pub fn try_insert(&mut self, index: usize, value: f64) -> Result<(), IndexOutOfBounds> {
        let len = self.len();

        match index {
            0 => self.push_front(value),
            val if val == len => self.push_back(value),
            val if val > len => return Err(IndexOutOfBounds { index, len }),
            val => {
                // Index is strictly between 0 and len, so the list is full.
                let Full(contents) = &mut self.state else { unreachable!() };
                let prev = contents.seek(val - 1);

                let node = NodePtr::from_node(Node {
                    value,
                    next: prev.next(),
                });

                prev.set_next(Some(node));
                contents.len = contents.len.saturating_add(1);
            },
        }
        Ok(())
    }

    /// Removes the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the list.
    pub fn erase(&mut self, index: usize) {
        self.try_erase(index).throw()
    }

    /// Removes the element at `index`, returning an [`Err`] rather than panicking if `index` is out
    /// of bounds of the list.
    pub fn try_erase(&mut self, index: usize) -> Result<(), IndexOutOfBounds> {
        let len = self.len();

        match index {
            val if val >= len => return Err(IndexOutOfBounds { index, len }),
            0 => self.pop_front(),
            val if val == len - 1 => self.pop_back(),
            val => {
                // Index is strictly between 0 and len - 1, so the list has at least 3 elements.
                let Full(contents) = &mut self.state else { unreachable!() };
                let prev = contents.seek(val - 1);

                if let Some(target) = prev.next() {
                    // SAFETY: target is unlinked from prev immediately, and it isn't the tail.
                    let node = unsafe { target.take_node() };
                    prev.set_next(node.next);
                    // SAFETY: The list had at least 3 elements.
                    contents.len = unsafe { NonZero::new_unchecked(len - 1) };
                }
            },
        }
        Ok(())
    }

    /// Returns the index of the first element equal to `value`, or None if there isn't one.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::linked::LinkedList;
    /// let list: LinkedList = [4.0, 2.0, 4.0].into_iter().collect();
    /// assert_eq!(list.find(4.0), Some(0));
    /// assert_eq!(list.find(2.0), Some(1));
    /// assert_eq!(list.find(8.0), None);
    /// ```
    pub fn find(&self, value: f64) -> Option<usize> {
        self.values().position(|element| element == value)
    }

    /// Returns true if the list contains an element equal to `value`.
    pub fn contains(&self, value: f64) -> bool {
        self.find(value).is_some()
    }

    /// Removes all elements from the list.
    pub fn clear(&mut self) {
        drop(mem::take(self));
    }

    /// Writes the [`Display`] form of the LinkedList to stdout, followed by a newline.
    pub fn print(&self) {
        println!("{self}");
    }

    /// Writes the [`Display`] form of the LinkedList to `out`, followed by a newline.
    pub fn print_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{self}")
    }

    /// Returns an iterator over copies of each value, from front to back.
    pub(crate) fn values(&self) -> Values<'_> {
        Values {
            next: match &self.state {
                Empty => None,
                Full(contents) => Some(contents.head),
            },
            _phantom: PhantomData,
        }
    }

    /// Checks that the links agree with the recorded length and tail.
    #[cfg(test)]
    pub(crate) fn verify_links(&self) {
        match &self.state {
            Empty => {},
            Full(ListContents { len, head, tail }) => {
                let mut count = 1;
                let mut curr = *head;
                while let Some(next) = curr.next() {
                    curr = next;
                    count += 1;
                }
                assert_eq!(count, len.get(), "Reachable nodes should match the length.");
                assert!(curr == *tail, "The last reachable node should be the tail.");
            },
        }
    }
}

impl ListContents {
    /// Walks forward from the head by `count` links.
    pub fn seek(&self, count: usize) -> NodePtr {
        let mut node = self.head;
        for _ in 0..count {
            match node.next() {
                Some(next) => node = next,
                None => break,
            }
        }
        node
    }

    pub fn push_front(&mut self, value: f64) {
        self.len = self.len.saturating_add(1);

        self.head = NodePtr::from_node(Node {
            value,
            next: Some(self.head),
        });
    }

    pub fn push_back(&mut self, value: f64) {
        self.len = self.len.saturating_add(1);

        let node = NodePtr::from_node(Node {
            value,
            next: None,
        });

        self.tail.set_next(Some(node));
        self.tail = node;
    }

    pub fn wrap_one(value: f64) -> ListContents {
        let node = NodePtr::from_node(Node {
            value,
            next: None,
        });

        ListContents {
            len: NonZero::<usize>::MIN,
            head: node,
            tail: node,
        }
    }
}

impl ListState {
    pub fn single(value: f64) -> ListState {
        Full(ListContents::wrap_one(value))
    }
}

/// Borrowed iteration over the values of a LinkedList, used to implement traversal-based methods.
pub(crate) struct Values<'a> {
    next: Link,
    _phantom: PhantomData<&'a LinkedList>,
}

impl Iterator for Values<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next();
        Some(node.value())
    }
}

impl FromIterator<f64> for LinkedList {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        for value in iter {
            list.push_back(value);
        }
        list
    }
}

impl Default for LinkedList {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LinkedList {
    fn drop(&mut self) {
        if let Full(ListContents { head, .. }) = mem::take(&mut self.state) {
            let mut curr = Some(head);
            while let Some(ptr) = curr {
                // SAFETY: The state has been taken, so each node is reclaimed exactly once while
                // walking forwards.
                curr = unsafe { ptr.take_node() }.next;
            }
        }
    }
}

impl Clone for LinkedList {
    fn clone(&self) -> Self {
        self.values().collect()
    }
}

impl PartialEq for LinkedList {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.values().eq(other.values())
    }
}

// SAFETY: A LinkedList uniquely owns all of its nodes, so it can be sent to another thread.
unsafe impl Send for LinkedList {}
// SAFETY: LinkedList's safe API obeys all rules of the borrow checker, so no interior mutability
// occurs.
unsafe impl Sync for LinkedList {}

impl Debug for LinkedList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &self.values().collect::<Vec<_>>())
            .field("len", &self.len())
            .finish()
    }
}

impl Display for LinkedList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(Size = {}) Head -> ", self.len())?;
        for value in self.values() {
            write!(f, "{value} -> ")?;
        }
        write!(f, "Null")
    }
}

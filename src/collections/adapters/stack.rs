use std::fmt::{self, Debug, Display, Formatter};
use std::io::{self, Write};

use crate::collections::contiguous::DynamicArray;
use crate::util::error::EmptyCollection;
use crate::util::result::ResultExtension;

/// A last-in-first-out collection of [`f64`]s, stored in a [`DynamicArray`].
///
/// # Examples
/// ```
/// # use basic_collections::collections::adapters::Stack;
/// let mut stack = Stack::new();
/// stack.push(1.0);
/// stack.push(2.0);
/// assert_eq!(stack.top(), 2.0);
/// stack.pop();
/// assert_eq!(stack.top(), 1.0);
/// ```
#[derive(Default, Clone, PartialEq)]
pub struct Stack {
    pub(crate) inner: DynamicArray,
}

impl Stack {
    /// Creates a new, empty Stack.
    pub fn new() -> Stack {
        Stack {
            inner: DynamicArray::new(),
        }
    }

    /// Returns the number of elements in the Stack.
    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the Stack contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Pushes `value` onto the top of the Stack.
    pub fn push(&mut self, value: f64) {
        self.inner.push_back(value);
    }

    /// Removes the top element. Does nothing if the stack is empty.
    pub fn pop(&mut self) {
        self.inner.pop_back();
    }

    /// Returns the most recently pushed element.
    ///
    /// # Panics
    /// Panics if the stack is empty.
    pub fn top(&self) -> f64 {
        self.try_top().throw()
    }

    /// Returns the most recently pushed element, or an [`Err`] if the Stack is empty.
    pub fn try_top(&self) -> Result<f64, EmptyCollection> {
        self.inner.try_back()
    }

    /// Removes all elements, keeping the capacity of the underlying array.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Writes the [`Display`] form of the Stack to stdout, followed by a newline.
    pub fn print(&self) {
        self.inner.print();
    }

    /// Writes the [`Display`] form of the Stack to `out`, followed by a newline.
    pub fn print_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.inner.print_to(out)
    }
}

impl Debug for Stack {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("contents", &self.inner.as_slice())
            .field("len", &self.len())
            .finish()
    }
}

impl Display for Stack {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::io::{self, Write};
use std::ops::{Index, IndexMut};

use crate::util::error::{EmptyCollection, IndexOutOfBounds};
use crate::util::result::ResultExtension;

const MIN_CAP: usize = 1;

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection of [`f64`]s, backed by a single owned buffer.
///
/// The capacity is always at least 1, and is exactly the value produced by the growth policy or
/// provided to [`reserve`](DynamicArray::reserve) / [`resize`](DynamicArray::resize). When a push or
/// insert would exceed the capacity, it doubles.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DynamicArray.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push_back` | `O(1)`*, `O(n)` |
/// | `pop_back` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `erase` | `O(n-i)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `resize` | `O(n)` |
///
/// \* If the DynamicArray doesn't have enough capacity for the new element, `push_back` will take
/// `O(n)`.
///
/// \** If the DynamicArray already has the requested capacity, `reserve` is `O(1)`.
pub struct DynamicArray {
    pub(crate) buf: Box<[f64]>,
    pub(crate) len: usize,
}

impl DynamicArray {
    /// Creates a new, empty DynamicArray with capacity 1.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::DynamicArray;
    /// let arr = DynamicArray::new();
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.cap(), 1);
    /// ```
    pub fn new() -> DynamicArray {
        DynamicArray::with_cap(MIN_CAP)
    }

    /// Creates a new, empty DynamicArray with the provided capacity. A capacity of 0 is raised to
    /// 1.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::DynamicArray;
    /// assert_eq!(DynamicArray::with_cap(5).cap(), 5);
    /// assert_eq!(DynamicArray::with_cap(0).cap(), 1);
    /// ```
    pub fn with_cap(cap: usize) -> DynamicArray {
        DynamicArray {
            buf: vacant(cmp::max(cap, MIN_CAP)),
            len: 0,
        }
    }

    /// Returns the number of elements in the DynamicArray.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the DynamicArray contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the DynamicArray.
    pub const fn cap(&self) -> usize {
        self.buf.len()
    }

    /// Returns the live elements as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.buf[..self.len]
    }

    /// Returns the live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.buf[..self.len]
    }

    /// Returns the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    #[track_caller]
    pub fn get(&self, index: usize) -> f64 {
        *self.try_get(index).throw()
    }

    /// Returns a reference to the element at `index`, or an [`Err`] if `index` is out of bounds.
    pub fn try_get(&self, index: usize) -> Result<&f64, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&self.buf[index])
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    #[track_caller]
    pub fn get_mut(&mut self, index: usize) -> &mut f64 {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at `index`, or an [`Err`] if `index` is out of
    /// bounds.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut f64, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&mut self.buf[index])
    }

    /// Returns the first element.
    ///
    /// # Panics
    /// Panics if the DynamicArray is empty.
    pub fn front(&self) -> f64 {
        self.try_front().throw()
    }

    /// Returns the first element, or an [`Err`] if the DynamicArray is empty.
    pub fn try_front(&self) -> Result<f64, EmptyCollection> {
        self.as_slice().first().copied().ok_or(EmptyCollection)
    }

    /// Returns the last element.
    ///
    /// # Panics
    /// Panics if the DynamicArray is empty.
    pub fn back(&self) -> f64 {
        self.try_back().throw()
    }

    /// Returns the last element, or an [`Err`] if the DynamicArray is empty.
    pub fn try_back(&self) -> Result<f64, EmptyCollection> {
        self.as_slice().last().copied().ok_or(EmptyCollection)
    }

    /// Pushes `value` onto the end of the DynamicArray, doubling the capacity if it is full.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::new();
    /// for i in 0..5 {
    ///     arr.push_back(i as f64);
    /// }
    /// assert_eq!(arr.as_slice(), &[0.0, 1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(arr.cap(), 8);
    /// ```
    pub fn push_back(&mut self, value: f64) {
        if self.len == self.cap() {
            self.grow();
        }

        self.buf[self.len] = value;
        self.len += 1;
    }

    /// Removes the last element. Does nothing if the DynamicArray is empty.
    pub fn pop_back(&mut self) {
        self.len = self.len.saturating_sub(1);
    }

    /// Inserts `value` at `index`, moving all following elements one place to the right. An index
    /// equal to the length appends, and an index past the length is ignored.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray = [1.0, 2.0].into_iter().collect();
    /// arr.insert(1, 1.5);
    /// arr.insert(3, 3.0);
    /// arr.insert(10, 99.0);
    /// assert_eq!(arr.as_slice(), &[1.0, 1.5, 2.0, 3.0]);
    /// ```
    pub fn insert(&mut self, index: usize, value: f64) {
        if index > self.len { return; }

        if self.len == self.cap() {
            self.grow();
        }

        self.buf.copy_within(index..self.len, index + 1);
        self.buf[index] = value;
        self.len += 1;
    }

    /// Removes the element at `index`, moving all following elements one place to the left. An
    /// index outside of the live elements is ignored.
    pub fn erase(&mut self, index: usize) {
        if index >= self.len { return; }

        self.buf.copy_within(index + 1..self.len, index);
        self.len -= 1;
    }

    /// Grows the capacity to exactly `new_cap` if it is currently smaller. The capacity never
    /// shrinks and no element is modified.
    pub fn reserve(&mut self, new_cap: usize) {
        if new_cap <= self.cap() { return; }

        self.realloc_with_cap(new_cap);
    }

    /// Sets the length to `new_len`. Shrinking truncates the trailing elements, growing fills each
    /// new slot with `fill`, reserving exactly `new_len` if the capacity is insufficient.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray = [1.0, 2.0, 3.0].into_iter().collect();
    /// arr.resize(5, 7.5);
    /// assert_eq!(arr.as_slice(), &[1.0, 2.0, 3.0, 7.5, 7.5]);
    /// arr.resize(2, 0.0);
    /// assert_eq!(arr.as_slice(), &[1.0, 2.0]);
    /// ```
    pub fn resize(&mut self, new_len: usize, fill: f64) {
        if new_len <= self.len {
            self.len = new_len;
            return;
        }

        self.reserve(new_len);
        self.buf[self.len..new_len].fill(fill);
        self.len = new_len;
    }

    /// Equivalent to [`resize`](DynamicArray::resize) with a fill value of `0.0`.
    pub fn resize_default(&mut self, new_len: usize) {
        self.resize(new_len, 0.0);
    }

    /// Removes all elements, keeping the current capacity.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Writes the [`Display`] form of the DynamicArray to stdout, followed by a newline.
    pub fn print(&self) {
        println!("{self}");
    }

    /// Writes the [`Display`] form of the DynamicArray to `out`, followed by a newline.
    pub fn print_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{self}")
    }

    /// Doubles the capacity of the DynamicArray, allowing at least one more element to be added.
    pub(crate) fn grow(&mut self) {
        self.realloc_with_cap(self.cap() * GROWTH_FACTOR);
    }

    /// Moves the live elements into a new buffer of exactly `new_cap` slots.
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        log::trace!("DynamicArray reallocating from {} to {} slots", self.cap(), new_cap);

        let mut buf = vacant(new_cap);
        buf[..self.len].copy_from_slice(self.as_slice());
        self.buf = buf;
    }

    /// Checks that the provided index refers to a live element.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.len {
            Ok(())
        } else {
            Err(IndexOutOfBounds { index, len: self.len })
        }
    }
}

/// Allocates a zeroed buffer of `cap` slots.
fn vacant(cap: usize) -> Box<[f64]> {
    vec![0.0; cap].into_boxed_slice()
}

impl Index<usize> for DynamicArray {
    type Output = f64;

    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        self.try_get(index).throw()
    }
}

impl IndexMut<usize> for DynamicArray {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl Extend<f64> for DynamicArray {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl FromIterator<f64> for DynamicArray {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut arr = DynamicArray::with_cap(iter.size_hint().0);
        arr.extend(iter);
        arr
    }
}

impl Default for DynamicArray {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for DynamicArray {
    fn clone(&self) -> Self {
        let mut arr = DynamicArray::with_cap(self.cap());
        arr.buf[..self.len].copy_from_slice(self.as_slice());
        arr.len = self.len;
        arr
    }
}

impl PartialEq for DynamicArray {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Debug for DynamicArray {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("contents", &self.as_slice())
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl Display for DynamicArray {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, value) in self.as_slice().iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}

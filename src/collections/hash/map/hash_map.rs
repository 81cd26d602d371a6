use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::io::{self, Write};

use super::{Chain, Entry};

const DEFAULT_CAP: usize = 17;

const GROWTH_FACTOR: usize = 2;

const LOAD_FACTOR_NUMERATOR: usize = 7;
const LOAD_FACTOR_DENOMINATOR: usize = 10;

/// A map of [`i32`] keys to [`i32`] values, using separate chaining to resolve collisions.
///
/// Each bucket holds a chain of entries, newest first. A key's bucket is its remainder modulo the
/// capacity, normalized to be non-negative. Once an insertion takes the load factor above 7/10,
/// the number of buckets doubles and every entry is redistributed.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the HashMap.
/// - `c`: The length of the chain in the key's bucket.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(c)`*, `O(n)` |
/// | `get` | `O(c)` |
/// | `remove` | `O(c)` |
/// | `contains` | `O(c)` |
///
/// \* If the insertion pushes the load factor over the threshold, `insert` will take `O(n)` to
/// rehash. `c` is constant on average, as long as keys aren't clustered on multiples of the
/// capacity.
pub struct HashMap {
    pub(crate) buckets: Box<[Chain]>,
    pub(crate) len: usize,
}

impl HashMap {
    /// Creates a new, empty HashMap with the default capacity of 17 buckets.
    pub fn new() -> HashMap {
        HashMap::with_cap(DEFAULT_CAP)
    }

    /// Creates a new, empty HashMap with `cap` buckets. A capacity of 0 is raised to 1.
    pub fn with_cap(cap: usize) -> HashMap {
        HashMap {
            buckets: vacant(cmp::max(cap, 1)),
            len: 0,
        }
    }

    /// Returns the number of entries in the HashMap.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the HashMap contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of buckets in the HashMap.
    pub const fn cap(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the ratio of entries to buckets.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.cap() as f64
    }

    /// Associates `value` with `key`. If the key already has a value, it is overwritten in place
    /// and the length doesn't change. Otherwise, the entry is added and the map rehashes if it has
    /// become overloaded.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::hash::HashMap;
    /// let mut map = HashMap::new();
    /// map.insert(10, 100);
    /// map.insert(-5, 50);
    /// map.insert(10, 111);
    /// assert_eq!(map.get(10), Some(111));
    /// assert_eq!(map.get(-5), Some(50));
    /// assert_eq!(map.len(), 2);
    /// ```
    pub fn insert(&mut self, key: i32, value: i32) {
        if !self.insert_without_growth(key, value) { return; }

        if self.should_grow() {
            self.grow();
        }
    }

    /// Returns true if the map has a value for `key`.
    pub fn contains(&self, key: i32) -> bool {
        self.bucket(key).get(key).is_some()
    }

    /// Returns the value associated with `key`, or None if there isn't one.
    pub fn get(&self, key: i32) -> Option<i32> {
        self.bucket(key).get(key).map(|entry| entry.value)
    }

    /// Returns a mutable reference to the value associated with `key`, or None if there isn't one.
    pub fn get_mut(&mut self, key: i32) -> Option<&mut i32> {
        let index = self.index_for(key);
        self.buckets[index].get_mut(key).map(|entry| &mut entry.value)
    }

    /// Removes the entry for `key`, returning its value. Does nothing if there is no such entry.
    pub fn remove(&mut self, key: i32) -> Option<i32> {
        let index = self.index_for(key);
        let removed = self.buckets[index].remove(key);

        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Removes all entries, keeping the current capacity.
    pub fn clear(&mut self) {
        for chain in self.buckets.iter_mut() {
            chain.clear();
        }
        self.len = 0;
    }

    /// Writes the [`Display`] form of the HashMap to stdout, followed by a newline.
    pub fn print(&self) {
        println!("{self}");
    }

    /// Writes the [`Display`] form of the HashMap to `out`, followed by a newline.
    pub fn print_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{self}")
    }

    /// Returns an iterator over every entry, in bucket order and then chain order.
    pub(crate) fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.buckets.iter().flat_map(Chain::iter)
    }

    /// Inserts or updates the entry for `key` without considering the load factor. Returns true if
    /// a new entry was added.
    pub(crate) fn insert_without_growth(&mut self, key: i32, value: i32) -> bool {
        let index = self.index_for(key);
        let chain = &mut self.buckets[index];

        match chain.get_mut(key) {
            Some(existing) => {
                existing.value = value;
                false
            },
            None => {
                chain.push_front(key, value);
                self.len += 1;
                true
            },
        }
    }

    /// Determines whether the HashMap's length exceeds the load factor.
    pub(crate) const fn should_grow(&self) -> bool {
        self.len * LOAD_FACTOR_DENOMINATOR > self.cap() * LOAD_FACTOR_NUMERATOR
    }

    /// Grows the HashMap by the growth factor, redistributing all entries.
    pub(crate) fn grow(&mut self) {
        self.rehash_with_cap(self.cap() * GROWTH_FACTOR);
    }

    /// Replaces the buckets with `new_cap` empty ones and relinks every entry into its new bucket.
    pub(crate) fn rehash_with_cap(&mut self, new_cap: usize) {
        log::debug!(
            "HashMap rehashing {} entries from {} to {} buckets",
            self.len,
            self.cap(),
            new_cap,
        );

        let old_buckets = std::mem::replace(&mut self.buckets, vacant(new_cap));

        for mut chain in old_buckets.into_vec() {
            while let Some(entry) = chain.pop_entry() {
                let index = self.index_for(entry.key);
                self.buckets[index].push_entry(entry);
            }
        }
    }

    /// Calculates the bucket index of `key` for the current capacity.
    pub(crate) fn index_for(&self, key: i32) -> usize {
        // The capacity is never 0 and can't realistically exceed i64::MAX.
        i64::from(key).rem_euclid(self.cap() as i64) as usize
    }

    pub(crate) fn bucket(&self, key: i32) -> &Chain {
        &self.buckets[self.index_for(key)]
    }
}

/// Allocates `cap` empty buckets.
fn vacant(cap: usize) -> Box<[Chain]> {
    (0..cap).map(|_| Chain::default()).collect()
}

impl Default for HashMap {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for HashMap {
    fn clone(&self) -> Self {
        HashMap {
            buckets: self.buckets.clone(),
            len: self.len,
        }
    }
}

impl Extend<(i32, i32)> for HashMap {
    fn extend<I: IntoIterator<Item = (i32, i32)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl FromIterator<(i32, i32)> for HashMap {
    fn from_iter<I: IntoIterator<Item = (i32, i32)>>(iter: I) -> Self {
        let mut map = HashMap::new();
        map.extend(iter);
        map
    }
}

impl PartialEq for HashMap {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self.entries().all(|entry| other.get(entry.key) == Some(entry.value))
    }
}

impl Eq for HashMap {}

impl Debug for HashMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashMap")
            .field("buckets", &self.buckets)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl Display for HashMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries().map(|entry| (entry.key, entry.value)))
            .finish()
    }
}

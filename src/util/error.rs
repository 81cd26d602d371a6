use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error};

/// An index was provided that doesn't refer to a valid position in the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// An element was requested from a collection that has none, e.g. the front of an empty list or
/// the minimum of an empty tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Attempted to access an element of an empty collection!")]
pub struct EmptyCollection;

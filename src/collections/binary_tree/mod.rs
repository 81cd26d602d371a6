//! Tree-based collections, where each node owns its children.

pub mod search;

#[doc(inline)]
pub use search::{BinarySearchTree, Order, Traversal};

//! Basic collection types over fixed element types.
//!
//! # Purpose
//! Each type here is a textbook data structure written from scratch: a growable array, a singly
//! linked list, a chained hash map and an unbalanced binary search tree, plus a stack and a queue
//! built on top of the first two.
//!
//! # Method
//! The types own their memory directly, through boxed slices, boxed nodes or raw node pointers,
//! rather than wrapping the [`std`] collections. Accessors that require an element come in pairs: a
//! `try_` method returning one of the error types below, and a panicking method that throws it.

#[cfg(feature = "adapters")]
pub mod adapters;
#[cfg(feature = "binary-tree")]
pub mod binary_tree;
#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "linked")]
pub mod linked;

#[doc(inline)]
pub use crate::util::error::{EmptyCollection, IndexOutOfBounds};

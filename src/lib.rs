//! A small set of basic collections, each written from scratch over a fixed element type.
//!
//! # Contents
//! - [`DynamicArray`](collections::contiguous::DynamicArray): a growable array of [`f64`]s that
//!   doubles its capacity when full.
//! - [`LinkedList`](collections::linked::LinkedList): a singly linked list of [`f64`]s with a tail
//!   pointer.
//! - [`Stack`](collections::adapters::Stack) and [`Queue`](collections::adapters::Queue): LIFO and
//!   FIFO adapters over the two types above.
//! - [`HashMap`](collections::hash::HashMap): an [`i32`] to [`i32`] map using separate chaining,
//!   which rehashes once its load factor passes 0.7.
//! - [`BinarySearchTree`](collections::binary_tree::BinarySearchTree): an unbalanced binary search
//!   tree of [`f64`]s with in-, pre-, post- and level-order traversals.
//!
//! # Error Handling
//! It is more ergonomic for accessors to panic when their preconditions aren't met, rather than
//! forcing every caller to handle an error. So methods like `front`, `min` or `get` panic, while a
//! matching `try_` method returns a [`Result`] with a strongly typed error instead. Operations that
//! remove something that isn't there, like popping from an empty list, just do nothing.
//!
//! Errors are zero-sized or plain structs that implement [`Error`](std::error::Error), with their
//! [`Display`](std::fmt::Display) message used as the panic message.
//!
//! # Logging
//! Reallocations of a [`DynamicArray`](collections::contiguous::DynamicArray) are logged at the
//! `trace` level and rehashes of a [`HashMap`](collections::hash::HashMap) at the `debug` level,
//! through the [`log`] facade. No logger is installed here, that choice is left to the binary.
//!
//! # Features
//! Each collection sits behind a feature of the same name (`contiguous`, `linked`, `adapters`,
//! `hash` and `binary-tree`), all enabled by `collections-all`, which is on by default.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;

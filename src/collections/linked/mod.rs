//! Linked collection types. Currently just [`LinkedList`], a singly linked list of [`f64`]s.

pub mod list;

#[doc(inline)]
pub use list::LinkedList;

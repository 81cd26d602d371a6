//! A module containing [`DynamicArray`], the contiguous growable buffer of [`f64`]s.
//!
//! Borrowed iteration is provided through [`as_slice`](DynamicArray::as_slice), so no dedicated
//! iterator types are included here.
//!
//! [`DynamicArray`] is also re-exported under the parent module.

mod dynamic_array;

pub use dynamic_array::*;

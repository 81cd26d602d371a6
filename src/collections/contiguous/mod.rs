//! Contiguous collection types. Namely [`DynamicArray`], a buffer of elements that grows at
//! runtime by doubling its capacity.
#![warn(missing_docs)]

pub mod dynamic_array;

#[doc(inline)]
pub use dynamic_array::DynamicArray;

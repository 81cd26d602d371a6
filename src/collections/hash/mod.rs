//! Hash-based collection types. Currently just [`HashMap`].

pub mod map;

#[doc(inline)]
pub use map::HashMap;

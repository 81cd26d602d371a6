//! A module containing [`HashMap`], a separate-chaining map of [`i32`] keys to [`i32`] values.
//!
//! The chains themselves are private to this module, and are only accessible through the map's
//! operations.
//!
//! [`HashMap`] is also re-exported under the parent module.

mod chain;
mod hash_map;
mod tests;

pub(crate) use chain::*;
pub use hash_map::*;

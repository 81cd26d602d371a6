//! Collections that restrict another collection to a narrower interface: [`Stack`] over a
//! [`DynamicArray`](super::contiguous::DynamicArray) and [`Queue`] over a
//! [`LinkedList`](super::linked::LinkedList).

mod queue;
mod stack;
mod tests;

pub use queue::*;
pub use stack::*;

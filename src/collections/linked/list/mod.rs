mod linked_list;
mod node;
mod tests;

pub use linked_list::*;
pub(crate) use node::*;

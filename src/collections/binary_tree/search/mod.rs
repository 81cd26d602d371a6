mod binary_search_tree;
mod node;
mod traversal;

pub use binary_search_tree::*;
pub(crate) use node::*;
pub use traversal::*;

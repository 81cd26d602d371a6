use std::collections::VecDeque;
use std::fmt::{self, Display, Formatter};

use derive_more::IsVariant;

use super::{BinarySearchTree, Branch, Node};

/// The order in which a traversal visits the values of a [`BinarySearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum Order {
    /// Left subtree, node, right subtree. Visits values in ascending order.
    In,
    /// Node, left subtree, right subtree.
    Pre,
    /// Left subtree, right subtree, node.
    Post,
    /// Breadth first, one level at a time, left to right.
    Level,
}

/// A view of a [`BinarySearchTree`] that displays its values in a given [`Order`], each followed
/// by a single space.
///
/// # Examples
/// ```
/// # use basic_collections::collections::binary_tree::{BinarySearchTree, Order};
/// let tree: BinarySearchTree = [2.0, 1.0, 3.0].into_iter().collect();
/// assert_eq!(tree.traversal(Order::Pre).to_string(), "2 1 3 ");
/// assert_eq!(tree.traversal(Order::Post).to_string(), "1 3 2 ");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Traversal<'a> {
    pub(crate) tree: &'a BinarySearchTree,
    pub(crate) order: Order,
}

impl Traversal<'_> {
    pub const fn order(&self) -> Order {
        self.order
    }
}

impl Display for Traversal<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut result = Ok(());
        self.tree.visit(self.order, |value| {
            if result.is_ok() {
                result = write!(f, "{value} ");
            }
        });
        result
    }
}

impl Branch {
    pub fn inorder<F: FnMut(f64)>(&self, visit: &mut F) {
        if let Some(node) = &self.0 {
            node.left.inorder(visit);
            visit(node.value);
            node.right.inorder(visit);
        }
    }

    pub fn preorder<F: FnMut(f64)>(&self, visit: &mut F) {
        if let Some(node) = &self.0 {
            visit(node.value);
            node.left.preorder(visit);
            node.right.preorder(visit);
        }
    }

    pub fn postorder<F: FnMut(f64)>(&self, visit: &mut F) {
        if let Some(node) = &self.0 {
            node.left.postorder(visit);
            node.right.postorder(visit);
            visit(node.value);
        }
    }

    pub fn levelorder<F: FnMut(f64)>(&self, visit: &mut F) {
        let mut pending: VecDeque<&Node> = self.0.as_deref().into_iter().collect();

        while let Some(node) = pending.pop_front() {
            visit(node.value);
            pending.extend(node.left.0.as_deref());
            pending.extend(node.right.0.as_deref());
        }
    }
}

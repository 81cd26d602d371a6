use std::fmt::{self, Debug, Display, Formatter};
use std::io::{self, Write};

use super::{Branch, Node, Order, Traversal};
use crate::util::error::EmptyCollection;
use crate::util::result::ResultExtension;

/// An unbalanced binary search tree of [`f64`]s.
///
/// Every value in a node's left subtree is less than its own and every value in its right subtree
/// is greater. Values are compared with [`f64::total_cmp`], so `-0.0` and `0.0` are distinct and
/// NaN sorts above every other value. Duplicate insertions are ignored.
///
/// Nothing rebalances the tree, so sorted input degrades it into a list.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of values in the BinarySearchTree.
/// - `h`: The height of the BinarySearchTree, `log2 n` if balanced, `n` at worst.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(h)` |
/// | `contains` | `O(h)` |
/// | `erase` | `O(h)` |
/// | `min/max` | `O(h)` |
/// | `height` | `O(n)` |
/// | `is_valid_bst` | `O(n)` |
/// | traversals | `O(n)` |
pub struct BinarySearchTree {
    pub(crate) root: Branch,
    pub(crate) len: usize,
}

impl BinarySearchTree {
    /// Creates a new, empty BinarySearchTree.
    pub const fn new() -> BinarySearchTree {
        BinarySearchTree {
            root: Branch(None),
            len: 0,
        }
    }

    /// Returns the number of values in the tree.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree contains no values.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `value` as a new leaf. Does nothing if the value is already present.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::binary_tree::BinarySearchTree;
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(5.0);
    /// tree.insert(3.0);
    /// tree.insert(5.0);
    /// assert_eq!(tree.len(), 2);
    /// assert!(tree.contains(3.0));
    /// ```
    pub fn insert(&mut self, value: f64) {
        if self.root.insert(value) {
            self.len += 1;
        }
    }

    /// Returns true if the tree contains `value`.
    pub fn contains(&self, value: f64) -> bool {
        self.root.contains(value)
    }

    /// Removes `value` from the tree. Does nothing if it isn't present.
    ///
    /// If the value's node has two children, it is overwritten with its in-order successor, the
    /// smallest value in its right subtree, which is then removed from that subtree instead.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::binary_tree::{BinarySearchTree, Order};
    /// let mut tree: BinarySearchTree = [5.0, 3.0, 7.0, 6.0, 8.0].into_iter().collect();
    /// tree.erase(5.0);
    /// assert_eq!(tree.traversal(Order::Pre).to_string(), "6 3 7 8 ");
    /// assert!(tree.is_valid_bst());
    /// ```
    pub fn erase(&mut self, value: f64) {
        if self.root.erase(value) {
            self.len -= 1;
        }
    }

    /// Returns the smallest value in the tree.
    ///
    /// # Panics
    /// Panics if the tree is empty.
    pub fn min(&self) -> f64 {
        self.try_min().throw()
    }

    /// Returns the smallest value in the tree, or an error if it is empty.
    pub fn try_min(&self) -> Result<f64, EmptyCollection> {
        self.root.first().ok_or(EmptyCollection)
    }

    /// Returns the largest value in the tree.
    ///
    /// # Panics
    /// Panics if the tree is empty.
    pub fn max(&self) -> f64 {
        self.try_max().throw()
    }

    /// Returns the largest value in the tree, or an error if it is empty.
    pub fn try_max(&self) -> Result<f64, EmptyCollection> {
        self.root.last().ok_or(EmptyCollection)
    }

    /// Returns the number of nodes on the longest path from the root to a leaf, 0 if the tree is
    /// empty.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// Checks the ordering of every node against the bounds set by all of its ancestors, not just
    /// its parent.
    pub fn is_valid_bst(&self) -> bool {
        self.root.is_ordered_within(None, None)
    }

    /// Calls `visit` with every value in ascending order.
    pub fn inorder(&self, mut visit: impl FnMut(f64)) {
        self.root.inorder(&mut visit);
    }

    /// Calls `visit` with every value, each node before its subtrees.
    pub fn preorder(&self, mut visit: impl FnMut(f64)) {
        self.root.preorder(&mut visit);
    }

    /// Calls `visit` with every value, each node after its subtrees.
    pub fn postorder(&self, mut visit: impl FnMut(f64)) {
        self.root.postorder(&mut visit);
    }

    /// Calls `visit` with every value, level by level from the root, left to right within a level.
    pub fn levelorder(&self, mut visit: impl FnMut(f64)) {
        self.root.levelorder(&mut visit);
    }

    /// Calls `visit` with every value, in the given `order`.
    pub fn visit(&self, order: Order, visit: impl FnMut(f64)) {
        match order {
            Order::In => self.inorder(visit),
            Order::Pre => self.preorder(visit),
            Order::Post => self.postorder(visit),
            Order::Level => self.levelorder(visit),
        }
    }

    /// Returns a view of the tree that displays its values in the given `order`.
    pub const fn traversal(&self, order: Order) -> Traversal<'_> {
        Traversal {
            tree: self,
            order,
        }
    }

    /// Writes the in-order traversal to stdout, followed by a newline.
    pub fn print_inorder(&self) {
        println!("{}", self.traversal(Order::In));
    }

    /// Writes the pre-order traversal to stdout, followed by a newline.
    pub fn print_preorder(&self) {
        println!("{}", self.traversal(Order::Pre));
    }

    /// Writes the post-order traversal to stdout, followed by a newline.
    pub fn print_postorder(&self) {
        println!("{}", self.traversal(Order::Post));
    }

    /// Writes the level-order traversal to stdout, followed by a newline.
    pub fn print_levelorder(&self) {
        println!("{}", self.traversal(Order::Level));
    }

    /// Writes the [`Display`] form of the tree (its in-order traversal) to stdout, followed by a
    /// newline.
    pub fn print(&self) {
        println!("{self}");
    }

    /// Writes the [`Display`] form of the tree to `out`, followed by a newline.
    pub fn print_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{self}")
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        // Detach subtrees onto an explicit stack so that a degenerate tree isn't dropped
        // recursively.
        let mut detached: Vec<Box<Node>> = self.root.0.take().into_iter().collect();

        while let Some(mut node) = detached.pop() {
            detached.extend(node.left.0.take());
            detached.extend(node.right.0.take());
        }
        self.len = 0;
    }
}

impl Default for BinarySearchTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BinarySearchTree {
    fn drop(&mut self) {
        self.clear();
    }
}

impl Clone for BinarySearchTree {
    fn clone(&self) -> Self {
        let mut root = Branch(None);

        // Pairs of a node to copy and the empty branch its copy goes into, walked with an explicit
        // stack like clear.
        let mut pending: Vec<(&Node, &mut Branch)> = Vec::new();
        if let Some(node) = self.root.0.as_deref() {
            pending.push((node, &mut root));
        }

        while let Some((source, dest)) = pending.pop() {
            let copy = dest.0.insert(Box::new(Node::leaf(source.value)));

            if let Some(left) = source.left.0.as_deref() {
                pending.push((left, &mut copy.left));
            }
            if let Some(right) = source.right.0.as_deref() {
                pending.push((right, &mut copy.right));
            }
        }

        BinarySearchTree {
            root,
            len: self.len,
        }
    }
}

impl Extend<f64> for BinarySearchTree {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl FromIterator<f64> for BinarySearchTree {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::new();
        tree.extend(iter);
        tree
    }
}

impl Debug for BinarySearchTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "BinarySearchTree {{ len: {}, nodes:", self.len)?;
        writeln!(f, "{:?}", self.root)?;
        write!(f, "}}")
    }
}

impl Display for BinarySearchTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.traversal(Order::In))
    }
}

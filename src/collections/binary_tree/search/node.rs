use std::cmp::{self, Ordering};
use std::fmt::{self, Debug, Formatter};
use std::ops::{Deref, DerefMut};

/// An owned, possibly empty subtree.
#[derive(Default)]
pub(crate) struct Branch(pub Option<Box<Node>>);

pub(crate) struct Node {
    pub left: Branch,
    pub right: Branch,
    pub value: f64,
}

impl Node {
    pub const fn leaf(value: f64) -> Node {
        Node {
            left: Branch(None),
            right: Branch(None),
            value,
        }
    }
}

impl Branch {
    /// Attaches `value` as a new leaf in the position that keeps this branch ordered. Returns false
    /// and leaves the branch unchanged if the value is already present.
    pub fn insert(&mut self, value: f64) -> bool {
        let mut branch = self;
        while let Some(ref mut node) = branch.0 {
            branch = match value.total_cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
        }

        branch.0 = Some(Box::new(Node::leaf(value)));
        true
    }

    pub fn contains(&self, value: f64) -> bool {
        let mut branch = self;
        while let Some(node) = &branch.0 {
            branch = match value.total_cmp(&node.value) {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Returns the leftmost value.
    pub fn first(&self) -> Option<f64> {
        let mut node = self.0.as_deref()?;
        while let Some(left) = node.left.0.as_deref() {
            node = left;
        }
        Some(node.value)
    }

    /// Returns the rightmost value.
    pub fn last(&self) -> Option<f64> {
        let mut node = self.0.as_deref()?;
        while let Some(right) = node.right.0.as_deref() {
            node = right;
        }
        Some(node.value)
    }

    /// Removes the leftmost node, splicing its right branch into its place.
    pub fn take_first(&mut self) -> Option<f64> {
        match &mut self.0 {
            Some(node) => match node.left.take_first() {
                Some(value) => Some(value),
                None => {
                    let Node { right, value, .. } = *self.0.take()?;
                    self.0 = right.0;
                    Some(value)
                },
            },
            None => None,
        }
    }

    /// Removes `value` from this branch, returning true if it was present.
    ///
    /// A node with two children isn't unlinked itself. Instead, it takes the value of its in-order
    /// successor, which is removed from the right branch in its place.
    pub fn erase(&mut self, value: f64) -> bool {
        let Some(node) = &mut self.0 else { return false };

        match value.total_cmp(&node.value) {
            Ordering::Less => node.left.erase(value),
            Ordering::Greater => node.right.erase(value),
            Ordering::Equal if node.left.is_some() && node.right.is_some() => {
                if let Some(successor) = node.right.take_first() {
                    node.value = successor;
                }
                true
            },
            Ordering::Equal => {
                if let Some(removed) = self.0.take() {
                    let Node { left, right, .. } = *removed;
                    self.0 = if left.is_some() { left.0 } else { right.0 };
                }
                true
            },
        }
    }

    pub fn height(&self) -> usize {
        match &self.0 {
            Some(node) => 1 + cmp::max(node.left.height(), node.right.height()),
            None => 0,
        }
    }

    /// Checks that every value in this branch lies strictly between `lower` and `upper`, the
    /// nearest bounds set by its ancestors.
    pub fn is_ordered_within(&self, lower: Option<f64>, upper: Option<f64>) -> bool {
        let Some(node) = &self.0 else { return true };

        if lower.is_some_and(|lower| node.value.total_cmp(&lower).is_le()) {
            return false;
        }
        if upper.is_some_and(|upper| node.value.total_cmp(&upper).is_ge()) {
            return false;
        }

        node.left.is_ordered_within(lower, Some(node.value))
            && node.right.is_ordered_within(Some(node.value), upper)
    }
}

impl Deref for Branch {
    type Target = Option<Box<Node>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Branch {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Debug for Branch {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(node) => write!(
                f,
                "{}\n({:?})\n{}",
                format!("{:?}", node.left)
                    .lines()
                    .map(|l| String::from("┌    ") + l)
                    .collect::<Vec<_>>()
                    .join("\n"),
                node.value,
                format!("{:?}", node.right)
                    .lines()
                    .map(|l| String::from("└    ") + l)
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
            None => write!(f, "-"),
        }
    }
}

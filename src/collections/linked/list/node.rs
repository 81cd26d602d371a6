use std::ptr::NonNull;

pub(crate) type Link = Option<NodePtr>;

// NOTE: Nodes are allocated with Box<T> and leaked into a NonNull, so that taking a node back with
// Box::from_raw moves the value out of the heap and frees the allocation in one step.

/// A pointer to a node owned by a LinkedList. Copying a NodePtr never copies ownership: the list
/// (through its head, or the preceding node) remains the single owner of each node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodePtr(pub NonNull<Node>);

pub(crate) struct Node {
    pub value: f64,
    pub next: Link,
}

impl NodePtr {
    pub fn from_node(node: Node) -> NodePtr {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    pub fn value(self) -> f64 {
        // SAFETY: A NodePtr is only held by the list which owns the node, and only while the node
        // is reachable, so it always points to a live, initialized Node.
        unsafe { self.0.as_ref().value }
    }

    pub fn next(self) -> Link {
        // SAFETY: As above.
        unsafe { self.0.as_ref().next }
    }

    pub fn set_next(mut self, next: Link) {
        // SAFETY: As above. No reference into the node is alive while links are rewritten.
        unsafe { self.0.as_mut().next = next; }
    }

    /// Reclaims ownership of the node, freeing its allocation.
    ///
    /// # Safety
    /// The node must no longer be reachable from the list, and no other NodePtr to it may be used
    /// afterwards.
    pub unsafe fn take_node(self) -> Node {
        // SAFETY: The pointer was created from a leaked Box in from_node and, per the caller's
        // guarantee, is being reclaimed exactly once.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }
}

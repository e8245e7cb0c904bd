//! Chain links for [`crate::SinglyLinkedList`].
//!
//! Each [`Node`] exclusively owns its successor, so a chain is a strict
//! single-owner sequence: no cycles, no shared suffixes.

/// Ownership edge to the next node, `None` past the tail.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single link of the chain.
#[derive(Debug)]
pub(crate) struct Node<T> {
    /// The stored element.
    pub(crate) value: T,
    /// The node that follows this one.
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    /// Allocates a node holding `value` in front of `next`.
    pub(crate) fn boxed(value: T, next: Link<T>) -> Box<Self> {
        Box::new(Self { value, next })
    }

    /// Allocates a node holding `value` with no successor.
    pub(crate) fn tail(value: T) -> Box<Self> {
        Self::boxed(value, None)
    }
}

/// Returns the link slot after the last node of the chain starting at `link`.
///
/// Writing `Some(node)` into the returned slot appends to the chain.
pub(crate) fn last_slot<T>(mut link: &mut Link<T>) -> &mut Link<T> {
    while let Some(node) = link {
        link = &mut node.next;
    }
    link
}

/// Returns the slot holding the node `index` steps after `link`,
/// or `None` if the chain ends before reaching it.
///
/// `index == length` yields the empty slot after the tail.
pub(crate) fn slot_at<T>(mut link: &mut Link<T>, index: usize) -> Option<&mut Link<T>> {
    for _ in 0..index {
        let Some(node) = link else {
            return None;
        };
        link = &mut node.next;
    }
    Some(link)
}

/// Unlinks the node held in `slot`, promoting its successor into the slot.
///
/// The detached node is released before returning; only its value survives.
pub(crate) fn unlink<T>(slot: &mut Link<T>) -> Option<T> {
    let node = slot.take()?;
    let Node { value, next } = *node;
    *slot = next;
    Some(value)
}

/// Unlinks the node held in `slot` only if `predicate` accepts it.
///
/// Returns `None`, leaving the chain untouched, for an empty slot or a
/// rejected node.
pub(crate) fn unlink_if<T>(
    slot: &mut Link<T>,
    predicate: impl FnOnce(&Node<T>) -> bool,
) -> Option<T> {
    let node = slot.take_if(|node| predicate(&**node))?;
    let Node { value, next } = *node;
    *slot = next;
    Some(value)
}

/// Releases every node of the chain iteratively.
///
/// Recursive `Box` drops would use stack depth proportional to the length.
pub(crate) fn release<T>(mut link: Link<T>) {
    while let Some(mut node) = link {
        link = node.next.take();
    }
}

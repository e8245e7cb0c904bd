//! The [`SinglyLinkedList`] container and its core operations.
//!
//! The list owns its head node, every node owns its successor. Neither a tail
//! pointer nor a length is cached: both are recomputed by walking the chain.

use std::fmt::{self, Debug, Display};

use tracing::{debug, trace};

use crate::{
    error::ListError,
    iter::Elements,
    node::{self, Link, Node},
};

/// An ordered, singly-linked, mutable sequence of `T`.
///
/// All interaction is by value: no operation hands out node identity, only
/// references to stored elements.
pub struct SinglyLinkedList<T> {
    /// First node of the chain, `None` when empty.
    pub(crate) head: Link<T>,
}

impl<T> SinglyLinkedList<T> {
    /// Creates an empty list.
    pub const fn new() -> Self {
        Self { head: None }
    }

    /// Returns `true` if the list holds no head node.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Makes `value` the first element. O(1).
    pub fn insert_at_head(&mut self, value: T) {
        self.head = Some(Node::boxed(value, self.head.take()));
        trace!("inserted at head");
    }

    /// Makes `value` the last element.
    ///
    /// Walks the whole chain to find the tail, O(N).
    pub fn insert_at_tail(&mut self, value: T) {
        if self.is_empty() {
            self.insert_at_head(value);
            return;
        }
        *node::last_slot(&mut self.head) = Some(Node::tail(value));
        trace!("inserted at tail");
    }

    /// Returns a reference to the first element, if any.
    pub fn head(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    /// Detaches the head node and returns its value.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyList`] if there is nothing to remove.
    pub fn pop_head(&mut self) -> Result<T, ListError> {
        node::unlink(&mut self.head).ok_or_else(|| {
            debug!("list is empty");
            ListError::EmptyList
        })
    }

    /// Removes the head element, returning `false` if the list was empty.
    pub fn delete_at_head(&mut self) -> bool {
        self.pop_head().is_ok()
    }

    /// Counts the nodes of the chain. O(N), nothing is cached.
    pub fn length(&self) -> usize {
        self.elements().count()
    }

    /// Reverses the list in place by relinking nodes.
    ///
    /// No node is allocated or released; O(N) time, O(1) extra space.
    pub fn reverse(&mut self) {
        let mut previous: Link<T> = None;
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
            node.next = previous;
            previous = Some(node);
        }
        self.head = previous;
    }

    /// Returns the element `n` positions from the end, `n == 1` being the tail.
    ///
    /// # Errors
    ///
    /// - [`ListError::EmptyList`] if the list is empty.
    /// - [`ListError::NotFound`] if `n == 0` or `n > length()`.
    pub fn nth_from_end(&self, n: usize) -> Result<&T, ListError> {
        if self.is_empty() {
            return Err(ListError::EmptyList);
        }
        let offset = self
            .length()
            .checked_sub(n)
            .filter(|_| n > 0)
            .ok_or(ListError::NotFound)?;
        self.elements().nth(offset).ok_or(ListError::NotFound)
    }

    /// Like [`Self::nth_from_end`], collapsing every failure into `None`.
    pub fn find_nth(&self, n: usize) -> Option<&T> {
        self.nth_from_end(n).ok()
    }

    /// Returns a borrowing iterator over the elements from head to tail.
    pub fn elements(&self) -> Elements<'_, T> {
        Elements::new(self.head.as_deref())
    }

    /// Splits the list at index `at`, returning everything from `at` onward.
    ///
    /// If `at >= length()` the returned list is empty and `self` is unchanged.
    pub fn split_off(&mut self, at: usize) -> Self {
        let mut slot = &mut self.head;
        for _ in 0..at {
            let Some(node) = slot else {
                break;
            };
            slot = &mut node.next;
        }
        Self { head: slot.take() }
    }

    /// Moves every node of `other` to the end of `self`.
    pub fn append(&mut self, mut other: Self) {
        *node::last_slot(&mut self.head) = other.head.take();
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    /// Returns `true` if some element equals `value`.
    pub fn search(&self, value: &T) -> bool {
        self.elements().any(|element| element == value)
    }

    /// Removes the first element equal to `value` and returns it.
    ///
    /// Later duplicates are left in place.
    ///
    /// # Errors
    ///
    /// - [`ListError::EmptyList`] if the list is empty.
    /// - [`ListError::NotFound`] if no element matches; the list is unchanged.
    pub fn remove(&mut self, value: &T) -> Result<T, ListError> {
        if self.is_empty() {
            debug!("list is empty");
            return Err(ListError::EmptyList);
        }

        let mut slot = &mut self.head;
        let mut position = 0usize;
        loop {
            if let Some(removed) = node::unlink_if(slot, |node| node.value == *value) {
                debug!(position, "deleted");
                return Ok(removed);
            }
            let Some(current) = slot else {
                debug!("value does not exist");
                return Err(ListError::NotFound);
            };
            slot = &mut current.next;
            position += 1;
        }
    }

    /// Removes the first element equal to `value`.
    ///
    /// Returns `false`, leaving the list unchanged, if the list is empty or
    /// holds no such element.
    pub fn delete(&mut self, value: &T) -> bool {
        self.remove(value).is_ok()
    }
}

impl<T: Clone> SinglyLinkedList<T> {
    /// Copies the elements, head to tail, into a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.elements().cloned().collect()
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        node::release(self.head.take());
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.elements().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements().eq(other.elements())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.elements()).finish()
    }
}

/// Renders `v1->v2->...->vk->null`, or `List is Empty!` for an empty list.
impl<T: Display> Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "List is Empty!");
        }
        for value in self.elements() {
            write!(f, "{value}->")?;
        }
        write!(f, "null")
    }
}

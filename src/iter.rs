//! Iteration over and conversion into [`SinglyLinkedList`].

use std::iter::FusedIterator;

use crate::{
    SinglyLinkedList,
    node::{self, Node},
};

/// Borrowing iterator over a list's elements, head to tail.
///
/// Created by [`SinglyLinkedList::elements`]. It cannot be restarted; call
/// `elements` again for a fresh walk.
pub struct Elements<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Elements<'a, T> {
    pub(crate) fn new(head: Option<&'a Node<T>>) -> Self {
        Self { next: head }
    }
}

impl<'a, T> Iterator for Elements<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<T> FusedIterator for Elements<'_, T> {}

impl<T> Clone for Elements<'_, T> {
    fn clone(&self) -> Self {
        Self { next: self.next }
    }
}

/// Owning iterator that drains a list from the head.
pub struct IntoIter<T>(SinglyLinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_head().ok()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Elements<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements()
    }
}

/// Appends at the tail, keeping iteration order.
impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut slot = node::last_slot(&mut self.head);
        for value in iter {
            slot = &mut slot.insert(Node::tail(value)).next;
        }
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> From<Vec<T>> for SinglyLinkedList<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for SinglyLinkedList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

//! Classic list exercises built on the core chain operations.
//!
//! Everything here relinks existing nodes instead of copying elements, so a
//! value is never cloned and the chain stays singly owned throughout.

use tracing::debug;

use crate::{
    SinglyLinkedList,
    error::ListError,
    node,
};

impl<T> SinglyLinkedList<T> {
    /// Returns the middle element; for an even length, the second of the two.
    pub fn middle(&self) -> Option<&T> {
        let mut slow = self.elements();
        let mut fast = self.elements();
        while fast.next().is_some() && fast.next().is_some() {
            slow.next();
        }
        slow.next()
    }

    /// Unlinks the element `n` positions from the end, `n == 1` being the tail.
    ///
    /// # Errors
    ///
    /// - [`ListError::EmptyList`] if the list is empty.
    /// - [`ListError::NotFound`] if `n == 0` or `n > length()`.
    pub fn remove_nth_from_end(&mut self, n: usize) -> Result<T, ListError> {
        if self.is_empty() {
            return Err(ListError::EmptyList);
        }
        let offset = self
            .length()
            .checked_sub(n)
            .filter(|_| n > 0)
            .ok_or(ListError::NotFound)?;
        node::slot_at(&mut self.head, offset)
            .and_then(node::unlink)
            .ok_or(ListError::NotFound)
    }

    /// Splits the list in two, keeping the first `ceil(n / 2)` elements and
    /// returning the rest.
    pub fn split_half(&mut self) -> Self {
        let keep = self.length().div_ceil(2);
        self.split_off(keep)
    }

    /// Interleaves the first half with the reversed second half:
    /// `L0, Ln-1, L1, Ln-2, ...`.
    pub fn reorder(&mut self) {
        let mut back = self.split_half();
        back.reverse();

        let mut front = self.head.take();
        let mut back = back.head.take();
        let mut slot = &mut self.head;
        while let Some(mut node) = front {
            front = node.next.take();
            slot = &mut slot.insert(node).next;
            if let Some(mut node) = back {
                back = node.next.take();
                slot = &mut slot.insert(node).next;
            }
        }
    }

    /// Reverses the elements at indices `start..=end` in place.
    ///
    /// # Errors
    ///
    /// - [`ListError::EmptyList`] if the list is empty.
    /// - [`ListError::NotFound`] if `start > end` or `end >= length()`.
    pub fn reverse_between(&mut self, start: usize, end: usize) -> Result<(), ListError> {
        if self.is_empty() {
            return Err(ListError::EmptyList);
        }
        if start > end || end >= self.length() {
            return Err(ListError::NotFound);
        }
        let tail = self.split_off(end + 1);
        let mut span = self.split_off(start);
        span.reverse();
        self.append(span);
        self.append(tail);
        Ok(())
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    /// Removes every element equal to `value`, returning how many were removed.
    pub fn remove_all(&mut self, value: &T) -> usize {
        let mut removed = 0;
        let mut slot = &mut self.head;
        loop {
            if node::unlink_if(slot, |node| node.value == *value).is_some() {
                removed += 1;
                continue;
            }
            let Some(current) = slot else {
                break;
            };
            slot = &mut current.next;
        }
        debug!(removed, "removed all matches");
        removed
    }

    /// Collapses each run of equal adjacent elements into its first element.
    ///
    /// On a sorted list this removes every duplicate.
    pub fn dedup_sorted(&mut self) {
        let mut slot = &mut self.head;
        while let Some(current) = slot {
            while current
                .next
                .as_ref()
                .is_some_and(|next| next.value == current.value)
            {
                node::unlink(&mut current.next);
            }
            slot = &mut current.next;
        }
    }

    /// Returns `true` if the list reads the same from both ends.
    ///
    /// Collects one reference per element, so it uses O(N) extra space.
    pub fn is_palindrome(&self) -> bool {
        let values: Vec<&T> = self.elements().collect();
        let half = values.len() / 2;
        values
            .iter()
            .take(half)
            .eq(values.iter().rev().take(half))
    }
}

impl<T: PartialOrd> SinglyLinkedList<T> {
    /// Merges two ascending lists into one ascending list by relinking nodes.
    ///
    /// The merge is stable: on ties, elements of `self` come first.
    #[must_use]
    pub fn merge_sorted(mut self, mut other: Self) -> Self {
        let mut left = self.head.take();
        let mut right = other.head.take();
        let mut merged = Self::new();
        let mut slot = &mut merged.head;
        loop {
            match (left.take(), right.take()) {
                (Some(mut l), Some(r)) if l.value <= r.value => {
                    left = l.next.take();
                    right = Some(r);
                    slot = &mut slot.insert(l).next;
                }
                (l, Some(mut r)) if l.is_some() => {
                    right = r.next.take();
                    left = l;
                    slot = &mut slot.insert(r).next;
                }
                (l, r) => {
                    *slot = l.or(r);
                    return merged;
                }
            }
        }
    }

    /// Sorts the list in ascending order with a stable merge sort.
    ///
    /// Nodes are relinked, never reallocated.
    pub fn sort(&mut self) {
        let len = self.length();
        if len < 2 {
            return;
        }
        let mut back = self.split_off(len / 2);
        self.sort();
        back.sort();
        let front = std::mem::take(self);
        *self = front.merge_sorted(back);
    }
}

//! Property tests for singly-linked
//!
//! These tests check the list against a `Vec` model for arbitrary inputs.

use proptest::prelude::*;
use singly_linked::{ListError, SinglyLinkedList};

fn small_values() -> impl Strategy<Value = Vec<i8>> {
    prop::collection::vec(-5i8..5, 0..40)
}

fn from_tail(values: &[i8]) -> SinglyLinkedList<i8> {
    let mut list = SinglyLinkedList::new();
    for &value in values {
        list.insert_at_tail(value);
    }
    list
}

// ============================================================
// Insertion and length
// ============================================================

proptest! {
    #[test]
    fn length_counts_insertions(heads in small_values(), tails in small_values()) {
        let mut list = SinglyLinkedList::new();
        for &value in &heads {
            list.insert_at_head(value);
        }
        for &value in &tails {
            list.insert_at_tail(value);
        }
        prop_assert_eq!(list.length(), heads.len() + tails.len());
        prop_assert_eq!(list.is_empty(), heads.is_empty() && tails.is_empty());
    }

    #[test]
    fn insert_at_head_becomes_first(values in small_values(), value in any::<i8>()) {
        let mut list = from_tail(&values);
        list.insert_at_head(value);
        prop_assert_eq!(list.elements().next(), Some(&value));
    }

    #[test]
    fn insert_at_tail_becomes_last(values in small_values(), value in any::<i8>()) {
        let mut list = from_tail(&values);
        list.insert_at_tail(value);
        prop_assert_eq!(list.elements().last(), Some(&value));
        prop_assert_eq!(&list.to_vec()[..values.len()], &values[..]);
    }

    #[test]
    fn head_insertion_reverses_input(values in small_values()) {
        let mut list = SinglyLinkedList::new();
        for &value in &values {
            list.insert_at_head(value);
        }
        let mut expected = values.clone();
        expected.reverse();
        prop_assert_eq!(list.to_vec(), expected);
    }
}

// ============================================================
// Reversal
// ============================================================

proptest! {
    #[test]
    fn reverse_is_an_involution(values in small_values()) {
        let original = from_tail(&values);
        let mut list = original.clone();
        list.reverse();
        list.reverse();
        prop_assert_eq!(list, original);
    }

    #[test]
    fn reverse_matches_model(values in small_values()) {
        let mut list = from_tail(&values);
        list.reverse();
        let mut expected = values.clone();
        expected.reverse();
        prop_assert_eq!(list.to_vec(), expected);
    }
}

// ============================================================
// Search and deletion
// ============================================================

proptest! {
    #[test]
    fn search_iff_present(values in small_values(), probe in -6i8..6) {
        let list = from_tail(&values);
        prop_assert_eq!(list.search(&probe), values.contains(&probe));
    }

    #[test]
    fn delete_removes_first_occurrence_only(values in small_values(), target in -6i8..6) {
        let mut list = from_tail(&values);
        let before = list.length();
        let deleted = list.delete(&target);

        let mut expected = values.clone();
        match expected.iter().position(|&v| v == target) {
            Some(index) => {
                expected.remove(index);
                prop_assert!(deleted);
                prop_assert_eq!(list.length(), before - 1);
            }
            None => {
                prop_assert!(!deleted);
                prop_assert_eq!(list.length(), before);
            }
        }
        prop_assert_eq!(list.to_vec(), expected);
    }

    #[test]
    fn remove_reports_reason(values in small_values(), target in -6i8..6) {
        let mut list = from_tail(&values);
        let expected = if values.is_empty() {
            Err(ListError::EmptyList)
        } else if values.contains(&target) {
            Ok(target)
        } else {
            Err(ListError::NotFound)
        };
        prop_assert_eq!(list.remove(&target), expected);
    }

    #[test]
    fn delete_at_head_drops_first(values in small_values()) {
        let mut list = from_tail(&values);
        prop_assert_eq!(list.delete_at_head(), !values.is_empty());
        let rest = values.get(1..).unwrap_or_default();
        prop_assert_eq!(list.to_vec(), rest.to_vec());
    }
}

// ============================================================
// Positional queries
// ============================================================

proptest! {
    #[test]
    fn find_nth_counts_from_tail(values in small_values(), n in 0usize..50) {
        let list = from_tail(&values);
        let len = list.length();
        let expected = if n >= 1 && n <= len {
            Some(&values[len - n])
        } else {
            None
        };
        prop_assert_eq!(list.find_nth(n), expected);
    }

    #[test]
    fn remove_nth_from_end_matches_model(values in small_values(), n in 1usize..50) {
        let mut list = from_tail(&values);
        let mut expected = values.clone();
        let removed = list.remove_nth_from_end(n);
        if n <= values.len() {
            prop_assert_eq!(removed, Ok(expected.remove(values.len() - n)));
        } else {
            prop_assert!(removed.is_err());
        }
        prop_assert_eq!(list.to_vec(), expected);
    }

    #[test]
    fn middle_is_second_middle(values in small_values()) {
        let list = from_tail(&values);
        prop_assert_eq!(list.middle(), values.get(values.len() / 2));
    }
}

// ============================================================
// Relinking algorithms
// ============================================================

proptest! {
    #[test]
    fn sort_matches_stable_sort(values in small_values()) {
        let mut list = from_tail(&values);
        list.sort();
        let mut expected = values.clone();
        expected.sort();
        prop_assert_eq!(list.to_vec(), expected);
    }

    #[test]
    fn merge_sorted_keeps_order(mut a in small_values(), mut b in small_values()) {
        a.sort();
        b.sort();
        let merged = from_tail(&a).merge_sorted(from_tail(&b));
        let mut expected: Vec<i8> = a.iter().chain(&b).copied().collect();
        expected.sort();
        prop_assert_eq!(merged.to_vec(), expected);
    }

    #[test]
    fn dedup_sorted_matches_vec_dedup(mut values in small_values()) {
        values.sort();
        let mut list = from_tail(&values);
        list.dedup_sorted();
        values.dedup();
        prop_assert_eq!(list.to_vec(), values);
    }

    #[test]
    fn remove_all_keeps_others(values in small_values(), target in -6i8..6) {
        let mut list = from_tail(&values);
        let removed = list.remove_all(&target);
        let kept: Vec<i8> = values.iter().copied().filter(|&v| v != target).collect();
        prop_assert_eq!(removed, values.len() - kept.len());
        prop_assert_eq!(list.to_vec(), kept);
    }

    #[test]
    fn split_half_then_append_restores(values in small_values()) {
        let mut list = from_tail(&values);
        let back = list.split_half();
        prop_assert_eq!(list.length(), values.len().div_ceil(2));
        list.append(back);
        prop_assert_eq!(list.to_vec(), values);
    }

    #[test]
    fn reverse_between_matches_model(values in small_values(), a in 0usize..40, b in 0usize..40) {
        let mut list = from_tail(&values);
        let (start, end) = (a.min(b), a.max(b));
        let result = list.reverse_between(start, end);
        let mut expected = values.clone();
        if end < values.len() {
            prop_assert_eq!(result, Ok(()));
            expected[start..=end].reverse();
        } else {
            prop_assert!(result.is_err());
        }
        prop_assert_eq!(list.to_vec(), expected);
    }

    #[test]
    fn palindrome_matches_model(values in small_values()) {
        let list = from_tail(&values);
        let reversed: Vec<i8> = values.iter().rev().copied().collect();
        prop_assert_eq!(list.is_palindrome(), values == reversed);
    }

    #[test]
    fn mirrored_input_is_palindrome(values in small_values()) {
        let mirrored: Vec<i8> = values.iter().chain(values.iter().rev()).copied().collect();
        prop_assert!(from_tail(&mirrored).is_palindrome());
    }
}

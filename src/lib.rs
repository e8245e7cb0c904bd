//! # singly-linked
//!
//! A singly linked list whose nodes form a strict single-owner chain.
//!
//! ## Features
//!
//! - Head/tail insertion, search, deletion by value or at the head.
//! - In-place reversal and k-th-from-end lookup.
//! - Failures such as an empty list or a missing value are ordinary return
//!   values ([`ListError`], `bool`, `Option`), never panics.
//! - Merge sort, sorted merge, splitting, reordering and other classic
//!   exercises implemented by relinking nodes.
//!
//! ## Ownership
//!
//! The list owns the head node and every node owns its successor through a
//! `Box`. There is no `unsafe` code, so cycles and shared nodes cannot be
//! expressed. Detached nodes are released within the call that detaches them.
//!
//! ```
//! use singly_linked::SinglyLinkedList;
//!
//! let mut list = SinglyLinkedList::new();
//! for value in 0..=7 {
//!     list.insert_at_head(value);
//! }
//! assert_eq!(list.to_string(), "7->6->5->4->3->2->1->0->null");
//! assert_eq!(list.find_nth(5), Some(&4));
//!
//! list.reverse();
//! assert_eq!(list.head(), Some(&0));
//! ```
//!
//! Operations emit `tracing` events; install a subscriber to see them.

#![forbid(unsafe_code)]
#![warn(
    clippy::perf,
    clippy::correctness,
    clippy::complexity,
    clippy::style,
    clippy::suspicious,
    // clippy::pedantic
)]
#![deny(clippy::undocumented_unsafe_blocks, clippy::cast_possible_truncation)]

mod algorithms;
mod error;
mod iter;
mod list;
mod node;

// Re-export core types for convenience.
pub use error::ListError;
pub use iter::{Elements, IntoIter};
pub use list::SinglyLinkedList;

//! This crate provides a doubly-linked queue of owned strings, implemented as
//! a cyclic list with a ghost node.
//!
//! The [`Queue`] allows inserting and removing elements at both ends in
//! constant time, and reorders itself in place by relinking nodes: reversal,
//! grouped reversal, sorting, merging, monotonic filtering, duplicate removal
//! and shuffling never copy a payload.
//!
//! Here is a quick example showing how the queue works.
//!
//! ```
//! use text_queue::{Queue, SortOrder};
//!
//! let mut queue = Queue::new();
//! queue.insert_tail("gerbil").unwrap();
//! queue.insert_tail("bear").unwrap();
//! queue.insert_head("dolphin").unwrap();
//! assert_eq!(queue.to_vec(), vec!["dolphin", "gerbil", "bear"]);
//!
//! queue.sort(SortOrder::Ascending);
//! assert_eq!(queue.to_vec(), vec!["bear", "dolphin", "gerbil"]);
//!
//! let element = queue.remove_head().unwrap(); // the caller owns it now
//! assert_eq!(element.value(), "bear");
//! assert_eq!(queue.size(), 2);
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the queue is like the following graph:
//! ```text
//!          ┌─────────────────────────────────────────────────────────────────────┐
//!          ↓                                                     (Ghost) Node N  │
//!    ╔═══════════╗           ╔═══════════╗                        ┌───────────┐  │
//!    ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ────────→ │   next    │ ─┘
//!    ╟───────────╢           ╟───────────╢     Node 2, 3, ...     ├───────────┤
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←──────── ┄┄ ←──────── │   prev    │
//! │  ╟───────────╢           ╟───────────╢                        ├───────────┤
//! │  ║  String   ║           ║  String   ║                        ┊No payload ┊
//! │  ╚═══════════╝           ╚═══════════╝                        └╌╌╌╌╌╌╌╌╌╌╌┘
//! │      Node 0                  Node 1                               ↑   ↑
//! └───────────────────────────────────────────────────────────────────┘   │
//! ╔═══════════╗                                                           │
//! ║   ghost   ║ ──────────────────────────────────────────────────────────┘
//! ╟───────────╢
//! ║   nodes   ║  arena of every node above
//! ╚═══════════╝
//!     Queue
//! ```
//! The `Queue` contains:
//! - an arena `nodes` that owns every node, the ghost node included;
//! - the arena index `ghost` of the ghost node.
//!
//! The `next` and `prev` links are arena indices. Slots freed by removed
//! nodes are reused by later insertions.
//!
//! Initially, there is a ghost node in an empty queue, of which the `next` and
//! `prev` links point to itself. As elements are inserted, `ghost.next` points
//! to the first element, and `ghost.prev` points to the last element.
//!
//! # Ownership
//!
//! Inserting copies the given text into the queue. Removing hands the node
//! over to the caller as an [`Element`], which releases the payload when
//! dropped. Operations that discard nodes, like [`Queue::delete_dup`],
//! release them right away.
//!
//! # Algorithms
//!
//! - [`Queue::reverse`], [`Queue::reverse_k`], [`Queue::swap`]: reverse the
//!   whole queue, or runs of `k` nodes;
//! - [`Queue::sort`]: top-down merge sort, stable when ascending;
//! - [`Queue::merge`] and [`merge_queues`]: merge 2 or *k* sorted queues;
//! - [`Queue::ascend`], [`Queue::descend`]: monotonic filters;
//! - [`Queue::delete_mid`], [`Queue::delete_dup`]: targeted deletions;
//! - [`Queue::shuffle`]: Fisher–Yates shuffle driven by a caller-owned
//!   random generator (feature `shuffle`, enabled by default).
//!
//! ## Examples
//!
//! ```
//! use text_queue::{merge_queues, Queue, QueueContext, SortOrder};
//! use std::iter::FromIterator;
//!
//! let mut queue = Queue::from_iter(["1", "2", "3", "4", "5"]);
//! queue.reverse_k(2);
//! assert_eq!(queue.to_vec(), vec!["2", "1", "4", "3", "5"]);
//!
//! let mut chain = vec![
//!     QueueContext::new(0, Queue::from_iter(["a", "c"])),
//!     QueueContext::new(1, Queue::from_iter(["b", "d"])),
//! ];
//! assert_eq!(merge_queues(&mut chain, SortOrder::Ascending), 4);
//! assert_eq!(chain[0].queue.to_vec(), vec!["a", "b", "c", "d"]);
//! ```
//!
//! # Logging
//!
//! Whole-queue operations emit `tracing` events at `debug` level, and
//! per-node details at `trace` level. The crate never installs a subscriber.

#[doc(inline)]
pub use error::{QueueError, Result};
#[doc(inline)]
pub use list::algorithms::{merge_queues, Drain, QueueContext, SortOrder};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter};
#[doc(inline)]
pub use list::{Element, Queue};

pub mod error;
pub mod list;

use std::fmt::{Debug, Formatter};

use slab::Slab;

use crate::error::{QueueError, Result};
use crate::list::algorithms::Drain;
use crate::list::iterator::Iter;

pub mod element;
pub mod iterator;

pub(crate) mod algorithms;

pub use element::Element;

/// The `Queue` is a doubly-linked list of owned strings, implemented as a
/// cyclic list with a ghost node. It allows inserting and removing elements
/// at both ends in constant time.
///
/// All nodes, the ghost node included, live in an arena owned by the queue,
/// and the links between them are arena indices. Slots of removed nodes are
/// recycled by later insertions.
///
/// # Naming Conventions
///
/// - `front..=back`: a closed range of list nodes, both inclusive;
/// - `start..end`: a half-open range of list nodes, left inclusive and right
///   exclusive (probably the ghost node).
pub struct Queue {
    nodes: Slab<Node>,
    ghost: usize,
}

pub(crate) struct Node {
    pub(crate) next: usize,
    pub(crate) prev: usize,
    /// `None` only for the ghost node.
    pub(crate) element: Option<String>,
}

// private methods
impl Queue {
    pub(crate) fn ghost_node(&self) -> usize {
        self.ghost
    }
    pub(crate) fn front_node(&self) -> usize {
        self.nodes[self.ghost].next
    }
    pub(crate) fn back_node(&self) -> usize {
        self.nodes[self.ghost].prev
    }
    pub(crate) fn next_of(&self, node: usize) -> usize {
        self.nodes[node].next
    }
    pub(crate) fn prev_of(&self, node: usize) -> usize {
        self.nodes[node].prev
    }

    /// Returns the payload of `node`. The ghost node reads as an empty string.
    pub(crate) fn value_of(&self, node: usize) -> &str {
        debug_assert_ne!(node, self.ghost, "the ghost node has no payload");
        self.nodes[node].element.as_deref().unwrap_or_default()
    }

    pub(crate) fn connect(&mut self, prev: usize, next: usize) {
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
    }

    /// Returns the node `at` steps after the front node, or the ghost node if
    /// `at >= len`.
    pub(crate) fn nth_node(&self, at: usize) -> usize {
        let mut node = self.front_node();
        for _ in 0..at {
            if node == self.ghost {
                break;
            }
            node = self.next_of(node);
        }
        node
    }

    /// Allocate a self-linked node owning `value`.
    fn new_node(&mut self, value: String) -> usize {
        let entry = self.nodes.vacant_entry();
        let key = entry.key();
        entry.insert(Node {
            next: key,
            prev: key,
            element: Some(value),
        });
        key
    }

    /// Attach a single node `node` to the list, between `prev` and `next`.
    ///
    /// The `prev` and `next` must be adjacent nodes of the list (only checked
    /// in `#[cfg(debug_assertions)]`).
    pub(crate) fn attach_node(&mut self, prev: usize, next: usize, node: usize) {
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        self.connect(prev, node);
        self.connect(node, next);
    }

    /// Allocate a node owning `value` and attach it between `prev` and `next`.
    pub(crate) fn attach_value(&mut self, prev: usize, next: usize, value: String) -> usize {
        let node = self.new_node(value);
        self.attach_node(prev, next, node);
        node
    }

    /// Detach a single node `node` from the list, and return it as an element.
    ///
    /// `node` must be a live element of the list, never the ghost node.
    pub(crate) fn detach_node(&mut self, node: usize) -> Element {
        debug_assert_ne!(node, self.ghost, "cannot detach the ghost node");
        let (prev, next) = (self.prev_of(node), self.next_of(node));
        self.connect(prev, next);
        let removed = self.nodes.remove(node);
        Element::new(removed.element.unwrap_or_default())
    }

    /// Detach and release a single node.
    pub(crate) fn delete_node(&mut self, node: usize) {
        drop(self.detach_node(node));
    }

    /// Unlink the closed range `front..=back` from the list while keeping the
    /// nodes in the arena.
    ///
    /// After this call reading `front.prev` and `back.next` is meaningless
    /// until the range is attached again with [`Queue::attach_nodes`].
    pub(crate) fn detach_nodes(&mut self, front: usize, back: usize) {
        let (prev, next) = (self.prev_of(front), self.next_of(back));
        self.connect(prev, next);
    }

    /// Attach a detached range `front..=back` between `prev` and `next`.
    pub(crate) fn attach_nodes(&mut self, prev: usize, next: usize, front: usize, back: usize) {
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        self.connect(prev, front);
        self.connect(back, next);
    }

    #[cfg(debug_assertions)]
    fn assert_adjacent(&self, prev: usize, next: usize) {
        assert_eq!(self.nodes[prev].next, next);
        assert_eq!(self.nodes[next].prev, prev);
    }
}

/// Copy `text` into a freshly reserved payload.
fn copy_payload(text: &str) -> Result<String> {
    if let Some(offset) = text.bytes().position(|b| b == 0) {
        return Err(QueueError::InteriorNul(offset));
    }
    let mut value = String::new();
    value
        .try_reserve_exact(text.len())
        .map_err(|_| QueueError::Alloc(text.len()))?;
    value.push_str(text);
    Ok(value)
}

impl Queue {
    /// Create an empty `Queue`.
    ///
    /// # Examples
    /// ```
    /// use text_queue::Queue;
    /// let queue = Queue::new();
    /// assert!(queue.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty `Queue` with room for `capacity` elements before the
    /// arena needs to grow.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Slab::with_capacity(capacity + 1);
        let entry = nodes.vacant_entry();
        let ghost = entry.key();
        entry.insert(Node {
            next: ghost,
            prev: ghost,
            element: None,
        });
        Self { nodes, ghost }
    }

    /// Returns `true` if the `Queue` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front_node() == self.ghost_node()
    }

    /// Returns the number of elements, as tracked by the arena.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Counts the elements by walking the list from the ghost node back to
    /// itself.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use text_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let queue = Queue::from_iter(["a", "b", "c"]);
    /// assert_eq!(queue.size(), 3);
    /// assert_eq!(queue.size(), queue.len());
    /// ```
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut node = self.front_node();
        while node != self.ghost {
            count += 1;
            node = self.next_of(node);
        }
        count
    }

    /// Removes and releases all elements of the `Queue`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn clear(&mut self) {
        let ghost = self.ghost;
        self.nodes.retain(|key, _| key == ghost);
        self.connect(ghost, ghost);
    }

    /// Provides the payload of the front element, or `None` if the queue is
    /// empty.
    #[inline]
    pub fn front(&self) -> Option<&str> {
        self.iter().next()
    }

    /// Provides the payload of the back element, or `None` if the queue is
    /// empty.
    #[inline]
    pub fn back(&self) -> Option<&str> {
        self.iter().next_back()
    }

    /// Inserts a copy of `text` at the head of the queue.
    ///
    /// Fails without touching the queue if `text` contains a NUL byte or its
    /// copy cannot be allocated.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use text_queue::{Queue, QueueError};
    ///
    /// let mut queue = Queue::new();
    /// queue.insert_head("gerbil").unwrap();
    /// queue.insert_head("bear").unwrap();
    /// assert_eq!(queue.front(), Some("bear"));
    ///
    /// assert_eq!(queue.insert_head("nul\0byte"), Err(QueueError::InteriorNul(3)));
    /// assert_eq!(queue.len(), 2);
    /// ```
    pub fn insert_head(&mut self, text: &str) -> Result<()> {
        let value = copy_payload(text)?;
        self.attach_value(self.ghost_node(), self.front_node(), value);
        Ok(())
    }

    /// Inserts a copy of `text` at the tail of the queue.
    ///
    /// Fails without touching the queue if `text` contains a NUL byte or its
    /// copy cannot be allocated.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use text_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// queue.insert_tail("gerbil").unwrap();
    /// queue.insert_tail("bear").unwrap();
    /// assert_eq!(queue.back(), Some("bear"));
    /// ```
    pub fn insert_tail(&mut self, text: &str) -> Result<()> {
        let value = copy_payload(text)?;
        self.attach_value(self.back_node(), self.ghost_node(), value);
        Ok(())
    }

    /// Detaches the head element and hands it to the caller, or returns `None`
    /// if the queue is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn remove_head(&mut self) -> Option<Element> {
        if self.is_empty() {
            return None;
        }
        Some(self.detach_node(self.front_node()))
    }

    /// Detaches the tail element and hands it to the caller, or returns `None`
    /// if the queue is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn remove_tail(&mut self) -> Option<Element> {
        if self.is_empty() {
            return None;
        }
        Some(self.detach_node(self.back_node()))
    }

    /// Like [`Queue::remove_head`], and also copies the payload into `buf`
    /// with the truncation rules of [`Element::copy_to`].
    ///
    /// `buf` is left untouched when the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use text_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(["meerkat", "bat"]);
    /// let mut buf = [0u8; 4];
    ///
    /// let element = queue.remove_head_into(&mut buf).unwrap();
    /// assert_eq!(element.value(), "meerkat");
    /// assert_eq!(&buf, b"mee\0");
    /// ```
    pub fn remove_head_into(&mut self, buf: &mut [u8]) -> Option<Element> {
        let element = self.remove_head()?;
        element.copy_to(buf);
        Some(element)
    }

    /// Like [`Queue::remove_tail`], and also copies the payload into `buf`
    /// with the truncation rules of [`Element::copy_to`].
    ///
    /// `buf` is left untouched when the queue is empty.
    pub fn remove_tail_into(&mut self, buf: &mut [u8]) -> Option<Element> {
        let element = self.remove_tail()?;
        element.copy_to(buf);
        Some(element)
    }

    /// Deletes the middle element, the one at index `(n - 1) / 2` counted
    /// from the head.
    ///
    /// The middle is found with a slow and a fast walker, where the fast one
    /// stops right before it would step over the ghost node.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Empty`] if there is nothing to delete.
    ///
    /// # Examples
    ///
    /// ```
    /// use text_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(["a", "b", "c", "d"]);
    /// queue.delete_mid().unwrap();
    /// assert_eq!(queue.to_vec(), vec!["a", "c", "d"]);
    /// ```
    pub fn delete_mid(&mut self) -> Result<()> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }
        let ghost = self.ghost_node();
        let mut slow = self.front_node();
        let mut fast = self.next_of(slow);
        while fast != ghost && self.next_of(fast) != ghost {
            slow = self.next_of(slow);
            fast = self.next_of(self.next_of(fast));
        }
        self.delete_node(slow);
        Ok(())
    }

    /// Moves all elements from `other` to the end of the queue, leaving
    /// `other` empty.
    ///
    /// Payloads are moved, never copied.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*m*) time, where *m* is the length
    /// of `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use text_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(["a"]);
    /// let mut other = Queue::from_iter(["b", "c"]);
    ///
    /// queue.append(&mut other);
    /// assert_eq!(queue.to_vec(), vec!["a", "b", "c"]);
    /// assert!(other.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        self.nodes.reserve(other.len());
        while let Some(element) = other.remove_head() {
            self.attach_value(self.back_node(), self.ghost_node(), element.into_value());
        }
    }

    /// Returns `true` if the `Queue` contains an element equal to `text`.
    pub fn contains(&self, text: &str) -> bool {
        self.iter().any(|e| e == text)
    }

    /// Copies the payloads into a vector, front to back.
    pub fn to_vec(&self) -> Vec<String> {
        self.iter().map(String::from).collect()
    }

    /// Provides a double-ended iterator over the payloads.
    ///
    /// # Examples
    ///
    /// ```
    /// use text_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let queue = Queue::from_iter(["a", "b", "c"]);
    ///
    /// let mut iter = queue.iter();
    /// assert_eq!(iter.next(), Some("a"));
    /// assert_eq!(iter.next_back(), Some("c"));
    /// assert_eq!(iter.next(), Some("b"));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Removes all elements in front-to-back order, handing each of them to
    /// the caller. Elements not consumed by the iterator are released when it
    /// is dropped.
    pub fn drain(&mut self) -> Drain<'_> {
        Drain::new(self)
    }
}

impl Debug for Queue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Default for Queue {
    fn default() -> Self {
        Self::new()
    }
}

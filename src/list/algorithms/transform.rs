use crate::list::Queue;
use tracing::{debug, trace};

impl Queue {
    /// Exchanges the positions of nodes `l` and `r` by relinking them, where
    /// `l` is not after `r`. Payloads and all other nodes stay untouched.
    pub(crate) fn swap_two_nodes(&mut self, l: usize, r: usize) {
        if l == r {
            return;
        }
        debug_assert!(l != self.ghost_node() && r != self.ghost_node());
        let (l_prev, l_next) = (self.prev_of(l), self.next_of(l));
        let (r_prev, r_next) = (self.prev_of(r), self.next_of(r));
        if r_next == l {
            // `r` directly precedes `l`
            self.swap_two_nodes(r, l);
        } else if l_next == r {
            self.connect(l_prev, r);
            self.connect(r, l);
            self.connect(l, r_next);
        } else {
            self.connect(l_prev, r);
            self.connect(r, l_next);
            self.connect(r_prev, l);
            self.connect(l, r_next);
        }
    }

    /// Reverses the order of the queue in place.
    ///
    /// Every node, the ghost node included, exchanges its `next` and `prev`
    /// links.
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
    /// let mut queue = Queue::from_iter(["a", "b", "c"]);
    /// queue.reverse();
    /// assert_eq!(queue.to_vec(), vec!["c", "b", "a"]);
    /// ```
    pub fn reverse(&mut self) {
        debug!(len = self.len(), "reverse");
        for (_, node) in self.nodes.iter_mut() {
            std::mem::swap(&mut node.next, &mut node.prev);
        }
    }

    /// Reverses every run of `k` consecutive nodes, counted from the head.
    /// A trailing run shorter than `k` keeps its order. `k <= 1` does nothing.
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
    /// let mut queue = Queue::from_iter(["1", "2", "3", "4", "5"]);
    /// queue.reverse_k(2);
    /// assert_eq!(queue.to_vec(), vec!["2", "1", "4", "3", "5"]);
    /// ```
    pub fn reverse_k(&mut self, k: usize) {
        debug!(len = self.len(), k, "reverse in groups");
        if k <= 1 {
            return;
        }
        let ghost = self.ghost_node();
        let mut before = ghost;
        loop {
            let front = self.next_of(before);
            let mut back = before;
            for _ in 0..k {
                back = self.next_of(back);
                if back == ghost {
                    return;
                }
            }
            trace!(front, back, "reverse run");
            self.reverse_nodes(front, back);
            before = front;
        }
    }

    /// Swaps every two adjacent nodes. A trailing odd node stays in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use text_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(["1", "2", "3", "4"]);
    /// queue.swap();
    /// assert_eq!(queue.to_vec(), vec!["2", "1", "4", "3"]);
    /// ```
    #[inline]
    pub fn swap(&mut self) {
        self.reverse_k(2);
    }

    /// Cuts `front..=back` out of the list, reverses it and splices it back
    /// at the same place.
    fn reverse_nodes(&mut self, front: usize, back: usize) {
        let (prev, next) = (self.prev_of(front), self.next_of(back));
        self.detach_nodes(front, back);
        let mut node = front;
        loop {
            let after = self.next_of(node);
            let links = &mut self.nodes[node];
            std::mem::swap(&mut links.next, &mut links.prev);
            if node == back {
                break;
            }
            node = after;
        }
        self.attach_nodes(prev, next, back, front);
    }
}

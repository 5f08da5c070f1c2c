use crate::list::Queue;
use tracing::debug;

impl Queue {
    /// Deletes every element whose payload occurs more than once in its run
    /// of equal neighbours, keeping only the payloads that occur once.
    /// Returns the number of deleted elements.
    ///
    /// On a sorted queue this leaves only the values that appear exactly
    /// once. Payloads are compared for exact equality.
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
    /// let mut queue = Queue::from_iter(["1", "1", "2", "3", "3"]);
    /// assert_eq!(queue.delete_dup(), 4);
    /// assert_eq!(queue.to_vec(), vec!["2"]);
    /// ```
    pub fn delete_dup(&mut self) -> usize {
        let ghost = self.ghost_node();
        let mut deleted = 0;
        let mut from = self.front_node();
        while from != ghost {
            let mut to = self.next_of(from);
            while to != ghost && self.value_of(to) == self.value_of(from) {
                to = self.next_of(to);
            }
            if self.next_of(from) != to {
                while from != to {
                    let next = self.next_of(from);
                    self.delete_node(from);
                    deleted += 1;
                    from = next;
                }
            }
            from = to;
        }
        debug!(deleted, remaining = self.len(), "delete duplicates");
        deleted
    }
}

use crate::list::Queue;
use tracing::debug;

impl Queue {
    /// Deletes every element that has a strictly smaller element anywhere to
    /// its right, and returns the number of survivors.
    ///
    /// The survivors form a non-decreasing sequence.
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
    /// let mut queue = Queue::from_iter(["1", "5", "3", "4", "2"]);
    /// assert_eq!(queue.ascend(), 2);
    /// assert_eq!(queue.to_vec(), vec!["1", "2"]);
    /// ```
    pub fn ascend(&mut self) -> usize {
        let ghost = self.ghost_node();
        let mut scan = self.front_node();
        while scan != ghost {
            // The kept prefix `front..scan` is non-decreasing, so it is
            // enough to pop its back while it is larger than `scan`.
            let mut kept = self.prev_of(scan);
            while kept != ghost && self.value_of(scan) < self.value_of(kept) {
                self.delete_node(kept);
                kept = self.prev_of(scan);
            }
            scan = self.next_of(scan);
        }
        debug!(survivors = self.len(), "ascend");
        self.len()
    }

    /// Deletes every element that has a strictly greater element anywhere to
    /// its right, and returns the number of survivors.
    ///
    /// The survivors form a non-increasing sequence.
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
    /// let mut queue = Queue::from_iter(["5", "2", "9", "3", "8"]);
    /// assert_eq!(queue.descend(), 2);
    /// assert_eq!(queue.to_vec(), vec!["9", "8"]);
    /// ```
    pub fn descend(&mut self) -> usize {
        let ghost = self.ghost_node();
        let mut max = self.back_node();
        if max == ghost {
            return 0;
        }
        let mut node = self.prev_of(max);
        while node != ghost {
            let prev = self.prev_of(node);
            if self.value_of(node) < self.value_of(max) {
                self.delete_node(node);
            } else {
                max = node;
            }
            node = prev;
        }
        debug!(survivors = self.len(), "descend");
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use crate::list::algorithms::testing::{assert_well_formed, queue_of, strings};

    /// Keeps the elements with no element to their right for which `drop_if`
    /// holds.
    fn brute_force(items: &[&str], drop_if: fn(&str, &str) -> bool) -> Vec<String> {
        items
            .iter()
            .enumerate()
            .filter(|(i, x)| !items[i + 1..].iter().any(|y| drop_if(x, y)))
            .map(|(_, x)| x.to_string())
            .collect()
    }

    fn cases() -> Vec<Vec<&'static str>> {
        vec![
            vec![],
            vec!["a"],
            vec!["1", "5", "3", "4", "2"],
            vec!["5", "2", "4", "3", "1"],
            vec!["5", "2", "13", "3", "8"],
            vec!["1", "1", "1"],
            vec!["1", "2", "2", "3"],
            vec!["3", "2", "2", "1"],
            vec!["b", "a", "b", "a", "c", "c"],
        ]
    }

    #[test]
    fn ascend() {
        for items in cases() {
            let expected = brute_force(&items, |x, y| y < x);
            let mut queue = queue_of(&items);
            assert_eq!(queue.ascend(), expected.len());
            assert_well_formed(&queue);
            assert_eq!(queue.to_vec(), expected, "input {:?}", items);
        }
    }

    #[test]
    fn descend() {
        for items in cases() {
            let expected = brute_force(&items, |x, y| y > x);
            let mut queue = queue_of(&items);
            assert_eq!(queue.descend(), expected.len());
            assert_well_formed(&queue);
            assert_eq!(queue.to_vec(), expected, "input {:?}", items);
        }
    }

    #[test]
    fn ascend_example() {
        let mut queue = queue_of(&["1", "5", "3", "4", "2"]);
        assert_eq!(queue.ascend(), 2);
        assert_eq!(queue.to_vec(), strings(&["1", "2"]));
    }
}

use crate::list::algorithms::merge::merge_range;
use crate::list::Queue;
use std::cmp::Ordering;
use tracing::debug;

/// The order produced by sorting and merging.
///
/// Payloads are compared byte by byte over their full content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Ascending
    }
}

impl SortOrder {
    /// `Descending` if `descend` is set, `Ascending` otherwise.
    pub fn from_descending(descend: bool) -> Self {
        if descend {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        }
    }

    #[inline]
    pub fn is_descending(self) -> bool {
        self == SortOrder::Descending
    }

    /// Compares `a` with `b`, with the sign flipped for `Descending`.
    #[inline]
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        let ordering = a.as_bytes().cmp(b.as_bytes());
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }

    /// `true` if `a` must be placed strictly before `b`.
    #[inline]
    pub(crate) fn precedes(self, a: &str, b: &str) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}

impl Queue {
    /// Sorts the queue.
    ///
    /// Ascending sorts are stable (i.e., do not reorder equal elements).
    /// Descending sorts make no stability promise.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) time and
    /// *O*(log(*n*)) stack.
    ///
    /// # Current Implementation
    ///
    /// The current algorithm is a top-down merge sort. Ranges are split at
    /// their midpoint, found by a slow and a fast walker, and the sorted
    /// halves are merged by relinking nodes. No node is allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use text_queue::{Queue, SortOrder};
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(["5", "2", "4", "3", "1"]);
    ///
    /// queue.sort(SortOrder::Ascending);
    /// assert_eq!(queue.to_vec(), vec!["1", "2", "3", "4", "5"]);
    ///
    /// queue.sort(SortOrder::Descending);
    /// assert_eq!(queue.to_vec(), vec!["5", "4", "3", "2", "1"]);
    /// ```
    pub fn sort(&mut self, order: SortOrder) {
        debug!(len = self.len(), ?order, "merge sort");
        if self.len() < 2 {
            return;
        }
        let (start, end) = (self.front_node(), self.ghost_node());
        merge_sort_range(self, start, end, order);
    }

    /// Sorts the queue by swapping adjacent out-of-order nodes.
    ///
    /// Produces the same order as [`Queue::sort`] in *O*(*n*²) time. It is
    /// kept as a reference for the merge sort.
    pub fn bubble_sort(&mut self, order: SortOrder) {
        debug!(len = self.len(), ?order, "bubble sort");
        // `end` is the front of the already sorted suffix.
        let mut end = self.ghost_node();
        while self.front_node() != end {
            let mut swapped = false;
            let mut current = self.front_node();
            loop {
                let next = self.next_of(current);
                if next == end {
                    break;
                }
                if order.precedes(self.value_of(next), self.value_of(current)) {
                    self.swap_two_nodes(current, next);
                    swapped = true;
                } else {
                    current = next;
                }
            }
            if !swapped {
                break;
            }
            end = current;
        }
    }
}

/// Returns the first node of the second half of `start..end`, and the length
/// of the range.
fn mid_of_range(queue: &Queue, mut start: usize, end: usize) -> (usize, usize) {
    let mut mid = start;
    let mut len = 0;
    while start != end {
        len += 1;
        start = queue.next_of(start);
        if start != end {
            len += 1;
            start = queue.next_of(start);
            mid = queue.next_of(mid);
        }
    }
    (mid, len)
}

/// Sorts `start..end` and returns its new first node. `end` stays in place.
fn merge_sort_range(queue: &mut Queue, mut start: usize, end: usize, order: SortOrder) -> usize {
    let (mut mid, len) = mid_of_range(queue, start, end);
    if len <= 1 {
        return start;
    }
    start = merge_sort_range(queue, start, mid, order);
    mid = merge_sort_range(queue, mid, end, order);
    merge_range(queue, start, mid, end, order)
}

#[cfg(test)]
mod tests {
    use super::SortOrder;
    use crate::list::algorithms::testing::{assert_well_formed, queue_of};
    use crate::Queue;

    fn sorted(items: &[&str], order: SortOrder) -> Vec<String> {
        let mut expected: Vec<String> = items.iter().map(|s| s.to_string()).collect();
        expected.sort_by(|a, b| order.compare(a, b));
        expected
    }

    #[test]
    fn sort_order_compare() {
        assert!(SortOrder::Ascending.precedes("a", "b"));
        assert!(!SortOrder::Ascending.precedes("a", "a"));
        assert!(SortOrder::Descending.precedes("b", "a"));
        assert!(SortOrder::Ascending.precedes("ab", "abc"));
        assert!(SortOrder::Ascending.precedes("Z", "a"));
        assert_eq!(SortOrder::from_descending(true), SortOrder::Descending);
        assert_eq!(SortOrder::default(), SortOrder::Ascending);
    }

    #[test]
    fn sort_small() {
        let cases: Vec<Vec<&str>> = vec![
            vec![],
            vec!["a"],
            vec!["b", "a"],
            vec!["a", "b"],
            vec!["c", "a", "b"],
            vec!["5", "2", "4", "3", "1"],
            vec!["dog", "cat", "dog", "ant", "cat", "dog"],
            vec!["abc", "ab", "a", "abcd", ""],
        ];
        for items in cases {
            for &order in &[SortOrder::Ascending, SortOrder::Descending] {
                let mut queue = queue_of(&items);
                queue.sort(order);
                assert_well_formed(&queue);
                assert_eq!(queue.to_vec(), sorted(&items, order));

                let mut queue = queue_of(&items);
                queue.bubble_sort(order);
                assert_well_formed(&queue);
                assert_eq!(queue.to_vec(), sorted(&items, order));
            }
        }
    }

    #[test]
    fn sort_large() {
        let items: Vec<String> = (0..1000).map(|i| ((i * 7919) % 1009).to_string()).collect();
        let refs: Vec<&str> = items.iter().map(String::as_str).collect();
        let mut queue = queue_of(&refs);
        queue.sort(SortOrder::Ascending);
        assert_well_formed(&queue);
        assert_eq!(queue.to_vec(), sorted(&refs, SortOrder::Ascending));
        assert_eq!(queue.size(), 1000);
    }

    #[test]
    fn sort_ascending_is_stable() {
        // Equal payloads are told apart by the arena slot they occupy.
        let mut queue = queue_of(&["b", "a", "b", "a", "b"]);
        let slots = |queue: &Queue, value: &str| -> Vec<usize> {
            let mut node = queue.front_node();
            let mut found = Vec::new();
            while node != queue.ghost_node() {
                if queue.value_of(node) == value {
                    found.push(node);
                }
                node = queue.next_of(node);
            }
            found
        };
        let before_a = slots(&queue, "a");
        let before_b = slots(&queue, "b");
        queue.sort(SortOrder::Ascending);
        assert_eq!(slots(&queue, "a"), before_a);
        assert_eq!(slots(&queue, "b"), before_b);
    }

    #[test]
    fn sort_already_sorted_and_reversed() {
        let items: Vec<String> = (0..100).map(|i| format!("{:03}", i)).collect();
        let refs: Vec<&str> = items.iter().map(String::as_str).collect();

        let mut queue = queue_of(&refs);
        queue.sort(SortOrder::Ascending);
        assert_eq!(queue.to_vec(), items);

        queue.sort(SortOrder::Descending);
        let mut reversed = items.clone();
        reversed.reverse();
        assert_eq!(queue.to_vec(), reversed);

        queue.sort(SortOrder::Ascending);
        assert_eq!(queue.to_vec(), items);
    }
}

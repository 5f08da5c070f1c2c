use crate::list::algorithms::SortOrder;
use crate::list::Queue;
use tracing::{debug, trace};

/// A queue taking part in a k-way merge, together with its cached length.
///
/// The chain of contexts is owned by the caller, who aggregates the queues;
/// [`merge_queues`] only relinks the queues it is given.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueueContext {
    pub queue: Queue,
    pub size: usize,
    pub id: usize,
}

impl QueueContext {
    pub fn new(id: usize, queue: Queue) -> Self {
        let size = queue.len();
        Self { queue, size, id }
    }
}

impl Queue {
    /// Merges the sorted queue `other` into this sorted queue, leaving `other`
    /// empty and returning the merged length.
    ///
    /// Both queues must already be sorted in `order`. On ties, elements of
    /// `self` are placed before those of `other`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* + *m*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use text_queue::{Queue, SortOrder};
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(["1", "3", "5"]);
    /// let mut other = Queue::from_iter(["2", "4"]);
    ///
    /// assert_eq!(queue.merge(&mut other, SortOrder::Ascending), 5);
    /// assert_eq!(queue.to_vec(), vec!["1", "2", "3", "4", "5"]);
    /// assert!(other.is_empty());
    /// ```
    pub fn merge(&mut self, other: &mut Queue, order: SortOrder) -> usize {
        debug!(len = self.len(), other = other.len(), ?order, "merge");
        if other.is_empty() {
            return self.len();
        }
        let back = self.back_node();
        self.append(other);
        if back != self.ghost_node() {
            let (start, mid, end) = (self.front_node(), self.next_of(back), self.ghost_node());
            merge_range(self, start, mid, end, order);
        }
        self.len()
    }
}

/// Merges every queue of the chain into the first one and returns the merged
/// length.
///
/// Each queue must already be sorted in `order`. Every round pairs the front
/// of the remaining chain with its back and merges the back queue into the
/// front one, so `⌈k / 2⌉` queues survive a round. Rounds repeat until one
/// queue remains. Emptied queues stay in the chain with `size == 0`.
///
/// # Complexity
///
/// This operation should compute in *O*(*n* * log(*k*)) time for *n* elements
/// spread over *k* queues.
///
/// # Examples
///
/// ```
/// use text_queue::{merge_queues, Queue, QueueContext, SortOrder};
/// use std::iter::FromIterator;
///
/// let mut chain = vec![
///     QueueContext::new(0, Queue::from_iter(["1", "3", "5"])),
///     QueueContext::new(1, Queue::from_iter(["2", "4", "6"])),
///     QueueContext::new(2, Queue::from_iter(["0", "7"])),
/// ];
///
/// assert_eq!(merge_queues(&mut chain, SortOrder::Ascending), 8);
/// assert_eq!(chain[0].queue.to_vec(), vec!["0", "1", "2", "3", "4", "5", "6", "7"]);
/// assert!(chain[1].queue.is_empty() && chain[2].queue.is_empty());
/// ```
pub fn merge_queues(chain: &mut [QueueContext], order: SortOrder) -> usize {
    debug!(queues = chain.len(), ?order, "k-way merge");
    let mut remaining = chain.len();
    if remaining == 0 {
        return 0;
    }
    let mut round = 0;
    while remaining > 1 {
        let (mut front, mut back) = (0, remaining - 1);
        while front < back {
            let (head, tail) = chain.split_at_mut(back);
            let (target, source) = (&mut head[front], &mut tail[0]);
            trace!(round, target = target.id, source = source.id, "merge pair");
            target.size = target.queue.merge(&mut source.queue, order);
            source.size = 0;
            front += 1;
            back -= 1;
        }
        remaining = (remaining + 1) / 2;
        round += 1;
    }
    let merged = &mut chain[0];
    merged.size = merged.queue.len();
    merged.size
}

/// Merges the two sorted adjacent ranges `start..mid` and `mid..end` and
/// returns the new first node. `end` stays in place.
///
/// A node of the right range is moved before a node of the left range only
/// if it strictly precedes it, so ties keep left-range elements first.
pub(crate) fn merge_range(
    queue: &mut Queue,
    mut start: usize,
    mid: usize,
    end: usize,
    order: SortOrder,
) -> usize {
    // This algorithm first logically partitions the range into
    // two sub-range, both of which are internal sorted:
    // - merged range: `start..mid`,
    // - unmerged range: `mid..end`.
    //
    // Then merge the nodes in the unmerged range one by one
    // into the merged range.
    let (mut merged, merged_back, mut to_merge) = (start, queue.prev_of(mid), mid);
    // If the back of merged range <= the front of unmerged range,
    // it is fully sorted, the algorithm stops here.
    while to_merge != end && order.precedes(queue.value_of(to_merge), queue.value_of(merged_back))
    {
        // Find a position of `merged` in the merged range,
        // where the element of the current node to merge < `*merged`.
        while merged != to_merge
            && !order.precedes(queue.value_of(to_merge), queue.value_of(merged))
        {
            merged = queue.next_of(merged);
        }
        if merged == to_merge {
            break;
        }

        // Find a sub-range `to_merge..next_to_merge` in the unmerged range,
        // where all the element in it is < `*merged`.
        let mut next_to_merge = queue.next_of(to_merge);
        while next_to_merge != end
            && order.precedes(queue.value_of(next_to_merge), queue.value_of(merged))
        {
            next_to_merge = queue.next_of(next_to_merge);
        }
        if merged == start {
            start = to_merge;
        }
        // Move the sub-range `to_merge..next_to_merge` to the
        // node before `merged`.
        let to_merge_back = queue.prev_of(next_to_merge);
        move_nodes(queue, to_merge, to_merge_back, merged);
        to_merge = next_to_merge;
    }
    start
}

/// Moves `from_front..=from_back` right before `to`.
fn move_nodes(queue: &mut Queue, from_front: usize, from_back: usize, to: usize) {
    queue.detach_nodes(from_front, from_back);
    let prev = queue.prev_of(to);
    queue.attach_nodes(prev, to, from_front, from_back);
}

#[cfg(test)]
mod tests {
    use super::{merge_queues, QueueContext};
    use crate::list::algorithms::testing::{assert_well_formed, queue_of};
    use crate::{Queue, SortOrder};

    fn chain_of(queues: &[&[&str]]) -> Vec<QueueContext> {
        queues
            .iter()
            .enumerate()
            .map(|(id, items)| QueueContext::new(id, queue_of(items)))
            .collect()
    }

    #[test]
    fn merge_two() {
        fn check(left: &[&str], right: &[&str], order: SortOrder) {
            let mut queue = queue_of(left);
            let mut other = queue_of(right);
            let mut expected: Vec<String> =
                left.iter().chain(right).map(|s| s.to_string()).collect();
            expected.sort_by(|a, b| order.compare(a, b));

            assert_eq!(queue.merge(&mut other, order), left.len() + right.len());
            assert_well_formed(&queue);
            assert_well_formed(&other);
            assert!(other.is_empty());
            assert_eq!(queue.to_vec(), expected);
        }
        check(&["1", "3", "5"], &["2", "4", "6"], SortOrder::Ascending);
        check(&["1", "2"], &["3", "4"], SortOrder::Ascending);
        check(&["3", "4"], &["1", "2"], SortOrder::Ascending);
        check(&["a", "a", "c"], &["a", "b"], SortOrder::Ascending);
        check(&["6", "4", "2"], &["5", "3", "1"], SortOrder::Descending);
        check(&[], &["1", "2"], SortOrder::Ascending);
        check(&["1", "2"], &[], SortOrder::Ascending);
        check(&[], &[], SortOrder::Descending);
    }

    #[test]
    fn merge_donor_is_reusable() {
        let mut queue = queue_of(&["b"]);
        let mut other = queue_of(&["a"]);
        queue.merge(&mut other, SortOrder::Ascending);
        other.insert_tail("z").unwrap();
        assert_eq!(other.to_vec(), vec!["z"]);
        assert_eq!(queue.to_vec(), vec!["a", "b"]);
    }

    #[test]
    fn merge_queues_ascending() {
        let mut chain = chain_of(&[&["1", "3", "5"], &["2", "4", "6"], &["0", "7"]]);
        assert_eq!(merge_queues(&mut chain, SortOrder::Ascending), 8);
        assert_eq!(
            chain[0].queue.to_vec(),
            vec!["0", "1", "2", "3", "4", "5", "6", "7"]
        );
        assert_eq!(chain[0].size, 8);
        for context in &chain[1..] {
            assert!(context.queue.is_empty());
            assert_eq!(context.size, 0);
        }
    }

    #[test]
    fn merge_queues_descending() {
        let mut chain = chain_of(&[&["9", "5"], &["8", "1"], &["7"], &["6", "3"], &["4", "2"]]);
        assert_eq!(merge_queues(&mut chain, SortOrder::Descending), 9);
        assert_eq!(
            chain[0].queue.to_vec(),
            vec!["9", "8", "7", "6", "5", "4", "3", "2", "1"]
        );
        assert_well_formed(&chain[0].queue);
    }

    #[test]
    fn merge_queues_edge_cases() {
        assert_eq!(merge_queues(&mut [], SortOrder::Ascending), 0);

        let mut single = chain_of(&[&["a", "b"]]);
        single[0].size = 0;
        assert_eq!(merge_queues(&mut single, SortOrder::Ascending), 2);
        assert_eq!(single[0].size, 2);

        let mut with_empty = chain_of(&[&[], &["b"], &[], &["a"]]);
        assert_eq!(merge_queues(&mut with_empty, SortOrder::Ascending), 2);
        assert_eq!(with_empty[0].queue.to_vec(), vec!["a", "b"]);
    }
}

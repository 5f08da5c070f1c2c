use crate::list::Queue;
use std::hash::{Hash, Hasher};

mod dedup;
mod drain;
mod filter;
mod merge;
#[cfg(feature = "shuffle")]
mod shuffle;
mod sort;
mod transform;

pub use drain::Drain;
pub use merge::{merge_queues, QueueContext};
pub use sort::SortOrder;

impl PartialEq for Queue {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl Eq for Queue {}

impl Clone for Queue {
    fn clone(&self) -> Self {
        let mut queue = Queue::with_capacity(self.len());
        queue.extend(self);
        queue
    }
}

impl Hash for Queue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0_usize;
        for elt in self {
            elt.hash(state);
            len += 1;
        }
        len.hash(state);
    }
}

/// Shared helpers for the algorithm tests.
#[cfg(test)]
pub(crate) mod testing {
    use crate::Queue;

    pub(crate) fn queue_of(items: &[&str]) -> Queue {
        items.iter().collect()
    }

    pub(crate) fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    /// Checks that every link is mirrored and that walking in both
    /// directions visits the same nodes.
    pub(crate) fn assert_well_formed(queue: &Queue) {
        let ghost = queue.ghost_node();
        let mut forward = Vec::new();
        let mut node = queue.front_node();
        while node != ghost {
            assert_eq!(queue.prev_of(queue.next_of(node)), node);
            assert_eq!(queue.next_of(queue.prev_of(node)), node);
            forward.push(node);
            node = queue.next_of(node);
            assert!(forward.len() <= queue.len(), "cycle without the ghost node");
        }
        let mut backward = Vec::new();
        let mut node = queue.back_node();
        while node != ghost {
            backward.push(node);
            node = queue.prev_of(node);
            assert!(backward.len() <= queue.len(), "cycle without the ghost node");
        }
        backward.reverse();
        assert_eq!(forward, backward);
        assert_eq!(forward.len(), queue.len());
    }
}


// proptest doesn't run under miri with default config
#[cfg(all(not(miri), test))]
mod proptests {
    use super::testing::assert_well_formed;
    use super::{merge_queues, QueueContext, SortOrder};
    use crate::Queue;
    use proptest::prelude::*;

    /// Short payloads over a small alphabet, so that runs of equal values
    /// and shared prefixes are common.
    fn payloads() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-c]{0,3}", 0..40)
    }

    fn sort_order() -> impl Strategy<Value = SortOrder> {
        prop_oneof![Just(SortOrder::Ascending), Just(SortOrder::Descending)]
    }

    fn sorted(mut items: Vec<String>, order: SortOrder) -> Vec<String> {
        items.sort_by(|a, b| order.compare(a, b));
        items
    }

    proptest! {
        #[test]
        fn sort_matches_model(items in payloads(), order in sort_order()) {
            let mut queue: Queue = items.iter().collect();
            queue.sort(order);
            assert_well_formed(&queue);
            prop_assert_eq!(queue.to_vec(), sorted(items.clone(), order));

            let mut queue: Queue = items.iter().collect();
            queue.bubble_sort(order);
            prop_assert_eq!(queue.to_vec(), sorted(items, order));
        }

        #[test]
        fn reverse_is_an_involution(items in payloads()) {
            let mut queue: Queue = items.iter().collect();
            queue.reverse();
            let mut reversed = items.clone();
            reversed.reverse();
            prop_assert_eq!(queue.to_vec(), reversed);
            queue.reverse();
            assert_well_formed(&queue);
            prop_assert_eq!(queue.to_vec(), items);
        }

        #[test]
        fn reverse_k_matches_model(items in payloads(), k in 0usize..6) {
            let mut queue: Queue = items.iter().collect();
            queue.reverse_k(k);
            assert_well_formed(&queue);

            let mut expected = items.clone();
            if k > 1 {
                let full = expected.len() - expected.len() % k;
                expected[..full].chunks_mut(k).for_each(|chunk| chunk.reverse());
            }
            prop_assert_eq!(queue.to_vec(), expected);
        }

        #[test]
        fn filters_match_model(items in payloads()) {
            let keep = |drop_if: fn(&String, &String) -> bool| -> Vec<String> {
                items
                    .iter()
                    .enumerate()
                    .filter(|(i, x)| !items[i + 1..].iter().any(|y| drop_if(x, y)))
                    .map(|(_, x)| x.clone())
                    .collect()
            };

            let mut queue: Queue = items.iter().collect();
            let expected = keep(|x, y| y < x);
            prop_assert_eq!(queue.ascend(), expected.len());
            assert_well_formed(&queue);
            prop_assert_eq!(queue.to_vec(), expected);

            let mut queue: Queue = items.iter().collect();
            let expected = keep(|x, y| y > x);
            prop_assert_eq!(queue.descend(), expected.len());
            assert_well_formed(&queue);
            prop_assert_eq!(queue.to_vec(), expected);
        }

        #[test]
        fn delete_dup_keeps_unique_values(items in payloads()) {
            let items = sorted(items, SortOrder::Ascending);
            let mut queue: Queue = items.iter().collect();
            let deleted = queue.delete_dup();
            assert_well_formed(&queue);

            let expected: Vec<String> = items
                .iter()
                .filter(|x| items.iter().filter(|y| y == x).count() == 1)
                .cloned()
                .collect();
            prop_assert_eq!(deleted, items.len() - expected.len());
            prop_assert_eq!(queue.to_vec(), expected);
        }

        #[test]
        fn merge_queues_matches_model(
            lists in prop::collection::vec(payloads(), 0..6),
            order in sort_order(),
        ) {
            let mut chain: Vec<QueueContext> = lists
                .iter()
                .enumerate()
                .map(|(id, items)| {
                    QueueContext::new(id, sorted(items.clone(), order).iter().collect())
                })
                .collect();
            let expected = sorted(lists.concat(), order);

            prop_assert_eq!(merge_queues(&mut chain, order), expected.len());
            if let Some((merged, rest)) = chain.split_first() {
                assert_well_formed(&merged.queue);
                prop_assert_eq!(merged.queue.to_vec(), expected);
                prop_assert!(rest.iter().all(|c| c.queue.is_empty() && c.size == 0));
            }
        }

        #[test]
        fn mixed_operations_keep_links_consistent(
            items in payloads(),
            ops in prop::collection::vec(0u8..8, 0..20),
        ) {
            let mut queue: Queue = items.iter().collect();
            let mut model = items;
            for op in ops {
                match op {
                    0 => {
                        queue.insert_head("h").unwrap();
                        model.insert(0, "h".to_string());
                    }
                    1 => {
                        queue.insert_tail("t").unwrap();
                        model.push("t".to_string());
                    }
                    2 => {
                        let removed = queue.remove_head().map(|e| e.into_value());
                        let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
                        prop_assert_eq!(removed, expected);
                    }
                    3 => {
                        prop_assert_eq!(queue.remove_tail().map(|e| e.into_value()), model.pop());
                    }
                    4 => {
                        queue.reverse();
                        model.reverse();
                    }
                    5 => {
                        queue.swap();
                        let full = model.len() - model.len() % 2;
                        model[..full].chunks_mut(2).for_each(|pair| pair.swap(0, 1));
                    }
                    6 => {
                        if queue.delete_mid().is_ok() {
                            model.remove((model.len() - 1) / 2);
                        } else {
                            prop_assert!(model.is_empty());
                        }
                    }
                    _ => {
                        queue.sort(SortOrder::Ascending);
                        model.sort();
                    }
                }
                assert_well_formed(&queue);
                prop_assert_eq!(queue.size(), model.len());
                prop_assert_eq!(queue.to_vec(), model.clone());
            }
        }
    }

    #[cfg(feature = "shuffle")]
    proptest! {
        #[test]
        fn shuffle_keeps_multiset(items in payloads(), seed in any::<u64>()) {
            use rand::rngs::StdRng;
            use rand::SeedableRng;

            let mut queue: Queue = items.iter().collect();
            queue.shuffle(&mut StdRng::seed_from_u64(seed));
            assert_well_formed(&queue);
            prop_assert_eq!(
                sorted(queue.to_vec(), SortOrder::Ascending),
                sorted(items, SortOrder::Ascending)
            );
        }
    }
}

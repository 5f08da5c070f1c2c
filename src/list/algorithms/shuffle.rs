use crate::list::Queue;
use rand::Rng;
use tracing::{debug, trace};

impl Queue {
    /// Shuffles the queue with the Fisher–Yates algorithm, so that every
    /// permutation is equally likely given a uniform `rng`.
    ///
    /// Nodes are relinked, payloads never move. The generator is owned and
    /// seeded by the caller; this method only draws from it.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*²) time, since the node at a
    /// drawn position is found by walking from the head.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    /// use text_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let mut queue = Queue::from_iter(["a", "b", "c", "d"]);
    /// queue.shuffle(&mut rng);
    ///
    /// let mut items = queue.to_vec();
    /// items.sort();
    /// assert_eq!(items, vec!["a", "b", "c", "d"]);
    /// ```
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let len = self.len();
        debug!(len, "shuffle");
        if len < 2 {
            return;
        }
        // `current` is the node at position `i`.
        let mut current = self.back_node();
        for i in (1..len).rev() {
            let j = rng.gen_range(0..=i);
            if j != i {
                let picked = self.nth_node(j);
                trace!(i, j, "swap");
                self.swap_two_nodes(picked, current);
                current = picked;
            }
            current = self.prev_of(current);
        }
    }
}

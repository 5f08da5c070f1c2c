use crate::list::{Element, Queue};
use std::fmt;
use std::iter::{FromIterator, FusedIterator};
use tracing::warn;

/// An iterator over the payloads of a `Queue`.
///
/// It uses a pair of nodes `start..end` to represent a half-open subrange
/// of the queue, where `start` is inclusive and `end` is not.
///
/// # Examples
///
/// ```compile_fail
/// use text_queue::Queue;
/// use std::iter::FromIterator;
///
/// let mut queue = Queue::from_iter(["a", "b", "c"]);
/// let mut iter = queue.iter();
///
/// // Won't compile, because queue is already borrowed immutably.
/// queue.insert_tail("d").unwrap();
/// println!("{:?}", iter.next());
/// ```
#[derive(Clone)]
pub struct Iter<'a> {
    queue: &'a Queue,
    start: usize,
    end: usize,
    len: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(queue: &'a Queue) -> Self {
        Self {
            queue,
            start: queue.front_node(),
            end: queue.ghost_node(),
            len: queue.len(),
        }
    }
}

impl fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.len).finish()
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    /// Return `*start` and reset the iterating range to `(start.next)..end`,
    /// or return `None` if `start..end` is already empty.
    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        let current = self.start;
        self.start = self.queue.next_of(current);
        self.len -= 1;
        Some(self.queue.value_of(current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    /// Reset the iterating range to `start..(end.prev)` and return `*end`,
    /// or return `None` if `start..end` is already empty.
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        self.end = self.queue.prev_of(self.end);
        self.len -= 1;
        Some(self.queue.value_of(self.end))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// An owning iterator over the payloads of a `Queue`.
pub struct IntoIter {
    queue: Queue,
}

impl fmt::Debug for IntoIter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.queue).finish()
    }
}

impl Iterator for IntoIter {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.remove_head().map(Element::into_value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl DoubleEndedIterator for IntoIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.queue.remove_tail().map(Element::into_value)
    }
}

impl ExactSizeIterator for IntoIter {}

impl FusedIterator for IntoIter {}

impl IntoIterator for Queue {
    type Item = String;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { queue: self }
    }
}

impl<'a> IntoIterator for &'a Queue {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Queue {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}

/// Appends every item at the tail. Items containing a NUL byte cannot be
/// stored and are skipped.
impl<S: AsRef<str>> Extend<S> for Queue {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for item in iter {
            if let Err(err) = self.insert_tail(item.as_ref()) {
                warn!(%err, "skipping element");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Queue;
    use std::iter::FromIterator;

    #[test]
    fn test_iter() {
        fn test_case(len: usize, mid: usize) {
            let vec: Vec<String> = (0..len).map(|i| i.to_string()).collect();
            let queue = Queue::from_iter(&vec);

            let mut iter = queue.iter();
            for (i, item) in vec.iter().enumerate() {
                assert_eq!(iter.next(), Some(item.as_str()));
                assert_eq!(iter.len(), len - i - 1);
            }
            assert_eq!(iter.next(), None);
            assert_eq!(iter.next(), None);
            assert_eq!(iter.next_back(), None);
            assert_eq!(iter.len(), 0);

            let mut iter = queue.iter();
            for item in vec.iter().take(mid) {
                assert_eq!(iter.next(), Some(item.as_str()));
            }
            let mut iter = iter.rev();
            for (i, item) in vec.iter().skip(mid).rev().enumerate() {
                assert_eq!(iter.next(), Some(item.as_str()));
                assert_eq!(iter.len(), len - mid - i - 1);
            }
            assert_eq!(iter.next(), None);
            assert_eq!(iter.next_back(), None);
        }
        test_case(10, 10);
        test_case(10, 8);
        test_case(10, 5);
        test_case(10, 0);
        test_case(2, 1);
        test_case(1, 1);
        test_case(1, 0);
        test_case(0, 0);
    }

    #[test]
    fn test_into_iter() {
        let queue = Queue::from_iter(["a", "b", "c", "d"]);
        let mut iter = queue.into_iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next().as_deref(), Some("a"));
        assert_eq!(iter.next_back().as_deref(), Some("d"));
        assert_eq!(iter.collect::<Vec<_>>(), vec!["b", "c"]);
    }

    #[test]
    fn test_extend_skips_nul() {
        let mut queue = Queue::from_iter(["a"]);
        queue.extend(vec!["b", "c\0", "d"]);
        assert_eq!(queue.to_vec(), vec!["a", "b", "d"]);
    }
}

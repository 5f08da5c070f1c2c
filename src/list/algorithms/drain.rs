use crate::list::{Element, Queue};
use std::fmt;

/// A draining iterator over the elements of a `Queue`, created by
/// [`Queue::drain`].
pub struct Drain<'a> {
    queue: &'a mut Queue,
}

impl<'a> Drain<'a> {
    pub(crate) fn new(queue: &'a mut Queue) -> Self {
        Self { queue }
    }
}

impl Iterator for Drain<'_> {
    type Item = Element;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.remove_head()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl DoubleEndedIterator for Drain<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.queue.remove_tail()
    }
}

impl ExactSizeIterator for Drain<'_> {}

impl Drop for Drain<'_> {
    fn drop(&mut self) {
        self.queue.clear();
    }
}

impl fmt::Debug for Drain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Drain").field(&*self.queue).finish()
    }
}

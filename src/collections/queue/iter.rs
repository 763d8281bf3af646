use std::iter::FusedIterator;

use super::Queue;
use crate::collections::traits::{Details, Linked};
use crate::node::{Detail, DetailRef};

impl<D> IntoIterator for Queue<D> {
    type Item = Detail<D>;

    type IntoIter = IntoIter<D>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { queue: self }
    }
}

/// Dequeues every element, front first.
pub struct IntoIter<D> {
    queue: Queue<D>,
}

impl<D> Iterator for IntoIter<D> {
    type Item = Detail<D>;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.dequeue()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<D> FusedIterator for IntoIter<D> {}

impl<D> ExactSizeIterator for IntoIter<D> {
    fn len(&self) -> usize {
        self.queue.len()
    }
}

impl<'a, D> IntoIterator for &'a Queue<D> {
    type Item = DetailRef<'a, D>;

    type IntoIter = Details<'a, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

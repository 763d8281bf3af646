use std::iter::FusedIterator;

use super::Deque;
use crate::collections::traits::{Details, Linked};
use crate::node::{Detail, DetailRef};

impl<D> IntoIterator for Deque<D> {
    type Item = Detail<D>;

    type IntoIter = IntoIter<D>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { deque: self }
    }
}

/// Pops every element, from whichever end is asked for.
pub struct IntoIter<D> {
    deque: Deque<D>,
}

impl<D> Iterator for IntoIter<D> {
    type Item = Detail<D>;

    fn next(&mut self) -> Option<Self::Item> {
        self.deque.pop_head()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<D> DoubleEndedIterator for IntoIter<D> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.deque.pop_tail()
    }
}

impl<D> FusedIterator for IntoIter<D> {}

impl<D> ExactSizeIterator for IntoIter<D> {
    fn len(&self) -> usize {
        self.deque.len()
    }
}

impl<'a, D> IntoIterator for &'a Deque<D> {
    type Item = DetailRef<'a, D>;

    type IntoIter = Details<'a, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

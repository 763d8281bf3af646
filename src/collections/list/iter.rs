use std::iter::FusedIterator;

use super::LinkedList;
use crate::collections::traits::{Details, Linked};
use crate::node::{Detail, DetailRef, Family};

impl<D, F: Family> IntoIterator for LinkedList<D, F> {
    type Item = Detail<D>;

    type IntoIter = IntoIter<D, F>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

/// Pops every element, head first unless iterated from the back.
pub struct IntoIter<D, F: Family> {
    list: LinkedList<D, F>,
}

impl<D, F: Family> Iterator for IntoIter<D, F> {
    type Item = Detail<D>;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_head()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<D, F: Family> DoubleEndedIterator for IntoIter<D, F> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_tail()
    }
}

impl<D, F: Family> FusedIterator for IntoIter<D, F> {}

impl<D, F: Family> ExactSizeIterator for IntoIter<D, F> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<'a, D, F: Family> IntoIterator for &'a LinkedList<D, F> {
    type Item = DetailRef<'a, D>;

    type IntoIter = Details<'a, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

use std::iter::FusedIterator;

use super::Stack;
use crate::collections::traits::{Details, Linked};
use crate::node::{Detail, DetailRef};

impl<D> IntoIterator for Stack<D> {
    type Item = Detail<D>;

    type IntoIter = IntoIter<D>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { stack: self }
    }
}

/// Pops every element, top first.
pub struct IntoIter<D> {
    stack: Stack<D>,
}

impl<D> Iterator for IntoIter<D> {
    type Item = Detail<D>;

    fn next(&mut self) -> Option<Self::Item> {
        self.stack.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<D> FusedIterator for IntoIter<D> {}

impl<D> ExactSizeIterator for IntoIter<D> {
    fn len(&self) -> usize {
        self.stack.len()
    }
}

impl<'a, D> IntoIterator for &'a Stack<D> {
    type Item = DetailRef<'a, D>;

    type IntoIter = Details<'a, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

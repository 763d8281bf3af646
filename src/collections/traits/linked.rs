use std::iter::FusedIterator;

use derive_more::{From, IsVariant};

use crate::node::{Detail, DetailRef, Family, NodeManager, Traversal};
use crate::size::{Size, SizeController};

/// Picks out one element, by position from the primary anchor or by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From, IsVariant)]
pub enum Locator<'a> {
    Index(usize),
    Id(&'a str),
}

impl<'a> From<&'a String> for Locator<'a> {
    fn from(value: &'a String) -> Self {
        Locator::Id(value)
    }
}

/// Read operations shared by every linked structure. None of them mutate, so none of them touch
/// the size cache beyond filling it.
///
/// Indices count from the structure's primary anchor: the top of a stack, the front of a queue,
/// the head of a deque or list.
pub trait Linked {
    type Data;
    type Family: Family;

    fn nodes(&self) -> &NodeManager<Self::Data, Self::Family>;

    fn size_controller(&self) -> &SizeController<NodeManager<Self::Data, Self::Family>>;

    fn size(&self) -> Size<'_, NodeManager<Self::Data, Self::Family>> {
        self.size_controller().bind(self.nodes())
    }

    fn len(&self) -> usize {
        self.size().get()
    }

    fn is_empty(&self) -> bool {
        self.size().is_empty()
    }

    fn iter(&self) -> Details<'_, Self::Data> {
        Details(self.nodes().walk())
    }

    fn get<'a>(&self, locator: impl Into<Locator<'a>>) -> Option<DetailRef<'_, Self::Data>> {
        match locator.into() {
            Locator::Index(index) => self.get_by_index(index),
            Locator::Id(id) => self.get_by_id(id),
        }
    }

    fn get_by_index(&self, index: usize) -> Option<DetailRef<'_, Self::Data>> {
        self.iter().nth(index)
    }

    fn get_by_id(&self, id: &str) -> Option<DetailRef<'_, Self::Data>> {
        self.iter().find(|detail| detail.id == id)
    }

    fn has<'a>(&self, locator: impl Into<Locator<'a>>) -> bool {
        self.get(locator).is_some()
    }

    fn find(
        &self,
        mut predicate: impl FnMut(DetailRef<'_, Self::Data>) -> bool,
    ) -> Option<DetailRef<'_, Self::Data>> {
        self.iter().find(|detail| predicate(*detail))
    }

    fn filter(
        &self,
        mut predicate: impl FnMut(DetailRef<'_, Self::Data>) -> bool,
    ) -> Vec<DetailRef<'_, Self::Data>> {
        self.iter().filter(|detail| predicate(*detail)).collect()
    }

    fn map<R>(&self, transform: impl FnMut(DetailRef<'_, Self::Data>) -> R) -> Vec<R> {
        self.iter().map(transform).collect()
    }

    fn for_each(&self, visit: impl FnMut(DetailRef<'_, Self::Data>)) {
        self.iter().for_each(visit)
    }

    fn reduce<A>(&self, init: A, fold: impl FnMut(A, DetailRef<'_, Self::Data>) -> A) -> A {
        self.iter().fold(init, fold)
    }

    fn to_vec(&self) -> Vec<Detail<Self::Data>>
    where
        Self::Data: Clone,
    {
        self.iter().map(DetailRef::cloned).collect()
    }
}

/// Borrowed details, in traversal order.
#[derive(Debug)]
pub struct Details<'a, D>(pub(crate) Traversal<'a, D>);

impl<D> Clone for Details<'_, D> {
    fn clone(&self) -> Self {
        Details(self.0.clone())
    }
}

impl<'a, D> Iterator for Details<'a, D> {
    type Item = DetailRef<'a, D>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|visit| visit.detail())
    }
}

impl<D> FusedIterator for Details<'_, D> {}

use std::collections::HashSet;
use std::fmt::{self, Debug, Display, Formatter};

use derive_more::{Display, IsVariant};

use super::links::{link_between, predecessor, unlink};
use crate::collections::Options;
use crate::collections::traits::{Details, Linked, Locator};
use crate::node::{
    Anchor, Detail, DetailRef, Doubly, Family, Link, NodeKey, NodeKind, NodeManager, reachable,
};
use crate::size::{CapacityUnderflow, MaxSize, SizeController, SizeMessages};
use crate::util::error::{DuplicateId, InsertError, MissingNode};
use crate::util::fmt::write_chain;
use crate::util::result::ResultExtension;

/// Where [`LinkedList::move_node`] puts a node relative to its target.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum Position {
    #[display("before")]
    Before,
    #[display("after")]
    After,
}

/// A list of caller-identified nodes with `head` and `tail` anchors, doubly linked by default.
///
/// Every element is inserted as a [`Detail`], and its id must be unique within the list. Ids are
/// how elements are targeted by [`insert_before`](LinkedList::insert_before),
/// [`move_node`](LinkedList::move_node) and friends.
///
/// A `LinkedList<D, Singly>` has the same API. Anything that needs a node's predecessor walks from
/// the head instead of following `prev`.
///
/// | Method | Doubly | Singly |
/// |-|-|-|
/// | `insert_head/insert_tail` | `O(1)` | `O(1)` |
/// | `pop_head` | `O(1)` | `O(1)` |
/// | `pop_tail` | `O(1)` | `O(n)` |
/// | `insert_at/insert_before/insert_after/extract/move_node` | `O(n)` | `O(n)` |
///
/// Every insert also checks the ids already present, so inserts are `O(n)` overall.
#[derive(Clone)]
pub struct LinkedList<D, F: Family = Doubly> {
    nodes: NodeManager<D, F>,
    size: SizeController<NodeManager<D, F>>,
}

impl<D> LinkedList<D> {
    /// Creates an empty, unbounded, doubly linked list.
    pub fn new() -> LinkedList<D> {
        LinkedList::with_options(Options::default())
    }
}

impl<D, F: Family> LinkedList<D, F> {
    pub fn with_max_size(max_size: impl Into<MaxSize>) -> LinkedList<D, F> {
        LinkedList::with_options(Options::with_max_size(max_size))
    }

    pub fn with_options(options: Options) -> LinkedList<D, F> {
        LinkedList {
            nodes: NodeManager::new(&[Anchor::Head, Anchor::Tail], Anchor::Head),
            size: options.controller(reachable::<D, F, Anchor>),
        }
    }

    pub const fn kind(&self) -> NodeKind {
        F::KIND
    }

    /// # Panics
    /// Panics if the list is full or already holds the detail's id.
    pub fn insert_head(&mut self, detail: impl Into<Detail<D>>) -> &mut LinkedList<D, F> {
        self.try_insert_head(detail).throw()
    }

    pub fn try_insert_head(
        &mut self,
        detail: impl Into<Detail<D>>,
    ) -> Result<&mut LinkedList<D, F>, InsertError> {
        let detail = self.admit(detail.into())?;
        let head = self.nodes.anchors().get(Anchor::Head);
        self.splice(detail, None, head);
        Ok(self)
    }

    /// # Panics
    /// Panics if the list is full or already holds the detail's id.
    pub fn insert_tail(&mut self, detail: impl Into<Detail<D>>) -> &mut LinkedList<D, F> {
        self.try_insert_tail(detail).throw()
    }

    pub fn try_insert_tail(
        &mut self,
        detail: impl Into<Detail<D>>,
    ) -> Result<&mut LinkedList<D, F>, InsertError> {
        let detail = self.admit(detail.into())?;
        let tail = self.nodes.anchors().get(Anchor::Tail);
        self.splice(detail, tail, None);
        Ok(self)
    }

    /// Inserts so the new element ends up at `index`. An index equal to the length appends.
    ///
    /// # Panics
    /// Panics if the list is full, already holds the detail's id, or `index > len`.
    pub fn insert_at(
        &mut self,
        detail: impl Into<Detail<D>>,
        index: usize,
    ) -> &mut LinkedList<D, F> {
        self.try_insert_at(detail, index).throw()
    }

    pub fn try_insert_at(
        &mut self,
        detail: impl Into<Detail<D>>,
        index: usize,
    ) -> Result<&mut LinkedList<D, F>, InsertError> {
        let detail = self.admit(detail.into())?;

        let len = self.len();
        if index > len {
            return Err(self.size.out_of_bounds(index, len).into());
        }

        let next = self.nodes.walk().nth(index).map(|visit| visit.key);
        let prev = match next {
            Some(next) => predecessor(&self.nodes, next),
            None => self.nodes.anchors().get(Anchor::Tail),
        };
        self.splice(detail, prev, next);
        Ok(self)
    }

    /// # Panics
    /// Panics if the list is full, already holds the detail's id, or has no node with id `target`.
    pub fn insert_before(
        &mut self,
        detail: impl Into<Detail<D>>,
        target: &str,
    ) -> &mut LinkedList<D, F> {
        self.try_insert_before(detail, target).throw()
    }

    pub fn try_insert_before(
        &mut self,
        detail: impl Into<Detail<D>>,
        target: &str,
    ) -> Result<&mut LinkedList<D, F>, InsertError> {
        let detail = self.admit(detail.into())?;
        let next = self.target(target)?;
        let prev = predecessor(&self.nodes, next);
        self.splice(detail, prev, Some(next));
        Ok(self)
    }

    /// # Panics
    /// Panics if the list is full, already holds the detail's id, or has no node with id `target`.
    pub fn insert_after(
        &mut self,
        detail: impl Into<Detail<D>>,
        target: &str,
    ) -> &mut LinkedList<D, F> {
        self.try_insert_after(detail, target).throw()
    }

    pub fn try_insert_after(
        &mut self,
        detail: impl Into<Detail<D>>,
        target: &str,
    ) -> Result<&mut LinkedList<D, F>, InsertError> {
        let detail = self.admit(detail.into())?;
        let prev = self.target(target)?;
        let next = self.nodes.next(prev);
        self.splice(detail, Some(prev), next);
        Ok(self)
    }

    /// Inserts every detail at the tail, in order.
    ///
    /// # Panics
    /// Panics if the details don't all fit, or any id is repeated.
    pub fn append<I>(&mut self, details: I) -> &mut LinkedList<D, F>
    where
        I: IntoIterator,
        I::Item: Into<Detail<D>>,
    {
        self.try_append(details).throw()
    }

    /// Like [`append`](LinkedList::append), but all-or-nothing: if any detail would fail, none are
    /// inserted.
    pub fn try_append<I>(&mut self, details: I) -> Result<&mut LinkedList<D, F>, InsertError>
    where
        I: IntoIterator,
        I::Item: Into<Detail<D>>,
    {
        for detail in self.admit_all(details)? {
            let tail = self.nodes.anchors().get(Anchor::Tail);
            self.splice(detail, tail, None);
        }
        Ok(self)
    }

    /// Inserts every detail at the head, keeping their order: prepending `[x, y]` to `[a]` gives
    /// `[x, y, a]`.
    ///
    /// # Panics
    /// Panics if the details don't all fit, or any id is repeated.
    pub fn prepend<I>(&mut self, details: I) -> &mut LinkedList<D, F>
    where
        I: IntoIterator,
        I::Item: Into<Detail<D>>,
    {
        self.try_prepend(details).throw()
    }

    pub fn try_prepend<I>(&mut self, details: I) -> Result<&mut LinkedList<D, F>, InsertError>
    where
        I: IntoIterator,
        I::Item: Into<Detail<D>>,
    {
        for detail in self.admit_all(details)?.into_iter().rev() {
            let head = self.nodes.anchors().get(Anchor::Head);
            self.splice(detail, None, head);
        }
        Ok(self)
    }

    pub fn pop_head(&mut self) -> Option<Detail<D>> {
        let head = self.nodes.anchors().get(Anchor::Head)?;
        self.remove(head)
    }

    pub fn try_pop_head(&mut self) -> Result<Detail<D>, CapacityUnderflow> {
        self.size.assert_not_empty(&self.nodes)?;
        self.pop_head().ok_or_else(|| self.size.underflow())
    }

    pub fn pop_tail(&mut self) -> Option<Detail<D>> {
        let tail = self.nodes.anchors().get(Anchor::Tail)?;
        self.remove(tail)
    }

    pub fn try_pop_tail(&mut self) -> Result<Detail<D>, CapacityUnderflow> {
        self.size.assert_not_empty(&self.nodes)?;
        self.pop_tail().ok_or_else(|| self.size.underflow())
    }

    /// Removes the element at an index or with an id. A miss returns `None`.
    pub fn extract<'a>(&mut self, locator: impl Into<Locator<'a>>) -> Option<Detail<D>> {
        let key = self.locate(locator)?;
        self.remove(key)
    }

    /// Removes the first element, from the head, that matches `predicate`.
    pub fn extract_where(
        &mut self,
        mut predicate: impl FnMut(DetailRef<'_, D>) -> bool,
    ) -> Option<Detail<D>> {
        let key = self.nodes.walk().find(|visit| predicate(visit.detail()))?.key;
        self.remove(key)
    }

    /// Moves the node at `from` so it sits directly before or after the node at `to`. Both are
    /// resolved before anything is unlinked.
    ///
    /// Returns `false`, leaving the list untouched, if either end is missing or both name the
    /// same node.
    pub fn move_node<'a, 'b>(
        &mut self,
        from: impl Into<Locator<'a>>,
        to: impl Into<Locator<'b>>,
        position: Position,
    ) -> bool {
        let (Some(from), Some(to)) = (self.locate(from), self.locate(to)) else {
            return false;
        };
        if from == to {
            return false;
        }

        self.size.mutate(&mut self.nodes, |nodes| {
            unlink(nodes, from);
            let (prev, next) = match position {
                Position::Before => (predecessor(nodes, to), Some(to)),
                Position::After => (Some(to), nodes.next(to)),
            };
            link_between(nodes, prev, from, next);
        });
        true
    }

    /// Replaces an element's payload, returning the old one. Its id and position stay put.
    pub fn set_data<'a>(&mut self, locator: impl Into<Locator<'a>>, data: D) -> Option<D> {
        let key = self.locate(locator)?;
        self.size.mutate(&mut self.nodes, |nodes| nodes.set_data(key, data))
    }

    pub fn data_mut<'a>(&mut self, locator: impl Into<Locator<'a>>) -> Option<&mut D> {
        let key = self.locate(locator)?;
        self.nodes.data_mut(key)
    }

    /// Iterates from head to tail.
    pub fn forward(&self) -> Details<'_, D> {
        Details(self.nodes.forward(Anchor::Head))
    }

    /// Drops every element. Calling it on an empty list does nothing.
    pub fn reset(&mut self) {
        self.size.mutate(&mut self.nodes, NodeManager::clear);
    }

    pub fn set_max_size(&mut self, max_size: impl Into<MaxSize>) {
        self.size.set_max_size(max_size);
    }

    pub fn set_messages(&mut self, messages: SizeMessages) {
        self.size.set_messages(messages);
    }

    /// Checks capacity, then id uniqueness.
    fn admit(&self, detail: Detail<D>) -> Result<Detail<D>, InsertError> {
        self.size.assert_not_full(&self.nodes)?;
        if self.nodes.find(&detail.id).is_some() {
            return Err(DuplicateId { id: detail.id }.into());
        }
        Ok(detail)
    }

    fn admit_all<I>(&self, details: I) -> Result<Vec<Detail<D>>, InsertError>
    where
        I: IntoIterator,
        I::Item: Into<Detail<D>>,
    {
        let details: Vec<Detail<D>> = details.into_iter().map(Into::into).collect();
        if details.is_empty() {
            return Ok(details);
        }

        self.size.assert_room_for(&self.nodes, details.len())?;
        {
            let mut seen = HashSet::new();
            for detail in &details {
                if !seen.insert(detail.id.as_str()) || self.nodes.find(&detail.id).is_some() {
                    return Err(DuplicateId {
                        id: detail.id.clone(),
                    }
                    .into());
                }
            }
        }
        Ok(details)
    }

    fn target(&self, id: &str) -> Result<NodeKey, MissingNode> {
        self.nodes.find(id).ok_or_else(|| MissingNode { id: id.to_owned() })
    }

    fn locate<'a>(&self, locator: impl Into<Locator<'a>>) -> Option<NodeKey> {
        match locator.into() {
            Locator::Index(index) => self.nodes.walk().nth(index).map(|visit| visit.key),
            Locator::Id(id) => self.nodes.find(id),
        }
    }

    fn splice(&mut self, detail: Detail<D>, prev: Link, next: Link) -> NodeKey {
        self.size.mutate(&mut self.nodes, |nodes| {
            let key = nodes.create_node(detail);
            link_between(nodes, prev, key, next);
            key
        })
    }

    fn remove(&mut self, key: NodeKey) -> Option<Detail<D>> {
        self.size.mutate(&mut self.nodes, |nodes| {
            unlink(nodes, key);
            nodes.destroy(key)
        })
    }

    #[cfg(test)]
    pub(crate) fn verify_links(&self) {
        self.nodes.verify_links(Some(Anchor::Tail));
    }
}

impl<D> LinkedList<D, Doubly> {
    /// Iterates from tail to head.
    pub fn backward(&self) -> Details<'_, D> {
        Details(self.nodes.backward(Anchor::Tail))
    }
}

impl<D, F: Family> Linked for LinkedList<D, F> {
    type Data = D;
    type Family = F;

    fn nodes(&self) -> &NodeManager<D, F> {
        &self.nodes
    }

    fn size_controller(&self) -> &SizeController<NodeManager<D, F>> {
        &self.size
    }
}

impl<D, F: Family> Default for LinkedList<D, F> {
    fn default() -> Self {
        Self::with_options(Options::default())
    }
}

impl<D, F: Family, T: Into<Detail<D>>> FromIterator<T> for LinkedList<D, F> {
    /// # Panics
    /// Panics if an id is repeated.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::default();
        list.append(iter);
        list
    }
}

impl<D, F: Family, T: Into<Detail<D>>> Extend<T> for LinkedList<D, F> {
    /// # Panics
    /// Panics if the list fills up or an id is repeated.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.append(iter);
    }
}

impl<D: PartialEq, F: Family> PartialEq for LinkedList<D, F> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<D: Eq, F: Family> Eq for LinkedList<D, F> {}

impl<D: Debug, F: Family> Debug for LinkedList<D, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("kind", &F::KIND)
            .field("contents", &self.iter().collect::<Vec<_>>())
            .field("size", &self.size())
            .finish()
    }
}

impl<D: Debug, F: Family> Display for LinkedList<D, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_chain(f, self.iter())
    }
}

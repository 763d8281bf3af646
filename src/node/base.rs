use std::mem;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The public, pointer-free view of a node. This is what goes into a structure and what comes
/// back out of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Detail<D> {
    pub id: String,
    pub data: D,
}

impl<D> Detail<D> {
    pub fn new(id: impl Into<String>, data: D) -> Detail<D> {
        Detail {
            id: id.into(),
            data,
        }
    }

    pub fn view(&self) -> DetailRef<'_, D> {
        DetailRef {
            id: &self.id,
            data: &self.data,
        }
    }
}

impl<S: Into<String>, D> From<(S, D)> for Detail<D> {
    fn from((id, data): (S, D)) -> Self {
        Detail::new(id, data)
    }
}

/// A borrowed [`Detail`], returned by every read operation.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct DetailRef<'a, D> {
    pub id: &'a str,
    pub data: &'a D,
}

impl<'a, D> DetailRef<'a, D> {
    pub fn cloned(self) -> Detail<D>
    where
        D: Clone,
    {
        Detail {
            id: self.id.to_owned(),
            data: self.data.clone(),
        }
    }
}

impl<D> Clone for DetailRef<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for DetailRef<'_, D> {}

impl<D: PartialEq> PartialEq<Detail<D>> for DetailRef<'_, D> {
    fn eq(&self, other: &Detail<D>) -> bool {
        self.id == other.id && *self.data == other.data
    }
}

impl<D: PartialEq> PartialEq<DetailRef<'_, D>> for Detail<D> {
    fn eq(&self, other: &DetailRef<'_, D>) -> bool {
        other == self
    }
}

/// An identifier and a payload. The fields are only reachable through accessors, and
/// [`destroy`](BaseNode::destroy) consumes the node so neither can be used afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BaseNode<D> {
    id: String,
    data: D,
}

impl<D> BaseNode<D> {
    pub fn new(id: impl Into<String>, data: D) -> BaseNode<D> {
        BaseNode {
            id: id.into(),
            data,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub const fn data(&self) -> &D {
        &self.data
    }

    pub const fn data_mut(&mut self) -> &mut D {
        &mut self.data
    }

    /// Replaces the payload, returning the previous one.
    pub fn set_data(&mut self, data: D) -> D {
        mem::replace(&mut self.data, data)
    }

    pub fn detail(&self) -> DetailRef<'_, D> {
        DetailRef {
            id: &self.id,
            data: &self.data,
        }
    }

    pub fn destroy(self) -> Detail<D> {
        Detail {
            id: self.id,
            data: self.data,
        }
    }
}

impl<D> From<Detail<D>> for BaseNode<D> {
    fn from(Detail { id, data }: Detail<D>) -> Self {
        BaseNode { id, data }
    }
}

use derive_more::{Display, Error, From, IsVariant};

/// Raised when an insert would push a fixed-size structure past its maximum size.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("{message} (len {len}, max size {max_size})")]
pub struct CapacityOverflow {
    pub len: usize,
    pub max_size: usize,
    pub message: String,
}

/// Raised when a removal is attempted on an empty structure.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("{message}")]
pub struct CapacityUnderflow {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("{message} (index {index}, len {len})")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("a node with id {id:?} already exists")]
pub struct DuplicateId {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("no node with id {id:?}")]
pub struct MissingNode {
    pub id: String,
}

/// Every way an insert into a [`LinkedList`](crate::collections::list::LinkedList) can fail.
/// Nothing is mutated when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From, IsVariant)]
pub enum InsertError {
    CapacityOverflow(CapacityOverflow),
    DuplicateId(DuplicateId),
    MissingNode(MissingNode),
    IndexOutOfBounds(IndexOutOfBounds),
}

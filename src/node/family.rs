use std::fmt::Debug;

use derive_more::{Display, IsVariant};

/// The runtime tag naming a node family.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum NodeKind {
    #[display("singly")]
    Singly,
    #[display("doubly")]
    Doubly,
}

/// A pointer field on a node.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum Pointer {
    #[display("next")]
    Next,
    #[display("prev")]
    Prev,
}

/// The pointer shape shared by every node a [`NodeManager`](super::NodeManager) creates. Only
/// [`Singly`] and [`Doubly`] implement it.
pub trait Family: sealed::Sealed + Debug + Default + Clone + Copy + PartialEq + Eq + 'static {
    const KIND: NodeKind;
    const POINTERS: &'static [Pointer];
    const HAS_PREV: bool;
}

/// Nodes with a `next` pointer only.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Singly;

/// Nodes with both `next` and `prev` pointers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Doubly;

impl Family for Singly {
    const KIND: NodeKind = NodeKind::Singly;
    const POINTERS: &'static [Pointer] = &[Pointer::Next];
    const HAS_PREV: bool = false;
}

impl Family for Doubly {
    const KIND: NodeKind = NodeKind::Doubly;
    const POINTERS: &'static [Pointer] = &[Pointer::Next, Pointer::Prev];
    const HAS_PREV: bool = true;
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Singly {}
    impl Sealed for super::Doubly {}
}

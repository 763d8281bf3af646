//! Nodes and the manager that links them. Structures in [`collections`](crate::collections) are
//! built from a [`NodeManager`] for the pointers and a
//! [`SizeController`](crate::size::SizeController) for the count.
//!
//! Nodes live in an arena owned by their manager and refer to each other through [`NodeKey`]s, so
//! cycles (doubly linked pairs, circular queues) need no shared ownership.

mod anchors;
mod arena;
mod base;
mod family;
pub(crate) mod ids;
mod iter;
mod manager;
mod node;
mod tests;

pub use anchors::*;
pub use base::*;
pub use family::*;
pub use iter::{Traversal, Visit};
pub use manager::*;
pub use node::*;

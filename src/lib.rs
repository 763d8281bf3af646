//! Linked data structures over a shared node layer.
//!
//! # Layers
//! - [`node`]: details, node families, anchors and the [`NodeManager`](node::NodeManager) that
//!   owns nodes and hands out keys to them.
//! - [`size`]: the [`SizeController`](size::SizeController), a cached count plus an optional max
//!   size, with checks that run before any write.
//! - [`collections`]: a stack, a queue (linear or circular), a deque and a linked list, each
//!   composed from one manager and one controller.
//!
//! # Error Handling
//! Operations that can fail come in pairs. The `try_` form returns a [`Result`] with a small,
//! strongly typed error, and the plain form panics with that error's message. Looking up something
//! that isn't there is never an error: those return [`None`].
//!
//! Every check runs before the structure is touched, so a failed call leaves it exactly as it was.
//!
//! # Features
//! Each structure sits behind a feature of the same name, all on by default. The `serde` feature
//! makes [`Options`](collections::Options) and [`Detail`](node::Detail) (de)serializable.

#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;
pub mod node;
pub mod size;

pub(crate) mod util;

pub use collections::traits::{Linked, Locator};
pub use util::error::{DuplicateId, InsertError, MissingNode};

//! Linked structures built from a [`NodeManager`](crate::node::NodeManager) and a
//! [`SizeController`](crate::size::SizeController).
//!
//! # Shape
//! Each structure owns exactly one of each. The manager holds the nodes and the anchors pointing
//! into them; the controller counts them and enforces the max size. Every write goes through
//! [`SizeController::mutate`](crate::size::SizeController::mutate), so the cached count is always
//! dropped after a change.
//!
//! Nothing here hands out a node or a [`NodeKey`](crate::node::NodeKey). Reads return
//! [`DetailRef`](crate::node::DetailRef)s and removals return owned
//! [`Detail`](crate::node::Detail)s, so callers can't break the links a structure relies on.
//!
//! | Structure | Family | Anchors |
//! |-|-|-|
//! | [`Stack`](stack::Stack) | singly | `head` |
//! | [`Queue`](queue::Queue) | singly, optionally circular | `head`, `tail` |
//! | [`Deque`](deque::Deque) | doubly | `head`, `tail` |
//! | [`LinkedList`](list::LinkedList) | either | `head`, `tail` |

pub mod options;
pub mod traits;

#[cfg(feature = "deque")]
pub mod deque;
#[cfg(feature = "list")]
pub mod list;
#[cfg(feature = "queue")]
pub mod queue;
#[cfg(feature = "stack")]
pub mod stack;

pub use options::Options;

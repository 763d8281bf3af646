//! Element counting and capacity enforcement, shared by every structure in
//! [`collections`](crate::collections).

mod bounds;
mod controller;
mod messages;
mod tests;

pub use bounds::*;
pub use controller::*;
pub use messages::*;
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, CapacityUnderflow, IndexOutOfBounds};

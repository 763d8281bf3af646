mod iter;
mod stack;

pub use iter::*;
pub use stack::*;

mod deque;
mod iter;

pub use deque::*;
pub use iter::*;

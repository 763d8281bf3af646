mod iter;
mod linked_list;
mod links;
mod tests;

pub use iter::*;
pub use linked_list::*;

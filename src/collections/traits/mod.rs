mod linked;

pub use linked::*;

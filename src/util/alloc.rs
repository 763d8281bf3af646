#![cfg(test)]

use std::cell::Cell;
use std::rc::Rc;

/// A payload that bumps a shared counter when it is dropped, used to check that structures
/// release the data they own.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<Cell<usize>>);

impl CountedDrop {
    pub fn counter() -> Rc<Cell<usize>> {
        Rc::new(Cell::new(0))
    }

    pub fn new(counter: &Rc<Cell<usize>>) -> CountedDrop {
        CountedDrop(Rc::clone(counter))
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

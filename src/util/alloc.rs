use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZeroSizedType;

/// An element which increments a shared counter whenever it is dropped. Clones share the counter.
#[derive(Debug, Clone)]
pub struct CountedDrop {
    drops: Rc<Cell<usize>>,
    pub value: i32,
}

impl CountedDrop {
    pub fn new() -> CountedDrop {
        CountedDrop {
            drops: Rc::new(Cell::new(0)),
            value: 0,
        }
    }

    /// Creates another element sharing this element's counter.
    pub fn with_value(&self, value: i32) -> CountedDrop {
        CountedDrop {
            drops: Rc::clone(&self.drops),
            value,
        }
    }

    pub fn drops(&self) -> usize {
        self.drops.get()
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

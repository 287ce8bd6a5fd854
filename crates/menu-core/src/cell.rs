//! Menu Cell
//!
//! The single writer slot holding the current `Menu` snapshot. The browser
//! backs it with a reactive signal, tests with `LocalMenu`.

use std::cell::RefCell;
use std::rc::Rc;

use crate::menu::Menu;

pub trait MenuCell {
    /// Current snapshot
    fn snapshot(&self) -> Menu;

    /// Install a new snapshot
    fn replace(&self, next: Menu);

    /// Derive the next snapshot from the latest one.
    /// Never call across an `.await`: read and write happen back to back.
    fn apply(&self, transition: impl FnOnce(&Menu) -> Menu) {
        let next = transition(&self.snapshot());
        self.replace(next);
    }
}

/// Plain shared cell for non-reactive use
#[derive(Debug, Clone, Default)]
pub struct LocalMenu(Rc<RefCell<Menu>>);

impl LocalMenu {
    pub fn new(menu: Menu) -> Self {
        Self(Rc::new(RefCell::new(menu)))
    }
}

impl MenuCell for LocalMenu {
    fn snapshot(&self) -> Menu {
        self.0.borrow().clone()
    }

    fn replace(&self, next: Menu) {
        *self.0.borrow_mut() = next;
    }
}

//! State cells
//!
//! The core never owns UI state; it mutates whatever cell the caller hands
//! it. The browser passes a reactive signal, tests pass `Rc<RefCell<_>>`.

use std::cell::RefCell;
use std::rc::Rc;

/// Shared, single-threaded handle to a piece of state
///
/// `None` from either method means the cell is gone (its view was torn down).
pub trait StateCell<T> {
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R>;

    fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;

    fn replace(&self, value: T) {
        self.write(move |current| *current = value);
    }
}

impl<T> StateCell<T> for Rc<RefCell<T>> {
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }

    fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

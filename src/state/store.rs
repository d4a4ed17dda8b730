//! Write access to view state, independent of where it lives.
//!
//! The page keeps its `LoginView` in a Leptos `RwSignal`; tests keep it in a
//! `RefCell`. Async flows in `controller` only touch state through this trait.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

pub trait ViewStore<T> {
    /// Run `f` against the state. `None` when the state no longer exists.
    fn apply<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T> ViewStore<T> for RefCell<T> {
    fn apply<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<T, S: ViewStore<T> + ?Sized> ViewStore<T> for Rc<S> {
    fn apply<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        (**self).apply(f)
    }
}

impl<T: Send + Sync + 'static> ViewStore<T> for RwSignal<T> {
    fn apply<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }
}

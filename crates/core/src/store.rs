//! View state and the store seam.
//!
//! [`TaskBoard`](crate::TaskBoard) never owns state directly; it reads and
//! writes through a [`BoardStore`]. The browser crate backs this with
//! reactive signals, the host with [`MemoryStore`].

use std::cell::RefCell;
use std::rc::Rc;

use crate::task::Task;

/// Everything the task view renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Last accepted snapshot, in server order.
    pub tasks: Vec<Task>,
    /// True while the newest list fetch is in flight.
    pub loading: bool,
    /// Whether the action list is shown.
    pub menu_open: bool,
}

pub trait BoardStore {
    fn snapshot(&self) -> ViewState;

    /// Replace the whole task snapshot. Lists are never patched in place.
    fn replace_tasks(&self, tasks: Vec<Task>);

    fn set_loading(&self, loading: bool);

    /// Flip the menu flag and return its new value.
    fn toggle_menu(&self) -> bool;
}

/// Single-threaded in-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Rc<RefCell<ViewState>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing state.
    #[must_use]
    pub fn with_state(state: ViewState) -> Self {
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }
}

impl BoardStore for MemoryStore {
    fn snapshot(&self) -> ViewState {
        self.state.borrow().clone()
    }

    fn replace_tasks(&self, tasks: Vec<Task>) {
        self.state.borrow_mut().tasks = tasks;
    }

    fn set_loading(&self, loading: bool) {
        self.state.borrow_mut().loading = loading;
    }

    fn toggle_menu(&self) -> bool {
        let mut state = self.state.borrow_mut();
        state.menu_open = !state.menu_open;
        state.menu_open
    }
}

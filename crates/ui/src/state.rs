//! Reactive state for the task view.
//!
//! Signals are written with `try_*` so a response that lands after the view
//! was torn down is dropped rather than written into a disposed signal.

use std::fmt;

use leptos::prelude::*;
use notion_tasks_core::{BoardStore, Task, TaskId, ViewState};

/// [`BoardStore`] backed by one signal per field.
#[derive(Debug, Clone, Copy)]
pub struct SignalStore {
    pub tasks: RwSignal<Vec<Task>>,
    pub loading: RwSignal<bool>,
    pub menu_open: RwSignal<bool>,
}

impl SignalStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tasks: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            menu_open: RwSignal::new(false),
        }
    }

    /// Id of the first listed task, read without subscribing.
    #[must_use]
    pub fn first_task_id(&self) -> Option<TaskId> {
        self.tasks
            .try_with_untracked(|tasks| tasks.first().map(|task| task.id))
            .flatten()
    }
}

impl Default for SignalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardStore for SignalStore {
    fn snapshot(&self) -> ViewState {
        ViewState {
            tasks: self.tasks.try_get_untracked().unwrap_or_default(),
            loading: self.loading.try_get_untracked().unwrap_or_default(),
            menu_open: self.menu_open.try_get_untracked().unwrap_or_default(),
        }
    }

    fn replace_tasks(&self, tasks: Vec<Task>) {
        if self.tasks.try_set(tasks).is_some() {
            tracing::debug!("task view disposed, dropping task list");
        }
    }

    fn set_loading(&self, loading: bool) {
        if self.loading.try_set(loading).is_some() {
            tracing::debug!("task view disposed, dropping loading flag");
        }
    }

    fn toggle_menu(&self) -> bool {
        self.menu_open
            .try_update(|open| {
                *open = !*open;
                *open
            })
            .unwrap_or_default()
    }
}

/// Reachability of the API root, shown in the page header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerState {
    Checking,
    Online(String),
    Unreachable,
}

impl ServerState {
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Checking => "server-status checking",
            Self::Online(_) => "server-status online",
            Self::Unreachable => "server-status offline",
        }
    }
}

impl fmt::Display for ServerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checking => write!(f, "API: checking..."),
            Self::Online(message) => write!(f, "API: {message}"),
            Self::Unreachable => write!(f, "API: unreachable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_store_round_trips_view_state() {
        let store = SignalStore::new();
        store.replace_tasks(vec![Task::new(1, "A", "d")]);
        store.set_loading(true);

        let state = store.snapshot();
        assert_eq!(state.tasks, vec![Task::new(1, "A", "d")]);
        assert!(state.loading);
        assert!(!state.menu_open);
        assert_eq!(store.first_task_id(), Some(1));
    }

    #[test]
    fn test_signal_store_toggle_menu() {
        let store = SignalStore::new();
        assert!(store.toggle_menu());
        assert!(store.menu_open.get_untracked());
        assert!(!store.toggle_menu());
    }

    #[test]
    fn test_empty_store_has_no_first_task() {
        assert_eq!(SignalStore::new().first_task_id(), None);
    }

    #[test]
    fn test_server_state_display() {
        assert_eq!(ServerState::Checking.to_string(), "API: checking...");
        assert_eq!(
            ServerState::Online("Notion Task Manager is Running".to_string()).to_string(),
            "API: Notion Task Manager is Running"
        );
        assert_eq!(ServerState::Unreachable.to_string(), "API: unreachable");
        assert_eq!(ServerState::Unreachable.css_class(), "server-status offline");
    }
}

//! Task board: every user action of the task view.
//!
//! Mutations resync by re-fetching the whole list. List fetches are
//! sequenced: each one takes a ticket, and only the holder of the newest
//! ticket may write `tasks` or clear `loading`. A slow, older response that
//! lands after a newer one is dropped instead of overwriting it.

use std::cell::Cell;
use std::rc::Rc;

use crate::api::TaskApi;
use crate::listing::decode_listing;
use crate::result::ResultExt;
use crate::store::BoardStore;
use crate::task::{NewTask, TaskId, TaskPatch};

/// How a list fetch ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Snapshot replaced with this many tasks.
    Loaded(usize),
    /// Request failed; list cleared.
    Failed,
    /// Body was not `{"tasks": [...]}`; list cleared.
    Malformed,
    /// A newer fetch was issued while this one was in flight; result dropped.
    Superseded,
}

/// How a create/update/delete action ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Mutation accepted, followed by a list fetch.
    Resynced(FetchOutcome),
    /// Mutation rejected; state left as it was and no fetch issued.
    Failed,
}

/// Monotonic fetch tickets.
#[derive(Debug, Default)]
struct FetchSequence {
    latest: Cell<u64>,
}

impl FetchSequence {
    fn issue(&self) -> u64 {
        let next = self.latest.get().wrapping_add(1);
        self.latest.set(next);
        next
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.latest.get() == ticket
    }
}

/// Drives a [`TaskApi`] and writes the results into a [`BoardStore`].
///
/// Clones share the API handle, the store and the fetch sequence, so a clone
/// can be moved into each spawned action.
pub struct TaskBoard<A, S> {
    api: Rc<A>,
    store: S,
    fetches: Rc<FetchSequence>,
}

impl<A, S: Clone> Clone for TaskBoard<A, S> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            store: self.store.clone(),
            fetches: Rc::clone(&self.fetches),
        }
    }
}

impl<A: TaskApi, S: BoardStore> TaskBoard<A, S> {
    #[must_use]
    pub fn new(api: A, store: S) -> Self {
        Self {
            api: Rc::new(api),
            store,
            fetches: Rc::new(FetchSequence::default()),
        }
    }

    /// Initial load when the view is mounted.
    pub async fn mount(&self) -> FetchOutcome {
        self.refresh().await
    }

    /// Fetch the full list and replace the snapshot.
    pub async fn refresh(&self) -> FetchOutcome {
        let ticket = self.fetches.issue();
        tracing::debug!(ticket, "fetching tasks");
        self.store.set_loading(true);

        let response = self.api.list_tasks().await;

        if !self.fetches.is_current(ticket) {
            tracing::debug!(ticket, "dropping superseded task list");
            return FetchOutcome::Superseded;
        }

        let outcome = match response.log_failure("list tasks") {
            None => {
                self.store.replace_tasks(Vec::new());
                FetchOutcome::Failed
            }
            Some(body) => match decode_listing(body).log_failure("decode task list") {
                Some(tasks) => {
                    let count = tasks.len();
                    self.store.replace_tasks(tasks);
                    FetchOutcome::Loaded(count)
                }
                None => {
                    self.store.replace_tasks(Vec::new());
                    FetchOutcome::Malformed
                }
            },
        };

        self.store.set_loading(false);
        outcome
    }

    /// Show or hide the action list.
    pub fn toggle_menu(&self) -> bool {
        self.store.toggle_menu()
    }

    /// Create a placeholder task, then resync.
    ///
    /// Any 2xx counts as success, whatever the body says.
    pub async fn create(&self) -> ActionOutcome {
        tracing::debug!("creating task");
        match self
            .api
            .create_task(&NewTask::placeholder())
            .await
            .log_failure("create task")
        {
            Some(echo) => {
                tracing::info!(id = ?echo.map(|task| task.id), "task created");
                ActionOutcome::Resynced(self.refresh().await)
            }
            None => ActionOutcome::Failed,
        }
    }

    /// Retitle a task with the placeholder patch, then resync.
    pub async fn update(&self, id: TaskId) -> ActionOutcome {
        tracing::debug!(id, "updating task");
        match self
            .api
            .update_task(id, &TaskPatch::placeholder())
            .await
            .log_failure("update task")
        {
            Some(echo) => {
                tracing::info!(id, echoed = echo.is_some(), "task updated");
                ActionOutcome::Resynced(self.refresh().await)
            }
            None => ActionOutcome::Failed,
        }
    }

    /// Delete a task, then resync.
    pub async fn delete(&self, id: TaskId) -> ActionOutcome {
        tracing::debug!(id, "deleting task");
        match self.api.delete_task(id).await.log_failure("delete task") {
            Some(()) => {
                tracing::info!(id, "task deleted");
                ActionOutcome::Resynced(self.refresh().await)
            }
            None => ActionOutcome::Failed,
        }
    }
}

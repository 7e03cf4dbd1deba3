//! Scripted in-memory `TaskApi` shared by the behaviour tests.

#![allow(dead_code)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use futures::channel::oneshot;
use notion_tasks_core::{
    BoardStore, MemoryStore, NewTask, RequestError, Result, Task, TaskApi, TaskId, TaskPatch,
};
use serde_json::{Value, json};

/// A request the fake received, with its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Create(NewTask),
    Update(TaskId, TaskPatch),
    Delete(TaskId),
    Status,
}

/// Reply to a list request: immediate, or held until the test releases it.
pub enum ListReply {
    Ready(Result<Value>),
    Gated(oneshot::Receiver<Result<Value>>),
}

#[derive(Default)]
pub struct FakeApi {
    lists: RefCell<VecDeque<ListReply>>,
    writes: RefCell<VecDeque<Result<Option<Task>>>>,
    deletes: RefCell<VecDeque<Result<()>>>,
    calls: RefCell<Vec<Call>>,
    observed_store: RefCell<Option<MemoryStore>>,
    loading_at_list: RefCell<Vec<bool>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the store's `loading` flag each time a list request is sent.
    pub fn observe(self, store: &MemoryStore) -> Self {
        *self.observed_store.borrow_mut() = Some(store.clone());
        self
    }

    pub fn list_ok(self, body: Value) -> Self {
        self.lists.borrow_mut().push_back(ListReply::Ready(Ok(body)));
        self
    }

    pub fn list_err(self, error: RequestError) -> Self {
        self.lists.borrow_mut().push_back(ListReply::Ready(Err(error)));
        self
    }

    /// Queue a list reply the test completes through the returned sender.
    pub fn list_gated(&self) -> oneshot::Sender<Result<Value>> {
        let (tx, rx) = oneshot::channel();
        self.lists.borrow_mut().push_back(ListReply::Gated(rx));
        tx
    }

    pub fn write_ok(self, task: Task) -> Self {
        self.writes.borrow_mut().push_back(Ok(Some(task)));
        self
    }

    /// A 2xx whose body is not a task, e.g. `{"message": "..."}`.
    pub fn write_ok_without_echo(self) -> Self {
        self.writes.borrow_mut().push_back(Ok(None));
        self
    }

    pub fn write_err(self, error: RequestError) -> Self {
        self.writes.borrow_mut().push_back(Err(error));
        self
    }

    pub fn delete_ok(self) -> Self {
        self.deletes.borrow_mut().push_back(Ok(()));
        self
    }

    pub fn delete_err(self, error: RequestError) -> Self {
        self.deletes.borrow_mut().push_back(Err(error));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| **call == Call::List)
            .count()
    }

    pub fn loading_at_list(&self) -> Vec<bool> {
        self.loading_at_list.borrow().clone()
    }
}

#[async_trait(?Send)]
impl TaskApi for FakeApi {
    async fn list_tasks(&self) -> Result<Value> {
        self.calls.borrow_mut().push(Call::List);
        if let Some(store) = self.observed_store.borrow().as_ref() {
            self.loading_at_list
                .borrow_mut()
                .push(store.snapshot().loading);
        }
        let reply = self
            .lists
            .borrow_mut()
            .pop_front()
            .expect("unexpected list request");
        match reply {
            ListReply::Ready(result) => result,
            ListReply::Gated(rx) => rx.await.expect("gate dropped"),
        }
    }

    async fn create_task(&self, input: &NewTask) -> Result<Option<Task>> {
        self.calls.borrow_mut().push(Call::Create(input.clone()));
        self.writes
            .borrow_mut()
            .pop_front()
            .expect("unexpected create request")
    }

    async fn update_task(&self, id: TaskId, patch: &TaskPatch) -> Result<Option<Task>> {
        self.calls.borrow_mut().push(Call::Update(id, patch.clone()));
        self.writes
            .borrow_mut()
            .pop_front()
            .expect("unexpected update request")
    }

    async fn delete_task(&self, id: TaskId) -> Result<()> {
        self.calls.borrow_mut().push(Call::Delete(id));
        self.deletes
            .borrow_mut()
            .pop_front()
            .expect("unexpected delete request")
    }

    async fn server_status(&self) -> Result<String> {
        self.calls.borrow_mut().push(Call::Status);
        Ok("Notion Task Manager is Running".to_string())
    }
}

pub fn listing(tasks: &[Task]) -> Value {
    json!({ "tasks": tasks })
}

pub fn server_error() -> RequestError {
    RequestError::status(500, "Internal Server Error")
}

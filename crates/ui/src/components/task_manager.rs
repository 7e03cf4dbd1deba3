//! Wires the task view to a [`TaskBoard`] talking HTTP.

use std::future::Future;

use leptos::prelude::*;
use notion_tasks_core::{ClientConfig, TaskBoard, TaskId};
use wasm_bindgen_futures::spawn_local;

use super::task_view::{TaskActions, TaskView};
use crate::api::HttpTaskApi;
use crate::state::SignalStore;

type Board = TaskBoard<HttpTaskApi, SignalStore>;

/// Run a board action in the background. Outcomes are already logged by the
/// board, so nothing is awaited here.
fn spawn_action<F, Fut>(board: StoredValue<Board, LocalStorage>, action: F)
where
    F: FnOnce(Board) -> Fut,
    Fut: Future + 'static,
{
    if let Some(board) = board.try_get_value() {
        let pending = action(board);
        spawn_local(async move {
            pending.await;
        });
    }
}

/// Task list with its action menu. Fetches the list once when created.
#[component]
pub fn TaskManager(config: ClientConfig) -> impl IntoView {
    let store = SignalStore::new();
    let board = StoredValue::new_local(TaskBoard::new(HttpTaskApi::new(config), store));

    spawn_action(board, |board| async move { board.mount().await });

    let actions = TaskActions {
        toggle_menu: Callback::new(move |()| {
            board.with_value(|board| {
                board.toggle_menu();
            });
        }),
        refresh: Callback::new(move |()| {
            spawn_action(board, |board| async move { board.refresh().await });
        }),
        create: Callback::new(move |()| {
            spawn_action(board, |board| async move { board.create().await });
        }),
        update: Callback::new(move |id: TaskId| {
            spawn_action(board, move |board| async move { board.update(id).await });
        }),
        delete: Callback::new(move |id: TaskId| {
            spawn_action(board, move |board| async move { board.delete(id).await });
        }),
    };

    view! { <TaskView store=store actions=actions /> }
}

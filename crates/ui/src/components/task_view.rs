//! The task view: menu, loading indicator and task list.
//!
//! Pure rendering over a [`SignalStore`]. Requests are the caller's business
//! and arrive here as callbacks.

use leptos::prelude::*;
use notion_tasks_core::{Task, TaskId, task_line};

use crate::state::SignalStore;

pub const EMPTY_MESSAGE: &str = "No tasks found.";
pub const LOADING_MESSAGE: &str = "Loading tasks...";

/// Label of the menu toggle button.
#[must_use]
pub const fn menu_label(menu_open: bool) -> &'static str {
    if menu_open { "Close Menu" } else { "Open Menu" }
}

/// What the view's buttons do.
#[derive(Clone, Copy)]
pub struct TaskActions {
    pub toggle_menu: Callback<()>,
    pub refresh: Callback<()>,
    pub create: Callback<()>,
    pub update: Callback<TaskId>,
    pub delete: Callback<TaskId>,
}

#[component]
pub fn TaskView(store: SignalStore, actions: TaskActions) -> impl IntoView {
    let no_tasks = move || store.tasks.with(Vec::is_empty);
    let update_first = move |_| {
        if let Some(id) = store.first_task_id() {
            actions.update.run(id);
        }
    };
    let delete_first = move |_| {
        if let Some(id) = store.first_task_id() {
            actions.delete.run(id);
        }
    };

    view! {
        <section class="task-manager">
            <button class="toggle-btn" on:click=move |_| actions.toggle_menu.run(())>
                {move || menu_label(store.menu_open.get())}
            </button>

            <Show when=move || store.menu_open.get()>
                <ul class="dropdown">
                    <li><button on:click=move |_| actions.refresh.run(())>"Refresh Tasks"</button></li>
                    <li><button on:click=move |_| actions.create.run(())>"Create Task"</button></li>
                    <li>
                        <button on:click=update_first disabled=no_tasks>
                            "Update First Task"
                        </button>
                    </li>
                    <li>
                        <button on:click=delete_first disabled=no_tasks>
                            "Delete First Task"
                        </button>
                    </li>
                </ul>
            </Show>

            <Show when=move || store.loading.get()>
                <p class="loading">{LOADING_MESSAGE}</p>
            </Show>

            <Show
                when=move || !no_tasks()
                fallback=|| view! { <p class="empty">{EMPTY_MESSAGE}</p> }
            >
                <ul class="task-list">
                    <For
                        each=move || store.tasks.get()
                        key=|task: &Task| task.id
                        children=move |task: Task| view! { <TaskRow task=task actions=actions /> }
                    />
                </ul>
            </Show>
        </section>
    }
}

/// One task line with its own update/delete buttons.
#[component]
fn TaskRow(task: Task, actions: TaskActions) -> impl IntoView {
    let id = task.id;

    view! {
        <li class="task-row">
            <span class="task-text">{task_line(&task)}</span>
            <span class="task-actions">
                <button on:click=move |_| actions.update.run(id)>"Update"</button>
                <button on:click=move |_| actions.delete.run(id)>"Delete"</button>
            </span>
        </li>
    }
}

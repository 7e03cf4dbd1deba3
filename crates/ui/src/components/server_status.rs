//! Header badge showing whether the API root answers.

use leptos::prelude::*;
use notion_tasks_core::{ClientConfig, TaskApi};
use wasm_bindgen_futures::spawn_local;

use crate::api::HttpTaskApi;
use crate::state::ServerState;

/// Checks `GET /` once on mount. No polling.
#[component]
pub fn ServerStatus(config: ClientConfig) -> impl IntoView {
    let status = RwSignal::new(ServerState::Checking);
    let api = HttpTaskApi::new(config);

    spawn_local(async move {
        let next = match api.server_status().await {
            Ok(message) => ServerState::Online(message),
            Err(e) => {
                tracing::warn!(error = %e, "task API root unreachable");
                ServerState::Unreachable
            }
        };
        if status.try_set(next).is_some() {
            tracing::debug!("header disposed, dropping server status");
        }
    });

    view! {
        <span class=move || status.with(ServerState::css_class)>
            {move || status.with(ToString::to_string)}
        </span>
    }
}

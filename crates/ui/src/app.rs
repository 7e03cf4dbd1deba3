//! Main application component
//!
//! Resolves the API configuration once and lays out the page.

use leptos::prelude::*;

use crate::components::{ServerStatus, TaskManager};
use crate::config::load_config;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    let config = load_config();

    view! {
        <div class="app-container">
            <header class="app-header">
                <h1>"Notion Task Manager"</h1>
                <ServerStatus config=config.clone() />
            </header>
            <main class="app-main">
                <TaskManager config=config />
            </main>
            <footer class="app-footer">
                <p>"Notion Task Manager - Leptos 0.7 CSR"</p>
            </footer>
        </div>
    }
}

//! WASM entry point for the Leptos CSR app
//!
//! This is the main entry point that Trunk compiles to WASM.
//! It mounts the Leptos App component to the document body.

use leptos::prelude::*;
use notion_tasks_ui::App;

fn main() {
    // Set up panic hook for better error messages in browser console
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();

    tracing::info!("starting Notion task manager frontend");

    mount_to_body(|| {
        view! {
            <App />
        }
    })
}

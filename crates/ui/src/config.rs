//! Browser-side configuration lookup.
//!
//! Priority: `<meta name="tasks-api-base-url">` in the host page, then the
//! `NOTION_TASKS_API_URL` variable at build time, then the built-in default.

use notion_tasks_core::ClientConfig;

/// Name of the `<meta>` tag that overrides the API base URL at deploy time.
pub const BASE_URL_META: &str = "tasks-api-base-url";

/// Resolve the API configuration for this page.
#[must_use]
pub fn load_config() -> ClientConfig {
    let from_page = meta_base_url();
    let config = ClientConfig::resolve([
        from_page.as_deref(),
        option_env!("NOTION_TASKS_API_URL"),
    ]);
    tracing::info!(base_url = config.base_url(), "task API configured");
    config
}

fn meta_base_url() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document
        .query_selector(&meta_selector(BASE_URL_META))
        .ok()??;
    meta.get_attribute("content")
}

fn meta_selector(name: &str) -> String {
    format!("meta[name=\"{name}\"]")
}

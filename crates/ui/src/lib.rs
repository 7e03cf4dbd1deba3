//! Leptos 0.7 CSR frontend for the Notion task manager API
//!
//! Lists, creates, updates and deletes tasks against a remote HTTP API.
//! Behaviour lives in `notion-tasks-core`; this crate supplies the browser
//! pieces.
//!
//! ## Module Structure
//! - `app`: Main application component
//! - `api`: `gloo-net` implementation of the task API
//! - `config`: API base URL lookup from the host page
//! - `state`: Signal-backed view state
//! - `components`: The task view and header badge

#![forbid(unsafe_code)]

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod state;

// Re-export main App component for convenience - Trunk will auto-mount it
pub use app::App;

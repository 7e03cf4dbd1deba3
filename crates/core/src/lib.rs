//! Core of the Notion task manager client.
//!
//! Everything here is target-independent: the browser crate plugs an HTTP
//! client into [`TaskApi`] and a reactive store into [`BoardStore`], and
//! [`TaskBoard`] drives both.
//!
//! ## Module Structure
//! - `task`: wire types for tasks and request bodies
//! - `listing`: validated decoding of the list response
//! - `config`: API base URL and endpoint construction
//! - `api`: the request/response seam
//! - `store`: view state and the store seam
//! - `board`: the user actions (fetch, create, update, delete, menu)
//! - `error` / `result`: error types and logging combinators

#![forbid(unsafe_code)]

pub mod api;
pub mod board;
pub mod config;
pub mod error;
pub mod listing;
pub mod result;
pub mod store;
pub mod task;

pub use api::TaskApi;
pub use board::{ActionOutcome, FetchOutcome, TaskBoard};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{ConfigError, RequestError};
pub use listing::{MalformedListing, decode_listing};
pub use result::{Result, ResultExt};
pub use store::{BoardStore, MemoryStore, ViewState};
pub use task::{NewTask, Task, TaskId, TaskPatch, task_line};

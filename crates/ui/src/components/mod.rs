//! Task view components.

pub mod server_status;
pub mod task_manager;
pub mod task_view;

pub use server_status::ServerStatus;
pub use task_manager::TaskManager;
pub use task_view::{TaskActions, TaskView};

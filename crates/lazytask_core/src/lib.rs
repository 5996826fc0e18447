//! Core domain logic for LazyTask.
//! This crate is the single source of truth for task invariants.

pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod parser;
pub mod service;
pub mod storage;

pub use config::{CoreConfig, DEFAULT_SAVE_PATH};
pub use error::{AppError, AppResult, ErrorKind};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskKind, TaskStatus, TaskValidationError};
pub use model::task_list::{TaskList, DEFAULT_MAX_TASKS};
pub use parser::{parse_command, Command};
pub use service::controller::{Response, TaskController};
pub use service::undo::{UndoAction, UndoStack};
pub use storage::{FileTaskStore, MemoryTaskStore, TaskStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

//! Core runtime configuration.
//!
//! # Responsibility
//! - Hold the knobs the controller needs: save file, task ceiling, undo depth.
//! - Provide defaults that match a plain local install.
//!
//! # Invariants
//! - `max_tasks = None` disables the ceiling; `undo_limit = None` keeps
//!   unbounded undo history.

use crate::model::task_list::DEFAULT_MAX_TASKS;
use std::path::PathBuf;

/// Save file used when no override is given, relative to the working dir.
pub const DEFAULT_SAVE_PATH: &str = "data/lazytask.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// Pipe-delimited save file.
    pub save_path: PathBuf,
    /// Soft ceiling on the number of tasks.
    pub max_tasks: Option<usize>,
    /// Maximum number of undo records kept in memory.
    pub undo_limit: Option<usize>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            max_tasks: Some(DEFAULT_MAX_TASKS),
            undo_limit: None,
        }
    }
}

impl CoreConfig {
    pub fn with_save_path(mut self, save_path: impl Into<PathBuf>) -> Self {
        self.save_path = save_path.into();
        self
    }

    pub fn with_max_tasks(mut self, max_tasks: Option<usize>) -> Self {
        self.max_tasks = max_tasks;
        self
    }

    pub fn with_undo_limit(mut self, undo_limit: Option<usize>) -> Self {
        self.undo_limit = undo_limit;
        self
    }
}

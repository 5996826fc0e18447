//! In-memory task store for ephemeral sessions and tests.

use crate::error::{AppError, AppResult};
use crate::model::task::Task;
use crate::storage::TaskStore;

#[derive(Debug, Clone, Default)]
pub struct MemoryTaskStore {
    tasks: Vec<Task>,
    save_count: usize,
    fail_saves: bool,
}

impl MemoryTaskStore {
    /// Creates a store that loads `tasks`.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            ..Self::default()
        }
    }

    /// Makes every later `save` fail, to exercise rollback paths.
    pub fn fail_saves(mut self, fail: bool) -> Self {
        self.fail_saves = fail;
        self
    }

    /// Switches save failures on or off for a store already in use.
    pub fn set_fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }

    /// Snapshot of the last successfully saved list.
    pub fn saved(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl TaskStore for MemoryTaskStore {
    fn load(&self) -> AppResult<Vec<Task>> {
        Ok(self.tasks.clone())
    }

    fn save(&mut self, tasks: &[Task]) -> AppResult<()> {
        if self.fail_saves {
            return Err(AppError::storage("Oops, couldn't save tasks: store is read-only"));
        }
        self.tasks = tasks.to_vec();
        self.save_count += 1;
        Ok(())
    }
}

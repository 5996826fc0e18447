//! Ordered in-memory task collection.
//!
//! # Responsibility
//! - Hold tasks in insertion order, which is also display and save order.
//! - Translate public 1-based task numbers into vector positions.
//!
//! # Invariants
//! - Every index-taking operation rejects numbers outside `[1, len]`
//!   (`add_at` also accepts `len + 1`) with a range error, never a panic.
//! - When a capacity is set, `add` and `add_at` never grow the list past it;
//!   `restore_at` only returns a removed task to its old slot.

use crate::error::{AppError, AppResult, ErrorKind};
use crate::model::task::Task;
use std::fmt::Display;

/// Historical ceiling kept as the default soft limit.
pub const DEFAULT_MAX_TASKS: usize = 100;

const EMPTY_LIST_MESSAGE: &str = "(You have no task available now)";
const LIST_HEADER: &str = "These are all your tasks:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
    max_tasks: Option<usize>,
}

impl Default for TaskList {
    fn default() -> Self {
        Self::new(Some(DEFAULT_MAX_TASKS))
    }
}

impl TaskList {
    /// Creates an empty list; `None` disables the capacity ceiling.
    pub fn new(max_tasks: Option<usize>) -> Self {
        Self {
            tasks: Vec::new(),
            max_tasks,
        }
    }

    /// Wraps already-loaded tasks.
    ///
    /// Loaded tasks are accepted even above the ceiling so that a save file
    /// written under a larger limit is never truncated; only further adds fail.
    pub fn from_tasks(tasks: Vec<Task>, max_tasks: Option<usize>) -> Self {
        Self { tasks, max_tasks }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn max_tasks(&self) -> Option<usize> {
        self.max_tasks
    }

    /// Read-only view in list order, used by storage.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Appends a task and returns its 1-based number.
    pub fn add(&mut self, task: Task) -> AppResult<usize> {
        self.ensure_capacity()?;
        self.tasks.push(task);
        Ok(self.tasks.len())
    }

    /// Inserts a task so that it ends up at `index`.
    pub fn add_at(&mut self, index: usize, task: Task) -> AppResult<()> {
        if index == 0 || index > self.tasks.len() + 1 {
            return Err(out_of_range(index));
        }
        self.ensure_capacity()?;
        self.tasks.insert(index - 1, task);
        Ok(())
    }

    /// Puts a previously removed task back at `index`.
    ///
    /// Skips the capacity check: restoring never grows the list past the size
    /// it already had, even when a loaded list sits above the ceiling.
    pub(crate) fn restore_at(&mut self, index: usize, task: Task) -> AppResult<()> {
        if index == 0 || index > self.tasks.len() + 1 {
            return Err(out_of_range(index));
        }
        self.tasks.insert(index - 1, task);
        Ok(())
    }

    /// Removes and returns the task at `index`.
    pub fn delete(&mut self, index: usize) -> AppResult<Task> {
        let position = self.position(index)?;
        Ok(self.tasks.remove(position))
    }

    /// Marks the task at `index` as done.
    pub fn mark(&mut self, index: usize) -> AppResult<&Task> {
        let position = self.position(index)?;
        self.tasks[position].mark_done();
        Ok(&self.tasks[position])
    }

    /// Marks the task at `index` as not done.
    pub fn unmark(&mut self, index: usize) -> AppResult<&Task> {
        let position = self.position(index)?;
        self.tasks[position].mark_undone();
        Ok(&self.tasks[position])
    }

    pub fn get(&self, index: usize) -> AppResult<&Task> {
        let position = self.position(index)?;
        Ok(&self.tasks[position])
    }

    /// Returns `(number, task)` pairs whose display form contains `keyword`,
    /// ignoring case, in list order.
    pub fn find(&self, keyword: &str) -> Vec<(usize, &Task)> {
        let needle = keyword.to_lowercase();
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.render().to_lowercase().contains(&needle))
            .map(|(position, task)| (position + 1, task))
            .collect()
    }

    /// Numbered display of the full list.
    pub fn to_display_list(&self) -> String {
        if self.tasks.is_empty() {
            return EMPTY_LIST_MESSAGE.to_string();
        }
        let mut lines = vec![LIST_HEADER.to_string()];
        lines.extend(
            self.tasks
                .iter()
                .enumerate()
                .map(|(position, task)| format!("{}. {}", position + 1, task)),
        );
        lines.join("\n")
    }

    fn position(&self, index: usize) -> AppResult<usize> {
        if index == 0 || index > self.tasks.len() {
            return Err(out_of_range(index));
        }
        Ok(index - 1)
    }

    fn ensure_capacity(&self) -> AppResult<()> {
        match self.max_tasks {
            Some(limit) if self.tasks.len() >= limit => Err(AppError::new(
                ErrorKind::Capacity,
                format!("Oops, the task list is full ({limit} tasks). Delete a task first."),
            )),
            _ => Ok(()),
        }
    }
}

/// Range error shared with the parser so both report the same text.
pub(crate) fn out_of_range(index: impl Display) -> AppError {
    AppError::range(format!(
        "Oops, task number {index} is out of range. Use 'list' to see valid task numbers."
    ))
}

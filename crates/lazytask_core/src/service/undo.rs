//! Undo records and history stack.
//!
//! # Responsibility
//! - Represent the inverse of each mutating command as plain data.
//! - Apply an inverse against a [`TaskList`] and report what it did.
//!
//! # Invariants
//! - Reinserting a deleted task never trips the capacity ceiling; it only
//!   returns the list to a size it already had.
//! - With a limit set, the stack keeps only the newest `limit` actions.

use crate::error::AppResult;
use crate::model::task::Task;
use crate::model::task_list::TaskList;

/// Inverse of one successful mutating command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoAction {
    /// Reverts an add.
    RemoveAt { index: usize },
    /// Reverts a delete.
    ReinsertAt { index: usize, task: Task },
    /// Reverts a mark.
    Unmark { index: usize },
    /// Reverts an unmark.
    Mark { index: usize },
}

impl UndoAction {
    /// Applies this action to `tasks` and returns the confirmation text.
    ///
    /// # Errors
    /// - Returns a range error when `index` no longer fits the list.
    pub fn apply(&self, tasks: &mut TaskList) -> AppResult<String> {
        match self {
            Self::RemoveAt { index } => {
                let removed = tasks.delete(*index)?;
                Ok(format!("Undid add. Removed this task:\n  {removed}"))
            }
            Self::ReinsertAt { index, task } => {
                tasks.restore_at(*index, task.clone())?;
                Ok(format!("Undid delete. Restored this task:\n  {task}"))
            }
            Self::Unmark { index } => {
                let task = tasks.unmark(*index)?;
                Ok(format!("Undid mark. Task is not done:\n  {task}"))
            }
            Self::Mark { index } => {
                let task = tasks.mark(*index)?;
                Ok(format!("Undid unmark. Task is done:\n  {task}"))
            }
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::RemoveAt { .. } => "remove_at",
            Self::ReinsertAt { .. } => "reinsert_at",
            Self::Unmark { .. } => "unmark",
            Self::Mark { .. } => "mark",
        }
    }
}

/// LIFO history of undo actions; never persisted.
#[derive(Debug, Clone, Default)]
pub struct UndoStack {
    actions: Vec<UndoAction>,
    limit: Option<usize>,
}

impl UndoStack {
    /// Creates an empty stack; `None` keeps every action.
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            actions: Vec::new(),
            limit,
        }
    }

    pub fn push(&mut self, action: UndoAction) {
        self.actions.push(action);
        if let Some(limit) = self.limit {
            let overflow = self.actions.len().saturating_sub(limit);
            self.actions.drain(..overflow);
        }
    }

    pub fn pop(&mut self) -> Option<UndoAction> {
        self.actions.pop()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

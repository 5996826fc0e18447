//! Task domain model.
//!
//! # Responsibility
//! - Define the closed set of task variants (todo, deadline, event).
//! - Own the done/not-done status transitions and the display form.
//!
//! # Invariants
//! - `description` is non-blank, single-line, free of the `|` save-field
//!   separator, and never changes after construction.
//! - For events, `to` is never earlier than `from`.
//! - Deserialization runs the same validation as the constructors.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Display format for deadline/event date-times, e.g. `Oct 15 2019 18:00`.
pub const DISPLAY_DATE_TIME_FORMAT: &str = "%b %d %Y %H:%M";

/// Characters a description may not contain; they delimit save fields and lines.
pub const RESERVED_DESCRIPTION_CHARS: [char; 3] = ['|', '\n', '\r'];

/// Completion state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    NotDone,
    Done,
}

/// Variant-specific payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TaskKind {
    /// Plain task without any date attached.
    Todo,
    /// Task that must be finished by `by`.
    Deadline { by: NaiveDateTime },
    /// Time-ranged task; `to >= from`.
    Event {
        from: NaiveDateTime,
        to: NaiveDateTime,
    },
}

impl TaskKind {
    /// One-letter tag shared by the display form and the save format.
    pub fn tag(&self) -> char {
        match self {
            Self::Todo => 'T',
            Self::Deadline { .. } => 'D',
            Self::Event { .. } => 'E',
        }
    }
}

/// Validation error for task construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    EmptyDescription,
    ReservedCharacter(char),
    InvalidEventWindow {
        from: NaiveDateTime,
        to: NaiveDateTime,
    },
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "the description of a task cannot be empty"),
            Self::ReservedCharacter(ch) => {
                write!(f, "the description of a task cannot contain {ch:?}")
            }
            Self::InvalidEventWindow { .. } => {
                write!(f, "event end time must be after start time")
            }
        }
    }
}

impl Error for TaskValidationError {}

/// One tracked task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    description: String,
    status: TaskStatus,
    #[serde(flatten)]
    kind: TaskKind,
}

/// Unvalidated wire shape; converted through [`Task::validate`].
#[derive(Deserialize)]
struct TaskRecord {
    description: String,
    status: TaskStatus,
    #[serde(flatten)]
    kind: TaskKind,
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskValidationError;

    fn try_from(value: TaskRecord) -> Result<Self, Self::Error> {
        let task = Task {
            description: value.description,
            status: value.status,
            kind: value.kind,
        };
        task.validate()?;
        Ok(task)
    }
}

impl Task {
    /// Creates a not-done todo.
    pub fn todo(description: impl Into<String>) -> Result<Self, TaskValidationError> {
        Self::build(description, TaskKind::Todo)
    }

    /// Creates a not-done deadline due at `by`.
    pub fn deadline(
        description: impl Into<String>,
        by: NaiveDateTime,
    ) -> Result<Self, TaskValidationError> {
        Self::build(description, TaskKind::Deadline { by })
    }

    /// Creates a not-done event spanning `from..=to`.
    ///
    /// # Errors
    /// - `InvalidEventWindow` when `to` is strictly before `from`.
    pub fn event(
        description: impl Into<String>,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Self, TaskValidationError> {
        Self::build(description, TaskKind::Event { from, to })
    }

    fn build(description: impl Into<String>, kind: TaskKind) -> Result<Self, TaskValidationError> {
        let task = Self {
            description: description.into(),
            status: TaskStatus::NotDone,
            kind,
        };
        task.validate()?;
        Ok(task)
    }

    /// Checks the model invariants.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.description.trim().is_empty() {
            return Err(TaskValidationError::EmptyDescription);
        }
        if let Some(ch) = self
            .description
            .chars()
            .find(|ch| RESERVED_DESCRIPTION_CHARS.contains(ch))
        {
            return Err(TaskValidationError::ReservedCharacter(ch));
        }
        if let TaskKind::Event { from, to } = self.kind {
            if to < from {
                return Err(TaskValidationError::InvalidEventWindow { from, to });
            }
        }
        Ok(())
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn mark_done(&mut self) {
        self.status = TaskStatus::Done;
    }

    pub fn mark_undone(&mut self) {
        self.status = TaskStatus::NotDone;
    }

    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }

    /// Returns the display form, e.g. `[D][X] return book (by: Oct 15 2019 18:00)`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let marker = if self.is_done() { 'X' } else { ' ' };
        write!(f, "[{}][{}] {}", self.kind.tag(), marker, self.description)?;
        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { by } => {
                write!(f, " (by: {})", by.format(DISPLAY_DATE_TIME_FORMAT))
            }
            TaskKind::Event { from, to } => write!(
                f,
                " (from: {} to: {})",
                from.format(DISPLAY_DATE_TIME_FORMAT),
                to.format(DISPLAY_DATE_TIME_FORMAT)
            ),
        }
    }
}

//! Application error shared by every core layer.
//!
//! # Responsibility
//! - Carry one user-facing message per failure, tagged with a coarse category.
//! - Be the only error type that reaches the controller response boundary.
//!
//! # Invariants
//! - `Display` prints the message only; the category is metadata for callers
//!   and logs.

use crate::model::task::TaskValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type AppResult<T> = Result<T, AppError>;

/// Failure category used for logging and test assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed command, bad date/time, or empty required field.
    Parse,
    /// Missing, non-numeric, or out-of-range task number.
    Range,
    /// Task list reached its configured ceiling.
    Capacity,
    /// Save file unreadable, corrupt, or unwritable.
    Storage,
    /// Undo requested with nothing recorded.
    Undo,
    /// Anything the other categories do not anticipate.
    Internal,
}

impl ErrorKind {
    /// Stable lowercase code used in log lines.
    pub fn code(self) -> &'static str {
        match self {
            Self::Parse => "parse",
            Self::Range => "range",
            Self::Capacity => "capacity",
            Self::Storage => "storage",
            Self::Undo => "undo",
            Self::Internal => "internal",
        }
    }
}

/// The single application error kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppError {
    kind: ErrorKind,
    message: String,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Parse, message)
    }

    pub fn range(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Range, message)
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Storage, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for AppError {}

impl From<TaskValidationError> for AppError {
    fn from(value: TaskValidationError) -> Self {
        Self::parse(format!("Oops, {value}."))
    }
}

#[cfg(test)]
mod tests {
    use super::{AppError, ErrorKind};

    #[test]
    fn display_prints_message_only() {
        let err = AppError::range("task number 9 is out of range");
        assert_eq!(err.to_string(), "task number 9 is out of range");
        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(err.kind().code(), "range");
    }
}

//! Line codec for the pipe-delimited save format.
//!
//! ```text
//! T | 0 | read book
//! D | 1 | return book | 2019-10-15T18:00
//! E | 0 | project meeting | 2019-10-15T14:00 | 2019-10-15T16:00
//! ```
//!
//! # Invariants
//! - `decode_line(encode_task(t)) == t` for every valid task; task
//!   validation keeps `|` and line breaks out of descriptions.
//! - Decoding never panics; every malformed line maps to a storage error that
//!   quotes the offending line.

use crate::error::{AppError, AppResult};
use crate::model::task::{Task, TaskKind};
use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;

/// Minute-resolution ISO-8601 local date-time written to the save file.
pub const SAVE_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";
const SAVE_DATE_TIME_WITH_SECONDS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

static FIELD_SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\|\s*").expect("valid field separator regex"));

/// Serializes one task into a single save line (no trailing newline).
pub fn encode_task(task: &Task) -> String {
    let done_bit = if task.is_done() { "1" } else { "0" };
    let head = format!("{} | {} | {}", task.kind().tag(), done_bit, task.description());
    match task.kind() {
        TaskKind::Todo => head,
        TaskKind::Deadline { by } => format!("{head} | {}", by.format(SAVE_DATE_TIME_FORMAT)),
        TaskKind::Event { from, to } => format!(
            "{head} | {} | {}",
            from.format(SAVE_DATE_TIME_FORMAT),
            to.format(SAVE_DATE_TIME_FORMAT)
        ),
    }
}

/// Rebuilds one task from a non-blank save line.
///
/// # Errors
/// - Fewer than 3 fields, or fewer than the type requires (`D` 4, `E` 5).
/// - Unknown type tag.
/// - Unparseable date/time or a reversed event window.
pub fn decode_line(line: &str) -> AppResult<Task> {
    let parts = split_fields(line);
    if parts.len() < 3 {
        return Err(AppError::storage(format!("Invalid save line: {line}")));
    }

    let tag = parts[0];
    let done = parts[1] == "1";
    let description = parts[2];

    let mut task = match tag {
        "T" => Task::todo(description),
        "D" => {
            if parts.len() < 4 {
                return Err(AppError::storage(format!("Invalid deadline line: {line}")));
            }
            Task::deadline(description, parse_saved_date_time(parts[3], line)?)
        }
        "E" => {
            if parts.len() < 5 {
                return Err(AppError::storage(format!("Invalid event line: {line}")));
            }
            let from = parse_saved_date_time(parts[3], line)?;
            let to = parse_saved_date_time(parts[4], line)?;
            Task::event(description, from, to)
        }
        other => {
            return Err(AppError::storage(format!(
                "Unknown task type in save file: {other}"
            )));
        }
    }
    .map_err(|err| AppError::storage(format!("Invalid save line ({err}): {line}")))?;

    if done {
        task.mark_done();
    }
    Ok(task)
}

/// Splits on `|` with surrounding whitespace and drops trailing empty fields.
fn split_fields(line: &str) -> Vec<&str> {
    let mut parts: Vec<&str> = FIELD_SEPARATOR_RE.split(line.trim()).collect();
    while parts.last().is_some_and(|part| part.is_empty()) {
        parts.pop();
    }
    parts
}

fn parse_saved_date_time(raw: &str, line: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, SAVE_DATE_TIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, SAVE_DATE_TIME_WITH_SECONDS_FORMAT))
        .map_err(|_| AppError::storage(format!("Invalid date/time in save line: {line}")))
}

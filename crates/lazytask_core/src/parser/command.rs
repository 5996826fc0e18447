//! Command classification and argument extraction.
//!
//! # Responsibility
//! - Turn one raw input line into a [`Command`] with validated payload.
//! - Produce user-facing parse errors; never touch application state.
//!
//! # Invariants
//! - Keywords match case-insensitively, except `list` which must be exact.
//! - Task numbers in the returned command are within `[1, task_count]`.

use crate::error::{AppError, AppResult};
use crate::model::task::Task;
use crate::model::task_list::out_of_range;
use crate::parser::date_time::parse_input_date_time;

const BY_SEPARATOR: &str = " /by ";
const FROM_SEPARATOR: &str = " /from ";
const TO_SEPARATOR: &str = " /to ";

/// Supported command names, in help order.
pub const COMMAND_NAMES: [&str; 11] = [
    "list", "todo", "deadline", "event", "mark", "unmark", "find", "delete", "undo", "help",
    "bye",
];

/// One classified user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Bye,
    Help,
    List,
    Undo,
    Find { keyword: String },
    Delete { index: usize },
    Mark { index: usize },
    Unmark { index: usize },
    /// `todo`, `deadline` and `event` all resolve to a ready-built task.
    Add(Task),
}

impl Command {
    /// Whether a successful run must be saved and recorded for undo.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::Delete { .. } | Self::Mark { .. } | Self::Unmark { .. } | Self::Add(_)
        )
    }

    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bye => "bye",
            Self::Help => "help",
            Self::List => "list",
            Self::Undo => "undo",
            Self::Find { .. } => "find",
            Self::Delete { .. } => "delete",
            Self::Mark { .. } => "mark",
            Self::Unmark { .. } => "unmark",
            Self::Add(_) => "add",
        }
    }
}

/// Classifies `input` and extracts its arguments.
///
/// `task_count` bounds the task numbers accepted by `mark`, `unmark` and
/// `delete`.
///
/// # Errors
/// - Returns a parse error for malformed commands and unknown keywords.
/// - Returns a range error for missing, non-numeric or out-of-range numbers.
pub fn parse_command(input: &str, task_count: usize) -> AppResult<Command> {
    // Trailing whitespace is kept so `deadline x /by ` reaches the empty-date
    // check instead of the missing-separator one.
    let line = input.trim_start();
    if line.trim_end() == "list" {
        return Ok(Command::List);
    }

    let (keyword, rest) = split_keyword(line);
    let bare = rest.trim().is_empty();
    match keyword.as_str() {
        "bye" if bare => Ok(Command::Bye),
        "help" if bare => Ok(Command::Help),
        "undo" if bare => Ok(Command::Undo),
        "find" => parse_find_keyword(rest).map(|keyword| Command::Find { keyword }),
        "delete" => parse_index(rest, "delete", task_count).map(|index| Command::Delete { index }),
        "mark" => parse_index(rest, "mark", task_count).map(|index| Command::Mark { index }),
        "unmark" => parse_index(rest, "unmark", task_count).map(|index| Command::Unmark { index }),
        "todo" => parse_todo(rest).map(Command::Add),
        "deadline" => parse_deadline(rest).map(Command::Add),
        "event" => parse_event(rest).map(Command::Add),
        _ => Err(unknown_command()),
    }
}

/// Returns whether `input` is the exit command.
pub fn is_exit_command(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("bye")
}

/// Splits off the lowercased first word; the remainder keeps its leading
/// whitespace so separator searches see ` /by ` right after the keyword.
fn split_keyword(line: &str) -> (String, &str) {
    let end = line.find(char::is_whitespace).unwrap_or(line.len());
    (line[..end].to_lowercase(), &line[end..])
}

fn parse_todo(rest: &str) -> AppResult<Task> {
    let description = rest.trim();
    if description.is_empty() {
        return Err(AppError::parse(
            "Oops, the description of a todo cannot be empty.",
        ));
    }
    Ok(Task::todo(description)?)
}

fn parse_deadline(rest: &str) -> AppResult<Task> {
    let by_pos = rest.find(BY_SEPARATOR).ok_or_else(|| {
        AppError::parse(
            "Oops, deadline format should be:\n  deadline <description> /by <yyyy-MM-dd HHmm>",
        )
    })?;

    let description = rest[..by_pos].trim();
    let by_raw = rest[by_pos + BY_SEPARATOR.len()..].trim();
    if description.is_empty() {
        return Err(AppError::parse(
            "Oops, the description of a deadline cannot be empty.",
        ));
    }
    if by_raw.is_empty() {
        return Err(AppError::parse(
            "Oops, the /by part of a deadline cannot be empty.",
        ));
    }

    let by = parse_input_date_time(by_raw)?;
    Ok(Task::deadline(description, by)?)
}

fn parse_event(rest: &str) -> AppResult<Task> {
    let positions = rest
        .find(FROM_SEPARATOR)
        .zip(rest.find(TO_SEPARATOR))
        .filter(|(from_pos, to_pos)| from_pos < to_pos);
    let Some((from_pos, to_pos)) = positions else {
        return Err(AppError::parse(
            "Oops, event format should be:\n  event <description> /from <start> /to <end>",
        ));
    };

    let description = rest[..from_pos].trim();
    let from_raw = rest[from_pos + FROM_SEPARATOR.len()..to_pos].trim();
    let to_raw = rest[to_pos + TO_SEPARATOR.len()..].trim();
    if description.is_empty() {
        return Err(AppError::parse(
            "Oops, the description of an event cannot be empty.",
        ));
    }
    if from_raw.is_empty() {
        return Err(AppError::parse(
            "Oops, the /from part of an event cannot be empty.",
        ));
    }
    if to_raw.is_empty() {
        return Err(AppError::parse(
            "Oops, the /to part of an event cannot be empty.",
        ));
    }

    let from = parse_input_date_time(from_raw)?;
    let to = parse_input_date_time(to_raw)?;
    Ok(Task::event(description, from, to)?)
}

fn parse_find_keyword(rest: &str) -> AppResult<String> {
    let keyword = rest.trim();
    if keyword.is_empty() {
        return Err(AppError::parse(
            "Oops, please provide a keyword to find. (e.g., find meeting)",
        ));
    }
    Ok(keyword.to_string())
}

fn parse_index(rest: &str, command_name: &str, task_count: usize) -> AppResult<usize> {
    let raw = rest.trim();
    if raw.is_empty() {
        return Err(AppError::range(format!(
            "Oops, please provide a task number for {command_name}. (e.g., {command_name} 2)"
        )));
    }

    let number: i64 = raw.parse().map_err(|_| {
        AppError::range(format!(
            "Oops, that task number must be an integer. (e.g., {command_name} 2)"
        ))
    })?;

    match usize::try_from(number) {
        Ok(index) if (1..=task_count).contains(&index) => Ok(index),
        _ => Err(out_of_range(number)),
    }
}

fn unknown_command() -> AppError {
    AppError::parse(format!(
        "Oops, I don't recognise that command. Type 'help' to see commands ({}).",
        COMMAND_NAMES.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::split_keyword;

    #[test]
    fn split_keyword_lowercases_and_keeps_leading_space() {
        let (keyword, rest) = split_keyword("DeadLine /by 2019-10-15 1800");
        assert_eq!(keyword, "deadline");
        assert_eq!(rest, " /by 2019-10-15 1800");
    }

    #[test]
    fn split_keyword_handles_bare_word() {
        let (keyword, rest) = split_keyword("todo");
        assert_eq!(keyword, "todo");
        assert_eq!(rest, "");
    }
}

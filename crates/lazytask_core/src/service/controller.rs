//! Command controller: one input line in, one response string out.
//!
//! # Responsibility
//! - Classify input, apply the task-list mutation, persist, record undo.
//! - Convert every failure into a user-facing response at this boundary.
//!
//! # Invariants
//! - A failed command leaves the task list, the store and the undo stack as
//!   they were: a change whose save fails is replaced by the list snapshot
//!   taken before it, so the prior status of every task survives.
//! - Only commands with [`Command::is_mutating`] push undo records.
//! - `handle` never panics outward; unexpected panics become `Internal`
//!   errors with a generic prefix.

use crate::config::CoreConfig;
use crate::error::{AppError, AppResult, ErrorKind};
use crate::model::task_list::TaskList;
use crate::parser::{is_exit_command, parse_command, Command};
use crate::service::undo::{UndoAction, UndoStack};
use crate::storage::{FileTaskStore, TaskStore};
use log::{info, warn};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Instant;

pub const WELCOME_MESSAGE: &str = "Hello! my name is LazyTask\n\
What can I do for you?\n\
If you are unfamiliar you can type 'help' to see all supported commands";

pub const GOODBYE_MESSAGE: &str = "Bye. Hope to see you again soon!";

pub const HELP_MESSAGE: &str = "Here are the currently supported commands:\n\
list\n\
todo <description>\n\
deadline <description> /by <yyyy-MM-dd HHmm>\n\
event <description> /from <yyyy-MM-dd HHmm> /to <yyyy-MM-dd HHmm>\n\
mark <task number>\n\
unmark <task number>\n\
find <keyword>\n\
delete <task number>\n\
undo\n\
bye";

pub const LOAD_WARNING_MESSAGE: &str =
    "Warning: save file is corrupted/unreadable, starting with empty list.";

const FIND_HEADER: &str = "Here are the matching tasks in your list:";
const NO_MATCHES_MESSAGE: &str = "(no matching tasks found)";
const INTERNAL_ERROR_PREFIX: &str = "Oops, something went wrong: ";

/// Reply for one handled line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub text: String,
    /// Set once `bye` has been handled.
    pub exit: bool,
}

/// Wires parser, task list, store and undo history together.
pub struct TaskController<S: TaskStore> {
    store: S,
    tasks: TaskList,
    undo: UndoStack,
    exited: bool,
    load_error: Option<AppError>,
}

impl TaskController<FileTaskStore> {
    /// Opens the file store named by `config.save_path`.
    pub fn open(config: &CoreConfig) -> Self {
        Self::new(FileTaskStore::new(config.save_path.clone()), config)
    }
}

impl<S: TaskStore> TaskController<S> {
    /// Loads tasks from `store`, falling back to an empty list on failure.
    ///
    /// The load failure stays available through [`Self::load_error`] so a
    /// front end can warn once.
    pub fn new(store: S, config: &CoreConfig) -> Self {
        let (tasks, load_error) = match store.load() {
            Ok(loaded) => (TaskList::from_tasks(loaded, config.max_tasks), None),
            Err(err) => {
                warn!(
                    "event=task_load module=controller status=fallback error_code={}",
                    err.kind().code()
                );
                (TaskList::new(config.max_tasks), Some(err))
            }
        };

        Self {
            store,
            tasks,
            undo: UndoStack::new(config.undo_limit),
            exited: false,
            load_error,
        }
    }

    pub fn welcome_message(&self) -> &'static str {
        WELCOME_MESSAGE
    }

    /// Error from the initial load, when the controller started empty.
    pub fn load_error(&self) -> Option<&AppError> {
        self.load_error.as_ref()
    }

    /// Warning text for front ends, present only after a failed load.
    pub fn load_warning(&self) -> Option<String> {
        self.load_error
            .as_ref()
            .map(|err| format!("{LOAD_WARNING_MESSAGE}\n{err}"))
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable store access, for front ends that reconfigure a live store.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn is_exit(&self) -> bool {
        self.exited
    }

    pub fn is_exit_command(&self, input: &str) -> bool {
        is_exit_command(input)
    }

    /// Convenience wrapper returning only the response text.
    pub fn respond(&mut self, input: &str) -> String {
        self.handle(input).text
    }

    /// Handles one input line.
    pub fn handle(&mut self, input: &str) -> Response {
        let started_at = Instant::now();
        let outcome = catch_unwind(AssertUnwindSafe(|| self.dispatch(input)))
            .unwrap_or_else(|payload| Err(AppError::internal(panic_message(payload.as_ref()))));

        let text = match outcome {
            Ok((command_name, text)) => {
                info!(
                    "event=command_handled module=controller status=ok command={} task_count={} duration_ms={}",
                    command_name,
                    self.tasks.len(),
                    started_at.elapsed().as_millis()
                );
                text
            }
            Err(err) => {
                let level = if err.kind() == ErrorKind::Internal {
                    log::Level::Error
                } else {
                    log::Level::Info
                };
                log::log!(
                    level,
                    "event=command_handled module=controller status=error error_code={} duration_ms={}",
                    err.kind().code(),
                    started_at.elapsed().as_millis()
                );
                render_error(&err)
            }
        };

        Response {
            text,
            exit: self.exited,
        }
    }

    fn dispatch(&mut self, input: &str) -> AppResult<(&'static str, String)> {
        let command = parse_command(input, self.tasks.len())?;
        let name = command.name();
        let text = self.execute(command)?;
        Ok((name, text))
    }

    fn execute(&mut self, command: Command) -> AppResult<String> {
        if !command.is_mutating() {
            return self.reply(command);
        }
        let snapshot = self.tasks.clone();
        let (inverse, text) = self.mutate(command)?;
        self.save_or_restore(snapshot)?;
        self.undo.push(inverse);
        Ok(text)
    }

    fn reply(&mut self, command: Command) -> AppResult<String> {
        match command {
            Command::Bye => {
                self.exited = true;
                Ok(GOODBYE_MESSAGE.to_string())
            }
            Command::Help => Ok(HELP_MESSAGE.to_string()),
            Command::List => Ok(self.tasks.to_display_list()),
            Command::Undo => self.undo_last(),
            Command::Find { keyword } => Ok(self.render_matches(&keyword)),
            other => Err(AppError::internal(format!(
                "{} reached the read-only path",
                other.name()
            ))),
        }
    }

    /// Applies one list change and returns the undo record with the reply.
    ///
    /// A failing change leaves the list untouched.
    fn mutate(&mut self, command: Command) -> AppResult<(UndoAction, String)> {
        match command {
            Command::Add(task) => {
                let rendered = task.render();
                let index = self.tasks.add(task)?;
                Ok((
                    UndoAction::RemoveAt { index },
                    format!(
                        "Got it. I've added this task:\n  {rendered}\nNow you have {} tasks in the list.",
                        self.tasks.len()
                    ),
                ))
            }
            Command::Delete { index } => {
                let removed = self.tasks.delete(index)?;
                let text = format!(
                    "Noted. I've removed this task:\n  {removed}\nNow you have {} tasks in the list.",
                    self.tasks.len()
                );
                Ok((
                    UndoAction::ReinsertAt {
                        index,
                        task: removed,
                    },
                    text,
                ))
            }
            Command::Mark { index } => {
                let rendered = self.tasks.mark(index)?.render();
                Ok((
                    UndoAction::Unmark { index },
                    format!("Nice! I've marked this task as done:\n  {rendered}"),
                ))
            }
            Command::Unmark { index } => {
                let rendered = self.tasks.unmark(index)?.render();
                Ok((
                    UndoAction::Mark { index },
                    format!("OK, I've marked this task as not done yet:\n  {rendered}"),
                ))
            }
            other => Err(AppError::internal(format!(
                "{} reached the mutation path",
                other.name()
            ))),
        }
    }

    /// Saves the current list; on failure puts `snapshot` back so memory
    /// keeps matching the last good save.
    fn save_or_restore(&mut self, snapshot: TaskList) -> AppResult<()> {
        if let Err(err) = self.store.save(self.tasks.tasks()) {
            warn!(
                "event=rollback module=controller status=ok error_code={} task_count={}",
                err.kind().code(),
                snapshot.len()
            );
            self.tasks = snapshot;
            return Err(err);
        }
        Ok(())
    }

    fn undo_last(&mut self) -> AppResult<String> {
        let action = self
            .undo
            .pop()
            .ok_or_else(|| AppError::new(ErrorKind::Undo, "Nothing to undo."))?;

        let snapshot = self.tasks.clone();
        let applied = action
            .apply(&mut self.tasks)
            .and_then(|message| self.save_or_restore(snapshot).map(|()| message));
        let message = match applied {
            Ok(message) => message,
            Err(err) => {
                self.undo.push(action);
                return Err(err);
            }
        };

        info!(
            "event=undo_applied module=controller status=ok action={} remaining={}",
            action.kind(),
            self.undo.len()
        );
        Ok(message)
    }

    fn render_matches(&self, keyword: &str) -> String {
        let matches = self.tasks.find(keyword);
        if matches.is_empty() {
            return format!("{FIND_HEADER}\n{NO_MATCHES_MESSAGE}");
        }
        let mut lines = vec![FIND_HEADER.to_string()];
        lines.extend(
            matches
                .into_iter()
                .map(|(index, task)| format!("{index}. {task}")),
        );
        lines.join("\n")
    }
}

fn render_error(err: &AppError) -> String {
    match err.kind() {
        ErrorKind::Internal => format!("{INTERNAL_ERROR_PREFIX}{}", err.message()),
        _ => err.message().to_string(),
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unexpected failure".to_string()
    }
}

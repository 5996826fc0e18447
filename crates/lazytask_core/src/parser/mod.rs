//! Input parsing for the command surface.
//!
//! # Responsibility
//! - Classify raw lines into commands with validated arguments.
//! - Parse the fixed `yyyy-MM-dd HHmm` date/time input format.
//!
//! # Invariants
//! - Parsing is pure: no I/O and no application state mutation.

pub mod command;
pub mod date_time;

pub use command::{is_exit_command, parse_command, Command, COMMAND_NAMES};
pub use date_time::{parse_input_date_time, INPUT_DATE_TIME_FORMAT};

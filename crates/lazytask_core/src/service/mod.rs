//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate parser, task list and store calls per input line.
//! - Keep front ends decoupled from storage and parsing details.

pub mod controller;
pub mod undo;

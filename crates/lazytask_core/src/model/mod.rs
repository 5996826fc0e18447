//! Domain model for tracked tasks.
//!
//! # Responsibility
//! - Define the task sum type and its status transitions.
//! - Define the ordered in-memory task collection.
//!
//! # Invariants
//! - Public task numbers are 1-based; storage order equals display order.

pub mod task;
pub mod task_list;

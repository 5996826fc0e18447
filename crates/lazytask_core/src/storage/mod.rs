//! Persistence abstractions for the task list.
//!
//! # Responsibility
//! - Define the load/save contract used by the controller.
//! - Keep the on-disk line format inside the storage boundary.
//!
//! # Invariants
//! - `load` on a store that was never saved returns an empty list.
//! - `save` replaces the whole persisted list; there are no partial updates.
//! - A corrupt record fails the whole load; callers choose the fallback.

pub mod codec;
pub mod file_store;
pub mod memory_store;

use crate::error::AppResult;
use crate::model::task::Task;

pub use file_store::FileTaskStore;
pub use memory_store::MemoryTaskStore;

/// Load/save contract for task persistence.
pub trait TaskStore {
    fn load(&self) -> AppResult<Vec<Task>>;
    fn save(&mut self, tasks: &[Task]) -> AppResult<()>;
}

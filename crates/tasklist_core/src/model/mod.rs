//! Task list domain model.
//!
//! # Responsibility
//! - Define the task record, the ordered task list and the edit-mode flag.
//! - Keep list invariants inside the types so callers cannot break them.
//!
//! # Invariants
//! - Every task is identified by a stable, non-nil `TaskId`.
//! - A `TaskList` never holds two tasks with the same id.

pub mod edit_mode;
pub mod task;
pub mod task_list;

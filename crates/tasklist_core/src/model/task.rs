//! Task domain model.
//!
//! # Responsibility
//! - Define the single to-do record persisted and rendered by the app.
//! - Validate user-supplied titles before a task can exist.
//!
//! # Invariants
//! - `id` is generated once and never reused for another task.
//! - `title` is never empty or whitespace-only.
//! - Tasks are immutable after creation; there is no edit-in-place.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of a task. Sole equality and removal key.
pub type TaskId = Uuid;

/// Validation failure for user-supplied task input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Title was empty or contained only whitespace.
    EmptyInput,
    /// Caller-provided id was the nil UUID.
    NilId,
}

impl ValidationError {
    /// Alert title shown by the UI shell for this error.
    pub fn alert_title(&self) -> &'static str {
        match self {
            Self::EmptyInput => "Empty input",
            Self::NilId => "Invalid task",
        }
    }

    /// Alert body shown by the UI shell for this error.
    pub fn alert_message(&self) -> &'static str {
        match self {
            Self::EmptyInput => "Type text of todo",
            Self::NilId => "Task id must not be nil",
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "task title must not be empty"),
            Self::NilId => write!(f, "task id must not be nil"),
        }
    }
}

impl Error for ValidationError {}

/// Single to-do entry.
///
/// Serialized as `{ "id": "...", "title": "..." }`, the shape stored in the
/// persisted snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
}

impl Task {
    /// Creates a task with a freshly generated id.
    ///
    /// The title is stored as typed; only its trimmed emptiness is checked.
    pub fn new(title: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_id(Uuid::new_v4(), title)
    }

    /// Creates a task with a caller-provided id.
    ///
    /// Used when restoring tasks from a persisted snapshot.
    pub fn with_id(id: TaskId, title: impl Into<String>) -> Result<Self, ValidationError> {
        let task = Self {
            id,
            title: title.into(),
        };
        task.validate()?;
        Ok(task)
    }

    /// Re-checks record invariants, e.g. after deserialization.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_nil() {
            return Err(ValidationError::NilId);
        }
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyInput);
        }
        Ok(())
    }

    /// Copy of this task under a freshly generated id.
    pub fn rekeyed(&self) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: self.title.clone(),
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use super::{Task, ValidationError};
    use uuid::Uuid;

    #[test]
    fn new_generates_distinct_ids() {
        let first = Task::new("a").unwrap();
        let second = Task::new("a").unwrap();
        assert_ne!(first.id(), second.id());
        assert!(!first.id().is_nil());
    }

    #[test]
    fn blank_titles_are_rejected() {
        assert_eq!(Task::new("").unwrap_err(), ValidationError::EmptyInput);
        assert_eq!(Task::new(" \t\n").unwrap_err(), ValidationError::EmptyInput);
    }

    #[test]
    fn title_is_kept_as_typed() {
        let task = Task::new("  Buy milk ").unwrap();
        assert_eq!(task.title(), "  Buy milk ");
    }

    #[test]
    fn rekeyed_keeps_title_with_new_id() {
        let task = Task::new("same").unwrap();
        let copy = task.rekeyed();
        assert_ne!(copy.id(), task.id());
        assert_eq!(copy.title(), "same");
    }

    #[test]
    fn with_id_rejects_nil_uuid() {
        let err = Task::with_id(Uuid::nil(), "x").unwrap_err();
        assert_eq!(err, ValidationError::NilId);
    }

    #[test]
    fn empty_input_carries_fixed_alert_text() {
        assert_eq!(ValidationError::EmptyInput.alert_title(), "Empty input");
        assert_eq!(ValidationError::EmptyInput.alert_message(), "Type text of todo");
    }
}

//! JSON snapshot codec for the persisted task list.
//!
//! Wire shape: `[{"id":"<uuid>","title":"<text>"}, ...]` stored under the
//! fixed key `"list"`.

use crate::model::task::Task;
use crate::model::task_list::TaskList;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Gateway key holding the task list snapshot.
pub const SNAPSHOT_KEY: &str = "list";

pub type SnapshotResult<T> = Result<T, SnapshotError>;

#[derive(Debug)]
pub enum SnapshotError {
    /// Snapshot text is not a JSON array of `{id, title}` objects.
    Malformed(serde_json::Error),
    Encode(serde_json::Error),
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(err) => write!(f, "malformed task snapshot: {err}"),
            Self::Encode(err) => write!(f, "failed to encode task snapshot: {err}"),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Malformed(err) | Self::Encode(err) => Some(err),
        }
    }
}

/// Decoded snapshot plus counts of records that were dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedSnapshot {
    pub tasks: TaskList,
    pub dropped_duplicates: usize,
    /// Records with a nil id or a blank title.
    pub dropped_invalid: usize,
}

/// Serializes the list in insertion order.
pub fn encode(tasks: &TaskList) -> SnapshotResult<String> {
    serde_json::to_string(tasks.as_slice()).map_err(SnapshotError::Encode)
}

/// Parses a stored snapshot.
///
/// Blank text decodes to an empty list. Records that break task invariants
/// are skipped one by one; duplicate ids keep the first record. Only text
/// that is not a JSON array of `{id, title}` objects is an error.
pub fn decode(raw: &str) -> SnapshotResult<DecodedSnapshot> {
    if raw.trim().is_empty() {
        return Ok(DecodedSnapshot::default());
    }

    let records: Vec<Task> = serde_json::from_str(raw).map_err(SnapshotError::Malformed)?;
    let total = records.len();
    let valid = records
        .into_iter()
        .filter(|task| task.validate().is_ok())
        .collect::<Vec<_>>();
    let dropped_invalid = total - valid.len();

    let (tasks, dropped_duplicates) = TaskList::from_tasks(valid);
    Ok(DecodedSnapshot {
        tasks,
        dropped_duplicates,
        dropped_invalid,
    })
}

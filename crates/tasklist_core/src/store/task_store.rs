//! Live task list mirrored to a key-value gateway.
//!
//! # Responsibility
//! - Load the persisted snapshot once at startup.
//! - Apply add/remove and write the full list back after each mutation.
//!
//! # Invariants
//! - Every write carries the complete current list, so the newest successful
//!   write always reflects the newest state.
//! - A failed write marks the store dirty; the next mutation or `flush` retries.
//! - Unreadable snapshots load as an empty list and are logged, never raised.

use crate::gateway::{GatewayError, KeyValueStore};
use crate::model::task::{Task, TaskId, ValidationError};
use crate::model::task_list::TaskList;
use crate::store::snapshot::{self, SnapshotError, SNAPSHOT_KEY};
use log::{debug, error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure while mirroring the list to the gateway.
#[derive(Debug)]
pub enum PersistError {
    Snapshot(SnapshotError),
    Gateway(GatewayError),
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Snapshot(err) => write!(f, "{err}"),
            Self::Gateway(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Snapshot(err) => Some(err),
            Self::Gateway(err) => Some(err),
        }
    }
}

impl From<SnapshotError> for PersistError {
    fn from(value: SnapshotError) -> Self {
        Self::Snapshot(value)
    }
}

impl From<GatewayError> for PersistError {
    fn from(value: GatewayError) -> Self {
        Self::Gateway(value)
    }
}

/// Ordered task list owned by one session.
pub struct TaskStore<G: KeyValueStore> {
    gateway: G,
    tasks: TaskList,
    dirty: bool,
}

impl<G: KeyValueStore> TaskStore<G> {
    /// Loads the persisted snapshot, falling back to an empty list.
    pub fn load(gateway: G) -> Self {
        let tasks = read_snapshot(&gateway);
        Self {
            gateway,
            tasks,
            dirty: false,
        }
    }

    /// Appends a new task and persists the list.
    ///
    /// Blank titles are rejected with `ValidationError::EmptyInput` before any
    /// state changes.
    pub fn add(&mut self, title: impl Into<String>) -> Result<Task, ValidationError> {
        let task = self.append_unique(Task::new(title)?);
        info!(
            "event=task_add module=store status=ok task_id={} count={}",
            task.id(),
            self.tasks.len()
        );
        self.persist_logged();
        Ok(task)
    }

    /// Appends `task`, re-keying it with a fresh id while its id is taken.
    fn append_unique(&mut self, mut task: Task) -> Task {
        while !self.tasks.push(task.clone()) {
            error!(
                "event=task_add module=store status=error error_code=id_collision task_id={}",
                task.id()
            );
            task = task.rekeyed();
        }
        task
    }

    /// Removes the task with `id`; absent ids leave the list untouched.
    pub fn remove(&mut self, id: TaskId) -> &TaskList {
        if self.tasks.remove(id) {
            info!(
                "event=task_remove module=store status=ok task_id={id} count={}",
                self.tasks.len()
            );
            self.persist_logged();
        } else {
            debug!("event=task_remove module=store status=noop task_id={id}");
            if self.dirty {
                self.persist_logged();
            }
        }
        &self.tasks
    }

    /// Retries persistence when the previous write failed.
    pub fn flush(&mut self) -> Result<(), PersistError> {
        if !self.dirty {
            return Ok(());
        }
        self.persist()
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Whether the gateway copy may be behind the in-memory list.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    fn persist(&mut self) -> Result<(), PersistError> {
        let result = snapshot::encode(&self.tasks)
            .map_err(PersistError::from)
            .and_then(|raw| {
                self.gateway
                    .set(SNAPSHOT_KEY, &raw)
                    .map_err(PersistError::from)
            });
        self.dirty = result.is_err();
        if result.is_ok() {
            debug!(
                "event=snapshot_write module=store status=ok count={}",
                self.tasks.len()
            );
        }
        result
    }

    fn persist_logged(&mut self) {
        if let Err(err) = self.persist() {
            warn!(
                "event=snapshot_write module=store status=error error_code=persist_failed count={} error={err}",
                self.tasks.len()
            );
        }
    }
}

fn read_snapshot<G: KeyValueStore>(gateway: &G) -> TaskList {
    let raw = match gateway.get(SNAPSHOT_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            info!("event=snapshot_load module=store status=ok source=none count=0");
            return TaskList::new();
        }
        Err(err) => {
            warn!(
                "event=snapshot_load module=store status=error error_code=gateway_read_failed error={err}"
            );
            return TaskList::new();
        }
    };

    match snapshot::decode(&raw) {
        Ok(decoded) => {
            if decoded.dropped_invalid > 0 {
                warn!(
                    "event=snapshot_load module=store status=degraded error_code=invalid_records dropped={}",
                    decoded.dropped_invalid
                );
            }
            if decoded.dropped_duplicates > 0 {
                warn!(
                    "event=snapshot_load module=store status=degraded error_code=duplicate_ids dropped={}",
                    decoded.dropped_duplicates
                );
            }
            info!(
                "event=snapshot_load module=store status=ok source=gateway count={}",
                decoded.tasks.len()
            );
            decoded.tasks
        }
        Err(err) => {
            warn!(
                "event=snapshot_load module=store status=error error_code=snapshot_invalid error={err}"
            );
            TaskList::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TaskStore;
    use crate::gateway::MemoryKvStore;
    use crate::model::task::Task;

    #[test]
    fn colliding_id_is_replaced_before_append() {
        let mut store = TaskStore::load(MemoryKvStore::new());
        let existing = store.add("first").unwrap();
        let clash = Task::with_id(existing.id(), "second").unwrap();

        let appended = store.append_unique(clash);
        assert_ne!(appended.id(), existing.id());
        assert_eq!(appended.title(), "second");
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(appended.id()), Some(&appended));
    }
}

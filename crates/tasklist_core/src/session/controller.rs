//! Gesture routing for one task-list screen.

use crate::gateway::KeyValueStore;
use crate::model::edit_mode::EditMode;
use crate::model::task::{Task, TaskId, ValidationError};
use crate::model::task_list::TaskList;
use crate::session::platform::PlatformHooks;
use crate::session::view::TaskListView;
use crate::store::task_store::{PersistError, TaskStore};
use log::{debug, info};

/// Explicit owner of all task-list UI state.
pub struct TaskListSession<G: KeyValueStore, P: PlatformHooks> {
    store: TaskStore<G>,
    edit_mode: EditMode,
    input: String,
    platform: P,
}

impl<G: KeyValueStore, P: PlatformHooks> TaskListSession<G, P> {
    /// Loads persisted tasks and starts in `Viewing` with an empty input.
    pub fn open(gateway: G, platform: P) -> Self {
        let store = TaskStore::load(gateway);
        info!(
            "event=session_open module=session status=ok count={}",
            store.len()
        );
        Self {
            store,
            edit_mode: EditMode::default(),
            input: String::new(),
            platform,
        }
    }

    /// Replaces the pending input text.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Adds the pending input as a task.
    ///
    /// On success the input is cleared and edit mode returns to `Viewing`.
    /// On `EmptyInput` the platform alert is raised and nothing changes.
    pub fn submit(&mut self) -> Result<Task, ValidationError> {
        match self.store.add(self.input.as_str()) {
            Ok(task) => {
                self.input.clear();
                self.edit_mode.reset();
                Ok(task)
            }
            Err(err) => {
                info!("event=task_add module=session status=rejected error_code=empty_input");
                self.platform.alert(err.alert_title(), err.alert_message());
                Err(err)
            }
        }
    }

    /// Long-press on any item: flips edit mode and returns `true` if editing.
    pub fn long_press(&mut self, id: TaskId) -> bool {
        debug!("event=long_press module=session status=ok task_id={id}");
        self.toggle_edit_mode()
    }

    /// Flips edit mode with haptic feedback; the pressed item does not matter.
    pub fn toggle_edit_mode(&mut self) -> bool {
        let editing = self.edit_mode.toggle();
        self.platform.vibrate();
        debug!(
            "event=edit_mode_toggle module=session status=ok mode={}",
            self.edit_mode.as_str()
        );
        editing
    }

    /// Removes a task by id. Absent ids are a no-op.
    pub fn remove(&mut self, id: TaskId) -> &TaskList {
        self.store.remove(id)
    }

    /// Retries a failed snapshot write.
    pub fn flush(&mut self) -> Result<(), PersistError> {
        self.store.flush()
    }

    pub fn view(&self) -> TaskListView {
        TaskListView::build(&self.input, self.edit_mode, self.store.tasks())
    }

    pub fn tasks(&self) -> &TaskList {
        self.store.tasks()
    }

    pub fn edit_mode(&self) -> EditMode {
        self.edit_mode
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn store(&self) -> &TaskStore<G> {
        &self.store
    }
}

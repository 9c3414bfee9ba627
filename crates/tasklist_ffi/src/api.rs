//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the task-list session to Dart via FRB as an opaque handle.
//! - Flatten core types into plain string/bool envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Storage failures degrade to an in-memory session; they never abort the UI.
//! - Task ids cross the boundary as canonical UUID strings.

use log::{error, warn};
use std::sync::{Mutex, MutexGuard};
use tasklist_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    CoreConfig, EditMode, KeyValueStore, MemoryKvStore, NoopPlatform, SqliteKvStore, TaskId,
    TaskList, TaskListSession, TaskListView,
};
use uuid::Uuid;

type SharedGateway = Box<dyn KeyValueStore + Send>;
type Session = TaskListSession<SharedGateway, NoopPlatform>;

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - `level`: `trace|debug|info|warn|error` (case-insensitive); blank uses
///   `CoreConfig::from_env().log_level`.
/// - `log_dir`: absolute directory path where rolling logs are written.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    let level = if level.trim().is_empty() {
        CoreConfig::from_env().log_level
    } else {
        level
    };
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Alert the shell must show as a blocking dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertPayload {
    pub title: String,
    pub message: String,
}

/// Result of submitting the pending input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskActionResponse {
    pub ok: bool,
    /// Created task id on success.
    pub task_id: Option<String>,
    pub message: String,
    /// Set when the shell must block with an alert.
    pub alert: Option<AlertPayload>,
}

/// Result of a long-press gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditModeResponse {
    pub editing: bool,
    /// Whether the shell should fire haptic feedback.
    pub vibrate: bool,
}

/// One rendered list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub id: String,
    pub title: String,
    pub deletable: bool,
}

/// Full screen state for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListScreen {
    pub input: String,
    pub placeholder: String,
    pub add_label: String,
    pub editing: bool,
    pub items: Vec<TaskItem>,
    pub empty_text: Option<String>,
}

impl From<TaskListView> for TaskListScreen {
    fn from(view: TaskListView) -> Self {
        Self {
            input: view.input,
            placeholder: view.placeholder.to_string(),
            add_label: view.add_label.to_string(),
            editing: view.edit_mode.is_editing(),
            items: view
                .items
                .into_iter()
                .map(|item| TaskItem {
                    id: item.id.to_string(),
                    title: item.title,
                    deletable: item.deletable,
                })
                .collect(),
            empty_text: view.empty_text.map(str::to_string),
        }
    }
}

/// Opaque session handle owned by the Dart side.
#[flutter_rust_bridge::frb(opaque)]
pub struct TaskListHandle {
    session: Mutex<Session>,
    storage_mode: &'static str,
}

impl TaskListHandle {
    /// Opens a session on the SQLite file at `db_path`.
    ///
    /// `None` or blank paths use `CoreConfig::from_env()`. When the database
    /// cannot be opened the session runs in memory and `storage_mode()` reports
    /// `memory`.
    #[flutter_rust_bridge::frb(sync)]
    pub fn open(db_path: Option<String>) -> TaskListHandle {
        let path = db_path
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(std::path::PathBuf::from)
            .unwrap_or_else(|| CoreConfig::from_env().db_path);

        match SqliteKvStore::open(&path) {
            Ok(store) => Self::with_gateway(Box::new(store), "sqlite"),
            Err(err) => {
                error!(
                    "event=session_open module=ffi status=degraded error_code=storage_unavailable error={err}"
                );
                Self::with_gateway(Box::new(MemoryKvStore::new()), "memory")
            }
        }
    }

    /// Opens a session that never touches disk.
    #[flutter_rust_bridge::frb(sync)]
    pub fn open_in_memory() -> TaskListHandle {
        Self::with_gateway(Box::new(MemoryKvStore::new()), "memory")
    }

    /// `sqlite` or `memory`.
    #[flutter_rust_bridge::frb(sync)]
    pub fn storage_mode(&self) -> String {
        self.storage_mode.to_string()
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn set_input(&self, text: String) {
        if let Some(mut session) = self.lock() {
            session.set_input(text);
        }
    }

    /// Adds the pending input as a task.
    #[flutter_rust_bridge::frb(sync)]
    pub fn submit(&self) -> TaskActionResponse {
        let Some(mut session) = self.lock() else {
            return session_unavailable();
        };
        match session.submit() {
            Ok(task) => TaskActionResponse {
                ok: true,
                task_id: Some(task.id().to_string()),
                message: "Task added.".to_string(),
                alert: None,
            },
            Err(err) => TaskActionResponse {
                ok: false,
                task_id: None,
                message: err.to_string(),
                alert: Some(AlertPayload {
                    title: err.alert_title().to_string(),
                    message: err.alert_message().to_string(),
                }),
            },
        }
    }

    /// Long-press on the item with `task_id`.
    ///
    /// Any long-press toggles edit mode; the id is only used for diagnostics.
    #[flutter_rust_bridge::frb(sync)]
    pub fn long_press(&self, task_id: String) -> EditModeResponse {
        let Some(mut session) = self.lock() else {
            return EditModeResponse {
                editing: false,
                vibrate: false,
            };
        };
        let editing = match parse_task_id(&task_id) {
            Some(id) => session.long_press(id),
            None => session.toggle_edit_mode(),
        };
        EditModeResponse {
            editing,
            vibrate: true,
        }
    }

    /// Removes a task and returns the updated screen.
    #[flutter_rust_bridge::frb(sync)]
    pub fn remove(&self, task_id: String) -> TaskListScreen {
        let Some(mut session) = self.lock() else {
            return empty_screen();
        };
        if let Some(id) = parse_task_id(&task_id) {
            session.remove(id);
        }
        session.view().into()
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn view(&self) -> TaskListScreen {
        match self.lock() {
            Some(session) => session.view().into(),
            None => empty_screen(),
        }
    }

    /// Retries a failed snapshot write. Empty string on success.
    #[flutter_rust_bridge::frb(sync)]
    pub fn flush(&self) -> String {
        let Some(mut session) = self.lock() else {
            return "task list session unavailable".to_string();
        };
        match session.flush() {
            Ok(()) => String::new(),
            Err(err) => err.to_string(),
        }
    }

    fn with_gateway(gateway: SharedGateway, storage_mode: &'static str) -> Self {
        Self {
            session: Mutex::new(TaskListSession::open(gateway, NoopPlatform)),
            storage_mode,
        }
    }

    fn lock(&self) -> Option<MutexGuard<'_, Session>> {
        match self.session.lock() {
            Ok(guard) => Some(guard),
            Err(_) => {
                error!("event=session_lock module=ffi status=error error_code=lock_poisoned");
                None
            }
        }
    }
}

fn parse_task_id(raw: &str) -> Option<TaskId> {
    match Uuid::parse_str(raw.trim()) {
        Ok(id) => Some(id),
        Err(_) => {
            warn!("event=task_id_parse module=ffi status=error error_code=invalid_task_id");
            None
        }
    }
}

fn empty_screen() -> TaskListScreen {
    TaskListView::build("", EditMode::Viewing, &TaskList::new()).into()
}

fn session_unavailable() -> TaskActionResponse {
    TaskActionResponse {
        ok: false,
        task_id: None,
        message: "task list session unavailable".to_string(),
        alert: None,
    }
}

#[cfg(test)]
mod tests {
    use super::{core_version, init_logging, ping, TaskListHandle};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn submit_empty_input_returns_alert() {
        let handle = TaskListHandle::open_in_memory();
        handle.set_input("  ".to_string());

        let response = handle.submit();
        assert!(!response.ok);
        let alert = response.alert.expect("empty input should raise alert");
        assert_eq!(alert.title, "Empty input");
        assert_eq!(alert.message, "Type text of todo");
        assert_eq!(handle.view().input, "  ");
    }

    #[test]
    fn add_long_press_remove_flow() {
        let handle = TaskListHandle::open_in_memory();
        handle.set_input("Buy milk".to_string());
        let task_id = handle.submit().task_id.expect("task id");

        let screen = handle.view();
        assert_eq!(screen.input, "");
        assert_eq!(screen.items.len(), 1);
        assert!(!screen.items[0].deletable);

        let toggled = handle.long_press(task_id.clone());
        assert!(toggled.editing);
        assert!(toggled.vibrate);
        assert!(handle.view().items[0].deletable);

        let screen = handle.remove(task_id);
        assert!(screen.items.is_empty());
        assert_eq!(screen.empty_text.as_deref(), Some("No task"));
    }

    #[test]
    fn unparseable_id_still_toggles_but_removes_nothing() {
        let handle = TaskListHandle::open_in_memory();
        handle.set_input("keep".to_string());
        handle.submit();

        let response = handle.long_press("not-a-uuid".to_string());
        assert!(response.editing);
        assert!(response.vibrate);
        assert!(handle.view().items[0].deletable);

        let response = handle.long_press("not-a-uuid".to_string());
        assert!(!response.editing);
        assert_eq!(handle.remove("not-a-uuid".to_string()).items.len(), 1);
    }

    #[test]
    fn file_backed_handle_persists_between_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ffi.db").to_string_lossy().into_owned();

        let first = TaskListHandle::open(Some(path.clone()));
        assert_eq!(first.storage_mode(), "sqlite");
        first.set_input("persisted".to_string());
        assert!(first.submit().ok);
        assert_eq!(first.flush(), "");
        drop(first);

        let second = TaskListHandle::open(Some(path));
        let screen = second.view();
        assert_eq!(screen.items.len(), 1);
        assert_eq!(screen.items[0].title, "persisted");
    }

    #[test]
    fn unopenable_database_falls_back_to_memory() {
        let dir = tempfile::tempdir().unwrap();
        // SQLite does not create missing parent directories.
        let path = dir.path().join("missing").join("nested").join("ffi.db");
        let handle = TaskListHandle::open(Some(path.to_string_lossy().into_owned()));
        assert_eq!(handle.storage_mode(), "memory");

        handle.set_input("still works".to_string());
        assert!(handle.submit().ok);
    }
}

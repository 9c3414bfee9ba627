//! Core domain logic for the TaskList app.
//! This crate is the single source of truth for task-list invariants.

pub mod config;
pub mod db;
pub mod gateway;
pub mod logging;
pub mod model;
pub mod session;
pub mod store;

pub use config::CoreConfig;
pub use gateway::{GatewayError, GatewayResult, KeyValueStore, MemoryKvStore, SqliteKvStore};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::edit_mode::EditMode;
pub use model::task::{Task, TaskId, ValidationError};
pub use model::task_list::TaskList;
pub use session::controller::TaskListSession;
pub use session::platform::{NoopPlatform, PlatformHooks};
pub use session::view::{ItemView, TaskListView};
pub use store::snapshot::{SnapshotError, SNAPSHOT_KEY};
pub use store::task_store::{PersistError, TaskStore};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

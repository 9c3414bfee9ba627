//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `tasklist_core` linkage without the mobile shell.
//! - Run one scripted add/long-press/remove pass against an in-memory store.

use tasklist_core::{CoreConfig, MemoryKvStore, NoopPlatform, TaskListSession};

fn main() {
    println!("tasklist_core ping={}", tasklist_core::ping());
    println!("tasklist_core version={}", tasklist_core::core_version());

    let config = CoreConfig::from_env();
    println!(
        "tasklist_core db_path={} log_level={}",
        config.db_path.display(),
        config.log_level
    );

    let mut session = TaskListSession::open(MemoryKvStore::new(), NoopPlatform);
    session.set_input("smoke");
    match session.submit() {
        Ok(task) => {
            let editing = session.long_press(task.id());
            let remaining = session.remove(task.id()).len();
            println!("tasklist_core smoke=ok editing={editing} remaining={remaining}");
        }
        Err(err) => {
            eprintln!("tasklist_core smoke=error error={err}");
            std::process::exit(1);
        }
    }
}

use rusqlite::Connection;
use tasklist_core::db::migrations::latest_version;
use tasklist_core::db::{open_db, open_db_in_memory, DbError};
use tasklist_core::{
    GatewayError, KeyValueStore, NoopPlatform, SqliteKvStore, TaskListSession, TaskStore,
};

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "kv_entries");
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasklist.db");

    drop(open_db(&path).unwrap());
    let conn = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn), latest_version());
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }

    assert!(matches!(
        SqliteKvStore::open(&path),
        Err(GatewayError::Db(DbError::UnsupportedSchemaVersion { .. }))
    ));
}

#[test]
fn get_set_is_last_write_wins() {
    let store = SqliteKvStore::open_in_memory().unwrap();
    assert_eq!(store.get("list").unwrap(), None);

    store.set("list", "[]").unwrap();
    store.set("list", "[\"x\"]").unwrap();
    assert_eq!(store.get("list").unwrap().as_deref(), Some("[\"x\"]"));

    let rows: i64 = store
        .connection()
        .query_row("SELECT COUNT(*) FROM kv_entries", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn tasks_survive_reopening_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.db");

    let kept_id = {
        let mut store = TaskStore::load(SqliteKvStore::open(&path).unwrap());
        let kept = store.add("kept").unwrap();
        let dropped = store.add("dropped").unwrap();
        store.remove(dropped.id());
        kept.id()
    };

    let session = TaskListSession::open(SqliteKvStore::open(&path).unwrap(), NoopPlatform);
    let ids: Vec<_> = session.tasks().iter().map(|task| task.id()).collect();
    assert_eq!(ids, vec![kept_id]);
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}

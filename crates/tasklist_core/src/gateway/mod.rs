//! Persistence gateway contracts.
//!
//! # Responsibility
//! - Define the key-value contract the task store mirrors its state into.
//! - Keep backend details (memory, SQLite) behind one trait.
//!
//! # Invariants
//! - Writes are last-write-wins per key; no transactional grouping is assumed.
//! - `get` of a never-written key returns `Ok(None)`, not an error.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryKvStore;
pub use sqlite::SqliteKvStore;

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Backend failure reported by a gateway implementation.
#[derive(Debug)]
pub enum GatewayError {
    Db(DbError),
    Unavailable(String),
}

impl Display for GatewayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Unavailable(message) => write!(f, "storage unavailable: {message}"),
        }
    }
}

impl Error for GatewayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<DbError> for GatewayError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for GatewayError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Key-value storage used as the durable copy of session state.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> GatewayResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> GatewayResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> GatewayResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> GatewayResult<()> {
        (**self).set(key, value)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> GatewayResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> GatewayResult<()> {
        (**self).set(key, value)
    }
}

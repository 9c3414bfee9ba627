//! Task store and its persisted snapshot format.
//!
//! # Responsibility
//! - Own the live task list and mirror every mutation to the gateway.
//! - Encode/decode the single JSON snapshot kept under `SNAPSHOT_KEY`.
//!
//! # Invariants
//! - The in-memory list is the live source of truth; the gateway copy is only
//!   read at load time.
//! - Persistence failures never roll back or block in-memory mutations.

pub mod snapshot;
pub mod task_store;

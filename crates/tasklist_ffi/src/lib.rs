//! Flutter-facing bindings for the TaskList core.

pub mod api;

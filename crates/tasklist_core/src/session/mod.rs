//! Session controller and render projection.
//!
//! # Responsibility
//! - Own the task store, edit mode and pending input for one UI session.
//! - Route user gestures to store/toggle operations.
//! - Expose a render-ready view model to the UI shell.
//!
//! # Invariants
//! - All task-list state lives in one `TaskListSession`; nothing is global.
//! - Rejected input never mutates the list, the mode or the input buffer.

pub mod controller;
pub mod platform;
pub mod view;

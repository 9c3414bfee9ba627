//! Edit-mode toggle.
//!
//! # Responsibility
//! - Track whether per-item delete controls are visible.
//!
//! # Invariants
//! - Default state is `Viewing`.
//! - Only `toggle` and `reset` change the state; there is no terminal state.

/// Two-state flag gating the delete affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Viewing,
    Editing,
}

impl EditMode {
    /// Flips the mode and returns `true` when the new mode is `Editing`.
    pub fn toggle(&mut self) -> bool {
        *self = match self {
            Self::Viewing => Self::Editing,
            Self::Editing => Self::Viewing,
        };
        self.is_editing()
    }

    /// Returns to `Viewing`. Used after a task is added.
    pub fn reset(&mut self) {
        *self = Self::Viewing;
    }

    pub fn is_editing(self) -> bool {
        self == Self::Editing
    }

    /// Stable lowercase label used in logs and FFI payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Viewing => "viewing",
            Self::Editing => "editing",
        }
    }
}

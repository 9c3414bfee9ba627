//! Platform hooks the UI shell implements.

/// Side effects delegated to the host platform.
///
/// Default methods are no-ops so headless callers only override what they need.
pub trait PlatformHooks {
    /// Short haptic pulse on edit-mode toggle.
    fn vibrate(&self) {}

    /// Blocking alert dialog.
    fn alert(&self, _title: &str, _message: &str) {}
}

/// Hooks implementation that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPlatform;

impl PlatformHooks for NoopPlatform {}

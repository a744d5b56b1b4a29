//! UI state types shared by the engine and the TUI.

/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    pub reduced_motion: bool,
}

/// A blocking notification. Input other than dismissal is swallowed while one
/// is pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    message: String,
}

impl Alert {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

//! Error types for rendering and interactive prompts.

/// Errors surfaced by terminal output and prompts.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("Select requires at least one choice")]
    NoChoices,

    #[error("Prompt cancelled by user")]
    Cancelled,

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl ConsoleError {
    /// Whether this error is a user cancellation (Ctrl+C during a prompt).
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ConsoleError::Cancelled)
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ConsoleError>;

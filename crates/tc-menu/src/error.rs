//! Error types for the menu dispatcher.

use thiserror::Error;

/// Result type for menu operations.
pub type MenuResult<T> = Result<T, MenuError>;

/// Errors that can interrupt the menu loop.
///
/// An unknown selector is not an error: it is how the loop ends.
#[derive(Debug, Error)]
pub enum MenuError {
    /// Reading from or writing to the console failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A menu action reported a failure.
    #[error("action '{label}' failed: {message}")]
    Action {
        /// Label of the failing entry.
        label: String,
        /// What went wrong.
        message: String,
    },
}

//! Error types for the bestiary.

use thiserror::Error;

/// Errors that can occur when looking up creatures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BestiaryError {
    /// The name does not match any creature kind.
    #[error("unknown creature kind: \"{0}\" (expected vampire, zombie or skeleton)")]
    UnknownKind(String),
}

//! Error types for cellcraft-core

use cellcraft_ooxml::OoxmlError;
use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in cellcraft-core
///
/// Most authoring operations never fail: out-of-range input is clamped and
/// unparsable references fall back to defaults. Errors come from strict
/// address parsing and from reading XML fragments.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid cell address format
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Invalid cell range format
    #[error("Invalid cell range: {0}")]
    InvalidRange(String),

    /// Error reading or writing an element
    #[error(transparent)]
    Ooxml(#[from] OoxmlError),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}

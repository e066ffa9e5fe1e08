//! Global error handling for dirclip
//!
//! Per-file read failures never reach this type: they are rendered inline
//! into the report. Everything here is fatal to a run.

use std::io;
use thiserror::Error;

use crate::clipboard::ClipboardError;
use crate::walker::WalkError;

/// Global error type for dirclip operations
#[derive(Error, Debug)]
pub enum DirClipError {
    /// Directory traversal errors
    #[error(transparent)]
    Walk(#[from] WalkError),

    /// Clipboard errors
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),

    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Path not found
    #[error("Path not found: {0}")]
    PathNotFound(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Specialized Result type for dirclip operations
pub type Result<T> = std::result::Result<T, DirClipError>;

/// Creates a DirClipError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::DirClipError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}

// Lets io::Result based callers and tests use `?` on crate results
impl From<DirClipError> for io::Error {
    fn from(err: DirClipError) -> Self {
        match err {
            DirClipError::Io(e) => e,
            other => io::Error::new(io::ErrorKind::Other, other.to_string()),
        }
    }
}

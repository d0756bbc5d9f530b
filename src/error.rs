//! Global error handling for treed
//!
//! This module provides a centralized error type for argument validation
//! and the directory walk. Clipboard failures are reported, not returned.

use std::io;
use thiserror::Error;

/// Global error type for treed operations
#[derive(Error, Debug)]
pub enum TreedError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Directory listing errors other than a denied permission
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Path not found
    #[error("Path not found: {0}")]
    PathNotFound(String),

    /// The root path exists but is not a directory
    #[error("Not a directory: {0}")]
    NotADirectory(String),

    /// Unexpected error
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Specialized Result type for treed operations
pub type Result<T> = std::result::Result<T, TreedError>;

/// Creates a TreedError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::TreedError::$error_type(format!($($arg)*))
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

/// Extension trait for adding context to errors
pub trait ResultExt<T, E> {
    /// Add additional context to an error
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display;
}

impl<T, E: std::error::Error + 'static> ResultExt<T, E> for std::result::Result<T, E> {
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display,
    {
        self.map_err(|e| {
            let context = f();
            TreedError::Unexpected(format!("{}: {}", context, e))
        })
    }
}

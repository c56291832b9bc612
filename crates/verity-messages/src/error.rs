//! # Error Types — Template Table Loading
//!
//! Resolution itself is total and cannot fail; errors only arise when a
//! template table is loaded from a file.

use thiserror::Error;

/// Errors from loading a template table from disk.
#[derive(Error, Debug)]
pub enum TemplateLoadError {
    /// The table file exists but does not parse.
    #[error("template table \"{path}\" is invalid: {reason}")]
    Parse {
        /// Path of the offending file.
        path: String,
        /// Why parsing failed.
        reason: String,
    },

    /// The table file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

//! Error types for siteforge.
//!
//! Library crates use [`SiteforgeError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.
//!
//! The taxonomy mirrors how failures propagate through a generation run:
//! configuration errors abort before any output, data errors skip a single
//! record, template errors skip a single page. Row- and page-level failures
//! are recorded in the generation report rather than raised.

use std::path::PathBuf;

/// Top-level error type for all siteforge operations.
#[derive(Debug, thiserror::Error)]
pub enum SiteforgeError {
    /// Missing or invalid configuration, or a missing input path.
    /// Fatal — aborts the run before any output is written.
    #[error("config error: {message}")]
    Config { message: String },

    /// A malformed or unusable CSV row, or a title that normalizes to an
    /// empty slug. The offending record is skipped; the run continues.
    #[error("data error: {message}")]
    Data { message: String },

    /// A `page_copy` key required by a static page is missing. That page is
    /// omitted; all other pages still render.
    #[error("template error: {message}")]
    Template { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Network/HTTP error during IndexNow submission.
    #[error("network error: {0}")]
    Network(String),
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, SiteforgeError>;

impl SiteforgeError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a data error from any displayable message.
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data {
            message: msg.into(),
        }
    }

    /// Create a template error from any displayable message.
    pub fn template(msg: impl Into<String>) -> Self {
        Self::Template {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

//! Boot failures.
//!
//! None of these are fatal to the page: the host logs the error and the
//! document simply stays un-enhanced.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use widgets::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum BootError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no <body>")]
    NoBody,
    #[error("inline config rejected: {0}")]
    Config(#[from] ConfigError),
}

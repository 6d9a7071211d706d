//! Error types raised while loading activity catalogs.
#![forbid(unsafe_code)]

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while loading an activity catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Reading a catalog file from disk failed.
    #[error("failed to read catalog file at {path}")]
    ReadFile {
        /// Requested catalog path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Parsing a catalog file failed.
    #[error("failed to parse catalog file at {path}")]
    Parse {
        /// Offending catalog path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Parsing the bundled dataset failed.
    #[error("failed to parse the bundled activity dataset")]
    Embedded {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}

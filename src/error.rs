//! Error taxonomy for loading, generating and writing metadata documents.

use std::io;
use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input file missing, unreadable, or failed to decompress.
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Input is not valid JSON.
    #[error("failed to parse JSON in {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Input is JSON but not a `{"metadata": {...}}` document.
    #[error("unexpected document shape in {}: {reason}", path.display())]
    Schema { path: PathBuf, reason: String },

    /// Output path not writable.
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Statistics requested over a mapping with no entries.
    #[error("no metadata entries in {}", path.display())]
    Empty { path: PathBuf },

    /// Histogram requested with zero bins.
    #[error("bin count must be at least 1")]
    InvalidBins,
}

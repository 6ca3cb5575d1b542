use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Conditions that end a run. Source fetch failures never surface here;
/// they are logged and retried inside the fetchers.
#[derive(Debug, Error)]
pub enum ReconError {
    #[error("Please provide a domain using the -d flag")]
    MissingDomain,

    #[error("Please provide an output file using the -o flag")]
    MissingOutput,

    #[error("Retry count must be at least 1")]
    InvalidRetries,

    #[error("Failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create output file {}: {source}", .path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write output file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ReconError>;

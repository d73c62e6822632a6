// crates/snippet_extractor/src/error.rs

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("invalid token {0:?}: markers and hide tokens must be non-empty and free of whitespace")]
    InvalidMarker(String),

    #[error("file not found: {}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("marker '{marker}' not found in {}", path.display())]
    MarkerNotFound { marker: String, path: PathBuf },

    #[error("section '{marker}' in {} is never closed by '#:{marker} end'", path.display())]
    UnterminatedSection { marker: String, path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type ScanResult<T> = Result<T, ScanError>;

// crates/extract_snippet/src/error.rs

use std::io;
use std::path::PathBuf;

use revision_context::RevisionError;
use snippet_address::AddressError;
use snippet_extractor::ScanError;
use thiserror::Error;

/// Every way a snippet extraction can fail. None of these are recovered
/// internally: a missing snippet must fail the documentation build.
#[derive(Debug, Error)]
pub enum SnippetError {
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

    #[error("section '{marker}' in {} has no lines between its markers", path.display())]
    EmptySection { marker: String, path: PathBuf },

    #[error("revision switch failed: {0}")]
    RevisionSwitchFailed(#[from] RevisionError),

    #[error(transparent)]
    MalformedAddress(#[from] AddressError),

    #[error("invalid token {0:?}: markers and hide tokens must be non-empty and free of whitespace")]
    InvalidMarker(String),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl From<ScanError> for SnippetError {
    fn from(err: ScanError) -> Self {
        match err {
            ScanError::FileNotFound { path, source } => SnippetError::FileNotFound { path, source },
            ScanError::MarkerNotFound { marker, path } => SnippetError::MarkerNotFound { marker, path },
            ScanError::UnterminatedSection { marker, path } => {
                SnippetError::UnterminatedSection { marker, path }
            }
            ScanError::InvalidMarker(token) => SnippetError::InvalidMarker(token),
            ScanError::Io { path, source } => SnippetError::Io { path, source },
        }
    }
}

pub type SnippetResult<T> = Result<T, SnippetError>;

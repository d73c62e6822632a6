// crates/extract_snippet/src/lib.rs

//! Entry point for embedding verified source excerpts in documentation.
//!
//! One call reads one section of one file: optionally switch the repository to
//! another revision, scan for the section, redact hide ranges, indent the
//! result, and switch back.

pub mod config;
pub mod error;

use std::io;
use std::path::{Path, PathBuf};

use assemble_snippet::assemble_with_indent;
use marker_syntax::DEFAULT_INDENT;
use revision_context::{with_revision, GitBackend, RevisionBackend};
use snippet_address::{parse_address, SnippetAddress};
use snippet_extractor::{read_section_with, DefaultSectionReader, SectionReader};

pub use config::SnippetConfig;
pub use error::{SnippetError, SnippetResult};

/// Input to one extraction call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnippetRequest {
    /// Directory the file is relative to; also where revision switches run.
    pub root: PathBuf,
    pub file: PathBuf,
    pub marker: String,
    /// Hide token whose ranges collapse to a placeholder.
    pub hide: Option<String>,
    /// Revision to read the file at; the working tree is used as-is when `None`.
    pub revision: Option<String>,
}

impl SnippetRequest {
    pub fn new(root: impl Into<PathBuf>, file: impl Into<PathBuf>, marker: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            file: file.into(),
            marker: marker.into(),
            hide: None,
            revision: None,
        }
    }

    pub fn with_hide(mut self, hide: impl Into<String>) -> Self {
        self.hide = Some(hide.into());
        self
    }

    pub fn with_revision(mut self, revision: impl Into<String>) -> Self {
        self.revision = Some(revision.into());
        self
    }

    /// Builds a request from a parsed address, falling back to the configured root.
    pub fn from_address(address: SnippetAddress, config: &SnippetConfig) -> Self {
        Self {
            root: address.root.unwrap_or_else(|| config.default_root.clone()),
            file: address.file,
            marker: address.marker,
            hide: address.hide,
            revision: address.revision,
        }
    }

    /// `root` joined with `file`. The file must be relative so it cannot escape the root.
    pub fn source_path(&self) -> SnippetResult<PathBuf> {
        if self.file.is_absolute() {
            return Err(SnippetError::FileNotFound {
                path: self.file.clone(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "file must be relative to the root"),
            });
        }
        Ok(self.root.join(&self.file))
    }
}

/// Extracts the requested snippet with `git` as the revision backend and the default indent.
///
/// # Errors
///
/// See [`SnippetError`]. When a revision was requested the working tree is back
/// on its original revision by the time this returns, error or not.
pub fn extract(request: &SnippetRequest) -> SnippetResult<String> {
    extract_with(&GitBackend::new(), &DefaultSectionReader, request, DEFAULT_INDENT)
}

/// Parses a `file:marker[:root[:revision]]` address and extracts it.
pub fn extract_address(address: &str, config: &SnippetConfig) -> SnippetResult<String> {
    let address = parse_address(address)?;
    let request = SnippetRequest::from_address(address, config);
    extract_with(&GitBackend::new(), &DefaultSectionReader, &request, &config.indent)
}

/// Extracts with an explicit revision backend, section reader and indentation unit.
pub fn extract_with<B>(
    backend: &B,
    reader: &dyn SectionReader,
    request: &SnippetRequest,
    indent: &str,
) -> SnippetResult<String>
where
    B: RevisionBackend + ?Sized,
{
    let path = request.source_path()?;
    ensure_root(&request.root)?;

    let read = || -> SnippetResult<String> {
        let lines = read_section_with(reader, &path, &request.marker, request.hide.as_deref())?;
        if lines.is_empty() {
            return Err(SnippetError::EmptySection {
                marker: request.marker.clone(),
                path: path.clone(),
            });
        }
        Ok(assemble_with_indent(&lines, indent))
    };

    match request.revision.as_deref() {
        None => read(),
        Some(revision) => {
            log::info!(
                "extracting '{}' from {} at revision '{}'",
                request.marker,
                path.display(),
                revision
            );
            with_revision(backend, &request.root, revision, |_| read())
        }
    }
}

fn ensure_root(root: &Path) -> SnippetResult<()> {
    if root.is_dir() {
        return Ok(());
    }
    Err(SnippetError::FileNotFound {
        path: root.to_path_buf(),
        source: io::Error::new(io::ErrorKind::NotFound, "snippet root is not a directory"),
    })
}

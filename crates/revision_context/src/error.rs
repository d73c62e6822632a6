// crates/revision_context/src/error.rs

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RevisionError {
    #[error("error executing git {args} in {}: {source}", repo_root.display())]
    Spawn {
        args: String,
        repo_root: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("git {args} failed in {}: {stderr}", repo_root.display())]
    Command {
        args: String,
        repo_root: PathBuf,
        stderr: String,
    },

    #[error("revision {revision:?} looks like a git option, refusing to check it out")]
    OptionLikeRevision { revision: String },

    #[error("could not determine the current revision of {}", repo_root.display())]
    UnknownRevision { repo_root: PathBuf },

    #[error("failed to restore {} to '{original}': {source}", repo_root.display())]
    RestoreFailed {
        repo_root: PathBuf,
        original: String,
        #[source]
        source: Box<RevisionError>,
    },
}

pub type RevisionResult<T> = Result<T, RevisionError>;

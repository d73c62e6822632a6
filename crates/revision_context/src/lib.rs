// crates/revision_context/src/lib.rs

//! Temporarily points a working tree at another revision.
//!
//! The working tree is a single shared resource: callers must not run two
//! switches against the same `repo_root` at once. The backend is passed in
//! explicitly so tests can swap `git` for an in-memory fake.

pub mod backend;
pub mod error;
pub mod git;
pub mod guard;

pub use backend::RevisionBackend;
pub use error::{RevisionError, RevisionResult};
pub use git::GitBackend;
pub use guard::{with_revision, RevisionContext, RevisionGuard, RevisionState};

// crates/revision_context/src/backend.rs

use std::path::Path;

use crate::error::RevisionResult;

/// The revision-control operations the context manager needs. The working tree
/// at `repo_root` is the shared resource; implementations must not cache it.
pub trait RevisionBackend {
    /// Branch name when one is checked out, otherwise the commit id.
    fn current_revision(&self, repo_root: &Path) -> RevisionResult<String>;

    /// Points the working tree at `revision`.
    fn switch_to(&self, repo_root: &Path, revision: &str) -> RevisionResult<()>;
}

impl<B: RevisionBackend + ?Sized> RevisionBackend for &B {
    fn current_revision(&self, repo_root: &Path) -> RevisionResult<String> {
        (**self).current_revision(repo_root)
    }

    fn switch_to(&self, repo_root: &Path, revision: &str) -> RevisionResult<()> {
        (**self).switch_to(repo_root, revision)
    }
}

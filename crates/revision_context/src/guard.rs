// crates/revision_context/src/guard.rs

use std::path::{Path, PathBuf};

use crate::backend::RevisionBackend;
use crate::error::{RevisionError, RevisionResult};

/// The revisions involved in one temporary switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionContext {
    pub original_revision: String,
    pub target_revision: String,
    pub repo_root: PathBuf,
}

/// `Idle -> SwitchedAway -> Restored`; `Restored` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevisionState {
    Idle,
    SwitchedAway,
    Restored,
}

/// Holds the working tree on the target revision and puts it back on the
/// original one when released, either explicitly through [`RevisionGuard::restore`]
/// or implicitly on drop (early return, `?`, panic unwinding).
pub struct RevisionGuard<'a, B: RevisionBackend + ?Sized> {
    backend: &'a B,
    context: RevisionContext,
    state: RevisionState,
    restore_attempted: bool,
}

impl<'a, B: RevisionBackend + ?Sized> RevisionGuard<'a, B> {
    /// Records the current revision of `repo_root`, then switches to `target`.
    ///
    /// # Errors
    ///
    /// Fails if the current revision cannot be queried or the switch does not
    /// complete. Nothing needs restoring in either case.
    pub fn switch(backend: &'a B, repo_root: &Path, target: &str) -> RevisionResult<Self> {
        let original_revision = backend.current_revision(repo_root)?;
        let mut guard = Self {
            backend,
            context: RevisionContext {
                original_revision,
                target_revision: target.to_string(),
                repo_root: repo_root.to_path_buf(),
            },
            state: RevisionState::Idle,
            restore_attempted: false,
        };

        backend.switch_to(repo_root, target)?;
        guard.state = RevisionState::SwitchedAway;
        log::debug!(
            "switched {} from '{}' to '{}'",
            repo_root.display(),
            guard.context.original_revision,
            target
        );
        Ok(guard)
    }

    pub fn context(&self) -> &RevisionContext {
        &self.context
    }

    pub fn state(&self) -> RevisionState {
        self.state
    }

    /// Switches back to the original revision and reports whether that worked.
    pub fn restore(mut self) -> RevisionResult<()> {
        self.restore_in_place()
    }

    fn restore_in_place(&mut self) -> RevisionResult<()> {
        if self.state != RevisionState::SwitchedAway || self.restore_attempted {
            return Ok(());
        }
        self.restore_attempted = true;

        let context = &self.context;
        match self.backend.switch_to(&context.repo_root, &context.original_revision) {
            Ok(()) => {
                self.state = RevisionState::Restored;
                log::debug!(
                    "restored {} to '{}'",
                    context.repo_root.display(),
                    context.original_revision
                );
                Ok(())
            }
            Err(source) => {
                log::error!(
                    "could not switch {} back to '{}', the working tree is still on '{}': {}",
                    context.repo_root.display(),
                    context.original_revision,
                    context.target_revision,
                    source
                );
                Err(RevisionError::RestoreFailed {
                    repo_root: context.repo_root.clone(),
                    original: context.original_revision.clone(),
                    source: Box::new(source),
                })
            }
        }
    }
}

impl<B: RevisionBackend + ?Sized> Drop for RevisionGuard<'_, B> {
    fn drop(&mut self) {
        // Failures are already logged by restore_in_place; drop cannot return them.
        let _ = self.restore_in_place();
    }
}

/// Runs `body` with `repo_root` switched to `target`, and switches back before
/// returning, whatever `body` did.
///
/// When `body` fails its error is returned as is, after the restore. When only
/// the restore fails, its `RestoreFailed` error is returned. When both fail the
/// body's error wins and the restore failure is logged at error level.
pub fn with_revision<B, T, E, F>(backend: &B, repo_root: &Path, target: &str, body: F) -> Result<T, E>
where
    B: RevisionBackend + ?Sized,
    F: FnOnce(&RevisionContext) -> Result<T, E>,
    E: From<RevisionError>,
{
    let guard = RevisionGuard::switch(backend, repo_root, target)?;
    let outcome = body(guard.context());
    let restored = guard.restore();

    match (outcome, restored) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(restore_err)) => Err(restore_err.into()),
        (Err(err), _) => Err(err),
    }
}

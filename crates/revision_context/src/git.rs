// crates/revision_context/src/git.rs

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::backend::RevisionBackend;
use crate::error::{RevisionError, RevisionResult};

/// `RevisionBackend` that shells out to `git`.
#[derive(Debug, Clone)]
pub struct GitBackend {
    program: OsString,
}

impl Default for GitBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl GitBackend {
    pub fn new() -> Self {
        Self::with_program("git")
    }

    /// Uses another executable in place of `git` (a wrapper script, a pinned binary).
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Runs git in `repo_root` and returns its trimmed stdout.
    fn run(&self, repo_root: &Path, args: &[&str]) -> RevisionResult<String> {
        log::debug!("git {} (in {})", args.join(" "), repo_root.display());
        let output = Command::new(&self.program)
            .args(args)
            .current_dir(repo_root)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| RevisionError::Spawn {
                args: args.join(" "),
                repo_root: repo_root.to_path_buf(),
                source,
            })?;

        if !output.status.success() {
            return Err(RevisionError::Command {
                args: args.join(" "),
                repo_root: repo_root.to_path_buf(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl RevisionBackend for GitBackend {
    fn current_revision(&self, repo_root: &Path) -> RevisionResult<String> {
        // A detached HEAD has no symbolic name; fall back to the commit id.
        let revision = match self.run(repo_root, &["symbolic-ref", "--quiet", "--short", "HEAD"]) {
            Ok(branch) => branch,
            Err(RevisionError::Command { .. }) => self.run(repo_root, &["rev-parse", "--verify", "HEAD"])?,
            Err(err) => return Err(err),
        };

        if revision.is_empty() {
            return Err(RevisionError::UnknownRevision {
                repo_root: repo_root.to_path_buf(),
            });
        }
        Ok(revision)
    }

    fn switch_to(&self, repo_root: &Path, revision: &str) -> RevisionResult<()> {
        // git parses a leading '-' as an option (`-f` discards local edits), and
        // the trailing "--" only guards against path parsing.
        if revision.is_empty() || revision.starts_with('-') {
            return Err(RevisionError::OptionLikeRevision {
                revision: revision.to_string(),
            });
        }
        self.run(repo_root, &["checkout", "--quiet", revision, "--"])?;
        Ok(())
    }
}

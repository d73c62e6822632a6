// crates/revision_context/tests/integration_git.rs

use revision_context::{with_revision, GitBackend, RevisionBackend, RevisionError};
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Runs a git command in `dir` and returns its trimmed stdout, panicking on failure.
fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to execute git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Creates a repository on `main` with a `v2` branch that changes `greet.rb`.
fn init_repo() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let root = dir.path();
    git(root, &["init", "--quiet"]);
    git(root, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    git(root, &["config", "user.email", "test@example.com"]);
    git(root, &["config", "user.name", "Test User"]);
    git(root, &["config", "commit.gpgsign", "false"]);

    fs::write(root.join("greet.rb"), "#:greet\nputs \"hi\"\n#:greet end\n").unwrap();
    git(root, &["add", "greet.rb"]);
    git(root, &["commit", "--quiet", "-m", "Initial commit"]);

    git(root, &["checkout", "--quiet", "-b", "v2"]);
    fs::write(root.join("greet.rb"), "#:greet\nputs \"hello\"\n#:greet end\n").unwrap();
    git(root, &["commit", "--quiet", "-am", "Say hello"]);
    git(root, &["checkout", "--quiet", "main"]);
    dir
}

#[derive(Debug)]
enum TestError {
    Missing,
    Revision(RevisionError),
}

impl From<RevisionError> for TestError {
    fn from(err: RevisionError) -> Self {
        TestError::Revision(err)
    }
}

#[test]
fn test_current_revision_is_branch_name() {
    let repo = init_repo();
    assert_eq!(GitBackend::new().current_revision(repo.path()).unwrap(), "main");
}

#[test]
fn test_reads_target_revision_and_returns_to_main() {
    let repo = init_repo();
    let backend = GitBackend::new();

    let content = with_revision(&backend, repo.path(), "v2", |ctx| {
        assert_eq!(ctx.original_revision, "main");
        Ok::<_, TestError>(fs::read_to_string(repo.path().join("greet.rb")).unwrap())
    })
    .unwrap();

    assert!(content.contains("puts \"hello\""));
    assert_eq!(git(repo.path(), &["symbolic-ref", "--short", "HEAD"]), "main");
    let on_disk = fs::read_to_string(repo.path().join("greet.rb")).unwrap();
    assert!(on_disk.contains("puts \"hi\""));
}

#[test]
fn test_failing_body_still_returns_to_main() {
    let repo = init_repo();
    let backend = GitBackend::new();

    let result: Result<(), TestError> = with_revision(&backend, repo.path(), "v2", |_| Err(TestError::Missing));

    assert!(matches!(result, Err(TestError::Missing)));
    assert_eq!(git(repo.path(), &["symbolic-ref", "--short", "HEAD"]), "main");
}

#[test]
fn test_unknown_revision_fails_without_moving() {
    let repo = init_repo();
    let backend = GitBackend::new();

    let result: Result<(), TestError> = with_revision(&backend, repo.path(), "no-such-branch", |_| Ok(()));

    assert!(matches!(result, Err(TestError::Revision(RevisionError::Command { .. }))));
    assert_eq!(git(repo.path(), &["symbolic-ref", "--short", "HEAD"]), "main");
}

#[test]
fn test_detached_head_is_restored_by_commit_id() {
    let repo = init_repo();
    let head = git(repo.path(), &["rev-parse", "HEAD"]);
    git(repo.path(), &["checkout", "--quiet", "--detach", "HEAD"]);
    let backend = GitBackend::new();

    assert_eq!(backend.current_revision(repo.path()).unwrap(), head);
    with_revision(&backend, repo.path(), "v2", |_| Ok::<_, TestError>(())).unwrap();
    assert_eq!(git(repo.path(), &["rev-parse", "HEAD"]), head);
}

#[test]
fn test_not_a_repository_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = GitBackend::new().current_revision(dir.path()).unwrap_err();
    assert!(matches!(err, RevisionError::Command { .. }));
}

#[test]
fn test_dash_revision_keeps_uncommitted_edits() {
    let repo = init_repo();
    fs::write(repo.path().join("greet.rb"), "#:greet\nputs \"work in progress\"\n#:greet end\n").unwrap();
    let backend = GitBackend::new();

    let result: Result<(), TestError> = with_revision(&backend, repo.path(), "-f", |_| Ok(()));

    assert!(matches!(
        result,
        Err(TestError::Revision(RevisionError::OptionLikeRevision { .. }))
    ));
    let on_disk = fs::read_to_string(repo.path().join("greet.rb")).unwrap();
    assert!(on_disk.contains("work in progress"));
    assert_eq!(git(repo.path(), &["symbolic-ref", "--short", "HEAD"]), "main");
}

//! Integration tests for repository acquisition against local fixtures

mod support;

use repo_fetch::SourceError;
use repo_fetch::git::{
    Acquirer, FailureKind, OutputClassifier, RepositoryDescriptor, clone_repository,
    current_branch,
};
use support::{entry_count, init_git_repo, init_git_repo_with_refs, repo_url};
use tempfile::TempDir;

#[test]
fn test_clone_default_branch() {
    let temp_dir = TempDir::new().unwrap();
    let origin = temp_dir.path().join("origin");
    init_git_repo(&origin);
    let target = temp_dir.path().join("target");

    clone_repository(&target, &RepositoryDescriptor::new(repo_url(&origin))).unwrap();

    assert!(entry_count(&target) > 0);
    assert!(target.join("README.md").exists());
    assert!(target.join(".git").is_dir());
    assert_eq!(current_branch(&target).unwrap(), "main");
}

#[test]
fn test_clone_creates_nested_target() {
    let temp_dir = TempDir::new().unwrap();
    let origin = temp_dir.path().join("origin");
    init_git_repo(&origin);
    let target = temp_dir.path().join("a").join("b").join("c");

    clone_repository(&target, &RepositoryDescriptor::new(repo_url(&origin))).unwrap();

    assert!(target.join("README.md").exists());
}

#[cfg(unix)]
#[test]
fn test_created_target_has_no_world_access() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let origin = temp_dir.path().join("origin");
    init_git_repo(&origin);
    let target = temp_dir.path().join("private");

    clone_repository(&target, &RepositoryDescriptor::new(repo_url(&origin))).unwrap();

    let mode = std::fs::metadata(&target).unwrap().permissions().mode();
    assert_eq!(mode & 0o007, 0);
}

#[test]
fn test_clone_into_existing_empty_directory() {
    let temp_dir = TempDir::new().unwrap();
    let origin = temp_dir.path().join("origin");
    init_git_repo(&origin);
    let target = temp_dir.path().join("target");
    std::fs::create_dir(&target).unwrap();

    clone_repository(&target, &RepositoryDescriptor::new(repo_url(&origin))).unwrap();

    assert!(target.join("README.md").exists());
}

#[test]
fn test_clone_and_checkout_branch() {
    let temp_dir = TempDir::new().unwrap();
    let origin = temp_dir.path().join("origin");
    init_git_repo_with_refs(&origin);
    let target = temp_dir.path().join("target");

    let descriptor = RepositoryDescriptor::new(repo_url(&origin)).with_revision("dev");
    clone_repository(&target, &descriptor).unwrap();

    assert_eq!(current_branch(&target).unwrap(), "dev");
    assert!(target.join("dev.txt").exists());
}

#[test]
fn test_clone_and_checkout_tag_detaches_head() {
    let temp_dir = TempDir::new().unwrap();
    let origin = temp_dir.path().join("origin");
    init_git_repo_with_refs(&origin);
    let target = temp_dir.path().join("target");

    let descriptor = RepositoryDescriptor::new(repo_url(&origin)).with_revision("v1.0");
    clone_repository(&target, &descriptor).unwrap();

    assert_eq!(current_branch(&target).unwrap(), "HEAD");
    assert!(!target.join("dev.txt").exists());
}

#[test]
fn test_missing_revision_is_classified() {
    let temp_dir = TempDir::new().unwrap();
    let origin = temp_dir.path().join("origin");
    init_git_repo(&origin);
    let target = temp_dir.path().join("target");

    let descriptor =
        RepositoryDescriptor::new(repo_url(&origin)).with_revision("no-such-revision");
    let err = clone_repository(&target, &descriptor).unwrap_err();

    match &err {
        SourceError::RevisionNotFound { revision, .. } => {
            assert_eq!(revision, "no-such-revision");
        }
        other => panic!("expected RevisionNotFound, got {other:?}"),
    }
    assert!(err.to_string().contains("no-such-revision"));
    // The clone itself succeeded and is left in place.
    assert!(target.join("README.md").exists());
}

#[test]
fn test_second_acquisition_into_populated_target_fails() {
    let temp_dir = TempDir::new().unwrap();
    let origin = temp_dir.path().join("origin");
    init_git_repo(&origin);
    let target = temp_dir.path().join("target");
    let descriptor = RepositoryDescriptor::new(repo_url(&origin));

    clone_repository(&target, &descriptor).unwrap();
    let err = clone_repository(&target, &descriptor).unwrap_err();

    assert!(matches!(err, SourceError::Generic { .. }));
    assert!(err.to_string().contains("already exists"));
}

#[test]
fn test_missing_repository_fails() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing");
    let target = temp_dir.path().join("target");

    let err = clone_repository(&target, &RepositoryDescriptor::new(repo_url(&missing)))
        .unwrap_err();

    assert!(!matches!(err, SourceError::RevisionNotFound { .. }));
    assert!(err.output().is_some_and(|output| !output.is_empty()));
}

#[test]
fn test_custom_classifier_signature() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing");
    let target = temp_dir.path().join("target");

    // Local paths report "does not exist" instead of "not found".
    let classifier = OutputClassifier::default()
        .with_signature(FailureKind::RepoNotFound, "does not exist")
        .unwrap();
    let err = Acquirer::new(&classifier)
        .acquire(&target, &RepositoryDescriptor::new(repo_url(&missing)))
        .unwrap_err();

    match err {
        SourceError::RepoNotFound { url, .. } => assert_eq!(url, repo_url(&missing)),
        other => panic!("expected RepoNotFound, got {other:?}"),
    }
}

#[test]
fn test_token_never_appears_in_errors() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("target");
    let token = "s3cr3t-token-value";

    // Nothing listens on port 9 of the loopback address.
    let descriptor =
        RepositoryDescriptor::new("https://127.0.0.1:9/org/repo.git").with_access_token(token);
    let err = clone_repository(&target, &descriptor).unwrap_err();

    assert!(!err.to_string().contains(token));
    assert!(!err.output().unwrap_or_default().contains(token));
    assert!(!format!("{err:?}").contains(token));
    assert!(!format!("{descriptor:?}").contains(token));
}

#[test]
fn test_current_branch_outside_repository_fails() {
    let temp_dir = TempDir::new().unwrap();
    let err = current_branch(temp_dir.path()).unwrap_err();
    assert!(
        err.to_string()
            .starts_with("failed to get the branch from the repo")
    );
}

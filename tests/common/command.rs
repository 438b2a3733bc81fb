use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    let repository_dir = TempDir::new().expect("Failed to create temp dir");

    run_git_command(repository_dir.path(), &["init", "-q"])
        .assert()
        .success();
    // pin the unborn branch so the default branch setting of the host does not leak in
    run_git_command(
        repository_dir.path(),
        &["symbolic-ref", "HEAD", "refs/heads/master"],
    )
    .assert()
    .success();

    repository_dir
}

/// Repository on `master` with a `feature-test` branch and no remotes yet
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    git_commit(repository_dir.path(), "Initial commit")
        .assert()
        .success();

    run_git_command(repository_dir.path(), &["branch", "feature-test"])
        .assert()
        .success();

    repository_dir
}

/// Bare repository to push to and pull from
#[fixture]
pub fn remote_dir() -> TempDir {
    let remote_dir = TempDir::new().expect("Failed to create temp dir");

    run_git_command(remote_dir.path(), &["init", "-q", "--bare"])
        .assert()
        .success();

    remote_dir
}

/// `init_repository_dir` with `origin` pointing at `remote_dir`
#[fixture]
pub fn cloned_repository_dir(
    init_repository_dir: TempDir,
    remote_dir: TempDir,
) -> (TempDir, TempDir) {
    add_remote(init_repository_dir.path(), "origin", remote_dir.path());

    (init_repository_dir, remote_dir)
}

pub fn add_remote(dir: &Path, name: &str, url: &Path) {
    run_git_command(dir, &["remote", "add", name, &url.to_string_lossy()])
        .assert()
        .success();
}

pub fn run_gpp_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("gpp").expect("Failed to find gpp binary");
    cmd.envs(vec![("NO_COLOR", "1")]);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn run_git_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn git_commit(dir: &Path, message: &str) -> Command {
    let mut cmd = run_git_command(
        dir,
        &[
            "-c",
            "commit.gpgsign=false",
            "commit",
            "-q",
            "--allow-empty",
            "-m",
            message,
        ],
    );
    cmd.envs(vec![
        ("GIT_AUTHOR_NAME", "fake_user"),
        ("GIT_AUTHOR_EMAIL", "fake_email@email.com"),
        ("GIT_COMMITTER_NAME", "fake_user"),
        ("GIT_COMMITTER_EMAIL", "fake_email@email.com"),
    ]);
    cmd
}

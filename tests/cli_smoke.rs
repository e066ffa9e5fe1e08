use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_displays_usage() {
    Command::cargo_bin("dirclip")
        .expect("binary exists")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn version_matches_library() {
    Command::cargo_bin("dirclip")
        .expect("binary exists")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(dirclip::VERSION));
}

#[test]
fn generates_shell_completions() {
    Command::cargo_bin("dirclip")
        .expect("binary exists")
        .args(["--generate", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dirclip"));
}

#[test]
fn missing_directory_fails_without_confirmation() {
    let temp_dir = tempfile::tempdir().expect("temp dir");

    Command::cargo_bin("dirclip")
        .expect("binary exists")
        .arg(temp_dir.path().join("missing"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Target directory not found"));
}

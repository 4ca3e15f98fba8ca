// SPDX-License-Identifier: Apache-2.0

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_version() {
    let mut cmd = cargo_bin_cmd!("issuescout");
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("issuescout"));
}

#[test]
fn test_help_contains_all_commands() {
    let mut cmd = cargo_bin_cmd!("issuescout");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("analyze"));
}

#[test]
fn test_analyze_rejects_non_github_url() {
    let mut cmd = cargo_bin_cmd!("issuescout");
    cmd.env("ISSUESCOUT_CONFIG", "/nonexistent/issuescout/config.toml")
        .env_remove("GROQ_API_KEY")
        .env_remove("GITHUB_TOKEN")
        .arg("analyze")
        .arg("https://gitlab.com/owner/repo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid GitHub repository URL"));
}

#[test]
fn test_analyze_requires_url() {
    let mut cmd = cargo_bin_cmd!("issuescout");
    cmd.arg("analyze").assert().failure();
}

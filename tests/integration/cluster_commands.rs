//! End-to-end behavior of `cluster` and `component` that needs no real
//! terraform or kubectl: configuration errors and the destructive-action
//! gate all fail (or no-op) before any external tool would run.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn berth() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("berth"));
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Write a config whose asset dir lives inside the same temp dir.
fn write_config(dir: &tempfile::TempDir, body: &str) -> std::path::PathBuf {
    let asset_dir = dir.path().join("assets");
    let config = dir.path().join("cluster.yaml");
    let content = format!("platform: aws\nasset_dir: {}\n{body}", asset_dir.display());
    std::fs::write(&config, content).expect("write config");
    config
}

#[test]
fn destroy_without_confirm_warns_and_exits_nonzero() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = write_config(&dir, "");

    berth()
        .args(["cluster", "destroy", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("PERMANENT LOSS OF DATA"))
        .stderr(predicate::str::contains("--confirm"));
}

#[test]
fn destroy_of_a_never_created_cluster_succeeds() {
    // No terraform working directory exists, so "nothing to destroy" must
    // succeed without ever invoking terraform.
    let dir = tempfile::tempdir().expect("temp dir");
    let config = write_config(&dir, "");

    berth()
        .args(["cluster", "destroy", "--confirm", "--config"])
        .arg(&config)
        .assert()
        .success();
}

#[test]
fn missing_config_file_is_a_readable_error() {
    berth()
        .args(["cluster", "install", "--config", "/nonexistent/cluster.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn duplicate_component_names_abort_before_provisioning() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = write_config(
        &dir,
        "components:\n  - name: dns\n    manifest: {}\n  - name: dns\n    manifest: {}\n",
    );

    berth()
        .args(["cluster", "install", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate component name 'dns'"));

    let working = dir.path().join("assets").join("terraform");
    assert!(!working.exists(), "no working directory may be created");
}

#[test]
fn missing_platform_is_a_config_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = dir.path().join("cluster.yaml");
    std::fs::write(&config, "platform: \"\"\nasset_dir: /tmp/x\n").expect("write config");

    berth()
        .args(["cluster", "install", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("platform"));
}

#[test]
fn component_install_rejects_undeclared_names() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = write_config(&dir, "components:\n  - name: dns\n    manifest: {}\n");

    berth()
        .args(["component", "install", "metrics", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("'metrics'"));
}

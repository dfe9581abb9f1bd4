//! CLI tests for the `generator` binary.
//!
//! Runs are seeded with a cached archive so no network access is needed.

use std::fs;
use std::process::Command;

use generator::exit_codes;
use generator::test_support::{icon_archive, seed_project};

fn generator() -> Command {
    Command::new(env!("CARGO_BIN_EXE_generator"))
}

#[test]
fn missing_settings_exits_with_invalid_code() {
    let temp = tempfile::tempdir().expect("tempdir");

    let output = generator()
        .args(["--root"])
        .arg(temp.path())
        .arg("generate")
        .output()
        .expect("run generator");

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load the settings file"), "{stderr}");
    assert!(!temp.path().join("temp").exists());
    assert!(!temp.path().join("dist").exists());
}

#[test]
fn generate_from_cache_succeeds() {
    let temp = tempfile::tempdir().expect("tempdir");
    seed_project(temp.path());
    fs::create_dir_all(temp.path().join("cache")).expect("mkdir cache");
    fs::write(
        temp.path().join("cache/v1.zip"),
        icon_archive(&["account", "account-box"]),
    )
    .expect("seed cache");

    let output = generator()
        .arg("--root")
        .arg(temp.path())
        .arg("generate")
        .output()
        .expect("run generator");

    assert_eq!(
        output.status.code(),
        Some(exit_codes::OK),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("icons=2 subgroups=1 source=Cache"), "{stdout}");
    assert!(temp.path().join("dist/graphics/signal/mdi-account-box.png").exists());
    assert!(temp.path().join("dist/locale/en/mdi_signals.cfg").exists());
    assert!(!temp.path().join("temp").exists());
}

#[test]
fn pipeline_failure_exits_with_failed_code() {
    let temp = tempfile::tempdir().expect("tempdir");
    seed_project(temp.path());
    fs::create_dir_all(temp.path().join("cache")).expect("mkdir cache");
    fs::write(temp.path().join("cache/v1.zip"), b"not a zip").expect("seed cache");

    let status = generator()
        .arg("--root")
        .arg(temp.path())
        .arg("generate")
        .status()
        .expect("run generator");

    assert_eq!(status.code(), Some(exit_codes::FAILED));
    assert!(!temp.path().join("temp").exists());
}

#[test]
fn cache_list_and_clean() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::create_dir_all(temp.path().join("cache")).expect("mkdir cache");
    fs::create_dir_all(temp.path().join("dist")).expect("mkdir dist");
    fs::write(temp.path().join("cache/v2.zip"), b"").expect("write");
    fs::write(temp.path().join("cache/v1.zip"), b"").expect("write");

    let output = generator()
        .arg("--root")
        .arg(temp.path())
        .args(["cache", "list"])
        .output()
        .expect("cache list");
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "v1\nv2\n");

    let status = generator()
        .arg("--root")
        .arg(temp.path())
        .arg("clean")
        .status()
        .expect("clean");
    assert_eq!(status.code(), Some(exit_codes::OK));
    assert!(!temp.path().join("dist").exists());
    assert!(temp.path().join("cache").exists());
}

#[test]
fn unknown_flag_exits_with_invalid_code() {
    let temp = tempfile::tempdir().expect("tempdir");

    let output = generator()
        .arg("--root")
        .arg(temp.path())
        .args(["generate", "--bogus"])
        .output()
        .expect("run generator");

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(String::from_utf8_lossy(&output.stderr).contains("--bogus"));
    assert!(!temp.path().join("temp").exists());
}

#[test]
fn help_exits_with_ok_code() {
    let output = generator().arg("--help").output().expect("run generator");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(String::from_utf8_lossy(&output.stdout).contains("generate"));
}

#[test]
fn clean_io_failure_exits_with_failed_code() {
    let temp = tempfile::tempdir().expect("tempdir");
    // A plain file where the output directory should be cannot be removed as a directory.
    fs::write(temp.path().join("dist"), b"not a directory").expect("write");

    let status = generator()
        .arg("--root")
        .arg(temp.path())
        .arg("clean")
        .status()
        .expect("clean");

    assert_eq!(status.code(), Some(exit_codes::FAILED));
}

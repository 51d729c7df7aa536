//! Shared test helpers for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo;
use assert_cmd::Command;
use doorkit::core::Catalog;
use tempfile::TempDir;

/// Home directory for test runs; never created, so no per-user config exists
pub fn isolated_home() -> PathBuf {
    Path::new(env!("CARGO_TARGET_TMPDIR")).join("doorkit-home")
}

/// Helper to get a doorkit command isolated from any user config
pub fn doorkit() -> Command {
    let home = isolated_home();
    let mut cmd = Command::new(cargo::cargo_bin!("doorkit"));
    cmd.env_remove("DOORKIT_CONFIG")
        .env_remove("RUST_LOG")
        .env("HOME", &home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("APPDATA", home.join("AppData"));
    cmd
}

/// Helper to get a doorkit command pointed at an explicit config file
pub fn doorkit_with_config(config: &Path) -> Command {
    let mut cmd = doorkit();
    cmd.arg("--config").arg(config);
    cmd
}

/// The built-in catalog
pub fn catalog() -> Catalog {
    Catalog::embedded().expect("embedded catalog should load")
}

/// Write a config file into a fresh temp directory
pub fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.yaml");
    fs::write(&path, contents).unwrap();
    (tmp, path)
}

/// Assert two lengths agree to the thousandth
pub fn assert_inches(actual: Option<doorkit::core::Inches>, expected: f64) {
    let actual = actual.expect("length should be present").value();
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {:.3}, got {:.3}",
        expected,
        actual
    );
}

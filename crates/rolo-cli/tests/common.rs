//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation. This is a standard pattern
//! for Rust integration test fixtures.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestFixture {
    _temp_dir: TempDir,
    data_dir: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".rolo");

        fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            _temp_dir: temp_dir,
            data_dir,
        }
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    /// Command pinned to this fixture's data dir and kept off the network.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("rolo").expect("Failed to find rolo binary");
        cmd.arg("--data-dir")
            .arg(self.data_dir.to_str().unwrap())
            .arg("--offline");
        cmd
    }

    /// Add a contact through the CLI and return its generated id.
    pub fn add_contact(&self, first: &str, last: &str, email: &str, phone: &str) -> String {
        let output = self
            .command()
            .arg("add")
            .arg("--first")
            .arg(first)
            .arg("--last")
            .arg(last)
            .arg("--email")
            .arg(email)
            .arg("--phone")
            .arg(phone)
            .arg("--format")
            .arg("json")
            .output()
            .expect("Failed to run add");

        assert!(output.status.success(), "add failed: {:?}", output);
        let contact: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("add output should be JSON");
        contact["id"]
            .as_str()
            .expect("added contact should have an id")
            .to_string()
    }

    pub fn list_json(&self, extra_args: &[&str]) -> serde_json::Value {
        let mut cmd = self.command();
        cmd.arg("list").arg("--format").arg("json");
        for arg in extra_args {
            cmd.arg(arg);
        }
        let output = cmd.output().expect("Failed to run list");
        assert!(output.status.success(), "list failed: {:?}", output);
        serde_json::from_slice(&output.stdout).expect("list output should be JSON")
    }
}

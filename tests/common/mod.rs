//! Shared testing utilities for sacredfw CLI tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `sacredfw` binary within
    /// the default working directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("sacredfw").expect("Failed to locate sacredfw binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Path to the framework root created by a bare `init`.
    pub fn framework_path(&self) -> PathBuf {
        self.work_dir.join("sacred_framework")
    }

    /// Path to the framework log file.
    pub fn log_path(&self) -> PathBuf {
        self.framework_path().join("logs/framework.log")
    }

    /// Read the framework log.
    pub fn read_log(&self) -> String {
        fs::read_to_string(self.log_path()).expect("Failed to read framework log")
    }

    /// Number of lines currently in the framework log.
    pub fn log_line_count(&self) -> usize {
        self.read_log().lines().count()
    }

    /// Assert that the full directory structure exists.
    pub fn assert_framework_structure_exists(&self) {
        let root = self.framework_path();
        assert!(root.is_dir(), "framework root should exist");
        for dir in ["scripts", "resources", "logs", "docs"] {
            assert!(root.join(dir).is_dir(), "{dir} directory should exist");
        }
        assert!(self.log_path().is_file(), "log file should exist");
    }

    /// Assert that all four module scripts exist under `scripts/`.
    pub fn assert_module_scripts_exist(&self) {
        let scripts = self.framework_path().join("scripts");
        for name in [
            "neural_network_training.py",
            "speech_recognition.py",
            "image_generation.py",
            "energy_visualization.py",
        ] {
            assert!(scripts.join(name).is_file(), "script {name} should exist");
        }
    }
}

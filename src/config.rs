//! Framework path configuration.
//!
//! All framework locations derive from a single root directory. Nothing here
//! touches the filesystem; accessors are pure so every component can be
//! handed an explicit `FrameworkPaths` instead of reading ambient state.

use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Default framework root directory name, created under the current directory.
pub const ROOT_DIR: &str = "sacred_framework";

/// The framework log file name inside `logs/`.
pub const LOG_FILE: &str = "framework.log";

/// Resolved locations of the framework workspace.
#[derive(Debug, Clone)]
pub struct FrameworkPaths {
    root: PathBuf,
}

impl FrameworkPaths {
    /// Create a path set rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a path set rooted at `./sacred_framework`.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd.join(ROOT_DIR)))
    }

    /// The framework root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/scripts`
    pub fn scripts_dir(&self) -> PathBuf {
        self.root.join("scripts")
    }

    /// `<root>/resources`
    pub fn resources_dir(&self) -> PathBuf {
        self.root.join("resources")
    }

    /// `<root>/logs`
    pub fn logs_dir(&self) -> PathBuf {
        self.root.join("logs")
    }

    /// `<root>/docs`
    pub fn docs_dir(&self) -> PathBuf {
        self.root.join("docs")
    }

    /// `<root>/logs/framework.log`
    pub fn log_file(&self) -> PathBuf {
        self.logs_dir().join(LOG_FILE)
    }

    /// `<root>/scripts/<name>`
    pub fn script_path(&self, name: &str) -> PathBuf {
        self.scripts_dir().join(name)
    }

    /// `<root>/docs/README.md`
    pub fn readme_path(&self) -> PathBuf {
        self.docs_dir().join("README.md")
    }
}

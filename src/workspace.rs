//! Workspace operations for the framework directory tree.

use std::fs;

use sha2::{Digest, Sha256};

use crate::bundle;
use crate::config::FrameworkPaths;
use crate::error::AppError;
use crate::logger::Logger;

/// Represents the framework workspace rooted at a configured directory.
#[derive(Debug, Clone)]
pub struct Workspace {
    paths: FrameworkPaths,
}

impl Workspace {
    /// Create a workspace instance for the given path set.
    pub fn new(paths: FrameworkPaths) -> Self {
        Self { paths }
    }

    /// The workspace path set.
    pub fn paths(&self) -> &FrameworkPaths {
        &self.paths
    }

    /// Check if the framework root exists.
    pub fn exists(&self) -> bool {
        self.paths.root().exists()
    }

    /// Create the framework directory tree and the empty log file.
    ///
    /// Every step is create-if-absent; re-running against an initialized
    /// root changes nothing. The root is created first, the log file last,
    /// after `logs/` exists.
    pub fn create_structure(&self) -> Result<(), AppError> {
        let dirs = [
            self.paths.root().to_path_buf(),
            self.paths.scripts_dir(),
            self.paths.resources_dir(),
            self.paths.logs_dir(),
            self.paths.docs_dir(),
        ];

        for dir in &dirs {
            fs::create_dir_all(dir)?;
        }

        let log_file = self.paths.log_file();
        if !log_file.exists() {
            fs::write(&log_file, "")?;
        }

        Ok(())
    }

    /// Write the four module scripts into `scripts/`, overwriting any
    /// existing content.
    ///
    /// Each script is verified after the write by reading it back and
    /// comparing content hashes. A failed write or verification is logged
    /// and the remaining scripts are still processed.
    pub fn write_module_scripts(&self, logger: &Logger) -> Result<(), AppError> {
        for script in bundle::module_scripts() {
            match self.deploy_script(script) {
                Ok(true) => {
                    logger.log(&format!("Module script ready: {}", script.name))?;
                }
                Ok(false) => {
                    logger.log(&format!(
                        "Module script verification failed: {}",
                        script.name
                    ))?;
                }
                Err(err) => {
                    logger.log(&format!(
                        "Module script could not be written: {} ({err})",
                        script.name
                    ))?;
                }
            }
        }

        Ok(())
    }

    fn deploy_script(&self, script: &bundle::ModuleScript) -> Result<bool, AppError> {
        let path = self.paths.script_path(script.name);
        fs::write(&path, script.content)?;
        let actual = fs::read_to_string(&path)?;
        Ok(hash_content(&actual) == hash_content(script.content))
    }

    /// Write `docs/README.md` if it does not already exist.
    ///
    /// Returns `true` when the file was written. An existing README is
    /// left untouched even if its content diverges from the bundle, and
    /// nothing is logged for that branch.
    pub fn write_readme(&self, logger: &Logger) -> Result<bool, AppError> {
        let readme = self.paths.readme_path();
        if readme.exists() {
            return Ok(false);
        }

        fs::write(&readme, bundle::readme_content())?;
        logger.log("Framework documentation written to docs/README.md")?;
        Ok(true)
    }
}

/// Compute a SHA-256 hash of content for comparison.
pub(crate) fn hash_content(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}

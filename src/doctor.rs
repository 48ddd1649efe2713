//! Validation of a deployed framework workspace.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::bundle;
use crate::config::FrameworkPaths;
use crate::error::AppError;
use crate::workspace::hash_content;

/// A single problem found in the workspace.
#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    /// Path the problem was found at.
    pub path: String,
    /// What is wrong.
    pub message: String,
}

/// Accumulated findings from a workspace check.
#[derive(Debug, Default, Serialize)]
pub struct Diagnostics {
    issues: Vec<Issue>,
}

impl Diagnostics {
    fn push(&mut self, path: &Path, message: impl Into<String>) {
        self.issues.push(Issue { path: path.display().to_string(), message: message.into() });
    }

    /// Findings, in check order.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Number of findings.
    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }

    /// True when no findings were recorded.
    pub fn is_healthy(&self) -> bool {
        self.issues.is_empty()
    }

    /// Serialize the findings for machine consumption.
    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Check the deployed workspace against the expected structure and content.
pub fn execute(paths: &FrameworkPaths) -> Diagnostics {
    let mut diagnostics = Diagnostics::default();

    ensure_directory(paths.root(), &mut diagnostics);
    ensure_directory(&paths.scripts_dir(), &mut diagnostics);
    ensure_directory(&paths.resources_dir(), &mut diagnostics);
    ensure_directory(&paths.logs_dir(), &mut diagnostics);
    ensure_directory(&paths.docs_dir(), &mut diagnostics);

    if !paths.log_file().is_file() {
        diagnostics.push(&paths.log_file(), "Missing log file");
    }
    if !paths.readme_path().is_file() {
        diagnostics.push(&paths.readme_path(), "Missing README");
    }

    for script in bundle::module_scripts() {
        let path = paths.script_path(script.name);
        match fs::read_to_string(&path) {
            Ok(actual) if hash_content(&actual) == hash_content(script.content) => {}
            Ok(_) => diagnostics.push(&path, "Module script diverges from the deployed bundle"),
            Err(err) => diagnostics.push(&path, format!("Unreadable module script: {err}")),
        }
    }

    diagnostics
}

fn ensure_directory(path: &Path, diagnostics: &mut Diagnostics) {
    if !path.is_dir() {
        diagnostics.push(path, "Missing directory");
    }
}

//! Timestamped framework logging.
//!
//! Every framework event is recorded twice: appended as one line to
//! `logs/framework.log` and mirrored to stdout. Entries are append-only;
//! nothing ever rewrites a prior line.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::config::FrameworkPaths;
use crate::error::AppError;

/// Log line timestamp format.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Appends timestamped lines to the framework log file and the console.
#[derive(Debug, Clone)]
pub struct Logger {
    log_file: PathBuf,
}

impl Logger {
    /// Create a logger targeting the framework log file.
    pub fn new(paths: &FrameworkPaths) -> Self {
        Self { log_file: paths.log_file() }
    }

    /// Record one event.
    ///
    /// The parent `logs/` directory must already exist; a missing or
    /// unwritable directory fails the call.
    pub fn log(&self, message: &str) -> Result<(), AppError> {
        let line = format!("{} - {}", chrono::Local::now().format(TIMESTAMP_FORMAT), message);
        let mut file = OpenOptions::new().append(true).create(true).open(&self.log_file)?;
        writeln!(file, "{line}")?;
        println!("{line}");
        Ok(())
    }
}

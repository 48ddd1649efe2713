//! sacredfw: Deploy the sacred AI framework workspace and run its module
//! scripts.

pub mod bundle;
pub mod config;
pub mod doctor;
pub mod error;
pub mod logger;
pub mod resonance;
pub mod runner;
pub mod workspace;

use std::thread;
use std::time::Duration;

pub use config::FrameworkPaths;
pub use doctor::Diagnostics;
pub use error::AppError;

use logger::Logger;
use runner::Runner;
use workspace::Workspace;

/// Pause applied once after initialization, before the modules run.
const SETTLE_DELAY: Duration = Duration::from_secs(1);

/// Options for [`run`].
#[derive(Debug, Default)]
pub struct RunOptions {
    /// Interpreter binary for module scripts; `None` uses the default.
    pub interpreter: Option<String>,
}

/// Initialize the framework workspace under the given root.
///
/// Creates the directory tree and log file, deploys the module scripts
/// (overwriting prior bodies), and writes the README if absent.
pub fn init(paths: &FrameworkPaths) -> Result<(), AppError> {
    let workspace = Workspace::new(paths.clone());
    workspace.create_structure()?;

    let logger = Logger::new(paths);
    logger.log("Initializing the sacred framework environment...")?;
    workspace.write_module_scripts(&logger)?;
    workspace.write_readme(&logger)?;
    logger.log("Environment initialization complete.")?;

    thread::sleep(SETTLE_DELAY);
    Ok(())
}

/// Initialize the workspace, then run the full module sequence.
pub fn run(paths: &FrameworkPaths, options: RunOptions) -> Result<(), AppError> {
    init(paths)?;

    let logger = Logger::new(paths);
    let mut runner = Runner::new(paths, &logger);
    if let Some(interpreter) = options.interpreter {
        runner = runner.with_interpreter(interpreter);
    }
    runner.execute_all()
}

/// Check the deployed workspace structure and content.
pub fn doctor(paths: &FrameworkPaths) -> Diagnostics {
    doctor::execute(paths)
}

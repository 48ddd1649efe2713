//! Sequential execution of the framework module scripts.

use std::process::Command;

use crate::bundle::{self, ModuleScript};
use crate::config::FrameworkPaths;
use crate::error::AppError;
use crate::logger::Logger;
use crate::resonance;

/// Interpreter used for module scripts.
pub const DEFAULT_INTERPRETER: &str = "python3";

/// Invokes the module scripts one after another as external processes.
///
/// Each invocation blocks until the child exits and inherits this process's
/// stdout/stderr, so module output interleaves with the framework log on
/// the console. A module that fails to start or exits non-zero is logged
/// and the sequence continues; there are no retries and no timeout.
#[derive(Debug)]
pub struct Runner<'a> {
    paths: &'a FrameworkPaths,
    logger: &'a Logger,
    interpreter: String,
}

impl<'a> Runner<'a> {
    /// Create a runner using the default interpreter.
    pub fn new(paths: &'a FrameworkPaths, logger: &'a Logger) -> Self {
        Self { paths, logger, interpreter: DEFAULT_INTERPRETER.to_string() }
    }

    /// Replace the interpreter binary.
    pub fn with_interpreter(mut self, interpreter: impl Into<String>) -> Self {
        self.interpreter = interpreter.into();
        self
    }

    /// Run all module scripts in bundle order, apply the resonance
    /// correction, and log completion.
    pub fn execute_all(&self) -> Result<(), AppError> {
        for script in bundle::module_scripts() {
            self.logger.log(&format!("Running {} module...", script.label))?;
            self.invoke(script)?;
        }

        resonance::sacred_resonance_correction(self.logger)?;
        self.logger.log("All framework modules completed.")?;
        Ok(())
    }

    fn invoke(&self, script: &ModuleScript) -> Result<(), AppError> {
        let path = self.paths.script_path(script.name);
        match Command::new(&self.interpreter).arg(&path).status() {
            Ok(status) if status.success() => Ok(()),
            Ok(status) => {
                self.logger.log(&format!("Module {} exited with {status}", script.label))
            }
            Err(err) => {
                self.logger
                    .log(&format!("Module {} could not be started: {err}", script.label))
            }
        }
    }
}

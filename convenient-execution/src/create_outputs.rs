//! Output preparation
//!
//! [`CreateOutputsStep`] makes sure every declared output location can be
//! written to before the wrapped step runs the action:
//! - directory outputs get the directory itself created
//! - file outputs get their parent directory created, never the file
//!
//! Roots without a configured value are skipped.

use crate::error::{ExecutionError, Result};
use crate::fs::{DirectoryCreator, LocalDirectories};
use crate::step::{ExecutionResult, Step};
use crate::work::{OutputFileProperty, OutputType, UnitOfWork};
use std::path::Path;
use tracing::debug;

/// Step that creates output locations, then delegates once to its inner step
#[derive(Debug)]
pub struct CreateOutputsStep<S, D = LocalDirectories> {
    delegate: S,
    directories: D,
}

impl<S: Step> CreateOutputsStep<S> {
    /// Wrap `delegate`, creating directories on the local filesystem
    pub fn new(delegate: S) -> Self {
        Self::with_directories(delegate, LocalDirectories)
    }
}

impl<S: Step, D: DirectoryCreator> CreateOutputsStep<S, D> {
    /// Wrap `delegate`, creating directories through `directories`
    pub fn with_directories(delegate: S, directories: D) -> Self {
        Self {
            delegate,
            directories,
        }
    }

    fn ensure_output(&self, output: &OutputFileProperty, root: Option<&Path>) -> Result<()> {
        let Some(root) = root else {
            debug!(
                "Not ensuring directory exists for property {}, because no value is configured",
                output.name
            );
            return Ok(());
        };

        match output.output_type {
            OutputType::Directory => {
                debug!(
                    "Ensuring directory exists for property {} at {}",
                    output.name,
                    root.display()
                );
                self.create(output, root)
            }
            OutputType::File => match root.parent() {
                Some(parent) => {
                    debug!(
                        "Ensuring parent directory exists for property {} at {}",
                        output.name,
                        root.display()
                    );
                    self.create(output, parent)
                }
                None => {
                    debug!(
                        "Not ensuring parent directory for property {}, {} has no parent",
                        output.name,
                        root.display()
                    );
                    Ok(())
                }
            },
        }
    }

    fn create(&self, output: &OutputFileProperty, path: &Path) -> Result<()> {
        self.directories
            .create_dir_all(path)
            .map_err(|source| ExecutionError::CreateOutput {
                property: output.name.clone(),
                path: path.to_path_buf(),
                source,
            })
    }
}

impl<S: Step, D: DirectoryCreator> Step for CreateOutputsStep<S, D> {
    fn execute(&self, work: &dyn UnitOfWork) -> Result<ExecutionResult> {
        for output in work.outputs() {
            for root in &output.roots {
                self.ensure_output(output, root.as_deref())?;
            }
        }
        self.delegate.execute(work)
    }
}

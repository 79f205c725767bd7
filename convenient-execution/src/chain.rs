//! Chain assembly
//!
//! The chain is built once per build from an [`ExecutionConfig`] and then
//! reused, unchanged, for every unit of work.

use crate::create_outputs::CreateOutputsStep;
use crate::error::Result;
use crate::fs::{DirectoryCreator, LocalDirectories};
use crate::step::{ExecuteStep, ExecutionResult, Step};
use crate::work::UnitOfWork;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which stages the execution chain is built with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionConfig {
    /// Create declared output locations before running actions
    pub create_outputs: bool,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            create_outputs: true,
        }
    }
}

/// Assembled chain of steps ending in [`ExecuteStep`]
pub struct ExecutionChain {
    root: Box<dyn Step>,
}

impl ExecutionChain {
    /// Build the chain, creating directories on the local filesystem
    #[must_use]
    pub fn new(config: &ExecutionConfig) -> Self {
        Self::with_directories(config, LocalDirectories)
    }

    /// Build the chain with a custom directory creator
    pub fn with_directories<D>(config: &ExecutionConfig, directories: D) -> Self
    where
        D: DirectoryCreator + 'static,
    {
        let root: Box<dyn Step> = if config.create_outputs {
            Box::new(CreateOutputsStep::with_directories(ExecuteStep, directories))
        } else {
            Box::new(ExecuteStep)
        };
        debug!(
            "Assembled execution chain (create outputs: {})",
            config.create_outputs
        );

        Self { root }
    }
}

impl Step for ExecutionChain {
    fn execute(&self, work: &dyn UnitOfWork) -> Result<ExecutionResult> {
        self.root.execute(work)
    }
}

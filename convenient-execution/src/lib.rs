//! Execution core for incremental builds.
//!
//! This crate defines what happens between "the scheduler picked a unit of
//! work" and "the scheduler got a result back":
//!
//! - **Outcomes**: every attempt ends as `NO-SOURCE`, `UP-TO-DATE`,
//!   `FROM-CACHE`, `EXECUTED` or `FAILED`; a failed result always carries
//!   its cause
//! - **Steps**: stages that each own one inner stage and wrap the terminal
//!   action-running step
//! - **Output preparation**: declared output directories (or parents of
//!   output files) exist before the action runs
//!
//! Deciding whether work is up to date or cacheable is left to other
//! components; they report their decisions through [`WorkOutcome`].
//!
//! # Example
//!
//! ```no_run
//! use convenient_execution::{
//!     ActionError, ExecutionChain, ExecutionConfig, OutputFileProperty, Step, UnitOfWork,
//!     WorkOutcome,
//! };
//!
//! struct Compile {
//!     outputs: Vec<OutputFileProperty>,
//! }
//!
//! impl UnitOfWork for Compile {
//!     fn display_name(&self) -> String {
//!         "busybox:do_compile".to_string()
//!     }
//!
//!     fn outputs(&self) -> &[OutputFileProperty] {
//!         &self.outputs
//!     }
//!
//!     fn execute(&self) -> Result<bool, ActionError> {
//!         std::fs::write("build/busybox/busybox", b"...")?;
//!         Ok(true)
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let chain = ExecutionChain::new(&ExecutionConfig::default());
//! let work = Compile {
//!     outputs: vec![OutputFileProperty::file("binary", "build/busybox/busybox")],
//! };
//!
//! let result = chain.execute(&work)?;
//! assert_eq!(result.outcome(), WorkOutcome::Executed);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![warn(unused_results)]

pub mod chain;
pub mod create_outputs;
pub mod error;
pub mod fs;
pub mod outcome;
pub mod step;
pub mod work;

pub use chain::{ExecutionChain, ExecutionConfig};
pub use create_outputs::CreateOutputsStep;
pub use error::{ActionError, ExecutionError, Result};
pub use fs::{DirectoryCreator, LocalDirectories};
pub use outcome::{FailureCause, WorkOutcome, WorkResult};
pub use step::{ExecuteStep, ExecutionResult, Step};
pub use work::{OutputFileProperty, OutputType, UnitOfWork};

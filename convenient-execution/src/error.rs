//! Error types for the execution core

use crate::outcome::WorkOutcome;
use std::path::PathBuf;

/// Error raised by the action of a unit of work.
///
/// The terminal step captures it into a failed [`WorkResult`](crate::WorkResult)
/// instead of propagating it.
pub type ActionError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that abort an execution attempt
#[derive(Debug, thiserror::Error)]
pub enum ExecutionError {
    /// A success result was requested for an outcome that needs a cause
    #[error("Outcome {0} cannot be turned into a result without a failure cause")]
    UnsupportedOutcome(WorkOutcome),

    /// A result was constructed that breaks the failure/outcome pairing
    #[error("Invalid result for outcome {outcome}: {reason}")]
    InvalidResult {
        /// Outcome the result was built for
        outcome: WorkOutcome,
        /// What was wrong with it
        reason: &'static str,
    },

    /// An output type name that is neither a directory nor a file
    #[error("Invalid output type: {0}")]
    InvalidOutputType(String),

    /// Creating the location of a declared output failed
    #[error("Failed to create output location {} for property '{property}': {source}", .path.display())]
    CreateOutput {
        /// Name of the output property
        property: String,
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Result type for execution operations
pub type Result<T, E = ExecutionError> = std::result::Result<T, E>;

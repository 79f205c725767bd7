//! Work outcomes and results
//!
//! An outcome classifies how an execution attempt ended. A result pairs the
//! outcome with the cause of a failure. Only [`WorkOutcome::Failed`] may carry
//! a cause, and it must always carry one.

use crate::error::{ActionError, ExecutionError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// How an execution attempt concluded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkOutcome {
    /// The work had no inputs to process
    NoSource,

    /// Outputs were already up to date
    UpToDate,

    /// Outputs were restored from the build cache
    FromCache,

    /// The action ran
    Executed,

    /// The action failed
    Failed,
}

static NO_SOURCE: WorkResult = WorkResult::success(WorkOutcome::NoSource);
static UP_TO_DATE: WorkResult = WorkResult::success(WorkOutcome::UpToDate);
static FROM_CACHE: WorkResult = WorkResult::success(WorkOutcome::FromCache);
static EXECUTED: WorkResult = WorkResult::success(WorkOutcome::Executed);

impl WorkOutcome {
    /// Every outcome, in declaration order
    pub const ALL: [WorkOutcome; 5] = [
        WorkOutcome::NoSource,
        WorkOutcome::UpToDate,
        WorkOutcome::FromCache,
        WorkOutcome::Executed,
        WorkOutcome::Failed,
    ];

    /// Shared result for a successful outcome.
    ///
    /// # Errors
    ///
    /// [`WorkOutcome::Failed`] has no result without a cause and returns
    /// [`ExecutionError::UnsupportedOutcome`]. Use [`WorkResult::failed`].
    pub fn as_result(self) -> Result<&'static WorkResult> {
        match self {
            WorkOutcome::NoSource => Ok(&NO_SOURCE),
            WorkOutcome::UpToDate => Ok(&UP_TO_DATE),
            WorkOutcome::FromCache => Ok(&FROM_CACHE),
            WorkOutcome::Executed => Ok(&EXECUTED),
            WorkOutcome::Failed => Err(ExecutionError::UnsupportedOutcome(self)),
        }
    }

    /// Whether this outcome reports a failure
    #[must_use]
    pub fn is_failure(self) -> bool {
        matches!(self, WorkOutcome::Failed)
    }

    /// Whether the action actually ran to completion
    #[must_use]
    pub fn did_work(self) -> bool {
        matches!(self, WorkOutcome::Executed)
    }
}

impl fmt::Display for WorkOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSource => write!(f, "NO-SOURCE"),
            Self::UpToDate => write!(f, "UP-TO-DATE"),
            Self::FromCache => write!(f, "FROM-CACHE"),
            Self::Executed => write!(f, "EXECUTED"),
            Self::Failed => write!(f, "FAILED"),
        }
    }
}

/// Cause attached to a failed result
pub type FailureCause = Arc<dyn std::error::Error + Send + Sync>;

/// An outcome together with the cause of a failure
#[derive(Debug, Clone)]
pub struct WorkResult {
    outcome: WorkOutcome,
    failure: Option<FailureCause>,
}

impl WorkResult {
    const fn success(outcome: WorkOutcome) -> Self {
        Self {
            outcome,
            failure: None,
        }
    }

    /// Build a failed result from the error that caused it
    pub fn failed(cause: impl Into<ActionError>) -> Self {
        Self {
            outcome: WorkOutcome::Failed,
            failure: Some(Arc::from(cause.into())),
        }
    }

    /// Build a result, checking that a cause is given exactly when the
    /// outcome is [`WorkOutcome::Failed`].
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError::InvalidResult`] when the pairing is broken.
    pub fn new(outcome: WorkOutcome, failure: Option<FailureCause>) -> Result<Self> {
        match (outcome, failure) {
            (WorkOutcome::Failed, None) => Err(ExecutionError::InvalidResult {
                outcome,
                reason: "a failed result needs a cause",
            }),
            (WorkOutcome::Failed, failure @ Some(_)) => Ok(Self { outcome, failure }),
            (_, Some(_)) => Err(ExecutionError::InvalidResult {
                outcome,
                reason: "only a failed result may carry a cause",
            }),
            (_, None) => Ok(Self::success(outcome)),
        }
    }

    /// Outcome of the attempt
    #[must_use]
    pub fn outcome(&self) -> WorkOutcome {
        self.outcome
    }

    /// Cause of the failure, present only for failed results
    #[must_use]
    pub fn failure(&self) -> Option<&FailureCause> {
        self.failure.as_ref()
    }
}

impl PartialEq for WorkResult {
    fn eq(&self, other: &Self) -> bool {
        self.outcome == other.outcome
            && match (&self.failure, &other.failure) {
                (None, None) => true,
                (Some(a), Some(b)) => Arc::ptr_eq(a, b),
                _ => false,
            }
    }
}

impl Eq for WorkResult {}

impl fmt::Display for WorkResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.failure {
            Some(cause) => write!(f, "{}: {}", self.outcome, cause),
            None => write!(f, "{}", self.outcome),
        }
    }
}

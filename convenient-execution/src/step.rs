//! Execution steps
//!
//! A step turns a unit of work into an [`ExecutionResult`]. Steps compose by
//! owning exactly one inner step: each does its own work before and/or
//! after delegating inward, down to the terminal [`ExecuteStep`] which runs
//! the action itself.

use crate::error::Result;
use crate::outcome::{FailureCause, WorkOutcome, WorkResult};
use crate::work::UnitOfWork;
use chrono::{DateTime, Utc};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Result of one execution attempt as it flows back through the chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    result: WorkResult,

    /// When the attempt started
    started_at: DateTime<Utc>,

    /// Time spent in the action
    duration: Duration,
}

impl ExecutionResult {
    /// Create a result with its timing metadata
    #[must_use]
    pub fn new(result: WorkResult, started_at: DateTime<Utc>, duration: Duration) -> Self {
        Self {
            result,
            started_at,
            duration,
        }
    }

    /// Result of the attempt
    #[must_use]
    pub fn result(&self) -> &WorkResult {
        &self.result
    }

    /// Shorthand for `result().outcome()`
    #[must_use]
    pub fn outcome(&self) -> WorkOutcome {
        self.result.outcome()
    }

    /// Shorthand for `result().failure()`
    #[must_use]
    pub fn failure(&self) -> Option<&FailureCause> {
        self.result.failure()
    }

    /// When the attempt started
    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Time spent in the action
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Take the result, dropping the timing metadata
    #[must_use]
    pub fn into_result(self) -> WorkResult {
        self.result
    }
}

/// One link in the execution chain
pub trait Step: Send + Sync {
    /// Execute the work, delegating to the inner step if there is one.
    ///
    /// # Errors
    ///
    /// Errors from the step's own logic are returned as-is and abort the
    /// attempt. A failing action is reported as a [`WorkOutcome::Failed`]
    /// result instead.
    fn execute(&self, work: &dyn UnitOfWork) -> Result<ExecutionResult>;
}

impl<S: Step + ?Sized> Step for Box<S> {
    fn execute(&self, work: &dyn UnitOfWork) -> Result<ExecutionResult> {
        (**self).execute(work)
    }
}

/// Terminal step running the action of the unit of work
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecuteStep;

impl Step for ExecuteStep {
    fn execute(&self, work: &dyn UnitOfWork) -> Result<ExecutionResult> {
        let started_at = Utc::now();
        let start = Instant::now();

        let result = match work.execute() {
            Ok(true) => WorkOutcome::Executed.as_result()?.clone(),
            Ok(false) => WorkOutcome::UpToDate.as_result()?.clone(),
            Err(cause) => {
                debug!("Action of {} failed: {}", work.display_name(), cause);
                WorkResult::failed(cause)
            }
        };

        let duration = start.elapsed();
        info!(
            "{} {} in {:.2}s",
            result.outcome(),
            work.display_name(),
            duration.as_secs_f64()
        );

        Ok(ExecutionResult::new(result, started_at, duration))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ActionError;
    use crate::work::OutputFileProperty;
    use tracing_test::traced_test;

    struct Action(fn() -> std::result::Result<bool, ActionError>);

    impl UnitOfWork for Action {
        fn display_name(&self) -> String {
            "busybox:do_compile".to_string()
        }

        fn outputs(&self) -> &[OutputFileProperty] {
            &[]
        }

        fn execute(&self) -> std::result::Result<bool, ActionError> {
            (self.0)()
        }
    }

    #[traced_test]
    #[test]
    fn test_action_that_did_work_is_executed() {
        let result = ExecuteStep.execute(&Action(|| Ok(true))).unwrap();
        assert_eq!(result.outcome(), WorkOutcome::Executed);
        assert!(result.failure().is_none());
        assert!(logs_contain("EXECUTED busybox:do_compile"));
    }

    #[test]
    fn test_action_without_work_is_up_to_date() {
        let result = ExecuteStep.execute(&Action(|| Ok(false))).unwrap();
        assert_eq!(result.outcome(), WorkOutcome::UpToDate);
        assert_eq!(
            result.result(),
            WorkOutcome::UpToDate.as_result().unwrap()
        );
    }

    #[traced_test]
    #[test]
    fn test_action_error_is_captured() {
        let result = ExecuteStep
            .execute(&Action(|| Err("exit code 2".into())))
            .unwrap();

        assert_eq!(result.outcome(), WorkOutcome::Failed);
        assert_eq!(result.failure().unwrap().to_string(), "exit code 2");
        assert!(logs_contain("Action of busybox:do_compile failed: exit code 2"));
    }

    #[test]
    fn test_boxed_step_delegates() {
        let step: Box<dyn Step> = Box::new(ExecuteStep);
        let result = step.execute(&Action(|| Ok(true))).unwrap();
        assert!(result.outcome().did_work());
        assert!(result.started_at() <= Utc::now());
    }
}

//! Shared fixtures for integration tests

#![allow(dead_code)]

use convenient_execution::{
    ActionError, ExecutionResult, OutputFileProperty, Result, Step, UnitOfWork, WorkOutcome,
};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Unit of work whose action checks that its output locations exist
pub struct CompileTask {
    pub outputs: Vec<OutputFileProperty>,
    pub writes: Vec<PathBuf>,
    pub fail_with: Option<&'static str>,
}

impl CompileTask {
    pub fn new(outputs: Vec<OutputFileProperty>) -> Self {
        Self {
            outputs,
            writes: Vec::new(),
            fail_with: None,
        }
    }

    pub fn writing(mut self, path: impl Into<PathBuf>) -> Self {
        self.writes.push(path.into());
        self
    }

    pub fn failing(mut self, message: &'static str) -> Self {
        self.fail_with = Some(message);
        self
    }
}

impl UnitOfWork for CompileTask {
    fn display_name(&self) -> String {
        "busybox:do_compile".to_string()
    }

    fn outputs(&self) -> &[OutputFileProperty] {
        &self.outputs
    }

    fn execute(&self) -> std::result::Result<bool, ActionError> {
        if let Some(message) = self.fail_with {
            return Err(message.into());
        }
        for path in &self.writes {
            std::fs::write(path, b"built")?;
        }
        Ok(!self.writes.is_empty())
    }
}

/// Inner step counting how often it is reached
#[derive(Default)]
pub struct CountingStep {
    calls: AtomicUsize,
}

impl CountingStep {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Step for &CountingStep {
    fn execute(&self, _work: &dyn UnitOfWork) -> Result<ExecutionResult> {
        let _ = self.calls.fetch_add(1, Ordering::SeqCst);
        let result = WorkOutcome::Executed.as_result()?.clone();
        Ok(ExecutionResult::new(
            result,
            chrono::Utc::now(),
            std::time::Duration::ZERO,
        ))
    }
}

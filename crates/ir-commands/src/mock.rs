//! Mock process runner for testing.
//!
//! Records every argv it is asked to run or spawn and answers from a
//! scripted queue, so handler tests never touch the host system.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::{CommandError, CommandResult};
use crate::runner::{ProcessOutput, ProcessRunner};

#[derive(Debug, Default)]
pub struct MockRunner {
    /// Scripted results for `run` (FIFO). Empty queue means success.
    results: Mutex<VecDeque<CommandResult<ProcessOutput>>>,
    /// Every argv passed to `run` or `spawn`.
    invocations: Mutex<Vec<Vec<String>>>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful run with the given stdout.
    pub fn queue_output(&self, stdout: &str) {
        lock(&self.results).push_back(Ok(ProcessOutput {
            exit_code: Some(0),
            stdout: stdout.to_string(),
            stderr: String::new(),
        }));
    }

    /// Queue a run that exits with `code`.
    pub fn queue_exit(&self, code: i32) {
        lock(&self.results).push_back(Ok(ProcessOutput {
            exit_code: Some(code),
            ..ProcessOutput::default()
        }));
    }

    /// Queue a run that fails before producing output.
    pub fn queue_error(&self, error: CommandError) {
        lock(&self.results).push_back(Err(error));
    }

    pub fn invocations(&self) -> Vec<Vec<String>> {
        lock(&self.invocations).clone()
    }

    pub fn last_invocation(&self) -> Option<Vec<String>> {
        lock(&self.invocations).last().cloned()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait]
impl ProcessRunner for MockRunner {
    async fn run(&self, argv: &[String], _timeout: Duration) -> CommandResult<ProcessOutput> {
        if argv.is_empty() {
            return Err(CommandError::Empty);
        }
        lock(&self.invocations).push(argv.to_vec());
        lock(&self.results).pop_front().unwrap_or_else(|| {
            Ok(ProcessOutput {
                exit_code: Some(0),
                ..ProcessOutput::default()
            })
        })
    }

    async fn spawn(&self, argv: &[String]) -> CommandResult<()> {
        if argv.is_empty() {
            return Err(CommandError::Empty);
        }
        lock(&self.invocations).push(argv.to_vec());
        Ok(())
    }
}

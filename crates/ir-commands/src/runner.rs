//! Process runner: executes argv without a shell.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::{CommandError, CommandResult};

/// Maximum captured stdout in bytes.
const MAX_OUTPUT_BYTES: usize = 16 * 1024;

/// Captured result of a finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs platform commands. Implemented by `TokioRunner` and `MockRunner`.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Run to completion, capturing output, bounded by `timeout`.
    async fn run(&self, argv: &[String], timeout: Duration) -> CommandResult<ProcessOutput>;

    /// Start a long-lived process (e.g. a GUI application) without waiting.
    async fn spawn(&self, argv: &[String]) -> CommandResult<()>;
}

/// Real runner over `tokio::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioRunner;

fn split(argv: &[String]) -> CommandResult<(&String, &[String])> {
    argv.split_first().ok_or(CommandError::Empty)
}

#[async_trait]
impl ProcessRunner for TokioRunner {
    async fn run(&self, argv: &[String], timeout: Duration) -> CommandResult<ProcessOutput> {
        let (program, args) = split(argv)?;
        debug!(%program, ?args, "Running command");

        let result = tokio::time::timeout(timeout, async {
            Command::new(program)
                .args(args)
                .kill_on_drop(true)
                .output()
                .await
                .map_err(|source| CommandError::Spawn {
                    program: program.clone(),
                    source,
                })
        })
        .await;

        let output = match result {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => return Err(e),
            Err(_) => return Err(CommandError::Timeout(timeout.as_secs())),
        };

        let mut stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if stdout.len() > MAX_OUTPUT_BYTES {
            let mut cut = MAX_OUTPUT_BYTES;
            while !stdout.is_char_boundary(cut) {
                cut -= 1;
            }
            stdout.truncate(cut);
            stdout.push_str("\n... [output truncated]");
        }

        Ok(ProcessOutput {
            exit_code: output.status.code(),
            stdout,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    async fn spawn(&self, argv: &[String]) -> CommandResult<()> {
        let (program, args) = split(argv)?;
        debug!(%program, ?args, "Spawning detached process");
        Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
            .map_err(|source| CommandError::Spawn {
                program: program.clone(),
                source,
            })
    }
}

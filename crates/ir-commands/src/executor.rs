//! Command executor: routes a classified command to its category handler
//! and runs the resulting action.
//!
//! Execution never fails from the caller's point of view. Spawn errors,
//! timeouts and non-zero exits all become a `CommandOutcome` with
//! `success == false` and a message the assistant can show.

use std::sync::Arc;
use std::time::{Duration, Instant};

use ir_protocol::Category;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::ExecutorConfig;
use crate::handlers::{Action, handler_for};
use crate::platform::Platform;
use crate::runner::{ProcessRunner, TokioRunner};

/// Result of executing one command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandOutcome {
    pub category: Category,
    pub command: String,
    pub success: bool,
    pub message: String,
    pub latency_ms: u64,
}

/// Dispatches commands to the per-category handlers.
pub struct SystemCommandExecutor {
    config: ExecutorConfig,
    platform: Platform,
    runner: Arc<dyn ProcessRunner>,
}

impl std::fmt::Debug for SystemCommandExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemCommandExecutor")
            .field("config", &self.config)
            .field("platform", &self.platform)
            .finish_non_exhaustive()
    }
}

impl SystemCommandExecutor {
    /// Executor over real processes.
    pub fn new(config: ExecutorConfig) -> Self {
        Self::with_runner(config, Arc::new(TokioRunner))
    }

    pub fn with_runner(config: ExecutorConfig, runner: Arc<dyn ProcessRunner>) -> Self {
        let platform = config.platform.unwrap_or_else(Platform::current);
        Self {
            config,
            platform,
            runner,
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Execute `command` (a catalog phrase, or the full input for app
    /// launches) in `category`.
    pub async fn execute(&self, category: Category, command: &str) -> CommandOutcome {
        let start = Instant::now();
        let (success, message) = match handler_for(category).plan(command, self.platform) {
            None => (false, format!("Unrecognized {category} command: {command}")),
            Some(action) => self.perform(action).await,
        };

        let outcome = CommandOutcome {
            category,
            command: command.to_string(),
            success,
            message,
            latency_ms: start.elapsed().as_millis() as u64,
        };
        info!(
            category = %outcome.category,
            command = %outcome.command,
            success = outcome.success,
            latency_ms = outcome.latency_ms,
            "command executed"
        );
        outcome
    }

    async fn perform(&self, action: Action) -> (bool, String) {
        match action {
            Action::Acknowledge(message) => (true, message),
            Action::Reject(message) => (false, message),
            Action::Run { argv, .. } | Action::Spawn { argv, .. } if self.config.dry_run => {
                (true, format!("[dry run] {}", argv.join(" ")))
            }
            Action::Run {
                argv,
                done,
                failed,
                report_output,
            } => {
                let timeout = Duration::from_secs(self.config.timeout_secs);
                match self.runner.run(&argv, timeout).await {
                    Ok(output) if output.success() => {
                        let stdout = output.stdout.trim();
                        if report_output && !stdout.is_empty() {
                            (true, format!("{done}\n{stdout}"))
                        } else {
                            (true, done)
                        }
                    }
                    Ok(output) => {
                        debug!(
                            program = %argv[0],
                            exit_code = ?output.exit_code,
                            stderr = %output.stderr.trim(),
                            "command exited unsuccessfully"
                        );
                        (false, failed)
                    }
                    Err(e) => {
                        warn!(program = %argv[0], error = %e, "command could not run");
                        (false, failed)
                    }
                }
            }
            Action::Spawn { argv, message } => match self.runner.spawn(&argv).await {
                Ok(()) => (true, message),
                Err(e) => {
                    warn!(program = %argv[0], error = %e, "process could not be started");
                    (false, format!("Error: {e}"))
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CommandError;
    use crate::mock::MockRunner;

    fn executor(platform: Platform, runner: Arc<MockRunner>) -> SystemCommandExecutor {
        let config = ExecutorConfig {
            platform: Some(platform),
            ..ExecutorConfig::default()
        };
        SystemCommandExecutor::with_runner(config, runner)
    }

    #[tokio::test]
    async fn runs_handler_argv_and_reports_done_message() {
        let runner = Arc::new(MockRunner::new());
        let exec = executor(Platform::Linux, runner.clone());

        let outcome = exec.execute(Category::Volume, "mute").await;

        assert!(outcome.success);
        assert_eq!(outcome.category, Category::Volume);
        assert_eq!(
            runner.last_invocation().unwrap(),
            ["amixer", "-q", "set", "Master", "mute"]
        );
    }

    #[tokio::test]
    async fn query_appends_stdout() {
        let runner = Arc::new(MockRunner::new());
        runner.queue_output("Filesystem  Size\n/dev/sda1   100G\n");
        let exec = executor(Platform::Linux, runner);

        let outcome = exec.execute(Category::System, "check storage").await;

        assert!(outcome.success);
        assert!(outcome.message.starts_with("Storage usage:\n"));
        assert!(outcome.message.contains("/dev/sda1"));
    }

    #[tokio::test]
    async fn non_zero_exit_uses_failure_message() {
        let runner = Arc::new(MockRunner::new());
        runner.queue_exit(1);
        let exec = executor(Platform::Linux, runner);

        let outcome = exec.execute(Category::Network, "wifi on").await;

        assert!(!outcome.success);
        assert!(outcome.message.starts_with("Failed to turn on WiFi"));
    }

    #[tokio::test]
    async fn runner_error_is_absorbed() {
        let runner = Arc::new(MockRunner::new());
        runner.queue_error(CommandError::Timeout(5));
        let exec = executor(Platform::Linux, runner);

        let outcome = exec.execute(Category::Media, "play").await;

        assert!(!outcome.success);
        assert_eq!(outcome.message, "No media player responded");
    }

    #[tokio::test]
    async fn acknowledgements_run_nothing() {
        let runner = Arc::new(MockRunner::new());
        let exec = executor(Platform::Linux, runner.clone());

        let outcome = exec.execute(Category::File, "copy").await;

        assert!(outcome.success);
        assert_eq!(outcome.message, "Copying file...");
        assert!(runner.invocations().is_empty());
    }

    #[tokio::test]
    async fn app_launch_spawns_detached() {
        let runner = Arc::new(MockRunner::new());
        let exec = executor(Platform::Linux, runner.clone());

        let outcome = exec.execute(Category::App, "open Firefox").await;

        assert!(outcome.success);
        assert_eq!(outcome.message, "Opening Firefox...");
        assert_eq!(runner.last_invocation().unwrap(), ["firefox"]);
    }

    #[tokio::test]
    async fn rejected_and_unknown_commands_fail() {
        let runner = Arc::new(MockRunner::new());
        let exec = executor(Platform::Linux, runner.clone());

        let rejected = exec.execute(Category::App, "open").await;
        assert!(!rejected.success);
        assert_eq!(rejected.message, "No application specified for 'open' command");

        let unknown = exec.execute(Category::Volume, "volume to eleven").await;
        assert!(!unknown.success);
        assert_eq!(unknown.message, "Unrecognized volume command: volume to eleven");
        assert!(runner.invocations().is_empty());
    }

    #[tokio::test]
    async fn dry_run_spawns_nothing() {
        let runner = Arc::new(MockRunner::new());
        let config = ExecutorConfig {
            dry_run: true,
            platform: Some(Platform::Linux),
            ..ExecutorConfig::default()
        };
        let exec = SystemCommandExecutor::with_runner(config, runner.clone());

        let outcome = exec.execute(Category::Brightness, "max brightness").await;

        assert!(outcome.success);
        assert!(outcome.message.starts_with("[dry run] brightnessctl"));
        assert!(runner.invocations().is_empty());
    }

    #[test]
    fn platform_defaults_to_build_target() {
        let exec = SystemCommandExecutor::new(ExecutorConfig::default());
        assert_eq!(exec.platform(), Platform::current());
    }

    #[test]
    fn outcome_serializes() {
        let outcome = CommandOutcome {
            category: Category::Power,
            command: "sleep".into(),
            success: true,
            message: "Putting system to sleep...".into(),
            latency_ms: 3,
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["category"], "power");
        assert_eq!(json["success"], true);
    }
}

//! Process execution errors.

use thiserror::Error;

/// Failure to run a platform command.
///
/// These never escape the executor: they are turned into a failed
/// `CommandOutcome` with a human-readable message.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("empty command line")]
    Empty,

    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("command timed out after {0}s")]
    Timeout(u64),
}

pub type CommandResult<T> = Result<T, CommandError>;

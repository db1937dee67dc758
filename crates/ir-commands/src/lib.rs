//! System command execution for classified utterances.
//!
//! Every `Category` has exactly one `CategoryHandler` that turns a catalog
//! phrase into an `Action`: a platform argv to run, or a plain
//! acknowledgement. `SystemCommandExecutor` dispatches over the closed
//! category set and runs actions through a `ProcessRunner`.

pub mod config;
pub mod error;
pub mod executor;
pub mod handlers;
pub mod mock;
pub mod platform;
pub mod runner;

pub use config::ExecutorConfig;
pub use error::{CommandError, CommandResult};
pub use executor::{CommandOutcome, SystemCommandExecutor};
pub use handlers::{Action, CategoryHandler};
pub use mock::MockRunner;
pub use platform::Platform;
pub use runner::{ProcessOutput, ProcessRunner, TokioRunner};

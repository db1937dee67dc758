//! One handler per category.
//!
//! Handlers only decide *what* to do for a phrase on a platform; running
//! it is the executor's job.

mod accessibility;
mod app;
mod brightness;
mod display;
mod file;
mod input;
mod media;
mod network;
mod power;
mod security;
mod system;
mod volume;

use ir_protocol::Category;

use crate::platform::Platform;

pub use accessibility::AccessibilityHandler;
pub use app::AppHandler;
pub use brightness::BrightnessHandler;
pub use display::DisplayHandler;
pub use file::FileHandler;
pub use input::InputHandler;
pub use media::MediaHandler;
pub use network::NetworkHandler;
pub use power::PowerHandler;
pub use security::SecurityHandler;
pub use system::SystemHandler;
pub use volume::VolumeHandler;

/// What to do for one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Run `argv` to completion.
    Run {
        argv: Vec<String>,
        done: String,
        failed: String,
        /// Append the command's stdout to the success message.
        report_output: bool,
    },
    /// Start `argv` and return immediately.
    Spawn { argv: Vec<String>, message: String },
    /// Nothing to execute; report success with this message.
    Acknowledge(String),
    /// The command cannot be carried out as given.
    Reject(String),
}

impl Action {
    pub fn run(argv: &[&str], done: impl Into<String>, failed: impl Into<String>) -> Self {
        Self::command(argv, done.into(), failed.into(), false)
    }

    /// Same as `run`, but the command's output is shown to the user.
    pub fn query(argv: &[&str], done: impl Into<String>, failed: impl Into<String>) -> Self {
        Self::command(argv, done.into(), failed.into(), true)
    }

    fn command(argv: &[&str], done: String, failed: String, report_output: bool) -> Self {
        Self::Run {
            argv: argv.iter().map(|a| a.to_string()).collect(),
            done,
            failed,
            report_output,
        }
    }

    pub fn spawn(argv: Vec<String>, message: impl Into<String>) -> Self {
        Self::Spawn {
            argv,
            message: message.into(),
        }
    }

    pub fn ack(message: impl Into<String>) -> Self {
        Self::Acknowledge(message.into())
    }
}

/// Maps a category's commands to actions.
pub trait CategoryHandler: Send + Sync {
    fn category(&self) -> Category;

    /// Action for `command` on `platform`, or `None` if the command is not
    /// one this handler knows.
    fn plan(&self, command: &str, platform: Platform) -> Option<Action>;
}

/// The handler responsible for `category`.
pub fn handler_for(category: Category) -> &'static dyn CategoryHandler {
    match category {
        Category::Volume => &VolumeHandler,
        Category::Brightness => &BrightnessHandler,
        Category::Power => &PowerHandler,
        Category::App => &AppHandler,
        Category::System => &SystemHandler,
        Category::Network => &NetworkHandler,
        Category::Media => &MediaHandler,
        Category::File => &FileHandler,
        Category::Display => &DisplayHandler,
        Category::Input => &InputHandler,
        Category::Security => &SecurityHandler,
        Category::Accessibility => &AccessibilityHandler,
    }
}

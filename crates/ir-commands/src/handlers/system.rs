//! System maintenance and diagnostics.

use ir_protocol::Category;

use super::{Action, CategoryHandler};
use crate::platform::Platform;

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHandler;

impl CategoryHandler for SystemHandler {
    fn category(&self) -> Category {
        Category::System
    }

    fn plan(&self, command: &str, platform: Platform) -> Option<Action> {
        let unix = platform != Platform::Windows;
        let action = match command.trim().to_lowercase().as_str() {
            "check memory" if platform == Platform::Linux => {
                Action::query(&["free", "-h"], "Memory usage:", "Failed to check memory usage")
            }
            "check memory" if platform == Platform::Macos => {
                Action::query(&["vm_stat"], "Memory usage:", "Failed to check memory usage")
            }
            "check storage" if unix => {
                Action::query(&["df", "-h"], "Storage usage:", "Failed to check storage space")
            }
            "check cpu" if unix => {
                Action::query(&["uptime"], "CPU load:", "Failed to check CPU usage")
            }
            "system info" if unix => {
                Action::query(&["uname", "-a"], "System information:", "Failed to read system information")
            }
            "update" => Action::ack("Checking for system updates..."),
            "install" => Action::ack("Installing software..."),
            "uninstall" => Action::ack("Uninstalling software..."),
            "check status" => Action::ack("Checking system status..."),
            "clean temp" => Action::ack("Cleaning temporary files..."),
            "clear cache" => Action::ack("Clearing system cache..."),
            "check memory" => Action::ack("Checking memory usage..."),
            "check cpu" => Action::ack("Checking CPU usage..."),
            "check storage" => Action::ack("Checking storage space..."),
            "system info" => Action::ack("Displaying system information..."),
            "task manager" => Action::ack("Opening task manager..."),
            _ => return None,
        };
        Some(action)
    }
}

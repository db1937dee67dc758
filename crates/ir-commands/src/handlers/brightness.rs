//! Brightness: brightnessctl on Linux, the `brightness` CLI on macOS.

use ir_protocol::Category;

use super::{Action, CategoryHandler};
use crate::platform::Platform;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrightnessHandler;

fn brightness(platform: Platform, linux: &str, macos: &[&str], done: &str, pending: &str) -> Action {
    let failed = "Brightness control not available";
    match platform {
        Platform::Linux => Action::run(&["brightnessctl", "set", linux], done, failed),
        Platform::Macos => {
            let mut argv = vec!["brightness"];
            argv.extend_from_slice(macos);
            Action::run(&argv, done, failed)
        }
        Platform::Windows => Action::ack(pending),
    }
}

impl CategoryHandler for BrightnessHandler {
    fn category(&self) -> Category {
        Category::Brightness
    }

    fn plan(&self, command: &str, platform: Platform) -> Option<Action> {
        let action = match command.trim().to_lowercase().as_str() {
            "increase brightness" | "screen brighter" => brightness(
                platform,
                "+10%",
                &["0.1", "-i"],
                "Increased screen brightness",
                "Increasing screen brightness...",
            ),
            "decrease brightness" | "screen dimmer" => brightness(
                platform,
                "10%-",
                &["0.1", "-d"],
                "Decreased screen brightness",
                "Decreasing screen brightness...",
            ),
            "max brightness" => brightness(
                platform,
                "100%",
                &["1"],
                "Set brightness to maximum",
                "Setting brightness to maximum...",
            ),
            "min brightness" => brightness(
                platform,
                "1%",
                &["0"],
                "Set brightness to minimum",
                "Setting brightness to minimum...",
            ),
            "adjust brightness" => Action::ack("Adjusting screen brightness..."),
            "set brightness" => Action::ack("Setting brightness level..."),
            _ => return None,
        };
        Some(action)
    }
}

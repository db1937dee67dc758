//! Volume: amixer on Linux, AppleScript on macOS, nircmd on Windows.

use ir_protocol::Category;

use super::{Action, CategoryHandler};
use crate::platform::Platform;

#[derive(Debug, Clone, Copy, Default)]
pub struct VolumeHandler;

fn volume(platform: Platform, linux: &[&str], macos: &str, windows: &[&str], done: &str) -> Action {
    let failed = "Volume control not available";
    match platform {
        Platform::Linux => Action::run(linux, done, failed),
        Platform::Macos => Action::run(&["osascript", "-e", macos], done, failed),
        Platform::Windows => Action::run(windows, done, failed),
    }
}

impl CategoryHandler for VolumeHandler {
    fn category(&self) -> Category {
        Category::Volume
    }

    fn plan(&self, command: &str, platform: Platform) -> Option<Action> {
        let action = match command.trim().to_lowercase().as_str() {
            "increase volume" | "volume up" => volume(
                platform,
                &["amixer", "-q", "sset", "Master", "5%+"],
                "set volume output volume (output volume of (get volume settings) + 10)",
                &["nircmd", "changesysvolume", "5000"],
                "Increased system volume",
            ),
            "decrease volume" | "volume down" => volume(
                platform,
                &["amixer", "-q", "sset", "Master", "5%-"],
                "set volume output volume (output volume of (get volume settings) - 10)",
                &["nircmd", "changesysvolume", "-5000"],
                "Decreased system volume",
            ),
            "mute" => volume(
                platform,
                &["amixer", "-q", "set", "Master", "mute"],
                "set volume with output muted",
                &["nircmd", "mutesysvolume", "1"],
                "Muted system audio",
            ),
            "unmute" => volume(
                platform,
                &["amixer", "-q", "set", "Master", "unmute"],
                "set volume without output muted",
                &["nircmd", "mutesysvolume", "0"],
                "Unmuted system audio",
            ),
            "max volume" => volume(
                platform,
                &["amixer", "-q", "sset", "Master", "100%"],
                "set volume output volume 100",
                &["nircmd", "setsysvolume", "65535"],
                "Set volume to maximum",
            ),
            "min volume" => volume(
                platform,
                &["amixer", "-q", "sset", "Master", "0%"],
                "set volume output volume 0",
                &["nircmd", "setsysvolume", "0"],
                "Set volume to minimum",
            ),
            "set volume" => Action::ack("Setting volume level..."),
            "adjust volume" => Action::ack("Adjusting system volume..."),
            _ => return None,
        };
        Some(action)
    }
}

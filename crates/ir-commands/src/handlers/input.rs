//! Input devices and layout.

use ir_protocol::Category;

use super::{Action, CategoryHandler};
use crate::platform::Platform;

#[derive(Debug, Clone, Copy, Default)]
pub struct InputHandler;

const MESSAGES: &[(&str, &str)] = &[
    ("enable keyboard", "Enabling keyboard..."),
    ("disable keyboard", "Disabling keyboard..."),
    ("enable touchpad", "Enabling touchpad..."),
    ("disable touchpad", "Disabling touchpad..."),
    ("enable mouse", "Enabling mouse..."),
    ("disable mouse", "Disabling mouse..."),
    ("keyboard layout", "Changing keyboard layout..."),
    ("input language", "Changing input language..."),
];

impl CategoryHandler for InputHandler {
    fn category(&self) -> Category {
        Category::Input
    }

    fn plan(&self, command: &str, platform: Platform) -> Option<Action> {
        let lowered = command.trim().to_lowercase();
        let (_, message) = MESSAGES.iter().find(|(phrase, _)| *phrase == lowered)?;
        let touchpad = |state: &str| {
            Action::run(
                &[
                    "gsettings",
                    "set",
                    "org.gnome.desktop.peripherals.touchpad",
                    "send-events",
                    state,
                ],
                *message,
                "Failed to change touchpad state",
            )
        };
        Some(match (lowered.as_str(), platform) {
            ("enable touchpad", Platform::Linux) => touchpad("enabled"),
            ("disable touchpad", Platform::Linux) => touchpad("disabled"),
            _ => Action::ack(*message),
        })
    }
}

//! Accessibility features.

use ir_protocol::Category;

use super::{Action, CategoryHandler};
use crate::platform::Platform;

#[derive(Debug, Clone, Copy, Default)]
pub struct AccessibilityHandler;

const MESSAGES: &[(&str, &str)] = &[
    ("enable narrator", "Enabling narrator..."),
    ("disable narrator", "Disabling narrator..."),
    ("high contrast", "Toggling high contrast mode..."),
    ("magnifier on", "Turning magnifier on..."),
    ("magnifier off", "Turning magnifier off..."),
    ("voice control", "Toggling voice control..."),
    ("closed captions", "Toggling closed captions..."),
    ("screen reader", "Toggling screen reader..."),
];

/// GNOME a11y keys for the phrases that map onto a single boolean.
const GNOME_KEYS: &[(&str, &str, &str, &str)] = &[
    ("enable narrator", "org.gnome.desktop.a11y.applications", "screen-reader-enabled", "true"),
    ("disable narrator", "org.gnome.desktop.a11y.applications", "screen-reader-enabled", "false"),
    ("magnifier on", "org.gnome.desktop.a11y.applications", "screen-magnifier-enabled", "true"),
    ("magnifier off", "org.gnome.desktop.a11y.applications", "screen-magnifier-enabled", "false"),
];

impl CategoryHandler for AccessibilityHandler {
    fn category(&self) -> Category {
        Category::Accessibility
    }

    fn plan(&self, command: &str, platform: Platform) -> Option<Action> {
        let lowered = command.trim().to_lowercase();
        let (_, message) = MESSAGES.iter().find(|(phrase, _)| *phrase == lowered)?;
        let gnome = GNOME_KEYS.iter().find(|(phrase, ..)| *phrase == lowered);
        Some(match (platform, gnome) {
            (Platform::Linux, Some(&(_, schema, key, value))) => Action::run(
                &["gsettings", "set", schema, key, value],
                *message,
                "Failed to change accessibility setting",
            ),
            _ => Action::ack(*message),
        })
    }
}

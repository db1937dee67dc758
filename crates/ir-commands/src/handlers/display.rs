//! Display layout, theme and screen saver.

use ir_protocol::Category;

use super::{Action, CategoryHandler};
use crate::platform::Platform;

#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayHandler;

impl CategoryHandler for DisplayHandler {
    fn category(&self) -> Category {
        Category::Display
    }

    fn plan(&self, command: &str, platform: Platform) -> Option<Action> {
        use Platform::{Linux, Macos, Windows};

        let lowered = command.trim().to_lowercase();
        let action = match (lowered.as_str(), platform) {
            ("change resolution", Linux) => Action::query(
                &["xrandr"],
                "Available resolutions:",
                "Failed to get display information",
            ),
            ("change resolution", Macos) => Action::query(
                &["system_profiler", "SPDisplaysDataType"],
                "Display information:",
                "Failed to get display information",
            ),
            ("rotate screen", Linux) => Action::run(
                &["xrandr", "--output", "primary", "--rotate", "right"],
                "Rotated screen",
                "Failed to rotate screen",
            ),
            ("rotate screen", Windows) => Action::run(
                &["displayswitch", "/rotate:90"],
                "Rotated screen",
                "Failed to rotate screen",
            ),
            ("mirror display", Linux) => Action::run(
                &["xrandr", "--output", "HDMI-1", "--same-as", "eDP-1"],
                "Mirrored displays",
                "Failed to mirror displays",
            ),
            ("mirror display", Macos) => Action::run(
                &["displayplacer", "mirror"],
                "Mirrored displays",
                "Failed to mirror displays",
            ),
            ("mirror display", Windows) => Action::run(
                &["displayswitch", "/clone"],
                "Mirrored displays",
                "Failed to mirror displays",
            ),
            ("extend display", Linux) => Action::run(
                &["xrandr", "--output", "HDMI-1", "--auto", "--right-of", "eDP-1"],
                "Extended displays",
                "Failed to extend displays",
            ),
            ("extend display", Macos) => Action::run(
                &["displayplacer", "extend"],
                "Extended displays",
                "Failed to extend displays",
            ),
            ("extend display", Windows) => Action::run(
                &["displayswitch", "/extend"],
                "Extended displays",
                "Failed to extend displays",
            ),
            ("night mode", Linux) => Action::run(
                &["redshift", "-O", "4500"],
                "Enabled night mode",
                "Please install redshift: sudo apt-get install redshift",
            ),
            ("night mode", Macos) => Action::run(
                &["nightlight", "toggle"],
                "Toggled night mode",
                "Failed to toggle night mode",
            ),
            ("dark mode", Linux) => Action::run(
                &["gsettings", "set", "org.gnome.desktop.interface", "gtk-theme", "Adwaita-dark"],
                "Enabled dark mode",
                "Failed to enable dark mode",
            ),
            ("dark mode", Macos) => Action::run(
                &[
                    "osascript",
                    "-e",
                    "tell app \"System Events\" to tell appearance preferences to set dark mode to true",
                ],
                "Enabled dark mode",
                "Failed to enable dark mode",
            ),
            ("light mode", Linux) => Action::run(
                &["gsettings", "set", "org.gnome.desktop.interface", "gtk-theme", "Adwaita"],
                "Enabled light mode",
                "Failed to enable light mode",
            ),
            ("light mode", Macos) => Action::run(
                &[
                    "osascript",
                    "-e",
                    "tell app \"System Events\" to tell appearance preferences to set dark mode to false",
                ],
                "Enabled light mode",
                "Failed to enable light mode",
            ),
            ("change wallpaper", Linux) => Action::spawn(
                vec!["gnome-control-center".into(), "background".into()],
                "Opening wallpaper settings...",
            ),
            ("screen saver", Linux) => Action::run(
                &["gnome-screensaver-command", "-a"],
                "Activated screen saver",
                "Failed to activate screen saver",
            ),
            ("screen saver", Macos) => Action::run(
                &["open", "-a", "ScreenSaverEngine"],
                "Activated screen saver",
                "Failed to activate screen saver",
            ),
            ("change resolution", _) => Action::ack("Opening display settings..."),
            ("rotate screen", _) => Action::ack("Rotating screen..."),
            ("night mode", _) => Action::ack("Toggling night mode..."),
            ("dark mode", _) => Action::ack("Enabling dark mode..."),
            ("light mode", _) => Action::ack("Enabling light mode..."),
            ("change wallpaper", _) => Action::ack("Opening wallpaper settings..."),
            ("screen saver", _) => Action::ack("Activating screen saver..."),
            _ => return None,
        };
        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_mode_on_gnome() {
        let Some(Action::Run { argv, .. }) = DisplayHandler.plan("dark mode", Platform::Linux) else {
            panic!("expected a run action");
        };
        assert_eq!(argv.last().map(String::as_str), Some("Adwaita-dark"));
    }

    #[test]
    fn every_phrase_is_handled_on_every_platform() {
        let phrases = [
            "change resolution",
            "rotate screen",
            "mirror display",
            "extend display",
            "night mode",
            "dark mode",
            "light mode",
            "change wallpaper",
            "screen saver",
        ];
        for platform in [Platform::Linux, Platform::Macos, Platform::Windows] {
            for phrase in phrases {
                assert!(
                    DisplayHandler.plan(phrase, platform).is_some(),
                    "{phrase} on {platform:?}"
                );
            }
        }
    }
}

//! Media playback through playerctl (MPRIS) on Linux.

use ir_protocol::Category;

use super::{Action, CategoryHandler};
use crate::platform::Platform;

#[derive(Debug, Clone, Copy, Default)]
pub struct MediaHandler;

/// (phrase, playerctl argv, acknowledgement)
const COMMANDS: &[(&str, &[&str], &str)] = &[
    ("play", &["playerctl", "play"], "Playing media..."),
    ("pause", &["playerctl", "pause"], "Pausing media..."),
    ("stop", &["playerctl", "stop"], "Stopping media..."),
    ("next", &["playerctl", "next"], "Playing next track..."),
    ("previous", &["playerctl", "previous"], "Playing previous track..."),
    ("fast forward", &["playerctl", "position", "10+"], "Fast forwarding..."),
    ("rewind", &["playerctl", "position", "10-"], "Rewinding..."),
    ("shuffle", &["playerctl", "shuffle", "Toggle"], "Shuffling playlist..."),
    ("repeat", &["playerctl", "loop", "Track"], "Toggling repeat mode..."),
    ("mute audio", &["amixer", "-q", "set", "Master", "mute"], "Muting audio..."),
    ("unmute audio", &["amixer", "-q", "set", "Master", "unmute"], "Unmuting audio..."),
];

impl CategoryHandler for MediaHandler {
    fn category(&self) -> Category {
        Category::Media
    }

    fn plan(&self, command: &str, platform: Platform) -> Option<Action> {
        let lowered = command.trim().to_lowercase();
        let (_, argv, message) = COMMANDS.iter().find(|(phrase, _, _)| *phrase == lowered)?;
        Some(match platform {
            Platform::Linux => Action::run(argv, *message, "No media player responded"),
            _ => Action::ack(*message),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linux_drives_playerctl() {
        let Some(Action::Run { argv, done, .. }) = MediaHandler.plan("next", Platform::Linux) else {
            panic!("expected a run action");
        };
        assert_eq!(argv, ["playerctl", "next"]);
        assert_eq!(done, "Playing next track...");
    }

    #[test]
    fn other_platforms_acknowledge() {
        assert_eq!(
            MediaHandler.plan("pause", Platform::Macos),
            Some(Action::ack("Pausing media..."))
        );
    }

    #[test]
    fn unknown_phrase() {
        assert!(MediaHandler.plan("scratch", Platform::Linux).is_none());
    }
}

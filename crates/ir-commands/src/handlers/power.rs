//! Power and session control.

use ir_protocol::Category;

use super::{Action, CategoryHandler};
use crate::platform::Platform;

#[derive(Debug, Clone, Copy, Default)]
pub struct PowerHandler;

const NEEDS_PERMISSION: &str = "Make sure you have the required permissions.";

fn power(platform: Platform, argv: [&[&str]; 3], done: &str, failed: &str) -> Action {
    let [linux, macos, windows] = argv;
    let failed = format!("{failed} {NEEDS_PERMISSION}");
    match platform {
        Platform::Linux => Action::run(linux, done, failed),
        Platform::Macos => Action::run(macos, done, failed),
        Platform::Windows => Action::run(windows, done, failed),
    }
}

impl CategoryHandler for PowerHandler {
    fn category(&self) -> Category {
        Category::Power
    }

    fn plan(&self, command: &str, platform: Platform) -> Option<Action> {
        let action = match command.trim().to_lowercase().as_str() {
            "shutdown" | "power off" | "turn off" => power(
                platform,
                [
                    &["shutdown", "-h", "now"],
                    &["osascript", "-e", r#"tell app "System Events" to shut down"#],
                    &["shutdown", "/s", "/t", "0"],
                ],
                "Initiating system shutdown...",
                "Failed to initiate shutdown.",
            ),
            "restart" | "reboot" => power(
                platform,
                [
                    &["shutdown", "-r", "now"],
                    &["osascript", "-e", r#"tell app "System Events" to restart"#],
                    &["shutdown", "/r", "/t", "0"],
                ],
                "Initiating system restart...",
                "Failed to initiate restart.",
            ),
            "sleep" => power(
                platform,
                [
                    &["systemctl", "suspend"],
                    &["osascript", "-e", r#"tell app "System Events" to sleep"#],
                    &["rundll32.exe", "powrprof.dll,SetSuspendState", "0,1,0"],
                ],
                "Putting system to sleep...",
                "Failed to put system to sleep.",
            ),
            "hibernate" if platform == Platform::Macos => {
                Action::Reject("Hibernation is not supported on macOS".into())
            }
            "hibernate" => power(
                platform,
                [&["systemctl", "hibernate"], &[], &["shutdown", "/h"]],
                "Hibernating system...",
                "Failed to hibernate system.",
            ),
            "log out" | "sign out" => power(
                platform,
                [
                    &["gnome-session-quit", "--logout", "--no-prompt"],
                    &["osascript", "-e", r#"tell app "System Events" to log out"#],
                    &["shutdown", "/l"],
                ],
                "Logging out current user...",
                "Failed to log out.",
            ),
            "lock screen" => power(
                platform,
                [
                    &["loginctl", "lock-session"],
                    &["pmset", "displaysleepnow"],
                    &["rundll32.exe", "user32.dll,LockWorkStation"],
                ],
                "Locking screen...",
                "Failed to lock screen.",
            ),
            "unlock screen" => Action::ack("Screen unlock requires user authentication..."),
            "wake up" => power(
                platform,
                [
                    &["xset", "dpms", "force", "on"],
                    &["caffeinate", "-u", "-t", "1"],
                    &[
                        "powercfg",
                        "/requestsoverride",
                        "PROCESS",
                        "PowerCommandWake",
                        "DISPLAY",
                    ],
                ],
                "Waking up system...",
                "Failed to wake up system.",
            ),
            _ => return None,
        };
        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(command: &str, platform: Platform) -> Vec<String> {
        match PowerHandler.plan(command, platform) {
            Some(Action::Run { argv, .. }) => argv,
            other => panic!("expected a run action, got {other:?}"),
        }
    }

    #[test]
    fn synonyms_share_an_action() {
        assert_eq!(argv("reboot", Platform::Linux), argv("restart", Platform::Linux));
        assert_eq!(argv("turn off", Platform::Linux), ["shutdown", "-h", "now"]);
    }

    #[test]
    fn linux_session_commands() {
        assert_eq!(argv("sleep", Platform::Linux), ["systemctl", "suspend"]);
        assert_eq!(argv("lock screen", Platform::Linux), ["loginctl", "lock-session"]);
        assert_eq!(argv("sign out", Platform::Linux)[0], "gnome-session-quit");
    }

    #[test]
    fn macos_cannot_hibernate() {
        assert!(matches!(
            PowerHandler.plan("hibernate", Platform::Macos),
            Some(Action::Reject(_))
        ));
        assert_eq!(argv("hibernate", Platform::Linux), ["systemctl", "hibernate"]);
    }

    #[test]
    fn failure_message_mentions_permissions() {
        let Some(Action::Run { failed, .. }) = PowerHandler.plan("shutdown", Platform::Linux) else {
            panic!("expected a run action");
        };
        assert!(failed.ends_with(NEEDS_PERMISSION));
    }
}

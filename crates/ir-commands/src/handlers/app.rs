//! Application launch, close and window management.
//!
//! Commands are `<verb> <application>`, e.g. "open Chrome" or
//! "switch to firefox". Well-known applications resolve to the platform's
//! executable; anything else is launched by its lowercased name.

use ir_protocol::Category;

use super::{Action, CategoryHandler};
use crate::platform::Platform;

#[derive(Debug, Clone, Copy, Default)]
pub struct AppHandler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppOp {
    Open,
    Close,
    Minimize,
    Maximize,
    Restore,
    SwitchTo,
    FocusOn,
}

/// Longest verbs first so "force quit" wins over "quit".
const VERBS: &[(&str, AppOp)] = &[
    ("force quit", AppOp::Close),
    ("switch to", AppOp::SwitchTo),
    ("focus on", AppOp::FocusOn),
    ("run app", AppOp::Open),
    ("kill app", AppOp::Close),
    ("open", AppOp::Open),
    ("start", AppOp::Open),
    ("launch", AppOp::Open),
    ("close", AppOp::Close),
    ("stop", AppOp::Close),
    ("quit", AppOp::Close),
    ("minimize", AppOp::Minimize),
    ("maximize", AppOp::Maximize),
    ("restore", AppOp::Restore),
];

const LINUX_APPS: &[(&str, &str)] = &[
    ("chrome", "google-chrome"),
    ("firefox", "firefox"),
    ("calculator", "gnome-calculator"),
    ("terminal", "gnome-terminal"),
    ("spotify", "spotify"),
    ("vscode", "code"),
];

const MACOS_APPS: &[(&str, &str)] = &[
    ("chrome", "Google Chrome"),
    ("firefox", "Firefox"),
    ("safari", "Safari"),
    ("calculator", "Calculator"),
    ("terminal", "Terminal"),
    ("finder", "Finder"),
    ("spotify", "Spotify"),
    ("vscode", "Visual Studio Code"),
];

const WINDOWS_APPS: &[(&str, &str)] = &[
    ("chrome", "chrome.exe"),
    ("firefox", "firefox.exe"),
    ("notepad", "notepad.exe"),
    ("calculator", "calc.exe"),
    ("explorer", "explorer.exe"),
    ("word", "winword.exe"),
    ("excel", "excel.exe"),
    ("powerpoint", "powerpnt.exe"),
    ("vscode", "code.exe"),
    ("spotify", "spotify.exe"),
    ("discord", "discord.exe"),
    ("steam", "steam.exe"),
    ("vlc", "vlc.exe"),
    ("paint", "mspaint.exe"),
    ("edge", "msedge.exe"),
    ("task manager", "taskmgr.exe"),
    ("control panel", "control.exe"),
];

/// Split `command` into a verb and the (possibly empty) application name.
fn parse(command: &str) -> Option<(&'static str, AppOp, String)> {
    let words: Vec<&str> = command.split_whitespace().collect();
    let lowered: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();

    VERBS.iter().find_map(|&(verb, op)| {
        let verb_len = verb.split_whitespace().count();
        let matches = lowered.len() >= verb_len
            && verb
                .split_whitespace()
                .zip(&lowered)
                .all(|(expected, actual)| expected == actual.as_str());
        matches.then(|| (verb, op, words[verb_len..].join(" ")))
    })
}

/// Platform executable (or bundle name) for `app`.
fn resolve(app: &str, platform: Platform) -> String {
    let lowered = app.to_lowercase();
    let table = match platform {
        Platform::Linux => LINUX_APPS,
        Platform::Macos => MACOS_APPS,
        Platform::Windows => WINDOWS_APPS,
    };
    table
        .iter()
        .find(|(name, _)| *name == lowered)
        .map(|(_, exe)| exe.to_string())
        .unwrap_or_else(|| match platform {
            Platform::Macos => app.to_string(),
            _ => lowered,
        })
}

fn open(app: &str, platform: Platform) -> Action {
    let target = resolve(app, platform);
    let message = format!("Opening {app}...");
    match platform {
        Platform::Macos => Action::run(
            &["open", "-a", target.as_str()],
            message,
            format!("Error opening {app}"),
        ),
        _ => Action::spawn(vec![target], message),
    }
}

fn close(app: &str, platform: Platform) -> Action {
    let done = format!("Closed {app}");
    let failed = format!("Could not close {app}");
    match platform {
        Platform::Windows => {
            let image = resolve(app, platform);
            let image = if image.ends_with(".exe") {
                image
            } else {
                format!("{image}.exe")
            };
            Action::run(&["taskkill", "/IM", image.as_str()], done, failed)
        }
        _ => Action::run(&["pkill", "-i", app], done, failed),
    }
}

fn window(op: AppOp, app: &str, platform: Platform) -> Action {
    let pending = match op {
        AppOp::Minimize => format!("Minimizing {app}..."),
        AppOp::Maximize => format!("Maximizing {app}..."),
        AppOp::Restore => format!("Restoring {app}..."),
        AppOp::SwitchTo => format!("Switching to {app}..."),
        AppOp::FocusOn | AppOp::Open | AppOp::Close => format!("Focusing on {app}..."),
    };
    let failed = format!("No window found for {app}");
    match (platform, op) {
        (Platform::Linux, AppOp::SwitchTo | AppOp::FocusOn) => {
            Action::run(&["wmctrl", "-a", app], pending, failed)
        }
        (Platform::Linux, AppOp::Maximize) => Action::run(
            &["wmctrl", "-r", app, "-b", "add,maximized_vert,maximized_horz"],
            pending,
            failed,
        ),
        (Platform::Linux, AppOp::Restore) => Action::run(
            &["wmctrl", "-r", app, "-b", "remove,maximized_vert,maximized_horz"],
            pending,
            failed,
        ),
        (Platform::Macos, AppOp::SwitchTo | AppOp::FocusOn) => {
            let target = resolve(app, platform);
            Action::run(&["open", "-a", target.as_str()], pending, failed)
        }
        _ => Action::ack(pending),
    }
}

impl CategoryHandler for AppHandler {
    fn category(&self) -> Category {
        Category::App
    }

    fn plan(&self, command: &str, platform: Platform) -> Option<Action> {
        let lowered = command.trim().to_lowercase();
        if matches!(lowered.as_str(), "minimize all" | "minimize all windows") {
            return Some(match platform {
                Platform::Linux => Action::run(
                    &["wmctrl", "-k", "on"],
                    "Minimized all windows",
                    "Failed to minimize all windows",
                ),
                Platform::Macos => Action::run(
                    &[
                        "osascript",
                        "-e",
                        r#"tell application "System Events" to set miniaturized of every window of every process to true"#,
                    ],
                    "Minimized all windows",
                    "Failed to minimize all windows",
                ),
                Platform::Windows => Action::ack("Minimizing all windows..."),
            });
        }

        let (verb, op, app) = parse(command)?;
        if app.is_empty() {
            return Some(Action::Reject(format!(
                "No application specified for '{verb}' command"
            )));
        }

        Some(match op {
            AppOp::Open => open(&app, platform),
            AppOp::Close => close(&app, platform),
            other => window(other, &app, platform),
        })
    }
}

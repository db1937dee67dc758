//! Firewall, scanning and backups. Acknowledged only: each of these needs
//! elevated rights or a configured tool the assistant cannot assume.

use ir_protocol::Category;

use super::{Action, CategoryHandler};
use crate::platform::Platform;

#[derive(Debug, Clone, Copy, Default)]
pub struct SecurityHandler;

const MESSAGES: &[(&str, &str)] = &[
    ("enable firewall", "Enabling firewall..."),
    ("disable firewall", "Disabling firewall..."),
    ("scan virus", "Starting virus scan..."),
    ("update antivirus", "Updating antivirus..."),
    ("check permissions", "Checking permissions..."),
    ("encrypt", "Encrypting data..."),
    ("decrypt", "Decrypting data..."),
    ("backup data", "Backing up data..."),
    ("restore backup", "Restoring from backup..."),
];

impl CategoryHandler for SecurityHandler {
    fn category(&self) -> Category {
        Category::Security
    }

    fn plan(&self, command: &str, _platform: Platform) -> Option<Action> {
        let lowered = command.trim().to_lowercase();
        MESSAGES
            .iter()
            .find(|(phrase, _)| *phrase == lowered)
            .map(|(_, message)| Action::ack(*message))
    }
}

//! File operations. These need a file selection the utterance does not
//! carry, so they are acknowledged only.

use ir_protocol::Category;

use super::{Action, CategoryHandler};
use crate::platform::Platform;

#[derive(Debug, Clone, Copy, Default)]
pub struct FileHandler;

const MESSAGES: &[(&str, &str)] = &[
    ("copy", "Copying file..."),
    ("paste", "Pasting file..."),
    ("cut", "Cutting file..."),
    ("delete", "Deleting file..."),
    ("rename", "Renaming file..."),
    ("move", "Moving file..."),
    ("new folder", "Creating new folder..."),
    ("new file", "Creating new file..."),
    ("compress", "Compressing file..."),
    ("extract", "Extracting archive..."),
    ("download", "Downloading file..."),
    ("upload", "Uploading file..."),
    ("share", "Sharing file..."),
    ("search files", "Searching for files..."),
];

impl CategoryHandler for FileHandler {
    fn category(&self) -> Category {
        Category::File
    }

    fn plan(&self, command: &str, _platform: Platform) -> Option<Action> {
        let lowered = command.trim().to_lowercase();
        MESSAGES
            .iter()
            .find(|(phrase, _)| *phrase == lowered)
            .map(|(_, message)| Action::ack(*message))
    }
}

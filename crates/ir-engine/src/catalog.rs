//! Static command catalog: category → ordered canonical phrases.

use ir_protocol::Category;

/// Canonical phrases per category, in catalog order.
const STANDARD: &[(Category, &[&str])] = &[
    (
        Category::Volume,
        &[
            "increase volume",
            "decrease volume",
            "mute",
            "unmute",
            "volume up",
            "volume down",
            "set volume",
            "max volume",
            "min volume",
            "adjust volume",
        ],
    ),
    (
        Category::Brightness,
        &[
            "increase brightness",
            "decrease brightness",
            "max brightness",
            "min brightness",
            "adjust brightness",
            "set brightness",
            "screen brighter",
            "screen dimmer",
        ],
    ),
    (
        Category::Power,
        &[
            "shutdown",
            "restart",
            "sleep",
            "wake up",
            "hibernate",
            "power off",
            "turn off",
            "reboot",
            "log out",
            "sign out",
            "lock screen",
            "unlock screen",
        ],
    ),
    (
        Category::App,
        &[
            "open",
            "close",
            "start",
            "stop",
            "launch",
            "quit",
            "minimize",
            "maximize",
            "restore",
            "force quit",
            "switch to",
            "focus on",
            "run app",
            "kill app",
        ],
    ),
    (
        Category::System,
        &[
            "update",
            "install",
            "uninstall",
            "check status",
            "clean temp",
            "clear cache",
            "check memory",
            "check cpu",
            "check storage",
            "system info",
            "task manager",
        ],
    ),
    (
        Category::Network,
        &[
            "wifi on",
            "wifi off",
            "connect wifi",
            "disconnect wifi",
            "bluetooth on",
            "bluetooth off",
            "airplane mode",
            "check internet",
            "network status",
            "show wifi networks",
        ],
    ),
    (
        Category::Media,
        &[
            "play",
            "pause",
            "stop",
            "next",
            "previous",
            "fast forward",
            "rewind",
            "shuffle",
            "repeat",
            "mute audio",
            "unmute audio",
        ],
    ),
    (
        Category::File,
        &[
            "copy",
            "paste",
            "cut",
            "delete",
            "rename",
            "move",
            "new folder",
            "new file",
            "compress",
            "extract",
            "download",
            "upload",
            "share",
            "search files",
        ],
    ),
    (
        Category::Display,
        &[
            "change resolution",
            "rotate screen",
            "mirror display",
            "extend display",
            "night mode",
            "dark mode",
            "light mode",
            "change wallpaper",
            "screen saver",
        ],
    ),
    (
        Category::Input,
        &[
            "enable keyboard",
            "disable keyboard",
            "enable touchpad",
            "disable touchpad",
            "enable mouse",
            "disable mouse",
            "keyboard layout",
            "input language",
        ],
    ),
    (
        Category::Security,
        &[
            "enable firewall",
            "disable firewall",
            "scan virus",
            "update antivirus",
            "check permissions",
            "encrypt",
            "decrypt",
            "backup data",
            "restore backup",
        ],
    ),
    (
        Category::Accessibility,
        &[
            "enable narrator",
            "disable narrator",
            "high contrast",
            "magnifier on",
            "magnifier off",
            "voice control",
            "closed captions",
            "screen reader",
        ],
    ),
];

/// One category's phrase list.
#[derive(Debug, Clone)]
struct CatalogEntry {
    category: Category,
    phrases: Vec<String>,
}

/// Immutable registry of canonical command phrases.
///
/// Iteration order is significant: it decides ties in the matcher and
/// the order of unclear-input candidates.
#[derive(Debug, Clone)]
pub struct CommandCatalog {
    entries: Vec<CatalogEntry>,
}

impl CommandCatalog {
    /// Build a catalog from explicit entries. Phrases are lowercased.
    pub fn new(entries: Vec<(Category, Vec<String>)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(category, phrases)| CatalogEntry {
                    category,
                    phrases: phrases.into_iter().map(|p| p.to_lowercase()).collect(),
                })
                .collect(),
        }
    }

    /// The built-in catalog covering all twelve categories.
    pub fn standard() -> Self {
        Self::new(
            STANDARD
                .iter()
                .map(|(category, phrases)| {
                    (*category, phrases.iter().map(|p| p.to_string()).collect())
                })
                .collect(),
        )
    }

    /// Every (category, phrase) pair in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &str)> + '_ {
        self.entries
            .iter()
            .flat_map(|e| e.phrases.iter().map(move |p| (e.category, p.as_str())))
    }

    /// Phrases registered for one category (empty if none).
    pub fn phrases(&self, category: Category) -> &[String] {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.phrases.as_slice())
            .unwrap_or(&[])
    }

    /// Whether `token` is exactly one of the `app` category's phrases.
    pub fn is_app_verb(&self, token: &str) -> bool {
        self.phrases(Category::App).iter().any(|p| p == token)
    }

    /// Whether any phrase of any category occurs as a substring of `text`.
    pub fn contains_any_phrase(&self, text: &str) -> bool {
        self.iter().any(|(_, phrase)| text.contains(phrase))
    }

    /// Whether `text` equals one of `category`'s phrases, ignoring case.
    pub fn is_phrase_of(&self, category: Category, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.phrases(category).iter().any(|p| *p == lower)
    }

    /// Total number of (category, phrase) pairs.
    pub fn len(&self) -> usize {
        self.entries.iter().map(|e| e.phrases.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CommandCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

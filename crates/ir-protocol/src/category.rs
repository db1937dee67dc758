//! System-action categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of system-action domains an utterance can be routed to.
///
/// Declaration order is the catalog iteration order, which is also the
/// tie-break order when two phrases score identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Volume,
    Brightness,
    Power,
    App,
    System,
    Network,
    Media,
    File,
    Display,
    Input,
    Security,
    Accessibility,
}

impl Category {
    /// Every category, in catalog order.
    pub const ALL: [Category; 12] = [
        Self::Volume,
        Self::Brightness,
        Self::Power,
        Self::App,
        Self::System,
        Self::Network,
        Self::Media,
        Self::File,
        Self::Display,
        Self::Input,
        Self::Security,
        Self::Accessibility,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Volume => "volume",
            Self::Brightness => "brightness",
            Self::Power => "power",
            Self::App => "app",
            Self::System => "system",
            Self::Network => "network",
            Self::Media => "media",
            Self::File => "file",
            Self::Display => "display",
            Self::Input => "input",
            Self::Security => "security",
            Self::Accessibility => "accessibility",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a string that names no known category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_serialization() {
        let json = serde_json::to_string(&Category::Accessibility).unwrap();
        assert_eq!(json, r#""accessibility""#);
    }

    #[test]
    fn from_str_round_trips_display() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn from_str_rejects_unknown() {
        let err = "printer".parse::<Category>().unwrap_err();
        assert_eq!(err.to_string(), "unknown category: printer");
    }

    #[test]
    fn all_is_in_declaration_order() {
        let mut sorted = Category::ALL;
        sorted.sort();
        assert_eq!(sorted, Category::ALL);
    }
}

//! Learning-state records persisted by the feedback store.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::{Error as _, IgnoredAny};
use serde::{Deserialize, Deserializer, Serialize};

use crate::classification::Classification;

/// One classified utterance plus whatever feedback the user gave on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionRecord {
    #[serde(deserialize_with = "lenient_timestamp")]
    pub timestamp: DateTime<Utc>,
    /// Raw input exactly as the user typed it.
    pub input: String,
    pub classification: Classification,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub correction: Option<String>,
}

/// A user-supplied correction for a misclassified input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCorrection {
    pub original: String,
    pub correction: String,
    #[serde(deserialize_with = "lenient_timestamp")]
    pub timestamp: DateTime<Utc>,
}

/// Durable learning state.
///
/// Every field defaults to empty so a partially written or older document
/// still loads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackSnapshot {
    /// Reserved; nothing writes to it yet.
    #[serde(default)]
    pub command_patterns: BTreeMap<String, f64>,
    #[serde(default, deserialize_with = "skip_malformed")]
    pub user_corrections: Vec<UserCorrection>,
    /// Append-only log of interactions that received positive feedback.
    #[serde(default, deserialize_with = "skip_malformed")]
    pub successful_commands: Vec<InteractionRecord>,
    /// Learned confidence keyed by the lowercased raw input.
    #[serde(default)]
    pub confidence_adjustments: BTreeMap<String, f64>,
}

impl FeedbackSnapshot {
    pub fn is_empty(&self) -> bool {
        self.command_patterns.is_empty()
            && self.user_corrections.is_empty()
            && self.successful_commands.is_empty()
            && self.confidence_adjustments.is_empty()
    }
}

/// Parse an RFC 3339 timestamp, or an ISO 8601 one without offset (read
/// as UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|ndt| ndt.and_utc())
        })
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}")))
}

/// Log entries that do not parse are dropped so the rest of the document
/// (notably the learned adjustments) still loads.
fn skip_malformed<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Entry<T> {
        Valid(T),
        Malformed(IgnoredAny),
    }

    let entries = Vec::<Entry<T>>::deserialize(deserializer)?;
    Ok(entries
        .into_iter()
        .filter_map(|entry| match entry {
            Entry::Valid(value) => Some(value),
            Entry::Malformed(_) => None,
        })
        .collect())
}

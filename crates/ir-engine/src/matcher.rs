//! Best catalog match for a raw utterance.

use ir_protocol::Category;

use crate::catalog::CommandCatalog;
use crate::similarity;

/// Raw (pre-learning) outcome of matching an utterance against the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandMatch {
    pub category: Category,
    /// Matched canonical phrase, or the full input for app launches.
    pub command: String,
    pub confidence: f64,
    /// True when the app-verb short-circuit produced this match.
    pub app_launch: bool,
}

/// Match `input` against every catalog phrase.
///
/// Inputs of the form `<app verb> <argument…>` short-circuit to the `app`
/// category with the whole input as the command, since application names
/// cannot be enumerated. Otherwise the phrase with the highest similarity
/// ratio wins; ties keep the earlier phrase in catalog order. Returns
/// `None` only for an empty catalog.
pub fn best_match(catalog: &CommandCatalog, input: &str, app_confidence: f64) -> Option<CommandMatch> {
    let lowered = input.to_lowercase();

    let mut words = lowered.split_whitespace();
    if let (Some(first), Some(_)) = (words.next(), words.next()) {
        if catalog.is_app_verb(first) {
            return Some(CommandMatch {
                category: Category::App,
                command: input.to_string(),
                confidence: app_confidence,
                app_launch: true,
            });
        }
    }

    let mut best: Option<(Category, &str, f64)> = None;
    for (category, phrase) in catalog.iter() {
        let score = similarity::ratio(phrase, &lowered);
        if best.is_none_or(|(_, _, top)| score > top) {
            best = Some((category, phrase, score));
        }
    }

    best.map(|(category, phrase, confidence)| CommandMatch {
        category,
        command: phrase.to_string(),
        confidence,
        app_launch: false,
    })
}

/// Mean of the raw confidence and the learned value, when one exists.
pub fn blend(raw: f64, learned: Option<f64>) -> f64 {
    match learned {
        Some(value) => ((raw + value) / 2.0).clamp(0.0, 1.0),
        None => raw,
    }
}

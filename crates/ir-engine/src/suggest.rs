//! Ranked suggestions for input that cleared neither threshold.

use std::collections::HashSet;

use ir_protocol::{Annotation, Category, Suggestion, SuggestionContext};

use crate::catalog::CommandCatalog;
use crate::context;

/// Candidates considered before scoring.
const MAX_CANDIDATES: usize = 3;

/// Catalog phrases sharing at least one whitespace token with the input,
/// in catalog order, capped at three.
pub fn candidates<'a>(catalog: &'a CommandCatalog, text: &str) -> Vec<(Category, &'a str)> {
    let lowered = text.to_lowercase();
    let words: HashSet<&str> = lowered.split_whitespace().collect();
    let mut seen = HashSet::new();

    catalog
        .iter()
        .filter(|(_, phrase)| phrase.split_whitespace().any(|w| words.contains(w)))
        .filter(|pair| seen.insert(*pair))
        .take(MAX_CANDIDATES)
        .collect()
}

/// Score `candidates` by context and return the best `limit`, highest first.
/// Equal scores keep catalog order.
pub fn rank(
    catalog: &CommandCatalog,
    candidates: &[(Category, &str)],
    text: &str,
    annotation: &Annotation,
    limit: usize,
) -> Vec<Suggestion> {
    let pos = annotation.pos_sequence();
    let mut suggestions: Vec<Suggestion> = candidates
        .iter()
        .map(|&(category, phrase)| Suggestion {
            category,
            command: phrase.to_string(),
            confidence: context::score(catalog, category, text, &annotation.entities, &pos),
            context: SuggestionContext {
                relevant_entities: context::relevant_entities(
                    catalog,
                    category,
                    &annotation.entities,
                ),
                pos_pattern: context::pos_pattern_matches(category, &pos),
            },
        })
        .collect();

    suggestions.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    suggestions.truncate(limit);
    suggestions
}

//! Context scoring: keyword, entity and POS-pattern bonuses per category.

use std::collections::HashSet;

use ir_protocol::{Category, Entity, PartOfSpeech};

use crate::catalog::CommandCatalog;

const KEYWORD_BONUS: f64 = 0.2;
const ENTITY_BONUS: f64 = 0.15;
const POS_PATTERN_BONUS: f64 = 0.15;

/// Words that hint at a category without being a command phrase. Only
/// the hardware-level categories carry keywords.
pub fn keywords(category: Category) -> &'static [&'static str] {
    match category {
        Category::Volume => &["sound", "audio", "speaker", "loud", "quiet"],
        Category::Brightness => &["screen", "display", "dim", "light", "dark"],
        Category::Power => &["system", "computer", "device", "machine"],
        _ => &[],
    }
}

/// Categories whose commands name outside things (apps, files, networks),
/// so a named entity can count towards them.
pub fn accepts_entities(category: Category) -> bool {
    matches!(
        category,
        Category::App | Category::File | Category::Network | Category::Security
    )
}

const VERB_NOUN: &[PartOfSpeech] = &[PartOfSpeech::Verb, PartOfSpeech::Noun];
const VERB: &[PartOfSpeech] = &[PartOfSpeech::Verb];
const VERB_PROPN: &[PartOfSpeech] = &[PartOfSpeech::Verb, PartOfSpeech::Propn];

/// Expected contiguous POS subsequence for a category, if it has one.
pub fn pos_pattern(category: Category) -> Option<&'static [PartOfSpeech]> {
    match category {
        Category::Volume | Category::Brightness => Some(VERB_NOUN),
        Category::Power => Some(VERB),
        Category::App => Some(VERB_PROPN),
        _ => None,
    }
}

/// Whether the category's pattern occurs anywhere in `pos`.
pub fn pos_pattern_matches(category: Category, pos: &[PartOfSpeech]) -> bool {
    pos_pattern(category).is_some_and(|pattern| pos.windows(pattern.len()).any(|w| w == pattern))
}

/// Entities whose text is literally one of the category's catalog phrases.
/// Always empty for categories that do not accept entities.
pub fn relevant_entities(
    catalog: &CommandCatalog,
    category: Category,
    entities: &[Entity],
) -> Vec<Entity> {
    if !accepts_entities(category) {
        return Vec::new();
    }
    entities
        .iter()
        .filter(|e| catalog.is_phrase_of(category, &e.text))
        .cloned()
        .collect()
}

/// Additive context score in `[0, 1]`.
pub fn score(
    catalog: &CommandCatalog,
    category: Category,
    text: &str,
    entities: &[Entity],
    pos: &[PartOfSpeech],
) -> f64 {
    let lowered = text.to_lowercase();
    let words: HashSet<&str> = lowered.split_whitespace().collect();
    let keyword_hits = keywords(category)
        .iter()
        .filter(|k| words.contains(*k))
        .count();

    let entity_hits = relevant_entities(catalog, category, entities).len();

    let mut total = keyword_hits as f64 * KEYWORD_BONUS + entity_hits as f64 * ENTITY_BONUS;
    if pos_pattern_matches(category, pos) {
        total += POS_PATTERN_BONUS;
    }
    total.min(1.0)
}

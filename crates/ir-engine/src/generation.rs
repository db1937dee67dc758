//! Generation scoring and intent detection.

use ir_protocol::{Annotation, GenerationIntent, PartOfSpeech};

use crate::catalog::CommandCatalog;

const HIGH: &[&str] = &[
    "tell", "explain", "write", "generate", "create", "make", "show", "describe", "elaborate",
    "define", "what", "how", "why", "when", "who", "where", "which",
];

const MEDIUM: &[&str] = &[
    "is", "are", "was", "were", "will", "can", "could", "would", "should", "may", "might", "do",
    "does", "did", "mean", "work", "function", "help", "guide", "teach",
];

const LOW: &[&str] = &[
    "the", "a", "an", "any", "some", "many", "few", "about", "like", "similar", "different",
    "other",
];

const QUESTION_TAGS: &[&str] = &["WDT", "WP", "WP$", "WRB"];
const AUX_TAGS: &[&str] = &["MD", "VBZ", "VBP", "VBD"];

/// Checked in this order; the first group with any hit decides the intent.
const INTENT_TRIGGERS: &[(GenerationIntent, &[&str])] = &[
    (
        GenerationIntent::CodeGeneration,
        &["code", "program", "script", "function"],
    ),
    (GenerationIntent::CreativeWriting, &["story", "joke", "poem"]),
    (GenerationIntent::Explanation, &["explain", "how", "why"]),
];

/// Heuristic likelihood in `[0, 1]` that `text` asks for generated content.
///
/// `tokens` are the normalized lemmas; `annotation` is the parse of the raw text.
pub fn score(catalog: &CommandCatalog, text: &str, tokens: &[String], annotation: &Annotation) -> f64 {
    let lowered = text.to_lowercase();
    let mut total = 0.0;

    if text.contains('?') {
        total += 0.5;
    }

    if lowered
        .split_whitespace()
        .next()
        .is_some_and(|first| HIGH.contains(&first))
    {
        total += 0.4;
    }

    for token in tokens {
        let token = token.to_lowercase();
        let token = token.as_str();
        if HIGH.contains(&token) {
            total += 0.3;
        } else if MEDIUM.contains(&token) {
            total += 0.2;
        } else if LOW.contains(&token) {
            total += 0.1;
        }
    }

    if is_question_structure(annotation) {
        total += 0.3;
    }

    if annotation.first().is_some_and(|t| t.pos == PartOfSpeech::Verb) {
        total += 0.2;
    }

    if total == 0.0 && !tokens.is_empty() {
        total = 0.3;
    }

    total = f64::min(total, 1.0);
    if total > 0.2 && !catalog.contains_any_phrase(&lowered) {
        total = f64::min(total + 0.2, 1.0);
    }
    total
}

/// Sentence opens with a wh-word or an auxiliary/modal.
///
/// Subject-verb inversion ("can you …", "is it …") always starts with an
/// auxiliary, so it needs no separate check.
pub fn is_question_structure(annotation: &Annotation) -> bool {
    annotation.first().is_some_and(|first| {
        let tag = first.tag.as_str();
        QUESTION_TAGS.contains(&tag) || AUX_TAGS.contains(&tag)
    })
}

/// Intent from the raw parsed tokens, by fixed trigger priority.
pub fn intent(annotation: &Annotation) -> GenerationIntent {
    let words: Vec<String> = annotation
        .tokens
        .iter()
        .map(|t| t.text.to_lowercase())
        .collect();
    INTENT_TRIGGERS
        .iter()
        .find(|(_, triggers)| words.iter().any(|w| triggers.contains(&w.as_str())))
        .map(|(intent, _)| *intent)
        .unwrap_or_default()
}

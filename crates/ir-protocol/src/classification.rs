//! Classification outcomes returned for every utterance.

use serde::{Deserialize, Serialize};

use crate::annotation::Entity;
use crate::category::Category;

/// Result of classifying one utterance.
///
/// Serialized with a `type` tag (`"system"`, `"generation"`, `"unclear"`)
/// so consumers can switch on it without knowing the Rust shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Classification {
    /// A recognized system action.
    System(SystemMatch),
    /// A request to forward to the text-generation backend.
    Generation(GenerationRequest),
    /// Neither threshold met; carries ranked suggestions.
    Unclear(UnclearInput),
}

impl Classification {
    /// Short tag matching the serialized `type` field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::System(_) => "system",
            Self::Generation(_) => "generation",
            Self::Unclear(_) => "unclear",
        }
    }

    /// Headline confidence. Unclear results report their best suggestion (or 0).
    pub fn confidence(&self) -> f64 {
        match self {
            Self::System(m) => m.confidence,
            Self::Generation(g) => g.confidence,
            Self::Unclear(u) => u
                .suggestions
                .first()
                .map(|s| s.confidence)
                .unwrap_or(0.0),
        }
    }

    pub fn as_system(&self) -> Option<&SystemMatch> {
        match self {
            Self::System(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_generation(&self) -> Option<&GenerationRequest> {
        match self {
            Self::Generation(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_unclear(&self) -> Option<&UnclearInput> {
        match self {
            Self::Unclear(u) => Some(u),
            _ => None,
        }
    }
}

// ── System ────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemMatch {
    pub category: Category,
    /// Canonical phrase, or the full input for app launches.
    pub command: String,
    /// Blended confidence (0.0 - 1.0).
    pub confidence: f64,
    pub context: SystemContext,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemContext {
    pub word_similarity: f64,
    pub sequence_similarity: f64,
    pub context_score: f64,
    /// Surface texts of every entity in the input.
    #[serde(default)]
    pub relevant_entities: Vec<String>,
}

// ── Generation ────────────────────────────────────────────────

/// Sub-category of a generation request, used to shape the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GenerationIntent {
    CodeGeneration,
    CreativeWriting,
    Explanation,
    #[default]
    General,
}

impl GenerationIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CodeGeneration => "code_generation",
            Self::CreativeWriting => "creative_writing",
            Self::Explanation => "explanation",
            Self::General => "general",
        }
    }
}

impl std::fmt::Display for GenerationIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub confidence: f64,
    pub intent: GenerationIntent,
    pub context: GenerationContext,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationContext {
    /// Always "text" today.
    pub generation_type: String,
    /// Normalized tokens longer than three characters.
    #[serde(default)]
    pub key_phrases: Vec<String>,
}

// ── Unclear ───────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnclearInput {
    /// At most three ranked suggestions, best first.
    pub suggestions: Vec<Suggestion>,
    pub context: UnclearContext,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub category: Category,
    pub command: String,
    pub confidence: f64,
    pub context: SuggestionContext,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionContext {
    /// Entities whose text echoes one of the category's catalog phrases.
    #[serde(default)]
    pub relevant_entities: Vec<Entity>,
    /// Whether the category's expected POS pattern occurs in the input.
    pub pos_pattern: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnclearContext {
    /// Categories of the candidate set, before ranking.
    #[serde(default)]
    pub possible_intents: Vec<Category>,
    #[serde(default)]
    pub key_phrases: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system() -> Classification {
        Classification::System(SystemMatch {
            category: Category::Volume,
            command: "mute".into(),
            confidence: 1.0,
            context: SystemContext {
                word_similarity: 1.0,
                sequence_similarity: 1.0,
                context_score: 0.0,
                relevant_entities: vec![],
            },
        })
    }

    #[test]
    fn system_serializes_with_type_tag() {
        let json = serde_json::to_value(system()).unwrap();
        assert_eq!(json["type"], "system");
        assert_eq!(json["category"], "volume");
        assert_eq!(json["command"], "mute");
        assert_eq!(json["context"]["sequence_similarity"], 1.0);
    }

    #[test]
    fn generation_intent_serialization() {
        assert_eq!(
            serde_json::to_string(&GenerationIntent::CodeGeneration).unwrap(),
            r#""code_generation""#
        );
        assert_eq!(GenerationIntent::default(), GenerationIntent::General);
    }

    #[test]
    fn unclear_confidence_uses_top_suggestion() {
        let unclear = Classification::Unclear(UnclearInput {
            suggestions: vec![Suggestion {
                category: Category::App,
                command: "switch to".into(),
                confidence: 0.15,
                context: SuggestionContext {
                    relevant_entities: vec![],
                    pos_pattern: false,
                },
            }],
            context: UnclearContext {
                possible_intents: vec![Category::App],
                key_phrases: vec![],
            },
        });
        assert_eq!(unclear.kind(), "unclear");
        assert!((unclear.confidence() - 0.15).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_unclear_has_zero_confidence() {
        let unclear = Classification::Unclear(UnclearInput {
            suggestions: vec![],
            context: UnclearContext {
                possible_intents: vec![],
                key_phrases: vec![],
            },
        });
        assert_eq!(unclear.confidence(), 0.0);
    }

    #[test]
    fn deserializes_generation_from_tagged_json() {
        let json = r#"{
            "type": "generation",
            "confidence": 0.9,
            "intent": "explanation",
            "context": {"generation_type": "text", "key_phrases": ["recursion"]}
        }"#;
        let parsed: Classification = serde_json::from_str(json).unwrap();
        let generation = parsed.as_generation().unwrap();
        assert_eq!(generation.intent, GenerationIntent::Explanation);
        assert_eq!(generation.context.key_phrases, vec!["recursion".to_string()]);
        assert!(parsed.as_system().is_none());
    }
}

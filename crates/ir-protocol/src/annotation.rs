//! Linguistic annotation consumed by the classifier.
//!
//! Produced by an external annotation provider (tokenizer, tagger, NER).
//! The engine only reads these values.

use serde::{Deserialize, Serialize};

/// Coarse universal part-of-speech tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PartOfSpeech {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    X,
}

/// One token of the annotated input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedToken {
    /// Surface text as it appeared in the input.
    pub text: String,
    /// Dictionary form.
    pub lemma: String,
    /// Coarse part of speech.
    pub pos: PartOfSpeech,
    /// Fine-grained Penn Treebank tag (e.g. "WP", "MD", "VBZ").
    pub tag: String,
}

/// A named-entity span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: String,
}

/// Full annotation of one input string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub tokens: Vec<AnnotatedToken>,
    pub entities: Vec<Entity>,
}

impl Annotation {
    /// Coarse POS tags in token order.
    pub fn pos_sequence(&self) -> Vec<PartOfSpeech> {
        self.tokens.iter().map(|t| t.pos).collect()
    }

    /// Entity surface texts in order.
    pub fn entity_texts(&self) -> Vec<String> {
        self.entities.iter().map(|e| e.text.clone()).collect()
    }

    pub fn first(&self) -> Option<&AnnotatedToken> {
        self.tokens.first()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(text: &str, pos: PartOfSpeech, tag: &str) -> AnnotatedToken {
        AnnotatedToken {
            text: text.into(),
            lemma: text.to_lowercase(),
            pos,
            tag: tag.into(),
        }
    }

    #[test]
    fn pos_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&PartOfSpeech::Propn).unwrap(),
            r#""PROPN""#
        );
    }

    #[test]
    fn pos_sequence_preserves_order() {
        let annotation = Annotation {
            tokens: vec![
                token("open", PartOfSpeech::Verb, "VB"),
                token("Chrome", PartOfSpeech::Propn, "NNP"),
            ],
            entities: vec![Entity {
                text: "Chrome".into(),
                label: "PRODUCT".into(),
            }],
        };
        assert_eq!(
            annotation.pos_sequence(),
            vec![PartOfSpeech::Verb, PartOfSpeech::Propn]
        );
        assert_eq!(annotation.entity_texts(), vec!["Chrome".to_string()]);
        assert_eq!(annotation.first().unwrap().tag, "VB");
    }
}

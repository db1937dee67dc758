//! Linguistic annotation provider.
//!
//! The engine consumes tokens, POS tags, entities and lemmas through the
//! `Annotator` trait. `LexiconAnnotator` is a deterministic closed-class
//! tagger good enough for short imperative commands and questions; a
//! statistical tagger can be plugged in behind the same trait.

use ir_protocol::{AnnotatedToken, Annotation, Entity, PartOfSpeech};

use crate::error::{EngineError, EngineResult};

/// Source of tokens, POS tags, entities and lemmas.
pub trait Annotator: Send + Sync {
    /// Annotate the raw input. Fails when the text cannot be processed.
    fn annotate(&self, text: &str) -> EngineResult<Annotation>;

    /// Dictionary form of a single lowercase word.
    fn lemmatize(&self, word: &str) -> String;
}

const MODALS: &[&str] = &[
    "can", "could", "will", "would", "shall", "should", "may", "might", "must",
];

const PERSONAL_PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them",
];

const POSSESSIVE_PRONOUNS: &[&str] = &["my", "your", "his", "its", "our", "their"];

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "some", "any", "every", "each", "all",
    "no", "another",
];

const PREPOSITIONS: &[&str] = &[
    "in", "on", "at", "for", "with", "from", "of", "by", "about", "into", "over", "under", "up",
    "down", "off", "out", "through", "between", "after", "before",
];

const COORDINATORS: &[&str] = &["and", "or", "but", "nor"];

const SUBORDINATORS: &[&str] = &["if", "because", "while", "although", "unless", "since"];

const ADVERBS: &[&str] = &[
    "not", "very", "too", "also", "now", "then", "again", "just", "really", "quickly", "slowly",
];

const ADJECTIVES: &[&str] = &[
    "max", "min", "dark", "light", "high", "low", "new", "old", "loud", "quiet", "good", "bad",
    "big", "small", "similar", "different", "other", "many", "few",
];

const VERBS: &[&str] = &[
    "open", "close", "start", "stop", "launch", "quit", "minimize", "maximize", "restore", "run",
    "kill", "switch", "focus", "increase", "decrease", "set", "adjust", "mute", "unmute", "turn",
    "lock", "unlock", "shutdown", "restart", "reboot", "sleep", "wake", "hibernate", "log",
    "sign", "update", "install", "uninstall", "check", "clean", "clear", "connect", "disconnect",
    "play", "pause", "rewind", "shuffle", "repeat", "copy", "paste", "cut", "delete", "rename",
    "move", "compress", "extract", "download", "upload", "share", "change", "rotate", "mirror",
    "extend", "enable", "disable", "scan", "encrypt", "decrypt", "backup", "tell", "explain",
    "write", "generate", "create", "make", "show", "describe", "elaborate", "define", "give",
    "find", "search", "help", "teach", "guide", "read", "go", "get", "let", "bring", "put",
];

/// Applications recognised as product names even when typed in lowercase.
const KNOWN_APPS: &[&str] = &[
    "chrome",
    "firefox",
    "safari",
    "edge",
    "spotify",
    "vscode",
    "discord",
    "steam",
    "vlc",
    "notepad",
    "calculator",
    "terminal",
    "finder",
    "explorer",
    "word",
    "excel",
    "powerpoint",
    "slack",
    "zoom",
    "whatsapp",
    "telegram",
    "thunderbird",
    "gimp",
];

const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("mice", "mouse"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("people", "person"),
];

/// Closed-class lexicon tagger with rule-based lemmatization.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconAnnotator;

impl LexiconAnnotator {
    pub fn new() -> Self {
        Self
    }

    fn tag(&self, surface: &str, index: usize) -> (PartOfSpeech, &'static str) {
        let word = surface.to_lowercase();
        let w = word.as_str();

        if !w.chars().any(char::is_alphanumeric) {
            let tag = match w {
                "." | "?" | "!" => ".",
                "," => ",",
                _ => ":",
            };
            return (PartOfSpeech::Punct, tag);
        }
        if w.chars().all(|c| c.is_ascii_digit()) {
            return (PartOfSpeech::Num, "CD");
        }

        match w {
            "what" | "who" | "whom" => return (PartOfSpeech::Pron, "WP"),
            "whose" => return (PartOfSpeech::Det, "WP$"),
            "which" => return (PartOfSpeech::Det, "WDT"),
            "when" | "where" | "why" | "how" => return (PartOfSpeech::Adv, "WRB"),
            "is" | "does" | "has" => return (PartOfSpeech::Aux, "VBZ"),
            "are" | "am" | "do" | "have" => return (PartOfSpeech::Aux, "VBP"),
            "was" | "were" | "did" | "had" => return (PartOfSpeech::Aux, "VBD"),
            "be" => return (PartOfSpeech::Aux, "VB"),
            "been" => return (PartOfSpeech::Aux, "VBN"),
            "being" => return (PartOfSpeech::Aux, "VBG"),
            "to" => return (PartOfSpeech::Part, "TO"),
            "please" => return (PartOfSpeech::Intj, "UH"),
            _ => {}
        }

        let lexicons: [(&[&str], PartOfSpeech, &'static str); 10] = [
            (MODALS, PartOfSpeech::Aux, "MD"),
            (PERSONAL_PRONOUNS, PartOfSpeech::Pron, "PRP"),
            (POSSESSIVE_PRONOUNS, PartOfSpeech::Pron, "PRP$"),
            (DETERMINERS, PartOfSpeech::Det, "DT"),
            (PREPOSITIONS, PartOfSpeech::Adp, "IN"),
            (COORDINATORS, PartOfSpeech::Cconj, "CC"),
            (SUBORDINATORS, PartOfSpeech::Sconj, "IN"),
            (ADVERBS, PartOfSpeech::Adv, "RB"),
            (ADJECTIVES, PartOfSpeech::Adj, "JJ"),
            (VERBS, PartOfSpeech::Verb, "VB"),
        ];
        if let Some((_, pos, tag)) = lexicons.iter().find(|(words, _, _)| words.contains(&w)) {
            return (*pos, *tag);
        }

        let capitalised = surface.chars().next().is_some_and(char::is_uppercase);
        if KNOWN_APPS.contains(&w) || (capitalised && index > 0) {
            return (PartOfSpeech::Propn, "NNP");
        }
        (PartOfSpeech::Noun, "NN")
    }
}

impl Annotator for LexiconAnnotator {
    fn annotate(&self, text: &str) -> EngineResult<Annotation> {
        if let Some(bad) = text
            .chars()
            .find(|c| *c == '\u{FFFD}' || (c.is_control() && !c.is_whitespace()))
        {
            return Err(EngineError::AnnotationUnavailable(format!(
                "unsupported character {bad:?} in input"
            )));
        }

        let tokens: Vec<AnnotatedToken> = split_tokens(text)
            .into_iter()
            .enumerate()
            .map(|(index, surface)| {
                let (pos, tag) = self.tag(surface, index);
                AnnotatedToken {
                    text: surface.to_string(),
                    lemma: self.lemmatize(&surface.to_lowercase()),
                    pos,
                    tag: tag.to_string(),
                }
            })
            .collect();

        let entities = extract_entities(&tokens);
        Ok(Annotation { tokens, entities })
    }

    fn lemmatize(&self, word: &str) -> String {
        if let Some((_, lemma)) = IRREGULAR_NOUNS.iter().find(|(plural, _)| *plural == word) {
            return (*lemma).to_string();
        }
        if word.chars().count() <= 3
            || word.ends_with("ss")
            || word.ends_with("us")
            || word.ends_with("is")
        {
            return word.to_string();
        }
        if let Some(stem) = word.strip_suffix("ies") {
            return format!("{stem}y");
        }
        for suffix in ["ches", "shes", "sses", "xes", "zes"] {
            if word.ends_with(suffix) {
                return word[..word.len() - 2].to_string();
            }
        }
        word.strip_suffix('s').unwrap_or(word).to_string()
    }
}

/// Split on whitespace, then peel punctuation into separate tokens.
/// Apostrophes and hyphens inside a word stay attached.
fn split_tokens(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    for chunk in text.split_whitespace() {
        let mut word_start: Option<usize> = None;
        for (i, c) in chunk.char_indices() {
            let inner = (c == '\'' || c == '-') && word_start.is_some();
            if c.is_alphanumeric() || inner {
                word_start.get_or_insert(i);
            } else {
                if let Some(start) = word_start.take() {
                    tokens.push(&chunk[start..i]);
                }
                tokens.push(&chunk[i..i + c.len_utf8()]);
            }
        }
        if let Some(start) = word_start {
            tokens.push(&chunk[start..]);
        }
    }
    tokens
}

/// Proper-noun runs become ORG/PRODUCT entities, digit runs CARDINAL.
fn extract_entities(tokens: &[AnnotatedToken]) -> Vec<Entity> {
    let mut entities = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        let pos = tokens[i].pos;
        if pos != PartOfSpeech::Propn && pos != PartOfSpeech::Num {
            i += 1;
            continue;
        }
        let start = i;
        while i < tokens.len() && tokens[i].pos == pos {
            i += 1;
        }
        let run = &tokens[start..i];
        let label = match pos {
            PartOfSpeech::Num => "CARDINAL",
            _ if run
                .iter()
                .any(|t| KNOWN_APPS.contains(&t.text.to_lowercase().as_str())) =>
            {
                "PRODUCT"
            }
            _ => "ORG",
        };
        entities.push(Entity {
            text: run
                .iter()
                .map(|t| t.text.as_str())
                .collect::<Vec<_>>()
                .join(" "),
            label: label.to_string(),
        });
    }
    entities
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annotate(text: &str) -> Annotation {
        LexiconAnnotator::new().annotate(text).unwrap()
    }

    fn tags(annotation: &Annotation) -> Vec<&str> {
        annotation.tokens.iter().map(|t| t.tag.as_str()).collect()
    }

    #[test]
    fn tags_imperative_app_command() {
        let a = annotate("open chrome");
        assert_eq!(
            a.pos_sequence(),
            vec![PartOfSpeech::Verb, PartOfSpeech::Propn]
        );
        assert_eq!(a.entities.len(), 1);
        assert_eq!(a.entities[0].text, "chrome");
        assert_eq!(a.entities[0].label, "PRODUCT");
    }

    #[test]
    fn tags_wh_question() {
        let a = annotate("What is recursion?");
        assert_eq!(tags(&a), vec!["WP", "VBZ", "NN", "."]);
        assert_eq!(a.tokens[3].pos, PartOfSpeech::Punct);
    }

    #[test]
    fn tags_inverted_question() {
        let a = annotate("can you explain closures");
        assert_eq!(a.tokens[0].tag, "MD");
        assert_eq!(a.tokens[1].pos, PartOfSpeech::Pron);
        assert_eq!(a.tokens[2].pos, PartOfSpeech::Verb);
    }

    #[test]
    fn capitalised_non_initial_words_are_proper_nouns() {
        let a = annotate("Play music from Acme Records");
        assert_eq!(a.tokens[0].pos, PartOfSpeech::Verb);
        assert_eq!(a.tokens[3].pos, PartOfSpeech::Propn);
        assert_eq!(a.entities.len(), 1);
        assert_eq!(a.entities[0].text, "Acme Records");
        assert_eq!(a.entities[0].label, "ORG");
    }

    #[test]
    fn digits_become_cardinal_entities() {
        let a = annotate("set volume 40");
        assert_eq!(a.tokens[2].pos, PartOfSpeech::Num);
        assert_eq!(a.entities[0].label, "CARDINAL");
    }

    #[test]
    fn keeps_contractions_together() {
        let a = annotate("what's up, doc");
        let texts: Vec<&str> = a.tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["what's", "up", ",", "doc"]);
    }

    #[test]
    fn rejects_control_characters() {
        let err = LexiconAnnotator::new().annotate("mute\u{0007}").unwrap_err();
        assert!(matches!(err, EngineError::AnnotationUnavailable(_)));
        assert!(LexiconAnnotator::new().annotate("bad \u{FFFD} bytes").is_err());
    }

    #[test]
    fn allows_tabs_and_newlines() {
        assert!(LexiconAnnotator::new().annotate("mute\tnow\n").is_ok());
    }

    #[test]
    fn empty_input_has_no_tokens() {
        let a = annotate("   ");
        assert!(a.is_empty());
        assert!(a.entities.is_empty());
    }

    #[test]
    fn lemmatizes_plurals() {
        let l = LexiconAnnotator::new();
        assert_eq!(l.lemmatize("files"), "file");
        assert_eq!(l.lemmatize("batteries"), "battery");
        assert_eq!(l.lemmatize("boxes"), "box");
        assert_eq!(l.lemmatize("switches"), "switch");
        assert_eq!(l.lemmatize("children"), "child");
    }

    #[test]
    fn lemmatize_leaves_singular_forms() {
        let l = LexiconAnnotator::new();
        assert_eq!(l.lemmatize("status"), "status");
        assert_eq!(l.lemmatize("address"), "address");
        assert_eq!(l.lemmatize("analysis"), "analysis");
        assert_eq!(l.lemmatize("gas"), "gas");
        assert_eq!(l.lemmatize("volume"), "volume");
    }
}

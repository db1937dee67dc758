//! Text normalization: lowercase, strip non-letters, drop stopwords, lemmatize.

use std::sync::{Arc, LazyLock};

use moka::policy::EvictionPolicy;
use moka::sync::Cache;
use regex::Regex;

use crate::annotator::Annotator;

static RE_NON_LETTER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-zA-Z\s]").unwrap());

/// NLTK English stopword list.
const STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(&word)
}

/// Memoized normalizer. Safe to share across threads.
pub struct TextNormalizer {
    annotator: Arc<dyn Annotator>,
    cache: Cache<String, Vec<String>>,
}

impl TextNormalizer {
    /// `cache_capacity` bounds the number of memoized inputs (least recently
    /// used evicted first); zero disables memoization.
    pub fn new(annotator: Arc<dyn Annotator>, cache_capacity: usize) -> Self {
        let cache = Cache::builder()
            .max_capacity(cache_capacity as u64)
            .eviction_policy(EvictionPolicy::lru())
            .build();
        Self { annotator, cache }
    }

    /// Ordered lemmas of the content words in `text`. May be empty.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        let key = text.to_string();
        if let Some(hit) = self.cache.get(&key) {
            return hit;
        }
        let tokens = self.compute(text);
        self.cache.insert(key, tokens.clone());
        tokens
    }

    /// Number of memoized inputs, after pending evictions are applied.
    pub fn cached(&self) -> usize {
        self.cache.run_pending_tasks();
        self.cache.entry_count() as usize
    }

    fn compute(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let letters = RE_NON_LETTER.replace_all(&lowered, "");
        letters
            .split_whitespace()
            .filter(|token| !is_stopword(token))
            .map(|token| self.annotator.lemmatize(token))
            .collect()
    }
}

impl std::fmt::Debug for TextNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextNormalizer")
            .field("cached", &self.cached())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotator::LexiconAnnotator;

    fn normalizer(capacity: usize) -> TextNormalizer {
        TextNormalizer::new(Arc::new(LexiconAnnotator::new()), capacity)
    }

    #[test]
    fn stopword_list_is_complete() {
        assert_eq!(STOPWORDS.len(), 179);
    }

    #[test]
    fn drops_stopwords_digits_and_punctuation() {
        let n = normalizer(10);
        assert_eq!(n.normalize("Turn the Volume UP to 80%!"), vec!["turn", "volume"]);
    }

    #[test]
    fn lemmatizes_content_words() {
        let n = normalizer(10);
        assert_eq!(n.normalize("search files"), vec!["search", "file"]);
    }

    #[test]
    fn question_words_are_stopwords() {
        let n = normalizer(10);
        assert_eq!(n.normalize("what is recursion"), vec!["recursion"]);
        assert!(n.normalize("to be or not").is_empty());
    }

    #[test]
    fn apostrophes_are_stripped_before_stopword_filtering() {
        // "don't" becomes "dont", which is not a stopword
        let n = normalizer(10);
        assert_eq!(n.normalize("don't stop"), vec!["dont", "stop"]);
    }

    #[test]
    fn repeated_calls_are_identical_and_cached() {
        let n = normalizer(10);
        let first = n.normalize("explain closures");
        let second = n.normalize("explain closures");
        assert_eq!(first, second);
        assert_eq!(n.cached(), 1);
    }

    #[test]
    fn surrounding_whitespace_does_not_change_tokens() {
        let n = normalizer(10);
        assert_eq!(n.normalize("  mute audio  "), n.normalize("mute audio"));
    }

    #[test]
    fn cache_is_bounded() {
        let n = normalizer(2);
        for text in ["one", "two", "three", "four"] {
            n.normalize(text);
        }
        assert!(n.cached() <= 2);
        assert_eq!(n.normalize("three"), vec!["three"]);
    }

    #[test]
    fn zero_capacity_still_normalizes() {
        let n = normalizer(0);
        assert_eq!(n.normalize("mute audio"), vec!["mute", "audio"]);
        assert_eq!(n.normalize("mute audio"), vec!["mute", "audio"]);
        assert_eq!(n.cached(), 0);
    }
}

//! The classification pipeline.
//!
//! raw input → normalizer → matcher (+ learned blending) → System if above
//! the system threshold, else generation scorer → Generation if above the
//! generation threshold, else ranked suggestions → Unclear.

use std::sync::Arc;

use ir_protocol::{
    Classification, GenerationContext, GenerationRequest, SystemContext, SystemMatch,
    UnclearContext, UnclearInput,
};
use tracing::{debug, info};

use crate::annotator::{Annotator, LexiconAnnotator};
use crate::catalog::CommandCatalog;
use crate::config::{EngineConfig, FeedbackConfig};
use crate::error::EngineResult;
use crate::feedback::{FeedbackReceipt, FeedbackStore, JsonFileStorage};
use crate::normalizer::TextNormalizer;
use crate::{context, generation, matcher, suggest};

/// Routes utterances and learns from feedback. Shareable across threads.
pub struct IntentEngine {
    config: EngineConfig,
    catalog: CommandCatalog,
    annotator: Arc<dyn Annotator>,
    normalizer: TextNormalizer,
    feedback: FeedbackStore,
}

impl IntentEngine {
    pub fn new(
        config: EngineConfig,
        catalog: CommandCatalog,
        annotator: Arc<dyn Annotator>,
        feedback: FeedbackStore,
    ) -> Self {
        let normalizer = TextNormalizer::new(annotator.clone(), config.normalizer_cache_capacity);
        Self {
            config,
            catalog,
            annotator,
            normalizer,
            feedback,
        }
    }

    /// Standard catalog, lexicon annotator and in-memory learning.
    pub fn with_defaults() -> Self {
        Self::new(
            EngineConfig::default(),
            CommandCatalog::standard(),
            Arc::new(LexiconAnnotator::new()),
            FeedbackStore::in_memory(),
        )
    }

    /// Standard catalog and lexicon annotator, learning persisted per `feedback`.
    pub fn from_config(config: EngineConfig, feedback: &FeedbackConfig) -> Self {
        let store = if feedback.enabled {
            info!(path = %feedback.path.display(), "Using persistent learning data");
            FeedbackStore::load(JsonFileStorage::new(&feedback.path))
        } else {
            FeedbackStore::in_memory()
        };
        Self::new(
            config,
            CommandCatalog::standard(),
            Arc::new(LexiconAnnotator::new()),
            store,
        )
    }

    /// Classify one utterance. Fails only when annotation is unavailable.
    pub fn classify(&self, text: &str) -> EngineResult<Classification> {
        let annotation = self.annotator.annotate(text)?;
        let tokens = self.normalizer.normalize(text);
        let entity_texts: Vec<String> = annotation.entity_texts();

        if let Some(found) =
            matcher::best_match(&self.catalog, text, self.config.app_short_circuit_confidence)
        {
            if found.app_launch {
                debug!(command = %found.command, "App command short-circuit");
                let confidence = found.confidence;
                return Ok(Classification::System(SystemMatch {
                    category: found.category,
                    command: found.command,
                    confidence,
                    context: SystemContext {
                        word_similarity: confidence,
                        sequence_similarity: confidence,
                        context_score: confidence,
                        relevant_entities: entity_texts,
                    },
                }));
            }

            let learned = self.feedback.learned_confidence(text);
            let confidence = matcher::blend(found.confidence, learned);
            debug!(
                category = %found.category,
                command = %found.command,
                raw = found.confidence,
                ?learned,
                confidence,
                "Best catalog match"
            );

            if confidence > self.config.system_threshold {
                let context_score = context::score(
                    &self.catalog,
                    found.category,
                    text,
                    &annotation.entities,
                    &annotation.pos_sequence(),
                );
                return Ok(Classification::System(SystemMatch {
                    category: found.category,
                    command: found.command,
                    confidence,
                    context: SystemContext {
                        word_similarity: confidence,
                        sequence_similarity: found.confidence,
                        context_score,
                        relevant_entities: entity_texts,
                    },
                }));
            }
        }

        let key_phrases = key_phrases(&tokens);

        let score = generation::score(&self.catalog, text, &tokens, &annotation);
        if score > self.config.generation_threshold {
            let intent = generation::intent(&annotation);
            debug!(score, %intent, "Generation request");
            return Ok(Classification::Generation(GenerationRequest {
                confidence: score,
                intent,
                context: GenerationContext {
                    generation_type: "text".to_string(),
                    key_phrases,
                },
            }));
        }

        let candidates = suggest::candidates(&self.catalog, text);
        let possible_intents = candidates.iter().map(|(category, _)| *category).collect();
        let suggestions = suggest::rank(
            &self.catalog,
            &candidates,
            text,
            &annotation,
            self.config.max_suggestions,
        );
        debug!(generation_score = score, suggestions = suggestions.len(), "Unclear input");

        Ok(Classification::Unclear(UnclearInput {
            suggestions,
            context: UnclearContext {
                possible_intents,
                key_phrases,
            },
        }))
    }

    /// Record user feedback for `text`. The input is re-classified so the
    /// interaction log holds what the engine would decide now.
    pub fn provide_feedback(
        &self,
        text: &str,
        success: bool,
        correction: Option<&str>,
    ) -> EngineResult<FeedbackReceipt> {
        self.record(text, Some(success), correction)
    }

    /// Record only a correction, without success or failure.
    pub fn provide_correction(&self, text: &str, correction: &str) -> EngineResult<FeedbackReceipt> {
        self.record(text, None, Some(correction))
    }

    fn record(
        &self,
        text: &str,
        success: Option<bool>,
        correction: Option<&str>,
    ) -> EngineResult<FeedbackReceipt> {
        let classification = self.classify(text)?;
        Ok(self
            .feedback
            .record_interaction(text, classification, success, correction))
    }

    /// Learned value for `text`, if feedback was given for it.
    pub fn learned_confidence(&self, text: &str) -> Option<f64> {
        self.feedback.learned_confidence(text)
    }

    pub fn feedback(&self) -> &FeedbackStore {
        &self.feedback
    }

    /// Flush learning data to storage.
    pub fn persist_learning(&self) -> EngineResult<()> {
        self.feedback.save()?;
        Ok(())
    }

    pub fn catalog(&self) -> &CommandCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl std::fmt::Debug for IntentEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntentEngine")
            .field("config", &self.config)
            .field("phrases", &self.catalog.len())
            .field("normalizer", &self.normalizer)
            .field("feedback", &self.feedback)
            .finish_non_exhaustive()
    }
}

fn key_phrases(tokens: &[String]) -> Vec<String> {
    tokens
        .iter()
        .filter(|t| t.chars().count() > 3)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use ir_protocol::{Annotation, Category, GenerationIntent};

    use super::*;
    use crate::error::EngineError;
    use crate::feedback::MemoryStorage;

    fn engine() -> IntentEngine {
        IntentEngine::with_defaults()
    }

    /// Annotator that always fails, standing in for an unreachable provider.
    struct BrokenAnnotator;

    impl Annotator for BrokenAnnotator {
        fn annotate(&self, _text: &str) -> EngineResult<Annotation> {
            Err(EngineError::AnnotationUnavailable("provider offline".into()))
        }

        fn lemmatize(&self, word: &str) -> String {
            word.to_string()
        }
    }

    #[test]
    fn every_catalog_phrase_classifies_as_itself() {
        let engine = engine();
        // "stop" ties with app's earlier "stop"; "restore backup" starts with an app verb
        let exceptions = [
            (Category::Media, "stop"),
            (Category::Security, "restore backup"),
        ];
        for (category, phrase) in engine.catalog().iter() {
            if exceptions.contains(&(category, phrase)) {
                continue;
            }
            let result = engine.classify(phrase).unwrap();
            let m = result
                .as_system()
                .unwrap_or_else(|| panic!("{phrase} was not a system match"));
            assert_eq!(m.category, category, "{phrase}");
            assert_eq!(m.command, phrase);
            assert!(m.confidence >= 0.6);
        }
    }

    #[test]
    fn exact_phrase_exceptions() {
        let engine = engine();
        let stop = engine.classify("stop").unwrap();
        assert_eq!(stop.as_system().unwrap().category, Category::App);

        let restore = engine.classify("restore backup").unwrap();
        let m = restore.as_system().unwrap();
        assert_eq!(m.category, Category::App);
        assert_eq!(m.confidence, 0.9);
    }

    #[test]
    fn app_short_circuit_keeps_full_input() {
        let result = engine().classify("open chrome").unwrap();
        let m = result.as_system().unwrap();
        assert_eq!(m.category, Category::App);
        assert_eq!(m.command, "open chrome");
        assert_eq!(m.confidence, 0.9);
        assert_eq!(m.context.context_score, 0.9);
        assert_eq!(m.context.relevant_entities, vec!["chrome".to_string()]);
    }

    #[test]
    fn system_match_reports_context() {
        let result = engine().classify("increase volume").unwrap();
        let m = result.as_system().unwrap();
        assert_eq!(m.category, Category::Volume);
        assert_eq!(m.confidence, 1.0);
        assert_eq!(m.context.sequence_similarity, 1.0);
        // VERB NOUN pattern
        assert!((m.context.context_score - 0.15).abs() < 1e-9);
    }

    #[test]
    fn categories_without_keywords_score_no_context() {
        let result = engine().classify("check cpu").unwrap();
        let m = result.as_system().unwrap();
        assert_eq!(m.category, Category::System);
        assert_eq!(m.context.context_score, 0.0);
    }

    #[test]
    fn explanation_request_routes_to_generation() {
        let result = engine().classify("explain recursion").unwrap();
        let g = result.as_generation().unwrap();
        assert_eq!(g.intent, GenerationIntent::Explanation);
        assert!(g.confidence > 0.3);
        assert_eq!(g.context.generation_type, "text");
        assert_eq!(g.context.key_phrases, vec!["explain", "recursion"]);
    }

    #[test]
    fn wh_question_is_general_generation() {
        let result = engine().classify("what is recursion").unwrap();
        let g = result.as_generation().unwrap();
        assert_eq!(g.intent, GenerationIntent::General);
        assert!((g.confidence - 0.9).abs() < 1e-9);
    }

    #[test]
    fn code_request_intent() {
        let result = engine().classify("write a python script").unwrap();
        assert_eq!(
            result.as_generation().unwrap().intent,
            GenerationIntent::CodeGeneration
        );
    }

    #[test]
    fn nonsense_without_catalog_overlap_is_generation() {
        // floor 0.3 plus the no-command boost clears the generation threshold
        let result = engine().classify("purple elephant dance").unwrap();
        assert!((result.as_generation().unwrap().confidence - 0.5).abs() < 1e-9);
    }

    #[test]
    fn stopwords_only_is_unclear() {
        let result = engine().classify("to be or not").unwrap();
        let u = result.as_unclear().unwrap();
        assert_eq!(u.suggestions.len(), 1);
        assert_eq!(u.suggestions[0].category, Category::App);
        assert_eq!(u.suggestions[0].command, "switch to");
        assert_eq!(u.suggestions[0].confidence, 0.0);
        assert!(u.context.key_phrases.is_empty());
    }

    #[test]
    fn unclear_ranks_candidates_by_context() {
        let result = engine().classify("screen xyz cut").unwrap();
        let u = result.as_unclear().unwrap();
        let ranked: Vec<_> = u
            .suggestions
            .iter()
            .map(|s| (s.category, s.command.as_str()))
            .collect();
        assert_eq!(
            ranked,
            vec![
                (Category::Brightness, "screen brighter"),
                (Category::Brightness, "screen dimmer"),
                (Category::Power, "lock screen"),
            ]
        );
        assert!(u.suggestions[2].context.pos_pattern);
        assert_eq!(
            u.context.possible_intents,
            vec![Category::Brightness, Category::Brightness, Category::Power]
        );
        assert_eq!(u.context.key_phrases, vec!["screen"]);
        assert!(u.suggestions.iter().all(|s| (0.0..=1.0).contains(&s.confidence)));
    }

    #[test]
    fn empty_input_is_unclear_without_suggestions() {
        let result = engine().classify("").unwrap();
        assert!(result.as_unclear().unwrap().suggestions.is_empty());
    }

    #[test]
    fn annotation_failure_propagates() {
        let engine = IntentEngine::new(
            EngineConfig::default(),
            CommandCatalog::standard(),
            Arc::new(BrokenAnnotator),
            FeedbackStore::in_memory(),
        );
        assert!(matches!(
            engine.classify("mute"),
            Err(EngineError::AnnotationUnavailable(_))
        ));
        assert!(engine.provide_feedback("mute", true, None).is_err());
    }

    #[test]
    fn malformed_input_is_rejected() {
        assert!(engine().classify("mute\u{0000}").is_err());
    }

    #[test]
    fn negative_feedback_can_demote_a_system_match() {
        let engine = engine();
        // raw ratio "mute" vs "mute tv" = 8/11
        assert!(engine.classify("mute tv").unwrap().as_system().is_some());
        for _ in 0..10 {
            engine.provide_feedback("Mute TV", false, None).unwrap();
        }
        // (0.727 + 0.0) / 2 is below the system threshold
        let demoted = engine.classify("mute tv").unwrap();
        assert!(demoted.as_system().is_none());
    }

    #[test]
    fn positive_feedback_blends_into_confidence() {
        let engine = engine();
        engine.provide_feedback("volume please", true, None).unwrap();
        let m = engine.classify("volume please").unwrap();
        let m = m.as_system().unwrap();
        // raw 16/22, learned 0.6
        let expected = (16.0 / 22.0 + 0.6) / 2.0;
        assert!((m.confidence - expected).abs() < 1e-9);
        assert!((m.context.sequence_similarity - 16.0 / 22.0).abs() < 1e-9);
    }

    #[test]
    fn learning_converges_to_bounds() {
        let engine = engine();
        for _ in 0..15 {
            engine.provide_feedback("dark mode", true, None).unwrap();
        }
        assert_eq!(engine.learned_confidence("dark mode"), Some(1.0));
        for _ in 0..25 {
            engine.provide_feedback("dark mode", false, None).unwrap();
        }
        assert_eq!(engine.learned_confidence("dark mode"), Some(0.0));
    }

    #[test]
    fn feedback_logs_reclassified_interaction() {
        let engine = engine();
        engine
            .provide_feedback("open slack", true, Some("open slack now"))
            .unwrap();
        let snapshot = engine.feedback().snapshot();
        assert_eq!(snapshot.successful_commands.len(), 1);
        assert_eq!(snapshot.successful_commands[0].classification.kind(), "system");
        assert_eq!(snapshot.user_corrections.len(), 1);
    }

    #[test]
    fn correction_only_leaves_confidence_untouched() {
        let engine = engine();
        engine.provide_correction("opn chrome", "open chrome").unwrap();
        assert_eq!(engine.learned_confidence("opn chrome"), None);
        assert_eq!(engine.feedback().snapshot().user_corrections.len(), 1);
    }

    #[test]
    fn learning_survives_restart() {
        let storage = MemoryStorage::new();
        let first = IntentEngine::new(
            EngineConfig::default(),
            CommandCatalog::standard(),
            Arc::new(LexiconAnnotator::new()),
            FeedbackStore::load(storage.clone()),
        );
        first.provide_feedback("night mode", true, None).unwrap();

        let second = IntentEngine::new(
            EngineConfig::default(),
            CommandCatalog::standard(),
            Arc::new(LexiconAnnotator::new()),
            FeedbackStore::load(storage),
        );
        assert_eq!(
            second.feedback().snapshot().confidence_adjustments,
            first.feedback().snapshot().confidence_adjustments
        );
    }

    #[test]
    fn from_config_persists_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let feedback = FeedbackConfig {
            path: dir.path().join("nlp_learning.json"),
            enabled: true,
        };
        let engine = IntentEngine::from_config(EngineConfig::default(), &feedback);
        let receipt = engine.provide_feedback("mute", true, None).unwrap();
        assert!(receipt.persisted);
        assert!(feedback.path.exists());
    }

    #[test]
    fn custom_thresholds_apply() {
        let config = EngineConfig {
            generation_threshold: 0.95,
            ..EngineConfig::default()
        };
        let engine = IntentEngine::new(
            config,
            CommandCatalog::standard(),
            Arc::new(LexiconAnnotator::new()),
            FeedbackStore::in_memory(),
        );
        assert!(engine.classify("what is recursion").unwrap().as_unclear().is_some());
    }
}

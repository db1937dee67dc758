//! Feedback-driven learning store.
//!
//! Holds learned confidence per lowercased raw input, plus the correction
//! and success logs. Every mutation is persisted with a full overwrite.
//! The snapshot sits behind a mutex and each feedback call's update and
//! save run under it, so concurrent callers are serialized and no update
//! is lost.

pub mod storage;

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use ir_protocol::{Classification, FeedbackSnapshot, InteractionRecord, UserCorrection};
use serde::Serialize;
use tracing::{debug, info, warn};

pub use storage::{FeedbackStorage, JsonFileStorage, MemoryStorage, StorageError};

/// Learned value assumed for inputs with no feedback yet.
pub const DEFAULT_CONFIDENCE: f64 = 0.5;
const SUCCESS_STEP: f64 = 0.1;
const FAILURE_STEP: f64 = 0.05;

/// Outcome of one feedback call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackReceipt {
    /// Learned value for the input after this call, if it has one.
    pub learned_confidence: Option<f64>,
    /// Whether durable storage reflects this call.
    pub persisted: bool,
    /// Set when the update is kept in memory only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

pub struct FeedbackStore {
    storage: Box<dyn FeedbackStorage>,
    state: Mutex<FeedbackSnapshot>,
}

impl FeedbackStore {
    /// Load from `storage`. An absent or unreadable document yields empty
    /// defaults; load failures never reach the caller.
    pub fn load(storage: impl FeedbackStorage + 'static) -> Self {
        let state = match storage.load() {
            Ok(Some(snapshot)) => {
                info!(
                    adjustments = snapshot.confidence_adjustments.len(),
                    corrections = snapshot.user_corrections.len(),
                    "Loaded learning data"
                );
                snapshot
            }
            Ok(None) => {
                debug!("No learning data yet, starting empty");
                FeedbackSnapshot::default()
            }
            Err(e) => {
                warn!(error = %e, "Unreadable learning data, starting empty");
                FeedbackSnapshot::default()
            }
        };
        Self {
            storage: Box::new(storage),
            state: Mutex::new(state),
        }
    }

    /// Store that never touches disk.
    pub fn in_memory() -> Self {
        Self::load(MemoryStorage::new())
    }

    /// Learned value for `input`, keyed by its lowercased raw form.
    pub fn learned_confidence(&self, input: &str) -> Option<f64> {
        self.lock()
            .confidence_adjustments
            .get(&input.to_lowercase())
            .copied()
    }

    /// Copy of the full learning state.
    pub fn snapshot(&self) -> FeedbackSnapshot {
        self.lock().clone()
    }

    /// Apply user feedback for `input` and persist.
    ///
    /// `success` moves the learned value up by 0.1 (max 1.0) or down by
    /// 0.05 (min 0.0); a non-empty `correction` is logged independently.
    /// A failed write is retried once, then reported in the receipt while
    /// the in-memory update is kept.
    pub fn record_interaction(
        &self,
        input: &str,
        classification: Classification,
        success: Option<bool>,
        correction: Option<&str>,
    ) -> FeedbackReceipt {
        let key = input.to_lowercase();
        let correction = correction.filter(|c| !c.is_empty());
        let mut state = self.lock();

        if success.is_none() && correction.is_none() {
            return FeedbackReceipt {
                learned_confidence: state.confidence_adjustments.get(&key).copied(),
                persisted: true,
                warning: None,
            };
        }

        let timestamp = Utc::now();

        if let Some(success) = success {
            let current = state
                .confidence_adjustments
                .get(&key)
                .copied()
                .unwrap_or(DEFAULT_CONFIDENCE);
            let updated = if success {
                (current + SUCCESS_STEP).min(1.0)
            } else {
                (current - FAILURE_STEP).max(0.0)
            };
            debug!(input = %key, current, updated, success, "Adjusting learned confidence");
            state.confidence_adjustments.insert(key.clone(), updated);

            if success {
                state.successful_commands.push(InteractionRecord {
                    timestamp,
                    input: input.to_string(),
                    classification,
                    success: Some(true),
                    correction: correction.map(str::to_string),
                });
            }
        }

        if let Some(correction) = correction {
            debug!(input, correction, "Recording correction");
            state.user_corrections.push(UserCorrection {
                original: input.to_string(),
                correction: correction.to_string(),
                timestamp,
            });
        }

        let learned_confidence = state.confidence_adjustments.get(&key).copied();
        match self.persist(&state) {
            Ok(()) => FeedbackReceipt {
                learned_confidence,
                persisted: true,
                warning: None,
            },
            Err(e) => FeedbackReceipt {
                learned_confidence,
                persisted: false,
                warning: Some(format!("learning data kept in memory only: {e}")),
            },
        }
    }

    /// Write the current state to storage.
    pub fn save(&self) -> Result<(), StorageError> {
        let state = self.lock();
        self.storage.save(&state)
    }

    fn persist(&self, state: &FeedbackSnapshot) -> Result<(), StorageError> {
        if let Err(first) = self.storage.save(state) {
            warn!(error = %first, "Saving learning data failed, retrying once");
            return self.storage.save(state).inspect_err(|e| {
                warn!(error = %e, "Saving learning data failed again");
            });
        }
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, FeedbackSnapshot> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for FeedbackStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedbackStore")
            .field("adjustments", &self.lock().confidence_adjustments.len())
            .finish_non_exhaustive()
    }
}

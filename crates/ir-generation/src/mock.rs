//! Mock generation backend for testing.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use ir_protocol::GenerationIntent;

use crate::backend::GenerationBackend;
use crate::error::{GenerationError, GenerationResult};

/// Answers from a scripted queue and records every request.
///
/// With an empty queue it echoes `"[<intent>] <query>"`.
#[derive(Debug, Default)]
pub struct MockGenerator {
    replies: Mutex<VecDeque<GenerationResult<String>>>,
    requests: Mutex<Vec<(GenerationIntent, String)>>,
}

impl MockGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_reply(&self, text: &str) {
        lock(&self.replies).push_back(Ok(text.to_string()));
    }

    pub fn queue_error(&self, error: GenerationError) {
        lock(&self.replies).push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<(GenerationIntent, String)> {
        lock(&self.requests).clone()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait]
impl GenerationBackend for MockGenerator {
    async fn generate(&self, intent: GenerationIntent, query: &str) -> GenerationResult<String> {
        lock(&self.requests).push((intent, query.to_string()));
        lock(&self.replies)
            .pop_front()
            .unwrap_or_else(|| Ok(format!("[{intent}] {query}")))
    }

    fn clear_context(&self) {
        lock(&self.requests).clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn echoes_when_nothing_is_queued() {
        let mock = MockGenerator::new();
        let text = mock
            .generate(GenerationIntent::CreativeWriting, "a poem")
            .await
            .unwrap();
        assert_eq!(text, "[creative_writing] a poem");
        assert_eq!(
            mock.requests(),
            [(GenerationIntent::CreativeWriting, "a poem".to_string())]
        );
    }

    #[tokio::test]
    async fn scripted_replies_are_served_in_order() {
        let mock = MockGenerator::new();
        mock.queue_reply("first");
        mock.queue_error(GenerationError::EmptyResponse);

        assert_eq!(
            mock.generate(GenerationIntent::General, "a").await.unwrap(),
            "first"
        );
        assert!(matches!(
            mock.generate(GenerationIntent::General, "b").await,
            Err(GenerationError::EmptyResponse)
        ));
    }
}

//! Shared test harness for E2E integration tests.
//!
//! Wires the real engine, executor and HTTP router together, with mocks
//! only at the process, generation and storage boundaries.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use ir_api::routes::build_router;
use ir_api::state::AppState;
use ir_assistant::Assistant;
use ir_commands::{ExecutorConfig, MockRunner, Platform, SystemCommandExecutor};
use ir_engine::{
    CommandCatalog, EngineConfig, FeedbackStorage, FeedbackStore, IntentEngine, LexiconAnnotator,
    MemoryStorage,
};
use ir_generation::{GenerationBackend, MockGenerator};

/// End-to-end test harness: HTTP router over a fully wired assistant.
pub struct TestHarness {
    pub state: AppState,
    pub router: Router,
    /// Records every platform command the executor runs.
    pub runner: Arc<MockRunner>,
    /// Learning data as last persisted.
    pub storage: MemoryStorage,
}

impl TestHarness {
    /// Linux executor over a mock runner, echoing generator, empty learning data.
    pub fn new() -> Self {
        Self::with_parts(MemoryStorage::new(), Arc::new(MockGenerator::new()))
    }

    /// Harness whose learning data starts from (and persists to) `storage`.
    pub fn with_storage(storage: MemoryStorage) -> Self {
        Self::with_parts(storage, Arc::new(MockGenerator::new()))
    }

    pub fn with_generator(generator: Arc<dyn GenerationBackend>) -> Self {
        Self::with_parts(MemoryStorage::new(), generator)
    }

    fn with_parts(storage: MemoryStorage, generator: Arc<dyn GenerationBackend>) -> Self {
        let runner = Arc::new(MockRunner::new());
        let engine = engine_over(storage.clone());
        let executor = SystemCommandExecutor::with_runner(
            ExecutorConfig {
                platform: Some(Platform::Linux),
                ..ExecutorConfig::default()
            },
            runner.clone(),
        );
        let state = AppState::new(Assistant::new(engine, executor, generator));
        let router = build_router(state.clone());
        Self {
            state,
            router,
            runner,
            storage,
        }
    }

    /// POST `body` as JSON; returns the status and decoded JSON body.
    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap();
        self.send(request).await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    /// POST /api/v1/process.
    pub async fn process(&self, command: &str) -> (StatusCode, Value) {
        self.post("/api/v1/process", serde_json::json!({ "command": command }))
            .await
    }

    /// POST /api/v1/feedback.
    pub async fn feedback(
        &self,
        command: &str,
        success: bool,
        correction: Option<&str>,
    ) -> (StatusCode, Value) {
        self.post(
            "/api/v1/feedback",
            serde_json::json!({
                "command": command,
                "success": success,
                "correction": correction,
            }),
        )
        .await
    }
}

/// Default engine whose learning data lives in `storage`.
pub fn engine_over(storage: impl FeedbackStorage + 'static) -> IntentEngine {
    IntentEngine::new(
        EngineConfig::default(),
        CommandCatalog::standard(),
        Arc::new(LexiconAnnotator::new()),
        FeedbackStore::load(storage),
    )
}

//! Common test utilities for coupon service integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use serde_json::json;

use coupon_core::CodeGenerator;
use coupon_service::{create_router, AppState, ServiceConfig, StorageBackend};
use coupon_store::MemoryStore;

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
}

impl TestHarness {
    /// Create a new test harness over an empty in-memory store.
    pub fn new() -> Self {
        let state = AppState::new(Arc::new(MemoryStore::new()), test_config());
        Self::from_state(state)
    }

    /// Create a harness whose codes come from `generator`.
    pub fn with_generator(generator: impl CodeGenerator + 'static) -> Self {
        let state =
            AppState::with_generator(Arc::new(MemoryStore::new()), Arc::new(generator), test_config());
        Self::from_state(state)
    }

    fn from_state(state: AppState) -> Self {
        let router: Router = create_router(state);
        let server = TestServer::new(router).expect("Failed to create test server");
        Self { server }
    }

    /// Issue a coupon and return the response body.
    pub async fn create(&self, email: &str) -> serde_json::Value {
        let response = self
            .server
            .post("/api/v1/coupon")
            .json(&json!({ "email": email }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
        response.json()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

fn test_config() -> ServiceConfig {
    ServiceConfig {
        listen_addr: "127.0.0.1:0".into(),
        data_dir: String::new(),
        storage: StorageBackend::Memory,
        cors_origins: vec!["*".into()],
        max_body_bytes: 64 * 1024,
        request_timeout_seconds: 30,
        code_length: 10,
    }
}

/// Generator that always returns the same code.
pub struct FixedCode(pub &'static str);

impl CodeGenerator for FixedCode {
    fn generate_code(&self) -> String {
        self.0.to_string()
    }
}

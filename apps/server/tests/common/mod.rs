#![allow(dead_code)]

use std::{sync::Arc, time::Duration};

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use blueprint_server::{api::app_router, build_state, config::Config, config::LogFormat, AppState};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
    // Keeps the database directory alive for the duration of the test.
    _tmp: TempDir,
}

pub fn test_config(tmp: &TempDir, seed_on_start: bool) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        db_path: tmp.path().join("test.db").to_string_lossy().to_string(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(5),
        seed_on_start,
        default_questions: 40,
        max_questions: 1000,
        log_format: LogFormat::Text,
    }
}

pub async fn spawn_app(seed_on_start: bool) -> TestApp {
    let tmp = tempfile::tempdir().unwrap();
    let config = test_config(&tmp, seed_on_start);
    let state = build_state(&config).await.unwrap();
    let router = app_router(state.clone(), &config);
    TestApp {
        router,
        state,
        _tmp: tmp,
    }
}

impl TestApp {
    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).to_string()))
        };
        (status, body)
    }
}

//! Test utilities for API server integration tests

use axum_test::TestServer;
use std::sync::Arc;
use tempfile::TempDir;
use xausignal::config::{ServiceConfig, Settings};
use xausignal::core::http::{create_router, AppState};
use xausignal::metrics::Metrics;

/// Test helper for API server integration tests
#[allow(dead_code)]
pub struct TestApiServer {
    pub server: TestServer,
    pub metrics: Arc<Metrics>,
    pub state: AppState,
    pub data_dir: TempDir,
}

impl TestApiServer {
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    /// Build the server after adjusting the default service config
    pub async fn with_config(adjust: impl FnOnce(&mut ServiceConfig)) -> Self {
        let data_dir = tempfile::tempdir().expect("create temp dir");
        let mut config = ServiceConfig {
            data_dir: data_dir.path().to_path_buf(),
            trainer_poll_ms: 10,
            ..ServiceConfig::default()
        };
        adjust(&mut config);

        let metrics = Arc::new(Metrics::new().expect("metrics initialization"));
        let state = AppState::from_config(Settings::default(), &config, metrics.clone())
            .await
            .expect("build app state");

        let app = create_router(state.clone());
        let server = TestServer::new(app).expect("start test server");

        Self {
            server,
            metrics,
            state,
            data_dir,
        }
    }
}

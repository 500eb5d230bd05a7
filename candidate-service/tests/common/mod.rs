use candidate_service::config::CandidateConfig;
use candidate_service::services::{CandidateStore, InMemoryCandidateStore};
use candidate_service::startup::Application;
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub store: Arc<dyn CandidateStore>,
}

impl TestApp {
    /// Spawns the application on an OS-assigned port, backed by the
    /// in-memory store so tests need no running MongoDB.
    pub async fn spawn() -> Self {
        let mut config = CandidateConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing

        let store: Arc<dyn CandidateStore> = Arc::new(InMemoryCandidateStore::default());

        let app = Application::with_store(config, store.clone())
            .await
            .expect("Failed to build test application");
        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp { address, store }
    }
}

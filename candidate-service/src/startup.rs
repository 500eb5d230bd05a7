use crate::config::CandidateConfig;
use crate::error::AppError;
use crate::handlers;
use crate::services::{CandidateStore, MongoCandidateStore, MongoDb};
use axum::{routing::get, Router};
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: CandidateConfig,
    pub store: Arc<dyn CandidateStore>,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    pub async fn build(config: CandidateConfig) -> Result<Self, AppError> {
        let db = MongoDb::connect(&config.mongodb.uri, &config.mongodb.database)
            .await
            .map_err(|e| {
                tracing::error!("Failed to connect to MongoDB: {}", e);
                e
            })?;
        let store: Arc<dyn CandidateStore> =
            Arc::new(MongoCandidateStore::new(&db, &config.mongodb.collection));

        Self::with_store(config, store).await
    }

    /// Assembles the application around any store implementation. The tests
    /// use this to run against the in-memory store.
    pub async fn with_store(
        config: CandidateConfig,
        store: Arc<dyn CandidateStore>,
    ) -> Result<Self, AppError> {
        let state = AppState {
            config: config.clone(),
            store,
        };

        let app = Router::new()
            .route(
                "/candidate/:name",
                get(handlers::get_candidate).post(handlers::upsert_candidate),
            )
            .route("/candidates", get(handlers::list_candidates))
            .route("/gtg", get(handlers::good_to_go))
            .layer(TraceLayer::new_for_http())
            .with_state(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

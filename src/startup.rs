use crate::config::ServiceConfig;
use crate::error::AppError;
use crate::handlers;
use crate::services::{MongoDb, RecordStore};
use axum::{
    routing::{get, post},
    Router,
};
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: ServiceConfig,
    pub db: MongoDb,
    pub store: Arc<dyn RecordStore>,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
    state: AppState,
}

impl Application {
    pub async fn build(config: ServiceConfig) -> Result<Self, AppError> {
        let db = MongoDb::connect(&config.mongodb.uri, &config.mongodb.database)
            .await
            .map_err(|e| {
                tracing::error!("Failed to connect to MongoDB: {}", e);
                e
            })?;

        let store: Arc<dyn RecordStore> = Arc::new(db.clone());

        let state = AppState {
            config: config.clone(),
            db: db.clone(),
            store,
        };

        let app = Router::new()
            .route("/health", get(handlers::health_check))
            .route("/api/heart_rate", post(handlers::record_heart_rate))
            .route("/api/heart_rate/:user_email", get(handlers::get_heart_rates))
            .route(
                "/api/heart_rate/average/:user_email",
                get(handlers::get_average),
            )
            .route(
                "/api/heart_rate/interval_average",
                post(handlers::interval_average),
            )
            .layer(TraceLayer::new_for_http())
            .with_state(state.clone());

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
            state,
        })
    }

    pub fn db(&self) -> &MongoDb {
        &self.state.db
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

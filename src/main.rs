use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use feedback_portal::adapters::http::{api_router, FeedbackHandlers};
use feedback_portal::adapters::postgres::{connect_pool, run_migrations, PostgresFeedbackStore};
use feedback_portal::adapters::RedisEventPublisher;
use feedback_portal::application::SubmissionOrchestrator;
use feedback_portal::config::{AppConfig, ConfigError, ValidationError};
use feedback_portal::telemetry::{self, TelemetryError};

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Telemetry(#[from] TelemetryError),

    #[error("database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("event channel: {0}")]
    Events(#[from] redis::RedisError),

    #[error("event channel: connection timed out after {0}s")]
    EventsTimeout(u64),

    #[error("server: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    config.validate()?;

    telemetry::init(&config.server)?;

    let pool = connect_pool(&config.database).await?;
    if config.database.run_migrations {
        run_migrations(&pool).await?;
    }
    let store = Arc::new(PostgresFeedbackStore::new(pool));

    let publisher = tokio::time::timeout(
        config.events.connect_timeout(),
        RedisEventPublisher::connect(&config.events.url, config.events.channel.clone()),
    )
    .await
    .map_err(|_| AppError::EventsTimeout(config.events.connect_timeout_secs))??;
    info!(channel = %publisher.channel(), "Event channel connected");

    let orchestrator = Arc::new(SubmissionOrchestrator::new(store, Arc::new(publisher)));
    let app = api_router(
        FeedbackHandlers::new(orchestrator),
        config.server.request_timeout(),
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(environment = ?config.server.environment, %addr, "Feedback API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Feedback API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
    }
}

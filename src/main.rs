/// Main application entry point with clean architecture
use airport_diag::config::AppConfig;
use airport_diag::handlers::AppState;
use airport_diag::repo::{init_db, DiagnosticRepo};
use airport_diag::routes::build_router;
use airport_diag::services::DiagnosticService;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    // Load configuration
    let config = AppConfig::from_env()?;
    info!("Configuration loaded successfully");

    // Initialize database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;
    info!("Database connection pool established");

    // Initialize database schema
    init_db(&pool).await?;
    info!("Database schema initialized");

    // Initialize repository and service
    let repo = DiagnosticRepo::new(pool.clone());
    let diagnostic_service = Arc::new(DiagnosticService::new(repo, config.list_limit));

    // Initialize application state
    let state = AppState { diagnostic_service };

    // Build router
    let app = build_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("airport_diag service listening on {}", config.bind_addr);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

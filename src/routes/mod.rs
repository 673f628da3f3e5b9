/// Application routes configuration
use crate::handlers::{
    create_diagnostic, get_analysis, get_dashboard_stats, get_diagnostic, health,
    list_diagnostics, AppState,
};
use axum::{
    routing::{get, post},
    Router,
};

/// Build the application router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Diagnostic intake and reads
        .route("/diagnostics", post(create_diagnostic).get(list_diagnostics))
        .route("/diagnostics/:id", get(get_diagnostic))
        .route("/diagnostics/:id/analysis", get(get_analysis))
        // Dashboard
        .route("/dashboard/stats", get(get_dashboard_stats))
        .with_state(state)
}

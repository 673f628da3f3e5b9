/// HTTP request handlers
use crate::domain::{AnalysisReport, Diagnostic, FleetStats, Health, NewDiagnostic};
use crate::errors::ApiError;
use crate::services::DiagnosticService;
use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub diagnostic_service: Arc<DiagnosticService>,
}

/// Successful response wrapper
#[derive(Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub ok: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self { ok: true, data }
    }
}

/// Health check handler
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        now: Utc::now(),
    })
}

/// Create a new diagnostic from a validated intake payload
pub async fn create_diagnostic(
    State(state): State<AppState>,
    Json(input): Json<NewDiagnostic>,
) -> Result<Json<Value>, ApiError> {
    let diagnostic = state.diagnostic_service.create(input).await?;
    Ok(Json(serde_json::json!(SuccessResponse::new(
        serde_json::json!({
            "diagnostic": diagnostic
        })
    ))))
}

/// List all diagnostics, newest first
pub async fn list_diagnostics(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let diagnostics = state.diagnostic_service.list().await?;
    Ok(Json(serde_json::json!(SuccessResponse::new(
        serde_json::json!({
            "diagnostics": diagnostics
        })
    ))))
}

/// Get one diagnostic by id
pub async fn get_diagnostic(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<SuccessResponse<Diagnostic>>, ApiError> {
    let diagnostic = state.diagnostic_service.get(id).await?;
    Ok(Json(SuccessResponse::new(diagnostic)))
}

/// Get the full metric report for one diagnostic
pub async fn get_analysis(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<SuccessResponse<AnalysisReport>>, ApiError> {
    let report = state.diagnostic_service.analyze(id).await?;
    Ok(Json(SuccessResponse::new(report)))
}

/// Get fleet-wide dashboard statistics
pub async fn get_dashboard_stats(
    State(state): State<AppState>,
) -> Result<Json<SuccessResponse<FleetStats>>, ApiError> {
    let stats = state.diagnostic_service.dashboard_stats().await?;
    Ok(Json(SuccessResponse::new(stats)))
}

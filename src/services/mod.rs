/// Business logic services layer
use crate::domain::{AnalysisReport, Diagnostic, FleetStats, NewDiagnostic};
use crate::errors::{ApiError, ApiResult};
use crate::fleet::fleet_stats;
use crate::metrics;
use crate::repo::DiagnosticRepo;
use crate::validation::validate;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

/// Diagnostic intake and analysis service
pub struct DiagnosticService {
    repo: DiagnosticRepo,
    list_limit: i64,
}

impl DiagnosticService {
    pub fn new(repo: DiagnosticRepo, list_limit: i64) -> Self {
        Self { repo, list_limit }
    }

    /// Validate and persist a new diagnostic
    pub async fn create(&self, input: NewDiagnostic) -> ApiResult<Diagnostic> {
        validate(&input).map_err(ApiError::Validation)?;

        let stored = self.repo.insert(&input).await?;
        info!(id = %stored.id, airport = %stored.airport_name, "diagnostic created");
        Ok(stored)
    }

    /// Fetch one diagnostic by id
    pub async fn get(&self, id: Uuid) -> ApiResult<Diagnostic> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("diagnostic {id}")))
    }

    /// List diagnostics, newest first
    pub async fn list(&self) -> ApiResult<Vec<Diagnostic>> {
        self.repo.list_all(self.list_limit).await
    }

    /// Fetch one diagnostic and run the full metric suite over it
    pub async fn analyze(&self, id: Uuid) -> ApiResult<AnalysisReport> {
        let diagnostic = self.get(id).await?;

        let hourly_capacity = metrics::hourly_runway_capacity(&diagnostic);
        let saturation = metrics::saturation_rate(&diagnostic);
        let occupancy = metrics::occupancy_rate(&diagnostic);
        let residual_capacity = metrics::residual_capacity(&diagnostic);
        let gate_ratio = metrics::gate_ratio(&diagnostic);
        let bottlenecks = metrics::identify_bottlenecks(&diagnostic);
        let score = metrics::composite_score(&diagnostic);

        Ok(AnalysisReport {
            diagnostic,
            hourly_capacity,
            saturation,
            occupancy,
            residual_capacity,
            gate_ratio,
            bottlenecks,
            score,
        })
    }

    /// Aggregate the whole collection into dashboard statistics. The
    /// reference time is captured here, once per request; the aggregation
    /// itself is pure.
    pub async fn dashboard_stats(&self) -> ApiResult<FleetStats> {
        let diagnostics = self.repo.list_all(self.list_limit).await?;
        Ok(fleet_stats(&diagnostics, Utc::now()))
    }
}

/// Domain models for the application
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// One assessed-airport record, as stored.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Diagnostic {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub diagnostic_date: DateTime<Utc>,

    // General information
    pub airport_name: String,
    pub location: String,
    pub iata_code: Option<String>,
    pub icao_code: Option<String>,

    // Physical attributes
    pub runway_count: Option<i32>,
    pub hourly_runway_capacity: Option<f64>,
    pub main_runway_length_m: Option<f64>,
    pub terminal_count: Option<i32>,
    pub passenger_capacity_millions: Option<f64>,
    pub peak_hour_passengers: Option<f64>,
    pub total_stands: Option<i32>,
    pub contact_stands: Option<i32>,
    pub remote_stands: Option<i32>,
    pub tower_height_m: Option<f64>,

    // Traffic / KPI attributes
    pub saturation_rate: Option<f64>,
    pub occupancy_rate: Option<f64>,
    pub avg_processing_minutes: Option<f64>,
    /// Current annual passengers, in thousands (the capacity field above
    /// is in millions; the metric formulas convert explicitly).
    pub current_annual_passengers: Option<f64>,
    pub daily_flights: Option<i32>,
    pub peak_periods: Option<String>,

    // Functional / qualitative attributes
    pub passenger_routing: Option<String>,
    pub aircraft_routing: Option<String>,
    pub icao_iata_compliance: Option<String>,
    pub security_levels: Option<String>,
    pub comfort_requirements: Option<String>,
    pub friction_points: Option<String>,
    pub security_equipment: Option<String>,
    pub technical_services: Option<String>,

    // Optimization recommendations
    pub light_optimization: Option<String>,
    pub medium_optimization: Option<String>,
    pub heavy_optimization: Option<String>,
    pub impact_estimate: Option<String>,
    pub estimated_cost: Option<f64>,

    // Observations
    pub observation_notes: Option<String>,
    pub structural_constraints: Option<String>,
    pub local_data: Option<String>,
}

/// Intake payload for creating a diagnostic. Same shape as [`Diagnostic`]
/// minus the store-assigned identity fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewDiagnostic {
    pub diagnostic_date: Option<DateTime<Utc>>,
    pub airport_name: String,
    pub location: String,
    pub iata_code: Option<String>,
    pub icao_code: Option<String>,

    pub runway_count: Option<i32>,
    pub hourly_runway_capacity: Option<f64>,
    pub main_runway_length_m: Option<f64>,
    pub terminal_count: Option<i32>,
    pub passenger_capacity_millions: Option<f64>,
    pub peak_hour_passengers: Option<f64>,
    pub total_stands: Option<i32>,
    pub contact_stands: Option<i32>,
    pub remote_stands: Option<i32>,
    pub tower_height_m: Option<f64>,

    pub saturation_rate: Option<f64>,
    pub occupancy_rate: Option<f64>,
    pub avg_processing_minutes: Option<f64>,
    pub current_annual_passengers: Option<f64>,
    pub daily_flights: Option<i32>,
    pub peak_periods: Option<String>,

    pub passenger_routing: Option<String>,
    pub aircraft_routing: Option<String>,
    pub icao_iata_compliance: Option<String>,
    pub security_levels: Option<String>,
    pub comfort_requirements: Option<String>,
    pub friction_points: Option<String>,
    pub security_equipment: Option<String>,
    pub technical_services: Option<String>,

    pub light_optimization: Option<String>,
    pub medium_optimization: Option<String>,
    pub heavy_optimization: Option<String>,
    pub impact_estimate: Option<String>,
    pub estimated_cost: Option<f64>,

    pub observation_notes: Option<String>,
    pub structural_constraints: Option<String>,
    pub local_data: Option<String>,
}

/// Four-level rating shared by the saturation and occupancy classifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateLevel {
    Low,
    Moderate,
    High,
    Critical,
}

/// Severity of a bottleneck finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Moderate,
    High,
    Critical,
}

/// Hourly runway capacity, declared or estimated.
#[derive(Debug, Clone, Serialize)]
pub struct HourlyCapacity {
    pub capacity: Option<f64>,
    pub source: &'static str,
}

/// A saturation or occupancy reading with its derived level and color.
#[derive(Debug, Clone, Serialize)]
pub struct RateReading {
    pub rate: Option<f64>,
    pub level: Option<RateLevel>,
    pub color: &'static str,
}

/// Remaining annual passenger capacity, in thousands per year.
#[derive(Debug, Clone, Serialize)]
pub struct ResidualCapacity {
    pub residual: Option<f64>,
    pub percent_remaining: Option<f64>,
    pub unit: &'static str,
}

/// Aircraft stands per terminal, with a qualitative interpretation.
#[derive(Debug, Clone, Serialize)]
pub struct GateRatio {
    pub ratio: Option<f64>,
    pub interpretation: &'static str,
}

/// A constrained component flagged by the bottleneck analysis.
#[derive(Debug, Clone, Serialize)]
pub struct Bottleneck {
    pub component: &'static str,
    pub problem: String,
    pub severity: Severity,
    pub recommendation: &'static str,
}

/// 0-100 summary index over capacity, occupancy, infrastructure and
/// compliance sub-scores.
#[derive(Debug, Clone, Serialize)]
pub struct CompositeScore {
    pub score: i32,
    pub level: ScoreLevel,
    pub breakdown: HashMap<&'static str, i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreLevel {
    Low,
    Average,
    Good,
    Excellent,
}

/// Everything the analysis view needs for one record.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub diagnostic: Diagnostic,
    pub hourly_capacity: HourlyCapacity,
    pub saturation: RateReading,
    pub occupancy: RateReading,
    pub residual_capacity: ResidualCapacity,
    pub gate_ratio: GateRatio,
    pub bottlenecks: Vec<Bottleneck>,
    pub score: CompositeScore,
}

/// Ranked entry in the top/bottom performer lists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Performer {
    pub id: Uuid,
    pub name: String,
    pub score: f64,
}

/// Fleet-wide dashboard statistics.
#[derive(Debug, Clone, Serialize)]
pub struct FleetStats {
    pub total: usize,
    pub this_week: usize,
    pub this_month: usize,
    pub average_saturation: Option<i64>,
    pub average_occupancy: Option<i64>,
    pub total_capacity: f64,
    pub total_traffic: f64,
    pub critical_count: usize,
    pub top_performers: Vec<Performer>,
    pub bottom_performers: Vec<Performer>,
    pub by_region: HashMap<String, usize>,
}

/// Health check response
#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
    pub now: DateTime<Utc>,
}

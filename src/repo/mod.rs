/// Repository layer for database operations
use crate::domain::{Diagnostic, NewDiagnostic};
use crate::errors::ApiResult;
use sqlx::PgPool;
use uuid::Uuid;

/// Diagnostic record repository
#[derive(Clone)]
pub struct DiagnosticRepo {
    pool: PgPool,
}

impl DiagnosticRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new diagnostic, returning the stored row with its
    /// store-assigned id and creation timestamp.
    pub async fn insert(&self, new: &NewDiagnostic) -> ApiResult<Diagnostic> {
        let row = sqlx::query_as::<_, Diagnostic>(
            "INSERT INTO diagnostics(
                id, diagnostic_date, airport_name, location, iata_code, icao_code,
                runway_count, hourly_runway_capacity, main_runway_length_m,
                terminal_count, passenger_capacity_millions, peak_hour_passengers,
                total_stands, contact_stands, remote_stands, tower_height_m,
                saturation_rate, occupancy_rate, avg_processing_minutes,
                current_annual_passengers, daily_flights, peak_periods,
                passenger_routing, aircraft_routing, icao_iata_compliance,
                security_levels, comfort_requirements, friction_points,
                security_equipment, technical_services, light_optimization,
                medium_optimization, heavy_optimization, impact_estimate,
                estimated_cost, observation_notes, structural_constraints,
                local_data
             ) VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                $15, $16, $17, $18, $19, $20, $21, $22, $23, $24, $25, $26,
                $27, $28, $29, $30, $31, $32, $33, $34, $35, $36, $37, $38
             ) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(new.diagnostic_date)
        .bind(&new.airport_name)
        .bind(&new.location)
        .bind(&new.iata_code)
        .bind(&new.icao_code)
        .bind(new.runway_count)
        .bind(new.hourly_runway_capacity)
        .bind(new.main_runway_length_m)
        .bind(new.terminal_count)
        .bind(new.passenger_capacity_millions)
        .bind(new.peak_hour_passengers)
        .bind(new.total_stands)
        .bind(new.contact_stands)
        .bind(new.remote_stands)
        .bind(new.tower_height_m)
        .bind(new.saturation_rate)
        .bind(new.occupancy_rate)
        .bind(new.avg_processing_minutes)
        .bind(new.current_annual_passengers)
        .bind(new.daily_flights)
        .bind(&new.peak_periods)
        .bind(&new.passenger_routing)
        .bind(&new.aircraft_routing)
        .bind(&new.icao_iata_compliance)
        .bind(&new.security_levels)
        .bind(&new.comfort_requirements)
        .bind(&new.friction_points)
        .bind(&new.security_equipment)
        .bind(&new.technical_services)
        .bind(&new.light_optimization)
        .bind(&new.medium_optimization)
        .bind(&new.heavy_optimization)
        .bind(&new.impact_estimate)
        .bind(new.estimated_cost)
        .bind(&new.observation_notes)
        .bind(&new.structural_constraints)
        .bind(&new.local_data)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Fetch one diagnostic by id
    pub async fn get_by_id(&self, id: Uuid) -> ApiResult<Option<Diagnostic>> {
        let row = sqlx::query_as::<_, Diagnostic>("SELECT * FROM diagnostics WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    /// List diagnostics, newest first
    pub async fn list_all(&self, limit: i64) -> ApiResult<Vec<Diagnostic>> {
        let rows = sqlx::query_as::<_, Diagnostic>(
            "SELECT * FROM diagnostics ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

/// Initialize database tables
pub async fn init_db(pool: &PgPool) -> ApiResult<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS diagnostics(
            id UUID PRIMARY KEY,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            diagnostic_date TIMESTAMPTZ NOT NULL,
            airport_name TEXT NOT NULL,
            location TEXT NOT NULL,
            iata_code TEXT,
            icao_code TEXT,
            runway_count INTEGER,
            hourly_runway_capacity DOUBLE PRECISION,
            main_runway_length_m DOUBLE PRECISION,
            terminal_count INTEGER,
            passenger_capacity_millions DOUBLE PRECISION,
            peak_hour_passengers DOUBLE PRECISION,
            total_stands INTEGER,
            contact_stands INTEGER,
            remote_stands INTEGER,
            tower_height_m DOUBLE PRECISION,
            saturation_rate DOUBLE PRECISION,
            occupancy_rate DOUBLE PRECISION,
            avg_processing_minutes DOUBLE PRECISION,
            current_annual_passengers DOUBLE PRECISION,
            daily_flights INTEGER,
            peak_periods TEXT,
            passenger_routing TEXT,
            aircraft_routing TEXT,
            icao_iata_compliance TEXT,
            security_levels TEXT,
            comfort_requirements TEXT,
            friction_points TEXT,
            security_equipment TEXT,
            technical_services TEXT,
            light_optimization TEXT,
            medium_optimization TEXT,
            heavy_optimization TEXT,
            impact_estimate TEXT,
            estimated_cost DOUBLE PRECISION,
            observation_notes TEXT,
            structural_constraints TEXT,
            local_data TEXT
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS ix_diagnostics_created_at
         ON diagnostics(created_at DESC)",
    )
    .execute(pool)
    .await?;

    Ok(())
}

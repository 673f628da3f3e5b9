/// Fleet-wide dashboard aggregation.
///
/// One pure reduction over the full diagnostic collection. The reference
/// time is an explicit parameter so the week/month windows are
/// deterministic and testable; callers pass `Utc::now()` at request time.
use crate::domain::{Diagnostic, FleetStats, Performer};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

/// Reduces `diagnostics` into dashboard statistics relative to `now`.
///
/// Region keys come from a lossy parse of the free-text location: the
/// segment after the first comma when one exists ("City, Region" yields
/// "Region"), otherwise the whole trimmed string. Performer rankings only
/// consider records with a known saturation rate.
pub fn fleet_stats(diagnostics: &[Diagnostic], now: DateTime<Utc>) -> FleetStats {
    let week_ago = now - Duration::days(7);
    let month_ago = now - Duration::days(30);

    let this_week = diagnostics.iter().filter(|d| d.created_at >= week_ago).count();
    let this_month = diagnostics.iter().filter(|d| d.created_at >= month_ago).count();

    let saturations: Vec<f64> = diagnostics.iter().filter_map(|d| d.saturation_rate).collect();
    let average_saturation = mean_rounded(&saturations);

    let occupancies: Vec<f64> = diagnostics.iter().filter_map(|d| d.occupancy_rate).collect();
    let average_occupancy = mean_rounded(&occupancies);

    let total_capacity: f64 = diagnostics
        .iter()
        .filter_map(|d| d.passenger_capacity_millions)
        .filter(|c| *c > 0.0)
        .map(|c| c * 1000.0)
        .sum();

    let total_traffic: f64 = diagnostics
        .iter()
        .filter_map(|d| d.current_annual_passengers)
        .filter(|t| *t > 0.0)
        .sum();

    let critical_count = diagnostics
        .iter()
        .filter(|d| matches!(d.saturation_rate, Some(s) if s > 90.0))
        .count();

    // Score per rated record: high score = low saturation = healthy.
    let mut ranked: Vec<Performer> = diagnostics
        .iter()
        .filter_map(|d| {
            d.saturation_rate.map(|s| Performer {
                id: d.id,
                name: d.airport_name.clone(),
                score: 100.0 - s,
            })
        })
        .collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

    let top_performers: Vec<Performer> = ranked.iter().take(3).cloned().collect();
    let bottom_performers: Vec<Performer> = ranked
        .iter()
        .rev()
        .take(3)
        .cloned()
        .collect();

    let mut by_region: HashMap<String, usize> = HashMap::new();
    for d in diagnostics {
        if d.location.is_empty() {
            continue;
        }
        let parts: Vec<&str> = d.location.split(',').collect();
        let region = if parts.len() > 1 { parts[1].trim() } else { parts[0].trim() };
        *by_region.entry(region.to_string()).or_insert(0) += 1;
    }

    FleetStats {
        total: diagnostics.len(),
        this_week,
        this_month,
        average_saturation,
        average_occupancy,
        total_capacity,
        total_traffic,
        critical_count,
        top_performers,
        bottom_performers,
        by_region,
    }
}

/// Mean rounded to the nearest integer, `None` for an empty series.
fn mean_rounded(values: &[f64]) -> Option<i64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().sum();
    Some((sum / values.len() as f64).round() as i64)
}

//! End-to-end checks over the pure metric surface: records in, analysis
//! and dashboard numbers out, without a database.

use airport_diag::domain::{Diagnostic, RateLevel, ScoreLevel, Severity};
use airport_diag::fleet::fleet_stats;
use airport_diag::metrics;
use chrono::{Duration, Utc};
use serde_json::json;

fn diagnostic(fields: serde_json::Value) -> Diagnostic {
    let mut base = json!({
        "id": uuid::Uuid::new_v4(),
        "created_at": Utc::now(),
        "diagnostic_date": Utc::now(),
        "airport_name": "Mohammed V Intl",
        "location": "Casablanca, Grand Casablanca"
    });
    base.as_object_mut()
        .unwrap()
        .extend(fields.as_object().unwrap().clone());
    serde_json::from_value(base).expect("valid diagnostic payload")
}

#[test]
fn test_saturated_airport_full_report() {
    let d = diagnostic(json!({
        "runway_count": 2,
        "terminal_count": 2,
        "total_stands": 48,
        "passenger_capacity_millions": 14.0,
        "current_annual_passengers": 10000.0,
        "occupancy_rate": 88.0,
        "friction_points": "check-in hall congestion at peak departure waves",
        "icao_iata_compliance": "ICAO annex 14 compliant"
    }));

    let capacity = metrics::hourly_runway_capacity(&d);
    assert_eq!(capacity.capacity, Some(100.0));
    assert_eq!(capacity.source, "estimated (50 mvts/h per runway)");

    let saturation = metrics::saturation_rate(&d);
    assert_eq!(saturation.rate, Some(71.4));
    assert_eq!(saturation.level, Some(RateLevel::Moderate));

    let residual = metrics::residual_capacity(&d);
    assert_eq!(residual.residual, Some(4000.0));
    assert_eq!(residual.percent_remaining, Some(28.6));

    let ratio = metrics::gate_ratio(&d);
    assert_eq!(ratio.ratio, Some(24.0));
    assert_eq!(ratio.interpretation, "adequate, standard configuration");

    // Occupancy 88 and the declared friction points produce findings;
    // saturation 71.4 and ratio 24 stay below their thresholds.
    let bottlenecks = metrics::identify_bottlenecks(&d);
    assert_eq!(bottlenecks.len(), 2);
    assert_eq!(bottlenecks[0].component, "occupancy rate");
    assert_eq!(bottlenecks[0].severity, Severity::High);
    assert_eq!(bottlenecks[1].component, "declared friction points");

    let score = metrics::composite_score(&d);
    // capacity 25-17.85=7.15, occupancy 25-22=3, infrastructure 24/30*25=20,
    // compliance 20 -> mean of 50.15/4 = 12.5 -> 13
    assert_eq!(score.score, 13);
    assert_eq!(score.level, ScoreLevel::Low);
    assert_eq!(score.breakdown.len(), 4);
}

#[test]
fn test_dashboard_stats_over_mixed_fleet() {
    let now = Utc::now();
    let mut records = vec![
        diagnostic(json!({
            "airport_name": "Alpha",
            "location": "Agadir, Souss-Massa",
            "saturation_rate": 95.0,
            "occupancy_rate": 90.0,
            "passenger_capacity_millions": 10.0,
            "current_annual_passengers": 9500.0
        })),
        diagnostic(json!({
            "airport_name": "Bravo",
            "location": "Oujda, Oriental",
            "saturation_rate": 45.0
        })),
        diagnostic(json!({
            "airport_name": "Charlie",
            "location": "Dakhla"
        })),
    ];
    records[0].created_at = now - Duration::days(2);
    records[1].created_at = now - Duration::days(10);
    records[2].created_at = now - Duration::days(40);

    let stats = fleet_stats(&records, now);
    assert_eq!(stats.total, 3);
    assert_eq!(stats.this_week, 1);
    assert_eq!(stats.this_month, 2);
    assert_eq!(stats.average_saturation, Some(70));
    assert_eq!(stats.average_occupancy, Some(90));
    assert_eq!(stats.total_capacity, 10_000.0);
    assert_eq!(stats.total_traffic, 9_500.0);
    assert_eq!(stats.critical_count, 1);

    assert_eq!(stats.top_performers.len(), 2);
    assert_eq!(stats.top_performers[0].name, "Bravo");
    assert_eq!(stats.bottom_performers[0].name, "Alpha");
    assert_eq!(stats.bottom_performers[0].score, 5.0);

    assert_eq!(stats.by_region.get("Souss-Massa"), Some(&1));
    assert_eq!(stats.by_region.get("Oriental"), Some(&1));
    assert_eq!(stats.by_region.get("Dakhla"), Some(&1));
}

#[test]
fn test_report_serializes_with_stable_shape() {
    let d = diagnostic(json!({ "saturation_rate": 92.5 }));
    let saturation = metrics::saturation_rate(&d);
    let value = serde_json::to_value(&saturation).unwrap();
    assert_eq!(value["rate"], 92.5);
    assert_eq!(value["level"], "critical");
    assert_eq!(value["color"], "red");

    let score = serde_json::to_value(metrics::composite_score(&d)).unwrap();
    assert_eq!(score["level"], "low");
    assert!(score["breakdown"]["capacity"].is_number());
}

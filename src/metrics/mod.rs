/// Per-diagnostic metric functions.
///
/// Every function here is total, pure and synchronous: it takes one
/// [`Diagnostic`] by reference, never mutates it, and signals missing
/// inputs with `None` instead of failing. Computed branches require
/// strictly positive inputs (a zero capacity cannot be divided by);
/// pass-through branches accept any stored reading, including zero.
use crate::domain::{
    Bottleneck, CompositeScore, Diagnostic, GateRatio, HourlyCapacity, RateLevel, RateReading,
    ResidualCapacity, ScoreLevel, Severity,
};
use std::collections::HashMap;

/// Movements per hour assumed for each runway when no capacity is declared.
const ESTIMATED_MOVEMENTS_PER_RUNWAY: f64 = 50.0;

/// Rounds to one decimal place.
fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Shared four-level classifier for saturation and occupancy rates.
///
/// | rate      | level    | color  |
/// |-----------|----------|--------|
/// | < 60      | low      | green  |
/// | 60 – <75  | moderate | yellow |
/// | 75 – <90  | high     | orange |
/// | >= 90     | critical | red    |
pub fn rate_level(rate: f64) -> RateLevel {
    if rate < 60.0 {
        RateLevel::Low
    } else if rate < 75.0 {
        RateLevel::Moderate
    } else if rate < 90.0 {
        RateLevel::High
    } else {
        RateLevel::Critical
    }
}

pub fn rate_color(rate: f64) -> &'static str {
    if rate < 60.0 {
        "green"
    } else if rate < 75.0 {
        "yellow"
    } else if rate < 90.0 {
        "orange"
    } else {
        "red"
    }
}

/// Hourly runway capacity: the declared figure when present, otherwise an
/// estimate from the runway count.
pub fn hourly_runway_capacity(d: &Diagnostic) -> HourlyCapacity {
    if let Some(declared) = d.hourly_runway_capacity {
        return HourlyCapacity {
            capacity: Some(declared),
            source: "declared",
        };
    }

    if let Some(runways) = d.runway_count {
        if runways > 0 {
            return HourlyCapacity {
                capacity: Some(f64::from(runways) * ESTIMATED_MOVEMENTS_PER_RUNWAY),
                source: "estimated (50 mvts/h per runway)",
            };
        }
    }

    HourlyCapacity {
        capacity: None,
        source: "unavailable",
    }
}

/// Saturation rate: a stored reading passes through unchanged; otherwise
/// derived as current traffic over total capacity. Traffic is stored in
/// thousands and capacity in millions, hence the ×1000.
pub fn saturation_rate(d: &Diagnostic) -> RateReading {
    if let Some(rate) = d.saturation_rate {
        return RateReading {
            rate: Some(rate),
            level: Some(rate_level(rate)),
            color: rate_color(rate),
        };
    }

    if let (Some(current), Some(capacity)) = (d.current_annual_passengers, d.passenger_capacity_millions) {
        if current > 0.0 && capacity > 0.0 {
            let rate = current / (capacity * 1000.0) * 100.0;
            return RateReading {
                rate: Some(round1(rate)),
                level: Some(rate_level(rate)),
                color: rate_color(rate),
            };
        }
    }

    RateReading {
        rate: None,
        level: None,
        color: "gray",
    }
}

/// Occupancy rate: stored reading only. Unlike saturation there is no
/// formula fallback; the asymmetry is deliberate and matches the
/// documented behavior.
pub fn occupancy_rate(d: &Diagnostic) -> RateReading {
    if let Some(rate) = d.occupancy_rate {
        return RateReading {
            rate: Some(rate),
            level: Some(rate_level(rate)),
            color: rate_color(rate),
        };
    }

    RateReading {
        rate: None,
        level: None,
        color: "gray",
    }
}

/// Residual annual capacity in thousands of passengers per year.
pub fn residual_capacity(d: &Diagnostic) -> ResidualCapacity {
    if let (Some(capacity), Some(current)) = (d.passenger_capacity_millions, d.current_annual_passengers) {
        if capacity > 0.0 && current > 0.0 {
            let total_k = capacity * 1000.0;
            let residual = total_k - current;
            let percent = residual / total_k * 100.0;

            return ResidualCapacity {
                residual: Some(residual.round()),
                percent_remaining: Some(round1(percent)),
                unit: "k passengers/year",
            };
        }
    }

    ResidualCapacity {
        residual: None,
        percent_remaining: None,
        unit: "k passengers/year",
    }
}

/// Aircraft stands per terminal, classified on the raw ratio and returned
/// rounded to one decimal.
pub fn gate_ratio(d: &Diagnostic) -> GateRatio {
    if let (Some(stands), Some(terminals)) = (d.total_stands, d.terminal_count) {
        if stands > 0 && terminals > 0 {
            let ratio = f64::from(stands) / f64::from(terminals);

            let interpretation = if ratio < 15.0 {
                "low, congestion risk"
            } else if ratio < 25.0 {
                "adequate, standard configuration"
            } else if ratio < 35.0 {
                "good, comfortable capacity"
            } else {
                "excellent, ample capacity"
            };

            return GateRatio {
                ratio: Some(round1(ratio)),
                interpretation,
            };
        }
    }

    GateRatio {
        ratio: None,
        interpretation: "insufficient data",
    }
}

/// Bottleneck analysis. Findings are evaluated independently and appended
/// in a fixed display order: global saturation, gate ratio, occupancy,
/// declared friction points. A criterion whose metric is unknown emits
/// nothing.
pub fn identify_bottlenecks(d: &Diagnostic) -> Vec<Bottleneck> {
    let mut findings = Vec::new();

    let saturation = saturation_rate(d);
    if let Some(rate) = saturation.rate {
        if rate > 90.0 {
            findings.push(Bottleneck {
                component: "global capacity",
                problem: format!("critical saturation: {rate}%"),
                severity: Severity::Critical,
                recommendation: "urgent extension required",
            });
        } else if rate > 75.0 {
            findings.push(Bottleneck {
                component: "global capacity",
                problem: format!("high saturation: {rate}%"),
                severity: Severity::High,
                recommendation: "plan short-term extension",
            });
        }
    }

    let ratio = gate_ratio(d);
    if let Some(ratio) = ratio.ratio {
        if ratio < 15.0 {
            findings.push(Bottleneck {
                component: "aircraft stands",
                problem: format!("insufficient ratio: {ratio} stands/terminal"),
                severity: Severity::High,
                recommendation: "increase stand count",
            });
        }
    }

    let occupancy = occupancy_rate(d);
    if let Some(rate) = occupancy.rate {
        if rate > 85.0 {
            findings.push(Bottleneck {
                component: "occupancy rate",
                problem: format!("high occupancy: {rate}%"),
                severity: if rate > 95.0 { Severity::Critical } else { Severity::High },
                recommendation: "optimize flows and schedules",
            });
        }
    }

    if let Some(friction) = &d.friction_points {
        let excerpt: String = friction.chars().take(100).collect();
        findings.push(Bottleneck {
            component: "declared friction points",
            problem: format!("{excerpt}..."),
            severity: Severity::Moderate,
            recommendation: "see detailed flow analysis",
        });
    }

    findings
}

/// Composite performance score on 0-100.
///
/// Up to four sub-scores, each on 0-25, averaged over the criteria that
/// were actually computable; a missing criterion is excluded from the
/// denominator rather than scored as zero. Compliance is always counted.
pub fn composite_score(d: &Diagnostic) -> CompositeScore {
    let mut total = 0.0;
    let mut criteria = 0u32;
    let mut breakdown = HashMap::new();

    // Capacity (0-25)
    let saturation = saturation_rate(d);
    if let Some(rate) = saturation.rate {
        let sub = (25.0 - (rate / 100.0) * 25.0).max(0.0);
        breakdown.insert("capacity", sub.round() as i32);
        total += sub;
        criteria += 1;
    }

    // Occupancy (0-25)
    let occupancy = occupancy_rate(d);
    if let Some(rate) = occupancy.rate {
        let sub = (25.0 - (rate / 100.0) * 25.0).max(0.0);
        breakdown.insert("occupancy", sub.round() as i32);
        total += sub;
        criteria += 1;
    }

    // Infrastructure (0-25), evaluated when all three counts are present
    if d.runway_count.is_some() && d.terminal_count.is_some() && d.total_stands.is_some() {
        let sub = match gate_ratio(d).ratio {
            Some(ratio) => (ratio / 30.0 * 25.0).min(25.0),
            None => 15.0,
        };
        breakdown.insert("infrastructure", sub.round() as i32);
        total += sub;
        criteria += 1;
    }

    // Compliance (0-25)
    let compliance = if d.icao_iata_compliance.is_some() { 20.0 } else { 10.0 };
    breakdown.insert("compliance", compliance as i32);
    total += compliance;
    criteria += 1;

    let score = if criteria > 0 {
        (total / f64::from(criteria)).round() as i32
    } else {
        50
    };

    let level = if score >= 80 {
        ScoreLevel::Excellent
    } else if score >= 65 {
        ScoreLevel::Good
    } else if score >= 50 {
        ScoreLevel::Average
    } else {
        ScoreLevel::Low
    };

    CompositeScore { score, level, breakdown }
}

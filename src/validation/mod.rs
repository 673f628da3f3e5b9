/// Intake validation for diagnostic creation.
///
/// Checks the payload field by field and collects every failure into a
/// field -> message-list map, so the caller can report all problems at
/// once instead of the first one hit. Lengths are counted in characters,
/// not bytes.
use crate::domain::NewDiagnostic;
use std::collections::HashMap;

pub type FieldErrors = HashMap<String, Vec<String>>;

const MAX_NAME: usize = 100;
const MAX_LOCATION: usize = 200;
const MAX_TEXT: usize = 500;
const MAX_NOTES: usize = 2000;

/// Validates an intake payload. `Ok(())` when clean, otherwise the full
/// error map.
pub fn validate(input: &NewDiagnostic) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    if input.diagnostic_date.is_none() {
        push(&mut errors, "diagnostic_date", "diagnostic date is required");
    }

    check_len(&mut errors, "airport_name", &input.airport_name, 2, MAX_NAME);
    check_len(&mut errors, "location", &input.location, 2, MAX_LOCATION);

    if let Some(code) = &input.iata_code {
        if !is_upper_alpha(code, 3) {
            push(&mut errors, "iata_code", "IATA code must be 3 uppercase letters");
        }
    }
    if let Some(code) = &input.icao_code {
        if !is_upper_alpha(code, 4) {
            push(&mut errors, "icao_code", "ICAO code must be 4 uppercase letters");
        }
    }

    check_positive_int(&mut errors, "runway_count", input.runway_count);
    check_positive(&mut errors, "hourly_runway_capacity", input.hourly_runway_capacity);
    check_positive(&mut errors, "main_runway_length_m", input.main_runway_length_m);
    check_positive_int(&mut errors, "terminal_count", input.terminal_count);
    check_positive(&mut errors, "passenger_capacity_millions", input.passenger_capacity_millions);
    check_positive(&mut errors, "peak_hour_passengers", input.peak_hour_passengers);
    check_positive_int(&mut errors, "total_stands", input.total_stands);
    check_positive_int(&mut errors, "contact_stands", input.contact_stands);
    check_positive_int(&mut errors, "remote_stands", input.remote_stands);
    check_positive(&mut errors, "tower_height_m", input.tower_height_m);

    check_positive(&mut errors, "saturation_rate", input.saturation_rate);
    if let Some(rate) = input.saturation_rate {
        if rate > 200.0 {
            push(&mut errors, "saturation_rate", "saturation rate cannot exceed 200%");
        }
    }
    check_positive(&mut errors, "occupancy_rate", input.occupancy_rate);
    if let Some(rate) = input.occupancy_rate {
        if rate > 100.0 {
            push(&mut errors, "occupancy_rate", "occupancy rate cannot exceed 100%");
        }
    }
    check_positive(&mut errors, "avg_processing_minutes", input.avg_processing_minutes);
    check_positive(&mut errors, "current_annual_passengers", input.current_annual_passengers);
    check_positive_int(&mut errors, "daily_flights", input.daily_flights);
    check_positive(&mut errors, "estimated_cost", input.estimated_cost);

    check_opt_len(&mut errors, "peak_periods", &input.peak_periods, MAX_TEXT);
    check_opt_len(&mut errors, "passenger_routing", &input.passenger_routing, MAX_TEXT);
    check_opt_len(&mut errors, "aircraft_routing", &input.aircraft_routing, MAX_TEXT);
    check_opt_len(&mut errors, "icao_iata_compliance", &input.icao_iata_compliance, MAX_TEXT);
    check_opt_len(&mut errors, "security_levels", &input.security_levels, MAX_TEXT);
    check_opt_len(&mut errors, "comfort_requirements", &input.comfort_requirements, MAX_TEXT);
    check_opt_len(&mut errors, "friction_points", &input.friction_points, MAX_TEXT);
    check_opt_len(&mut errors, "security_equipment", &input.security_equipment, MAX_TEXT);
    check_opt_len(&mut errors, "technical_services", &input.technical_services, MAX_TEXT);
    check_opt_len(&mut errors, "light_optimization", &input.light_optimization, MAX_TEXT);
    check_opt_len(&mut errors, "medium_optimization", &input.medium_optimization, MAX_TEXT);
    check_opt_len(&mut errors, "heavy_optimization", &input.heavy_optimization, MAX_TEXT);
    check_opt_len(&mut errors, "impact_estimate", &input.impact_estimate, MAX_TEXT);
    check_opt_len(&mut errors, "observation_notes", &input.observation_notes, MAX_NOTES);
    check_opt_len(&mut errors, "structural_constraints", &input.structural_constraints, MAX_TEXT);
    check_opt_len(&mut errors, "local_data", &input.local_data, MAX_TEXT);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn push(errors: &mut FieldErrors, field: &str, message: &str) {
    errors.entry(field.to_string()).or_default().push(message.to_string());
}

fn check_len(errors: &mut FieldErrors, field: &str, value: &str, min: usize, max: usize) {
    let len = value.chars().count();
    if len < min {
        push(errors, field, &format!("must contain at least {min} characters"));
    } else if len > max {
        push(errors, field, &format!("cannot exceed {max} characters"));
    }
}

fn check_opt_len(errors: &mut FieldErrors, field: &str, value: &Option<String>, max: usize) {
    if let Some(text) = value {
        if text.chars().count() > max {
            push(errors, field, &format!("cannot exceed {max} characters"));
        }
    }
}

fn check_positive(errors: &mut FieldErrors, field: &str, value: Option<f64>) {
    if let Some(v) = value {
        if v <= 0.0 {
            push(errors, field, "must be a positive number");
        }
    }
}

fn check_positive_int(errors: &mut FieldErrors, field: &str, value: Option<i32>) {
    if let Some(v) = value {
        if v <= 0 {
            push(errors, field, "must be a positive number");
        }
    }
}

fn is_upper_alpha(code: &str, expected_len: usize) -> bool {
    code.chars().count() == expected_len && code.chars().all(|c| c.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn minimal() -> NewDiagnostic {
        NewDiagnostic {
            diagnostic_date: Some(Utc::now()),
            airport_name: "Mohammed V Intl".into(),
            location: "Casablanca, Grand Casablanca".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_minimal_payload_is_valid() {
        assert!(validate(&minimal()).is_ok());
    }

    #[test]
    fn test_missing_date_and_short_name_are_both_reported() {
        let mut input = minimal();
        input.diagnostic_date = None;
        input.airport_name = "X".into();

        let errors = validate(&input).unwrap_err();
        assert!(errors.contains_key("diagnostic_date"));
        assert!(errors.contains_key("airport_name"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_name_and_location_bounds() {
        let mut input = minimal();
        input.airport_name = "a".repeat(101);
        input.location = "b".repeat(201);
        let errors = validate(&input).unwrap_err();
        assert_eq!(errors["airport_name"], vec!["cannot exceed 100 characters"]);
        assert_eq!(errors["location"], vec!["cannot exceed 200 characters"]);
    }

    #[test]
    fn test_airport_code_patterns() {
        let mut input = minimal();
        input.iata_code = Some("CMN".into());
        input.icao_code = Some("GMMN".into());
        assert!(validate(&input).is_ok());

        for bad in ["cmn", "CM", "CMNX", "C1N"] {
            let mut input = minimal();
            input.iata_code = Some(bad.into());
            let errors = validate(&input).unwrap_err();
            assert!(errors.contains_key("iata_code"), "accepted {bad:?}");
        }

        let mut input = minimal();
        input.icao_code = Some("GMM".into());
        assert!(validate(&input).unwrap_err().contains_key("icao_code"));
    }

    #[test]
    fn test_numeric_fields_must_be_positive() {
        let mut input = minimal();
        input.runway_count = Some(0);
        input.passenger_capacity_millions = Some(-2.0);
        input.tower_height_m = Some(45.0);

        let errors = validate(&input).unwrap_err();
        assert!(errors.contains_key("runway_count"));
        assert!(errors.contains_key("passenger_capacity_millions"));
        assert!(!errors.contains_key("tower_height_m"));
    }

    #[test]
    fn test_rate_caps() {
        let mut input = minimal();
        input.saturation_rate = Some(200.1);
        input.occupancy_rate = Some(100.5);
        let errors = validate(&input).unwrap_err();
        assert_eq!(errors["saturation_rate"], vec!["saturation rate cannot exceed 200%"]);
        assert_eq!(errors["occupancy_rate"], vec!["occupancy rate cannot exceed 100%"]);

        let mut input = minimal();
        input.saturation_rate = Some(200.0);
        input.occupancy_rate = Some(100.0);
        assert!(validate(&input).is_ok());
    }

    #[test]
    fn test_text_length_caps() {
        let mut input = minimal();
        input.friction_points = Some("f".repeat(501));
        input.observation_notes = Some("n".repeat(2000));
        let errors = validate(&input).unwrap_err();
        assert!(errors.contains_key("friction_points"));
        assert!(!errors.contains_key("observation_notes"));
    }

    #[test]
    fn test_multiple_messages_accumulate_per_field() {
        let mut input = minimal();
        input.saturation_rate = Some(-5.0);
        let errors = validate(&input).unwrap_err();
        assert_eq!(errors["saturation_rate"], vec!["must be a positive number"]);
    }
}

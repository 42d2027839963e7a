//! Structural validation of incoming plan requests.
//!
//! The planning core trusts its input, so every range check on numbers
//! happens here. Plant types are deliberately left alone: rejecting an
//! unknown technology is the cost model's job.

use super::types::FieldError;
use crate::plan::PlanRequest;

/// Validates all request fields and returns a list of errors.
///
/// Returns an empty vector if the request is valid.
pub fn validate_request(req: &PlanRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if !req.load.is_finite() {
        errors.push(FieldError::new("load", "must be a finite number"));
    }

    let f = &req.fuels;
    for (field, value) in [
        ("fuels.gas(euro/MWh)", f.gas),
        ("fuels.kerosine(euro/MWh)", f.kerosine),
        ("fuels.co2(euro/ton)", f.co2),
        ("fuels.wind(%)", f.wind_pct),
    ] {
        if !non_negative(value) {
            errors.push(FieldError::new(field, "must be >= 0"));
        }
    }

    for (i, plant) in req.powerplants.iter().enumerate() {
        let at = |field: &str| format!("powerplants[{i}].{field}");

        if plant.name.trim().is_empty() {
            errors.push(FieldError::new(at("name"), "must not be empty"));
        }
        if !(plant.efficiency.is_finite() && plant.efficiency > 0.0) {
            errors.push(FieldError::new(at("efficiency"), "must be > 0"));
        }
        if !non_negative(plant.pmin) {
            errors.push(FieldError::new(at("pmin"), "must be >= 0"));
        }
        if !non_negative(plant.pmax) {
            errors.push(FieldError::new(at("pmax"), "must be >= 0"));
        }
        if plant.pmin > plant.pmax {
            errors.push(FieldError::new(at("pmin"), "must be <= pmax"));
        }
    }

    errors
}

fn non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

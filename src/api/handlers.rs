//! Request handlers for the API endpoints.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use tracing::info;

use super::types::ApiError;
use super::validation::validate_request;
use crate::plan::{Allocation, PlanRequest};

/// Computes a production plan for the posted load, fuels, and fleet.
///
/// `POST /productionplan` → 200 + `Vec<Allocation>` JSON in merit order
/// `POST /productionplan` with a malformed or invalid body → 400 + `ErrorResponse`
/// `POST /productionplan` with an unknown plant type → 400 + `ErrorResponse`
pub async fn post_production_plan(
    payload: Result<Json<PlanRequest>, JsonRejection>,
) -> Result<Json<Vec<Allocation>>, ApiError> {
    let Json(request) = payload?;

    let errors = validate_request(&request);
    if !errors.is_empty() {
        return Err(ApiError::Invalid(errors));
    }

    let plan = request.plan()?;
    info!(
        plants = plan.len(),
        load = request.load,
        "production plan served"
    );

    Ok(Json(plan))
}

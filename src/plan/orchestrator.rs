//! Production plan pipeline: merit order → capacity adjustment → allocation.

use tracing::debug;

use super::allocation::allocate;
use super::capacity::adjust_capacity;
use super::error::PlanError;
use super::merit_order::merit_order;
use super::types::{Allocation, FuelPrices, Plant, PlanRequest};

/// Computes the production plan for `fleet` covering `load`.
///
/// Plants are ranked by marginal cost first, wind capacity is then scaled to
/// current availability, and finally the load is allocated greedily. The
/// result has one entry per plant in merit order. Inputs are not modified,
/// so calling this twice on the same data yields the same plan.
///
/// # Errors
///
/// Returns a [`PlanError`] if any plant's cost cannot be computed. No partial
/// plan is produced in that case.
///
/// # Examples
///
/// ```
/// use production_plan::plan::orchestrator::production_plan;
/// use production_plan::plan::types::{FuelPrices, Plant};
///
/// let fleet = vec![
///     Plant::new("gas", "gasfired", 0.5, 50.0, 200.0),
///     Plant::new("wind", "windturbine", 1.0, 0.0, 100.0),
/// ];
/// let fuels = FuelPrices::new(20.0, 50.0, 0.0, 50.0);
///
/// let plan = production_plan(&fleet, &fuels, 80.0).unwrap();
/// assert_eq!(plan[0].name, "wind");
/// assert_eq!(plan[0].allocated, 50.0);
/// assert_eq!(plan[1].allocated, 0.0);
/// ```
pub fn production_plan(
    fleet: &[Plant],
    fuels: &FuelPrices,
    load: f64,
) -> Result<Vec<Allocation>, PlanError> {
    let ordered = merit_order(fleet, fuels)?;
    let adjusted = adjust_capacity(&ordered, fuels);
    let plan = allocate(&adjusted, load);

    let allocated: f64 = plan.iter().map(|a| a.allocated).sum();
    debug!(
        plants = plan.len(),
        load,
        allocated,
        unmet = load - allocated,
        "production plan computed"
    );

    Ok(plan)
}

impl PlanRequest {
    /// Runs [`production_plan`] on this request.
    ///
    /// # Errors
    ///
    /// See [`production_plan`].
    pub fn plan(&self) -> Result<Vec<Allocation>, PlanError> {
        production_plan(&self.powerplants, &self.fuels, self.load)
    }
}

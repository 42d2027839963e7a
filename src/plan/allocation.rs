//! Greedy load allocation over a merit-ordered fleet.

use super::types::{Allocation, Plant};

/// Allocation granularity (MW).
pub const STEP_MW: f64 = 0.1;

/// Rounds a power value down to the allocation granularity.
///
/// The floor is exact: a value a hair below a 0.1 step, such as a wind
/// capacity of `36 * 0.6 == 21.599999999999998`, goes down to the step below.
///
/// # Examples
///
/// ```
/// use production_plan::plan::allocation::floor_to_step;
///
/// assert_eq!(floor_to_step(12.37), 12.3);
/// assert_eq!(floor_to_step(50.0), 50.0);
/// ```
pub fn floor_to_step(mw: f64) -> f64 {
    let steps = 1.0 / STEP_MW;
    (mw * steps).floor() / steps
}

/// Distributes `load` over `fleet` in a single greedy left-to-right pass.
///
/// The fleet must already be in merit order with capacities adjusted; this
/// function neither reorders nor rescales it. For each plant, with
/// `remaining` the load still uncovered:
///
/// - `remaining <= 0` or `pmin > remaining` → 0
/// - `pmin == remaining` → `pmin`
/// - otherwise → `min(pmax, remaining)`
///
/// Each amount is floored to [`STEP_MW`] and the floored value is subtracted
/// from `remaining`. There is no backtracking, so when `pmin` constraints
/// block an exact match the total is returned as-is and may differ from
/// `load`. One entry is emitted per plant, zero allocations included.
pub fn allocate(fleet: &[Plant], load: f64) -> Vec<Allocation> {
    let mut remaining = load;

    fleet
        .iter()
        .map(|plant| {
            let raw = if remaining <= 0.0 || plant.pmin > remaining {
                0.0
            } else if plant.pmin == remaining {
                plant.pmin
            } else {
                plant.pmax.min(remaining)
            };
            let allocated = floor_to_step(raw);
            remaining -= allocated;

            Allocation {
                name: plant.name.clone(),
                allocated,
            }
        })
        .collect()
}

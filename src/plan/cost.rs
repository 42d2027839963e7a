//! Marginal production cost per plant.

use super::error::PlanError;
use super::types::{FuelPrices, Plant, PlantKind};

/// Computes a plant's marginal cost of production (EUR/MWh).
///
/// Wind is free. Fuel-burning plants cost `fuel price / efficiency`; the CO2
/// price is not part of the formula.
///
/// # Errors
///
/// * [`PlanError::InvalidPlantType`] if the plant type is not recognized.
/// * [`PlanError::InvalidPlantConfiguration`] if a fuel-burning plant has an
///   efficiency that is not a positive finite number.
///
/// # Examples
///
/// ```
/// use production_plan::plan::cost::marginal_cost;
/// use production_plan::plan::types::{FuelPrices, Plant};
///
/// let fuels = FuelPrices::new(20.0, 50.0, 0.0, 100.0);
/// let gas = Plant::new("gas1", "gasfired", 0.5, 0.0, 100.0);
/// assert_eq!(marginal_cost(&gas, &fuels), Ok(40.0));
/// ```
pub fn marginal_cost(plant: &Plant, fuels: &FuelPrices) -> Result<f64, PlanError> {
    let fuel_price = match &plant.kind {
        PlantKind::Wind => return Ok(0.0),
        PlantKind::Gas => fuels.gas,
        PlantKind::Turbojet => fuels.kerosine,
        PlantKind::Unrecognized(kind) => {
            return Err(PlanError::InvalidPlantType {
                plant: plant.name.clone(),
                kind: kind.clone(),
            });
        }
    };

    if !(plant.efficiency.is_finite() && plant.efficiency > 0.0) {
        return Err(PlanError::InvalidPlantConfiguration {
            plant: plant.name.clone(),
            reason: format!("efficiency must be > 0, got {}", plant.efficiency),
        });
    }

    Ok(fuel_price / plant.efficiency)
}

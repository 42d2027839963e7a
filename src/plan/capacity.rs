//! Weather-dependent capacity adjustment.

use super::types::{FuelPrices, Plant};

/// Returns a copy of the fleet with wind capacity scaled to current wind
/// availability: `pmax * wind% / 100`. Other plants are copied unchanged and
/// order is preserved.
pub fn adjust_capacity(fleet: &[Plant], fuels: &FuelPrices) -> Vec<Plant> {
    fleet
        .iter()
        .map(|plant| {
            let mut adjusted = plant.clone();
            if adjusted.is_wind() {
                adjusted.pmax *= fuels.wind_fraction();
            }
            adjusted
        })
        .collect()
}

//! Merit-order ranking of a fleet.

use std::cmp::Ordering;

use super::cost::marginal_cost;
use super::error::PlanError;
use super::types::{FuelPrices, Plant};

/// Returns the fleet sorted from cheapest to most expensive marginal cost.
///
/// The sort is stable: plants with equal cost keep their caller-supplied
/// relative order. All costs are computed before sorting, so a single bad
/// plant fails the whole call and no partial ordering is returned. The input
/// slice is not modified. Costs compare numerically, so `-0.0` ties with
/// `0.0`.
///
/// # Errors
///
/// Propagates the first [`PlanError`] raised by [`marginal_cost`].
pub fn merit_order(fleet: &[Plant], fuels: &FuelPrices) -> Result<Vec<Plant>, PlanError> {
    let mut ranked = fleet
        .iter()
        .map(|plant| marginal_cost(plant, fuels).map(|cost| (cost, plant.clone())))
        .collect::<Result<Vec<_>, _>>()?;

    ranked.sort_by(|(a, _), (b, _)| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    Ok(ranked.into_iter().map(|(_, plant)| plant).collect())
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng, rngs::StdRng};

    use super::*;

    fn fuels() -> FuelPrices {
        FuelPrices::new(13.4, 50.8, 20.0, 60.0)
    }

    fn names(fleet: &[Plant]) -> Vec<&str> {
        fleet.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn cheapest_first() {
        let fleet = vec![
            Plant::new("tj1", "turbojet", 0.3, 0.0, 16.0),
            Plant::new("gas1", "gasfired", 0.53, 100.0, 460.0),
            Plant::new("wind1", "windturbine", 1.0, 0.0, 150.0),
        ];
        let ordered = merit_order(&fleet, &fuels()).expect("fleet should order");
        assert_eq!(names(&ordered), vec!["wind1", "gas1", "tj1"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let fleet = vec![
            Plant::new("gas_a", "gasfired", 0.5, 0.0, 100.0),
            Plant::new("wind_b", "windturbine", 1.0, 0.0, 50.0),
            Plant::new("gas_c", "gasfired", 0.5, 0.0, 100.0),
            Plant::new("wind_a", "windturbine", 1.0, 0.0, 10.0),
        ];
        let ordered = merit_order(&fleet, &fuels()).expect("fleet should order");
        assert_eq!(names(&ordered), vec!["wind_b", "wind_a", "gas_a", "gas_c"]);
    }

    #[test]
    fn negative_zero_cost_ties_with_wind() {
        let fleet = vec![
            Plant::new("wind", "windturbine", 1.0, 0.0, 100.0),
            Plant::new("gas", "gasfired", 0.5, 0.0, 100.0),
        ];
        let fuels = FuelPrices::new(-0.0, 50.0, 0.0, 100.0);
        let ordered = merit_order(&fleet, &fuels).expect("fleet should order");
        assert_eq!(names(&ordered), vec!["wind", "gas"]);
    }

    #[test]
    fn unknown_type_aborts_ordering() {
        let fleet = vec![
            Plant::new("wind1", "windturbine", 1.0, 0.0, 150.0),
            Plant::new("sun1", "solar", 1.0, 0.0, 10.0),
        ];
        let err = merit_order(&fleet, &fuels()).unwrap_err();
        assert_eq!(
            err,
            PlanError::InvalidPlantType {
                plant: "sun1".to_string(),
                kind: "solar".to_string(),
            }
        );
    }

    #[test]
    fn does_not_touch_input() {
        let fleet = vec![
            Plant::new("gas1", "gasfired", 0.5, 0.0, 100.0),
            Plant::new("wind1", "windturbine", 1.0, 0.0, 150.0),
        ];
        let before = fleet.clone();
        let _ = merit_order(&fleet, &fuels()).expect("fleet should order");
        assert_eq!(fleet, before);
    }

    #[test]
    fn empty_fleet_orders_to_empty() {
        let ordered = merit_order(&[], &fuels()).expect("empty fleet should order");
        assert!(ordered.is_empty());
    }

    #[test]
    fn random_fleets_are_non_decreasing_and_stable() {
        let mut rng = StdRng::seed_from_u64(42);
        let kinds = ["windturbine", "gasfired", "turbojet"];
        // A few discrete efficiencies so that cost ties are common.
        let efficiencies = [0.3, 0.5, 1.0];

        for _ in 0..200 {
            let n = rng.random_range(0..12);
            let fleet: Vec<Plant> = (0..n)
                .map(|i| {
                    let kind = kinds[rng.random_range(0..kinds.len())];
                    let eff = efficiencies[rng.random_range(0..efficiencies.len())];
                    Plant::new(format!("p{i}"), kind, eff, 0.0, 100.0)
                })
                .collect();

            let ordered = merit_order(&fleet, &fuels()).expect("fleet should order");
            assert_eq!(ordered.len(), fleet.len());

            let costs: Vec<f64> = ordered
                .iter()
                .map(|p| marginal_cost(p, &fuels()).expect("cost should compute"))
                .collect();
            assert!(costs.windows(2).all(|w| w[0] <= w[1]), "{costs:?}");

            // Among equal-cost neighbours, input indices must increase.
            let index = |p: &Plant| fleet.iter().position(|q| q.name == p.name);
            for (pair, cost) in ordered.windows(2).zip(costs.windows(2)) {
                if cost[0] == cost[1] {
                    assert!(index(&pair[0]) < index(&pair[1]));
                }
            }
        }
    }
}

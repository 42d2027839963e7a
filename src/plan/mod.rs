/// Greedy allocation of load over an ordered fleet.
pub mod allocation;
/// Weather-dependent capacity adjustment.
pub mod capacity;
pub mod cost;
pub mod error;
pub mod merit_order;
pub mod orchestrator;
pub mod types;

pub use error::PlanError;
pub use orchestrator::production_plan;
pub use types::{Allocation, FuelPrices, Plant, PlantKind, PlanRequest};

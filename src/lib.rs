//! Merit-order production planning for a fleet of power plants.

/// HTTP shell around the planning core.
#[cfg(feature = "api")]
pub mod api;
pub mod config;
pub mod logging;
/// Cost model, merit order, capacity adjustment, and greedy allocation.
pub mod plan;

//! Errors raised while building a production plan.

use thiserror::Error;

/// Failure of the planning pipeline. Every variant is terminal for the
/// request and is caused by the caller's data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    /// The plant's type string is not a supported technology.
    #[error("invalid powerplant type \"{kind}\" for plant \"{plant}\"")]
    InvalidPlantType { plant: String, kind: String },

    /// The plant's parameters make its marginal cost undefined.
    #[error("invalid configuration for plant \"{plant}\": {reason}")]
    InvalidPlantConfiguration { plant: String, reason: String },
}

//! Core planning types: fuel prices, plants, requests, and allocations.
//!
//! Wire field names follow the public production-plan payload format, so
//! these types deserialize request bodies and serialize responses directly.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Snapshot of market conditions for one planning request.
///
/// # Examples
///
/// ```
/// use production_plan::plan::types::FuelPrices;
///
/// let fuels = FuelPrices::new(13.4, 50.8, 20.0, 60.0);
/// assert_eq!(fuels.wind_fraction(), 0.6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelPrices {
    /// Gas price (EUR/MWh).
    #[serde(rename = "gas(euro/MWh)")]
    pub gas: f64,
    /// Kerosine price (EUR/MWh).
    #[serde(rename = "kerosine(euro/MWh)")]
    pub kerosine: f64,
    /// CO2 emission allowance price (EUR/ton). Carried but not priced in.
    #[serde(rename = "co2(euro/ton)")]
    pub co2: f64,
    /// Wind availability, as a percentage of installed wind capacity.
    #[serde(rename = "wind(%)")]
    pub wind_pct: f64,
}

impl FuelPrices {
    /// Creates a new fuel price snapshot.
    pub fn new(gas: f64, kerosine: f64, co2: f64, wind_pct: f64) -> Self {
        Self {
            gas,
            kerosine,
            co2,
            wind_pct,
        }
    }

    /// Wind availability as a fraction (`wind_pct / 100`).
    pub fn wind_fraction(&self) -> f64 {
        self.wind_pct / 100.0
    }
}

/// Technology of a power plant.
///
/// Deserialization never fails on the type string: anything that is not a
/// known technology becomes [`PlantKind::Unrecognized`] and is rejected later
/// by the cost model, which reports the offending string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlantKind {
    /// Wind turbine (`"windturbine"`): zero fuel cost, variable capacity.
    Wind,
    /// Gas-fired plant (`"gasfired"`).
    Gas,
    /// Kerosine turbojet (`"turbojet"`).
    Turbojet,
    /// Any other type string, kept verbatim.
    Unrecognized(String),
}

impl PlantKind {
    /// Wire name of the plant type.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Wind => "windturbine",
            Self::Gas => "gasfired",
            Self::Turbojet => "turbojet",
            Self::Unrecognized(other) => other,
        }
    }
}

impl From<String> for PlantKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "windturbine" => Self::Wind,
            "gasfired" => Self::Gas,
            "turbojet" => Self::Turbojet,
            _ => Self::Unrecognized(s),
        }
    }
}

impl From<&str> for PlantKind {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<PlantKind> for String {
    fn from(kind: PlantKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for PlantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dispatchable power plant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    /// Unique plant identifier.
    pub name: String,
    /// Plant technology.
    #[serde(rename = "type")]
    pub kind: PlantKind,
    /// Fuel-to-electricity conversion efficiency.
    pub efficiency: f64,
    /// Minimum output when switched on (MW).
    pub pmin: f64,
    /// Maximum output (MW).
    pub pmax: f64,
}

impl Plant {
    /// Creates a new plant.
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<PlantKind>,
        efficiency: f64,
        pmin: f64,
        pmax: f64,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            efficiency,
            pmin,
            pmax,
        }
    }

    /// Whether this plant's capacity depends on wind availability.
    pub fn is_wind(&self) -> bool {
        self.kind == PlantKind::Wind
    }
}

/// Full planning request: load to cover, market snapshot, and fleet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Load to cover (MW).
    pub load: f64,
    /// Fuel prices and wind availability.
    pub fuels: FuelPrices,
    /// Fleet in caller-supplied order.
    pub powerplants: Vec<Plant>,
}

/// Power assigned to one plant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// Plant identifier.
    pub name: String,
    /// Allocated power (MW), a multiple of 0.1.
    #[serde(rename = "p")]
    pub allocated: f64,
}

impl fmt::Display for Allocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<24} {:>8.1} MW", self.name, self.allocated)
    }
}

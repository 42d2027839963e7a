//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use production_plan::plan::{Allocation, PlanRequest};

/// 480 MW load, 60% wind.
pub const PAYLOAD_1: &str = include_str!("../fixtures/payload1.json");
/// 480 MW load, no wind.
pub const PAYLOAD_2: &str = include_str!("../fixtures/payload2.json");
/// 910 MW load, 60% wind.
pub const PAYLOAD_3: &str = include_str!("../fixtures/payload3.json");

/// Parses one of the payload fixtures.
pub fn request(payload: &str) -> PlanRequest {
    serde_json::from_str(payload).expect("fixture payload should parse")
}

/// Allocation names in result order.
pub fn names(plan: &[Allocation]) -> Vec<&str> {
    plan.iter().map(|a| a.name.as_str()).collect()
}

/// Sum of allocated power.
pub fn total(plan: &[Allocation]) -> f64 {
    plan.iter().map(|a| a.allocated).sum()
}

/// Asserts that each allocation matches `expected` to within float noise.
pub fn assert_plan(plan: &[Allocation], expected: &[(&str, f64)]) {
    assert_eq!(plan.len(), expected.len(), "plan: {plan:?}");
    for (a, (name, p)) in plan.iter().zip(expected) {
        assert_eq!(a.name, *name, "plan: {plan:?}");
        assert!(
            (a.allocated - p).abs() < 1e-9,
            "{name}: expected {p}, got {}",
            a.allocated
        );
    }
}

//! Helper functions for integration tests

#![allow(dead_code)]

use advect_rs::analysis::amplification;
use advect_rs::physics::{PeriodicGrid, Waveform};
use advect_rs::solver::Scenario;

/// Standard setup: nodes 0, 1, …, 100 (Δx = 1), one sine wave per period
pub fn sinusoid_scenario() -> Scenario {
    let grid = PeriodicGrid::from_extent(100.0, 1.0).unwrap();
    Scenario::from_waveform(grid, &Waveform::periodic_sinusoid(&grid)).unwrap()
}

/// Smoothed square step on the same grid
pub fn smoothed_step_scenario() -> Scenario {
    let grid = PeriodicGrid::from_extent(100.0, 1.0).unwrap();
    Scenario::from_waveform(grid, &Waveform::SmoothedStep { amplitude: 1.0 }).unwrap()
}

/// Assert that two fields agree point by point within `tolerance`
pub fn assert_fields_close(actual: &[f64], expected: &[f64], tolerance: f64, message: &str) {
    assert_eq!(actual.len(), expected.len(), "{}: Dimension mismatch", message);

    for (i, (&a, &e)) in actual.iter().zip(expected).enumerate() {
        let diff = (a - e).abs();
        assert!(
            diff <= tolerance,
            "{}: Element {} differs by {} (tolerance {})",
            message, i, diff, tolerance
        );
    }
}

/// A run has diverged when it produced NaN/Inf or more than doubled its peak
pub fn has_diverged(initial: &[f64], final_field: &[f64]) -> bool {
    let growth = amplification(initial, final_field);
    !growth.is_finite() || growth > 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_diverged() {
        assert!(!has_diverged(&[1.0, -1.0], &[0.9, -1.1]));
        assert!(has_diverged(&[1.0, -1.0], &[0.0, 3.0]));
        assert!(has_diverged(&[1.0, -1.0], &[f64::NAN, 0.0]));
    }
}

//! Error types
//!
//! Every error here is a validation failure raised before any time step runs.
//! Numerical divergence (NaN/Inf appearing mid-integration) is **not** an
//! error: it is a legitimate output of an unstable scheme and is reported
//! through [`SimulationResult`](crate::solver::SimulationResult) instead.

use thiserror::Error;

/// Failure raised while validating a grid, a field or a configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AdvectionError {
    /// Fewer than three grid points: centred neighbours are meaningless.
    #[error("Invalid grid size: {points} point(s), at least 3 are required")]
    InvalidGridSize { points: usize },

    /// A numerical parameter is out of its admissible range.
    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Two arrays that must describe the same grid have different lengths.
    #[error("Dimension mismatch: expected {expected} values, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
}

impl AdvectionError {
    pub(crate) fn parameter(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter { name, value, reason }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, AdvectionError>;

/// Require `value` to be finite and strictly positive.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(AdvectionError::parameter(name, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(AdvectionError::parameter(name, value, "must be strictly positive"));
    }
    Ok(())
}

/// Require a field/grid to hold at least three points.
pub(crate) fn ensure_grid_size(points: usize) -> Result<()> {
    if points < 3 {
        return Err(AdvectionError::InvalidGridSize { points });
    }
    Ok(())
}

/// Require two lengths to agree.
pub(crate) fn ensure_same_len(expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(AdvectionError::DimensionMismatch { expected, found });
    }
    Ok(())
}

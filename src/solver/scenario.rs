//! Simulation scenario definition
//!
//! A scenario combines a grid with the field the integration starts from.
use nalgebra::DVector;

use crate::error::Result;
use crate::physics::{PeriodicGrid, Waveform};

/// Simulation scenario
///
/// This is the "WHAT to solve" (not "HOW to solve"): the same scenario can
/// be handed to any [`Solver`](crate::solver::Solver) with any
/// [`SolverConfiguration`](crate::solver::SolverConfiguration).
///
/// The initial field is copied in and never mutated by a solve.
///
/// # Examples
///
/// ```rust
/// use advect_rs::physics::{PeriodicGrid, Waveform};
/// use advect_rs::solver::Scenario;
///
/// let grid = PeriodicGrid::from_extent(100.0, 1.0)?;
/// let scenario = Scenario::from_waveform(grid, &Waveform::periodic_sinusoid(&grid))?;
/// assert_eq!(scenario.points(), 101);
/// # Ok::<(), advect_rs::AdvectionError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    grid: PeriodicGrid,
    initial: DVector<f64>,
    label: String,
}

impl Scenario {
    /// Create a scenario from an explicit initial field
    pub fn new(grid: PeriodicGrid, initial: &[f64]) -> Result<Self> {
        grid.check_field(initial)?;
        Ok(Self {
            grid,
            initial: DVector::from_column_slice(initial),
            label: "custom".to_string(),
        })
    }

    /// Create a scenario by sampling a waveform on the grid
    pub fn from_waveform(grid: PeriodicGrid, waveform: &Waveform) -> Result<Self> {
        let initial = waveform.evaluate(&grid)?;
        Ok(Self {
            grid,
            initial,
            label: waveform.name().to_string(),
        })
    }

    /// Replace the descriptive label
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    pub fn grid(&self) -> &PeriodicGrid {
        &self.grid
    }

    pub fn initial(&self) -> &DVector<f64> {
        &self.initial
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn points(&self) -> usize {
        self.grid.points()
    }
}

// ================================================================================================
// Tests
// ================================================================================================

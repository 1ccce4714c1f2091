//! Solver trait, configuration and result types
//!
//! # Design Philosophy
//!
//! - `Solver` trait: one implementation per advection scheme; only the
//!   single-step kernel differs between schemes
//! - `SolverConfiguration`: HOW to integrate (time step, velocity, duration)
//! - `AdvectionParameters`: the configuration resolved against a grid, the
//!   plain value object every pure function takes
//! - `SimulationResult`: final field, optional checkpoints, diagnostics

use std::collections::HashMap;

use nalgebra::DVector;
use ndarray::Array2;

use crate::error::{ensure_positive, AdvectionError, Result};
use crate::physics::PeriodicGrid;
use crate::solver::driver;
use crate::solver::scenario::Scenario;

// =================================================================================================
// Solver trait
// =================================================================================================

/// Advection scheme on a periodic grid
///
/// Implementors provide [`Solver::step`]; time integration is shared.
///
/// # Contract for `step`
///
/// - `current` and `next` have the same length, at least 3
/// - every `next[i]` is written, `current` is only read
/// - no allocation
/// - NaN/Inf in `current` propagate to `next`; they are never repaired
pub trait Solver {
    /// Human-readable scheme name
    fn name(&self) -> &str;

    /// Advance one time step at the given Courant number `uΔt/Δx`
    fn step(&self, current: &[f64], courant: f64, next: &mut [f64]) -> Result<()>;

    /// Advance one time step into a freshly allocated field
    fn advance(&self, current: &DVector<f64>, courant: f64) -> Result<DVector<f64>> {
        let mut next = DVector::zeros(current.len());
        self.step(current.as_slice(), courant, next.as_mut_slice())?;
        Ok(next)
    }

    /// Integrate a scenario over the configured duration
    fn solve(&self, scenario: &Scenario, config: &SolverConfiguration) -> Result<SimulationResult> {
        config.validate()?;
        let parameters = config.parameters(scenario.grid());
        driver::integrate(self, scenario.initial(), &parameters, config.checkpoint_interval)
    }
}

/// Shared argument checks for [`Solver::step`] implementations
pub(crate) fn check_step_arguments(current: &[f64], courant: f64, next: &[f64]) -> Result<()> {
    crate::error::ensure_grid_size(current.len())?;
    crate::error::ensure_same_len(current.len(), next.len())?;
    if !courant.is_finite() {
        return Err(AdvectionError::parameter("courant", courant, "must be finite"));
    }
    Ok(())
}

// =================================================================================================
// Solver configuration
// =================================================================================================

/// How to integrate: time step, velocity, duration and checkpointing
///
/// # Example
///
/// ```rust
/// use advect_rs::solver::SolverConfiguration;
///
/// let config = SolverConfiguration::new(0.05, 1.0, 400.0).with_checkpoints(1000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfiguration {
    /// Δt (seconds)
    pub time_step: f64,
    /// Constant advection velocity u (m/s), signed
    pub velocity: f64,
    /// Total simulation time T (seconds)
    pub total_time: f64,
    /// Record the field every `n` steps (plus the first and last step)
    pub checkpoint_interval: Option<usize>,
}

impl SolverConfiguration {
    /// Create a configuration without intermediate checkpoints
    pub fn new(time_step: f64, velocity: f64, total_time: f64) -> Self {
        Self {
            time_step,
            velocity,
            total_time,
            checkpoint_interval: None,
        }
    }

    /// Record the field every `every` steps
    pub fn with_checkpoints(mut self, every: usize) -> Self {
        self.checkpoint_interval = Some(every);
        self
    }

    /// Reject non-physical values before any step runs
    pub fn validate(&self) -> Result<()> {
        ensure_positive("time_step", self.time_step)?;
        if !self.velocity.is_finite() {
            return Err(AdvectionError::parameter("velocity", self.velocity, "must be finite"));
        }
        if !self.total_time.is_finite() || self.total_time < 0.0 {
            return Err(AdvectionError::parameter(
                "total_time",
                self.total_time,
                "must be finite and non-negative",
            ));
        }
        let ratio = self.total_time / self.time_step;
        if !ratio.is_finite() || ratio >= usize::MAX as f64 {
            return Err(AdvectionError::parameter(
                "time_step",
                self.time_step,
                "too small: step count exceeds usize",
            ));
        }
        if self.checkpoint_interval == Some(0) {
            return Err(AdvectionError::parameter(
                "checkpoint_interval",
                0.0,
                "must be at least 1",
            ));
        }
        Ok(())
    }

    /// Resolve against a grid
    pub fn parameters(&self, grid: &PeriodicGrid) -> AdvectionParameters {
        AdvectionParameters {
            spacing: grid.spacing(),
            time_step: self.time_step,
            velocity: self.velocity,
            total_time: self.total_time,
        }
    }
}

// =================================================================================================
// Advection parameters
// =================================================================================================

/// Grid spacing, time step, velocity and duration in one value object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdvectionParameters {
    /// Δx
    pub spacing: f64,
    /// Δt
    pub time_step: f64,
    /// u
    pub velocity: f64,
    /// T
    pub total_time: f64,
}

impl AdvectionParameters {
    pub fn new(spacing: f64, time_step: f64, velocity: f64, total_time: f64) -> Self {
        Self { spacing, time_step, velocity, total_time }
    }

    pub fn validate(&self) -> Result<()> {
        ensure_positive("spacing", self.spacing)?;
        SolverConfiguration::new(self.time_step, self.velocity, self.total_time).validate()
    }

    /// C = uΔt/Δx
    pub fn courant_number(&self) -> f64 {
        self.velocity * self.time_step / self.spacing
    }

    /// ⌈T/Δt⌉
    ///
    /// A quotient within 1e-9 (relative) of an integer counts as that
    /// integer: `400.0 / 0.1` evaluates slightly off 4000 and must not
    /// become 4001 steps.
    pub fn time_steps(&self) -> usize {
        let ratio = self.total_time / self.time_step;
        let nearest = ratio.round();
        if (ratio - nearest).abs() <= 1e-9 * nearest.max(1.0) {
            nearest as usize
        } else {
            ratio.ceil() as usize
        }
    }

    /// Time actually integrated, `time_steps · Δt` (≥ T)
    pub fn elapsed_time(&self) -> f64 {
        self.time_steps() as f64 * self.time_step
    }

    /// Distance travelled by a rigid feature, `u · elapsed_time`
    pub fn displacement(&self) -> f64 {
        self.velocity * self.elapsed_time()
    }
}

// =================================================================================================
// Simulation result
// =================================================================================================

/// Field recorded at a given step
#[derive(Debug, Clone, PartialEq)]
pub struct Checkpoint {
    pub step: usize,
    pub time: f64,
    pub field: DVector<f64>,
}

/// Outcome of an integration
///
/// A divergent run is still a successful run: inspect
/// [`first_non_finite_step`](Self::first_non_finite_step) or score the
/// final field against a reference.
#[derive(Debug, Clone)]
pub struct SimulationResult {
    /// Field after the last step
    pub final_field: DVector<f64>,

    /// Recorded fields, in step order (empty unless checkpointing is enabled)
    pub checkpoints: Vec<Checkpoint>,

    /// Number of steps applied
    pub time_steps: usize,

    /// `time_steps · Δt`
    pub elapsed_time: f64,

    /// uΔt/Δx used for every step
    pub courant_number: f64,

    /// First step whose field held NaN or Inf (0 = the initial field)
    pub first_non_finite_step: Option<usize>,

    metadata: HashMap<String, String>,
}

impl SimulationResult {
    pub fn new(
        final_field: DVector<f64>,
        checkpoints: Vec<Checkpoint>,
        time_steps: usize,
        elapsed_time: f64,
        courant_number: f64,
        first_non_finite_step: Option<usize>,
    ) -> Self {
        Self {
            final_field,
            checkpoints,
            time_steps,
            elapsed_time,
            courant_number,
            first_non_finite_step,
            metadata: HashMap::new(),
        }
    }

    /// True when the final field is free of NaN and Inf
    pub fn is_finite(&self) -> bool {
        self.final_field.iter().all(|x| x.is_finite())
    }

    /// True when NaN or Inf appeared at any step
    pub fn diverged(&self) -> bool {
        self.first_non_finite_step.is_some()
    }

    /// Checkpoints as a `(checkpoint, grid point)` matrix
    pub fn history(&self) -> Array2<f64> {
        let cols = self.final_field.len();
        Array2::from_shape_fn((self.checkpoints.len(), cols), |(row, col)| {
            self.checkpoints[row].field[col]
        })
    }

    /// Times matching the rows of [`history`](Self::history)
    pub fn checkpoint_times(&self) -> Vec<f64> {
        self.checkpoints.iter().map(|c| c.time).collect()
    }

    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    pub fn get_metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}

// =================================================================================================
// Tests
// =================================================================================================

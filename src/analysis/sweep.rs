//! Accuracy as a function of the time step
//!
//! Runs a scheme on the same scenario for several Δt over a fixed duration
//! and scores every run against the analytic reference.

use crate::analysis::metrics::{amplification, rmse};
use crate::analysis::reference::{reference_for, ReferenceShift};
use crate::error::Result;
use crate::solver::{Scenario, Solver, SolverConfiguration};

/// Score of one run in a time-step sweep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    pub time_step: f64,
    pub courant_number: f64,
    pub time_steps: usize,
    /// RMSE of the final field against the reference
    pub rmse: f64,
    /// `max|final| / max|initial|`
    pub amplification: f64,
    /// False once NaN or Inf appeared during the run
    pub finite: bool,
}

/// Run `solver` once per entry of `time_steps` and score each run
///
/// All runs share `velocity` and `total_time`. Every configuration is
/// validated before the first run starts.
///
/// # Example
///
/// ```rust
/// use advect_rs::analysis::{time_step_sweep, ReferenceShift};
/// use advect_rs::physics::{PeriodicGrid, Waveform};
/// use advect_rs::solver::{Scenario, SemiLagrangianSolver};
///
/// let grid = PeriodicGrid::from_extent(100.0, 1.0)?;
/// let scenario = Scenario::from_waveform(grid, &Waveform::periodic_sinusoid(&grid))?;
///
/// let sweep = time_step_sweep(
///     &SemiLagrangianSolver::new(), &scenario, 1.0, 100.0, &[0.5, 1.0], ReferenceShift::Nearest,
/// )?;
/// assert_eq!(sweep.len(), 2);
/// assert!(sweep.iter().all(|p| p.finite));
/// # Ok::<(), advect_rs::AdvectionError>(())
/// ```
pub fn time_step_sweep<S>(
    solver: &S,
    scenario: &Scenario,
    velocity: f64,
    total_time: f64,
    time_steps: &[f64],
    mode: ReferenceShift,
) -> Result<Vec<SweepPoint>>
where
    S: Solver + ?Sized,
{
    let configs: Vec<SolverConfiguration> = time_steps
        .iter()
        .map(|&dt| SolverConfiguration::new(dt, velocity, total_time))
        .collect();
    for config in &configs {
        config.validate()?;
    }

    let initial = scenario.initial().as_slice();

    configs
        .iter()
        .map(|config| {
            let params = config.parameters(scenario.grid());
            let result = solver.solve(scenario, config)?;
            let reference = reference_for(scenario, &params, mode)?;
            let final_field = result.final_field.as_slice();

            Ok(SweepPoint {
                time_step: config.time_step,
                courant_number: result.courant_number,
                time_steps: result.time_steps,
                rmse: rmse(final_field, reference.as_slice())?,
                amplification: amplification(initial, final_field),
                finite: !result.diverged(),
            })
        })
        .collect()
}

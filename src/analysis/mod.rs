//! Scoring numerical runs
//!
//! - [`analytic_reference`]: rigid translation of the initial field, the
//!   oracle every scheme is compared with
//! - [`rmse`]: root-mean-square error between two fields
//! - [`time_step_sweep`]: accuracy of a scheme as Δt grows
//!
//! # Example
//!
//! ```rust
//! use advect_rs::analysis::{reference_for, rmse, ReferenceShift};
//! use advect_rs::physics::{PeriodicGrid, Waveform};
//! use advect_rs::solver::{ExplicitCenteredSolver, Scenario, Solver, SolverConfiguration};
//!
//! let grid = PeriodicGrid::from_extent(100.0, 1.0)?;
//! let scenario = Scenario::from_waveform(grid, &Waveform::periodic_sinusoid(&grid))?;
//! let config = SolverConfiguration::new(0.05, 1.0, 400.0);
//!
//! let result = ExplicitCenteredSolver::new().solve(&scenario, &config)?;
//! let reference = reference_for(&scenario, &config.parameters(&grid), ReferenceShift::Nearest)?;
//!
//! let error = rmse(result.final_field.as_slice(), reference.as_slice())?;
//! assert!(error < 0.1);
//! # Ok::<(), advect_rs::AdvectionError>(())
//! ```

pub mod metrics;
pub mod reference;
pub mod sweep;

pub use metrics::{amplification, max_abs, rmse};
pub use reference::{analytic_reference, is_integer_shift, reference_for, ReferenceShift};
pub use sweep::{time_step_sweep, SweepPoint};

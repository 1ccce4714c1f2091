//! Numerical solvers
//!
//! This module provides the advection schemes and the driver that steps
//! them through time.
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! 1. **Scenario** (`Scenario`) - WHAT to solve
//!    - Periodic grid
//!    - Initial field
//!
//! 2. **Configuration** (`SolverConfiguration`) - HOW to solve
//!    - Time step, velocity, total time
//!    - Checkpoint interval
//!
//! 3. **Solver** (`Solver` trait) - The numerical method
//!    - One step of a scheme
//!    - Time integration shared through [`integrate`]
//!
//! # Module Organization
//!
//! - **`traits`**: `Solver`, `SolverConfiguration`, `AdvectionParameters`,
//!   `SimulationResult`
//! - **`scenario`**: `Scenario`
//! - **`driver`**: the time-stepping loop
//! - **`methods`**: `ExplicitCenteredSolver`, `SemiLagrangianSolver`
//!
//! # Quick Start Example
//!
//! ```rust
//! use advect_rs::physics::{PeriodicGrid, Waveform};
//! use advect_rs::solver::{ExplicitCenteredSolver, Scenario, Solver, SolverConfiguration};
//!
//! let grid = PeriodicGrid::from_extent(100.0, 1.0)?;
//! let scenario = Scenario::from_waveform(grid, &Waveform::periodic_sinusoid(&grid))?;
//!
//! let config = SolverConfiguration::new(0.05, 1.0, 50.0);
//! let result = ExplicitCenteredSolver::new().solve(&scenario, &config)?;
//!
//! assert_eq!(result.time_steps, 1000);
//! assert!(result.is_finite());
//! # Ok::<(), advect_rs::AdvectionError>(())
//! ```
//!
//! # Error Handling
//!
//! Validation errors ([`AdvectionError`](crate::AdvectionError)) are raised
//! before the first step. A run that goes unstable still returns `Ok`:
//!
//! ```rust
//! # use advect_rs::physics::{PeriodicGrid, Waveform};
//! # use advect_rs::solver::{ExplicitCenteredSolver, Scenario, Solver, SolverConfiguration};
//! # let grid = PeriodicGrid::from_extent(100.0, 1.0)?;
//! # let scenario = Scenario::from_waveform(grid, &Waveform::periodic_sinusoid(&grid))?;
//! let config = SolverConfiguration::new(5.55, 1.0, 4000.0);
//! let result = ExplicitCenteredSolver::new().solve(&scenario, &config)?;
//! assert!(result.diverged());
//! # Ok::<(), advect_rs::AdvectionError>(())
//! ```

// =================================================================================================
// Module Declarations
// =================================================================================================
mod traits;
mod scenario;
pub mod driver;
pub mod methods;

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================
//
// The threshold is stored in an AtomicUsize so that it can be changed at
// runtime (benchmarks, tests) without a mutex on every step. Relaxed
// ordering is sufficient: the value is a performance hint, not a
// synchronisation point.
// =================================================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default number of grid points above which a step switches to parallel
/// iteration.
///
/// Below roughly a thousand points the cost of Rayon's dispatch outweighs
/// the two or three flops each point needs.
const DEFAULT_PARALLEL_THRESHOLD: usize = 999;

/// Runtime-configurable parallel-execution threshold.
static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Return the current parallel-execution threshold.
///
/// A step iterates sequentially over grids with at most this many points
/// and switches to Rayon above it, but only when the crate is compiled
/// with the `parallel` feature.
///
/// # Example
///
/// ```rust
/// use advect_rs::solver::parallel_threshold;
///
/// assert!(parallel_threshold() > 0);
/// ```
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel-execution threshold to a new value.
///
/// # Panics
///
/// Panics when `threshold == 0`.
///
/// # Example
///
/// ```rust
/// use advect_rs::solver::{parallel_threshold, set_parallel_threshold};
///
/// let previous = parallel_threshold();
/// set_parallel_threshold(2048);
/// assert_eq!(parallel_threshold(), 2048);
///
/// // Restore so other tests are not affected.
/// set_parallel_threshold(previous);
/// ```
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

/// Serialises tests that move the global threshold.
#[cfg(test)]
static THRESHOLD_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// RAII guard that sets the threshold and restores the previous value on drop.
///
/// Holds [`THRESHOLD_LOCK`] for its lifetime, so two guards never overlap.
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[cfg(test)]
impl ThresholdGuard {
    pub(crate) fn save(new_value: usize) -> Self {
        let lock = THRESHOLD_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let previous = parallel_threshold();
        set_parallel_threshold(new_value);
        Self { previous, _lock: lock }
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use traits::{
    AdvectionParameters,
    Checkpoint,
    SimulationResult,
    Solver,
    SolverConfiguration,
};

pub use scenario::Scenario;
pub use driver::integrate;

pub use methods::{ExplicitCenteredSolver, SemiLagrangianSolver};

// =================================================================================================
// Tests
// =================================================================================================

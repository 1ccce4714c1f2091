//! advect-rs: Periodic 1-D Advection
//!
//! Advances a scalar field on a periodic grid under constant-velocity
//! advection, `∂q/∂t + u ∂q/∂x = 0`, and scores the result against the
//! exact rigid translation of the initial field.
//!
//! # Architecture
//!
//! 1. **Separation of Physics and Numerics**
//!    - [`physics`]: the grid and the initial field (what is advected)
//!    - [`solver`]: the schemes and the time-stepping driver (how)
//!    - [`analysis`]: the reference solution and error metrics (how well)
//!
//! 2. **Two schemes, one contract**
//!    - [`ExplicitCenteredSolver`](solver::ExplicitCenteredSolver): forward
//!      in time, centred in space; unconditionally unstable, usable at small
//!      Courant numbers
//!    - [`SemiLagrangianSolver`](solver::SemiLagrangianSolver): linear
//!      interpolation at the departure point; unconditionally stable
//!
//! # Quick Start
//!
//! ```rust
//! use advect_rs::prelude::*;
//!
//! // 1. Grid 0, 1, …, 100 (periodic) and one sine wave across it
//! let grid = PeriodicGrid::from_extent(100.0, 1.0)?;
//! let scenario = Scenario::from_waveform(grid, &Waveform::periodic_sinusoid(&grid))?;
//!
//! // 2. u = 1 m/s, Δt = 0.05 s, T = 400 s
//! let config = SolverConfiguration::new(0.05, 1.0, 400.0);
//!
//! // 3. Run both schemes
//! let explicit = ExplicitCenteredSolver::new().solve(&scenario, &config)?;
//! let semi = SemiLagrangianSolver::new().solve(&scenario, &config)?;
//!
//! // 4. Score against the exact translation
//! let reference = reference_for(&scenario, &config.parameters(&grid), ReferenceShift::Nearest)?;
//! println!("FTCS RMSE: {}", rmse(explicit.final_field.as_slice(), reference.as_slice())?);
//! println!("SL   RMSE: {}", rmse(semi.final_field.as_slice(), reference.as_slice())?);
//! # Ok::<(), advect_rs::AdvectionError>(())
//! ```
//!
//! # Features
//!
//! - `parallel`: per-point updates with Rayon on large grids

pub mod analysis;
pub mod error;
pub mod physics;
pub mod solver;

pub use error::{AdvectionError, Result};

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use advect_rs::prelude::*;
    //! ```
    pub use crate::analysis::{analytic_reference, reference_for, rmse, ReferenceShift};
    pub use crate::error::{AdvectionError, Result};
    pub use crate::physics::{PeriodicGrid, Waveform};
    pub use crate::solver::{
        AdvectionParameters,
        ExplicitCenteredSolver,
        Scenario,
        SemiLagrangianSolver,
        SimulationResult,
        Solver,
        SolverConfiguration,
    };
}

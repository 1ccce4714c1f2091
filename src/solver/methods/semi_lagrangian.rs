//! Semi-Lagrangian advection with linear interpolation
//!
//! # Mathematical Background
//!
//! The advected quantity is conserved along trajectories, `Dq/Dt = 0`. The
//! value arriving at node `xᵢ` after one step is therefore the value at the
//! departure point
//!
//! ```text
//! x_d = xᵢ − uΔt
//! ```
//!
//! which generally falls between two nodes. With `x_left` the node just
//! below `x_d` and `frac = (x_d − x_left)/Δx ∈ [0, 1)`:
//!
//! ```text
//! q'ᵢ = (1 − frac)·q(x_left) + frac·q(x_left + Δx)
//! ```
//!
//! # Stability
//!
//! Each new value is a convex combination of two old values, so
//! `max|q'| ≤ max|q|` for any Courant number: the scheme is unconditionally
//! stable. The price is numerical diffusion from the interpolation, which
//! damps short waves, most strongly when `frac` is near one half.
//!
//! # Characteristics
//!
//! - **Courant number**: unrestricted, including |C| > 1
//! - **Cost**: one multiply-add pair per point
//! - **Exact cases**: whole-cell displacements (`frac = 0`), including u = 0

use crate::error::Result;
use crate::physics::grid::DepartureWeights;
use crate::solver::methods::fill_points;
use crate::solver::traits::{check_step_arguments, Solver};

/// Semi-Lagrangian advection scheme
///
/// # Example
///
/// ```rust
/// use advect_rs::solver::{SemiLagrangianSolver, Solver};
///
/// // Courant number 2.5: features move two and a half cells per step
/// let solver = SemiLagrangianSolver::new();
/// let mut next = [0.0; 6];
/// solver.step(&[0.0, 0.0, 4.0, 0.0, 0.0, 0.0], 2.5, &mut next)?;
/// assert_eq!(next, [0.0, 0.0, 0.0, 0.0, 2.0, 2.0]);
/// # Ok::<(), advect_rs::AdvectionError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SemiLagrangianSolver;

impl SemiLagrangianSolver {
    /// Create a new semi-Lagrangian solver
    pub fn new() -> Self {
        Self
    }
}

impl Solver for SemiLagrangianSolver {
    fn name(&self) -> &str {
        "Semi-Lagrangian (linear)"
    }

    fn step(&self, current: &[f64], courant: f64, next: &mut [f64]) -> Result<()> {
        check_step_arguments(current, courant, next)?;

        // Same departure cell offset for every node
        let weights = DepartureWeights::new(courant, current.len());
        fill_points(next, |i| weights.sample(current, i));

        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================

//! Forward-in-time, centred-in-space (FTCS) advection
//!
//! # Mathematical Background
//!
//! For the linear advection equation
//!
//! ```text
//! ∂q/∂t + u ∂q/∂x = 0
//! ```
//!
//! a forward difference in time and a centred difference in space give
//!
//! ```text
//! (q'ᵢ − qᵢ)/Δt + u (qᵢ₊₁ − qᵢ₋₁)/(2Δx) = 0
//! q'ᵢ = qᵢ − (C/2)(qᵢ₊₁ − qᵢ₋₁),     C = uΔt/Δx
//! ```
//!
//! # Stability
//!
//! Von Neumann analysis of a mode `e^{ikx}` gives the amplification factor
//!
//! ```text
//! |g|² = 1 + C² sin²(kΔx) ≥ 1
//! ```
//!
//! so every mode grows: the scheme is **unconditionally unstable**. For small
//! C and short runs the growth is slow enough to be tolerable; once C
//! approaches or exceeds 1 the shortest waves (seeded by round-off) blow up
//! within a few hundred steps. This weakness is kept as is. It is the point
//! of comparing the scheme with [`SemiLagrangianSolver`](super::SemiLagrangianSolver).
//!
//! # Characteristics
//!
//! - **Order**: first order in time, second order in space
//! - **Cost**: one subtraction and one multiply-add per point
//! - **Stencil**: `i − 1, i, i + 1`, periodic

use crate::error::Result;
use crate::physics::periodic_index;
use crate::solver::methods::fill_points;
use crate::solver::traits::{check_step_arguments, Solver};

// =================================================================================================
// Explicit centred solver
// =================================================================================================

/// Explicit FTCS advection scheme
///
/// # Example
///
/// ```rust
/// use advect_rs::solver::{ExplicitCenteredSolver, Solver};
///
/// let solver = ExplicitCenteredSolver::new();
/// let mut next = [0.0; 4];
/// solver.step(&[0.0, 1.0, 0.0, 0.0], 0.5, &mut next)?;
/// assert_eq!(next, [-0.25, 1.0, 0.25, 0.0]);
/// # Ok::<(), advect_rs::AdvectionError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplicitCenteredSolver;

impl ExplicitCenteredSolver {
    /// Create a new FTCS solver
    pub fn new() -> Self {
        Self
    }
}

impl Solver for ExplicitCenteredSolver {
    fn name(&self) -> &str {
        "Explicit Centred (FTCS)"
    }

    fn step(&self, current: &[f64], courant: f64, next: &mut [f64]) -> Result<()> {
        check_step_arguments(current, courant, next)?;

        let half_courant = 0.5 * courant;
        let n = current.len();

        fill_points(next, |i| {
            let right = current[periodic_index(i as i64 + 1, n)];
            let left = current[periodic_index(i as i64 - 1, n)];
            current[i] - half_courant * (right - left)
        });

        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================

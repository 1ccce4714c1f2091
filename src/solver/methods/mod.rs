//! Advection schemes
//!
//! Concrete implementations of the [`Solver`](crate::solver::Solver) trait.
//! Each one only supplies the single-step kernel; time integration lives in
//! [`driver`](crate::solver::driver).
//!
//! # Available Methods
//!
//! - **[`ExplicitCenteredSolver`]**: forward in time, centred in space
//!   - Unconditionally unstable (von Neumann), tolerable for small C
//!   - Cost: 3-point stencil per node
//!   - Use: baseline for small Courant numbers
//!
//! - **[`SemiLagrangianSolver`]**: linear interpolation at the departure point
//!   - Unconditionally stable, diffusive
//!   - Cost: 2-point interpolation per node
//!   - Use: long steps, Courant numbers above 1
//!
//! # Performance Considerations
//!
//! Per-point updates within a step are independent. With the `parallel`
//! feature, grids larger than [`parallel_threshold()`](crate::solver::parallel_threshold)
//! are updated with Rayon.

pub mod explicit_centered;
pub mod semi_lagrangian;

pub use explicit_centered::ExplicitCenteredSolver;
pub use semi_lagrangian::SemiLagrangianSolver;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Write `f(i)` into every `next[i]`
#[cfg(feature = "parallel")]
pub(crate) fn fill_points<F>(next: &mut [f64], f: F)
where
    F: Fn(usize) -> f64 + Sync + Send,
{
    if next.len() > crate::solver::parallel_threshold() {
        next.par_iter_mut().enumerate().for_each(|(i, x)| *x = f(i));
    } else {
        next.iter_mut().enumerate().for_each(|(i, x)| *x = f(i));
    }
}

/// Write `f(i)` into every `next[i]`
#[cfg(not(feature = "parallel"))]
pub(crate) fn fill_points<F>(next: &mut [f64], f: F)
where
    F: Fn(usize) -> f64,
{
    next.iter_mut().enumerate().for_each(|(i, x)| *x = f(i));
}

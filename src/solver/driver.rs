//! Time-stepping driver
//!
//! Applies a scheme's single step `⌈T/Δt⌉` times.
//!
//! # Algorithm
//!
//! 1. Validate parameters, field size and checkpoint interval (fail fast)
//! 2. Copy the initial field into the `current` buffer
//! 3. For each step: `step(current → next)`, then swap the two buffers
//! 4. Record checkpoints and the first non-finite step along the way
//!
//! Only two buffers exist during the run. Step `k + 1` reads the field
//! committed by step `k` in full, so steps are strictly sequential even
//! when the per-point update runs in parallel.
//!
//! The loop never stops on NaN/Inf: a divergent field is the expected
//! output of an unstable scheme and the caller measures it.

use log::{debug, warn};
use nalgebra::DVector;

use crate::error::{ensure_grid_size, AdvectionError, Result};
use crate::solver::traits::{AdvectionParameters, Checkpoint, SimulationResult, Solver};

/// Integrate `initial` with `solver`
///
/// `initial` is borrowed and left untouched.
///
/// # Example
///
/// ```rust
/// use advect_rs::solver::{integrate, AdvectionParameters, SemiLagrangianSolver};
/// use nalgebra::DVector;
///
/// let initial = DVector::from_vec(vec![0.0, 1.0, 0.0, 0.0]);
/// let params = AdvectionParameters::new(1.0, 1.0, 1.0, 2.0);
///
/// let result = integrate(&SemiLagrangianSolver::new(), &initial, &params, None)?;
/// assert_eq!(result.final_field.as_slice(), &[0.0, 0.0, 0.0, 1.0]);
/// # Ok::<(), advect_rs::AdvectionError>(())
/// ```
pub fn integrate<S>(
    solver: &S,
    initial: &DVector<f64>,
    params: &AdvectionParameters,
    checkpoint_interval: Option<usize>,
) -> Result<SimulationResult>
where
    S: Solver + ?Sized,
{
    // ====== Validation ======

    params.validate()?;
    ensure_grid_size(initial.len())?;
    if checkpoint_interval == Some(0) {
        return Err(AdvectionError::parameter(
            "checkpoint_interval",
            0.0,
            "must be at least 1",
        ));
    }

    // ====== Setup ======

    let time_steps = params.time_steps();
    let courant = params.courant_number();
    let dt = params.time_step;

    debug!(
        "{}: {} points, {} steps, dt = {}, courant = {}",
        solver.name(),
        initial.len(),
        time_steps,
        dt,
        courant
    );

    let mut current = initial.clone();
    let mut next = DVector::zeros(initial.len());

    let mut checkpoints = Vec::new();
    if checkpoint_interval.is_some() {
        checkpoints.push(Checkpoint { step: 0, time: 0.0, field: current.clone() });
    }

    let mut first_non_finite_step = if is_finite(&current) { None } else { Some(0) };

    // ====== Time Integration ======

    for step in 1..=time_steps {
        solver.step(current.as_slice(), courant, next.as_mut_slice())?;
        std::mem::swap(&mut current, &mut next);

        if first_non_finite_step.is_none() && !is_finite(&current) {
            warn!(
                "{}: field became non-finite at step {} (courant = {}); continuing",
                solver.name(),
                step,
                courant
            );
            first_non_finite_step = Some(step);
        }

        if let Some(every) = checkpoint_interval
            && (step % every == 0 || step == time_steps)
        {
            // t computed from the index, not accumulated
            checkpoints.push(Checkpoint {
                step,
                time: step as f64 * dt,
                field: current.clone(),
            });
        }
    }

    // ====== Result ======

    let mut result = SimulationResult::new(
        current,
        checkpoints,
        time_steps,
        params.elapsed_time(),
        courant,
        first_non_finite_step,
    );

    result.add_metadata("solver", solver.name());
    result.add_metadata("time steps", &time_steps.to_string());
    result.add_metadata("dt", &dt.to_string());
    result.add_metadata("dx", &params.spacing.to_string());
    result.add_metadata("velocity", &params.velocity.to_string());
    result.add_metadata("courant", &courant.to_string());

    Ok(result)
}

fn is_finite(field: &DVector<f64>) -> bool {
    field.iter().all(|x| x.is_finite())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{ExplicitCenteredSolver, SemiLagrangianSolver};

    /// Scheme that copies its input, to isolate driver behaviour
    struct Identity;

    impl Solver for Identity {
        fn name(&self) -> &str {
            "Identity"
        }

        fn step(&self, current: &[f64], _courant: f64, next: &mut [f64]) -> Result<()> {
            next.copy_from_slice(current);
            Ok(())
        }
    }

    /// Scheme that doubles every value, to force overflow
    struct Doubling;

    impl Solver for Doubling {
        fn name(&self) -> &str {
            "Doubling"
        }

        fn step(&self, current: &[f64], _courant: f64, next: &mut [f64]) -> Result<()> {
            for (n, c) in next.iter_mut().zip(current) {
                *n = 2.0 * c;
            }
            Ok(())
        }
    }

    fn params(dt: f64, total: f64) -> AdvectionParameters {
        AdvectionParameters::new(1.0, dt, 1.0, total)
    }

    #[test]
    fn test_step_count_and_elapsed_time() {
        let initial = DVector::from_element(5, 1.0);
        let result = integrate(&Identity, &initial, &params(0.3, 1.0), None).unwrap();

        assert_eq!(result.time_steps, 4);
        assert!((result.elapsed_time - 1.2).abs() < 1e-12);
        assert!(result.checkpoints.is_empty());
        assert_eq!(result.get_metadata("solver"), Some("Identity"));
    }

    #[test]
    fn test_checkpoints_include_first_and_last() {
        let initial = DVector::from_element(5, 1.0);
        let result = integrate(&Identity, &initial, &params(1.0, 7.0), Some(3)).unwrap();

        let steps: Vec<usize> = result.checkpoints.iter().map(|c| c.step).collect();
        assert_eq!(steps, vec![0, 3, 6, 7]);
        assert_eq!(result.checkpoint_times(), vec![0.0, 3.0, 6.0, 7.0]);
        assert_eq!(result.history().dim(), (4, 5));
    }

    #[test]
    fn test_zero_duration_returns_initial_field() {
        let initial = DVector::from_vec(vec![1.0, 2.0, 3.0]);
        let result =
            integrate(&ExplicitCenteredSolver::new(), &initial, &params(0.1, 0.0), Some(1)).unwrap();

        assert_eq!(result.time_steps, 0);
        assert_eq!(result.final_field, initial);
        assert_eq!(result.checkpoints.len(), 1);
    }

    #[test]
    fn test_divergence_is_recorded_not_raised() {
        let initial = DVector::from_element(3, 1.0);
        // 2^1100 overflows f64
        let result = integrate(&Doubling, &initial, &params(1.0, 1100.0), None).unwrap();

        assert_eq!(result.time_steps, 1100);
        assert_eq!(result.first_non_finite_step, Some(1024));
        assert!(result.diverged());
        assert!(!result.is_finite());
    }

    #[test]
    fn test_non_finite_initial_field_is_step_zero() {
        let initial = DVector::from_vec(vec![1.0, f64::NAN, 1.0]);
        let result = integrate(&Identity, &initial, &params(1.0, 2.0), None).unwrap();
        assert_eq!(result.first_non_finite_step, Some(0));
    }

    #[test]
    fn test_validation_happens_before_stepping() {
        let small = DVector::from_element(2, 1.0);
        assert_eq!(
            integrate(&Identity, &small, &params(1.0, 1.0), None).unwrap_err(),
            AdvectionError::InvalidGridSize { points: 2 }
        );

        let initial = DVector::from_element(4, 1.0);
        assert!(integrate(&Identity, &initial, &params(-1.0, 1.0), None).is_err());
        assert!(integrate(&Identity, &initial, &params(1.0, -1.0), None).is_err());
        assert!(integrate(&Identity, &initial, &AdvectionParameters::new(0.0, 1.0, 1.0, 1.0), None).is_err());
        assert!(integrate(&Identity, &initial, &params(1.0, 1.0), Some(0)).is_err());
    }

    #[test]
    fn test_initial_field_is_not_mutated() {
        let initial = DVector::from_vec(vec![0.0, 1.0, 0.0, -1.0]);
        let copy = initial.clone();
        let _ = integrate(&SemiLagrangianSolver::new(), &initial, &params(0.5, 10.0), None).unwrap();
        assert_eq!(initial, copy);
    }
}

//! Structural properties shared by both schemes
//!
//! Shape preservation, translation invariance, zero-velocity idempotence,
//! the exact-shift oracle and the RMSE identities.

use advect_rs::analysis::{analytic_reference, reference_for, rmse, ReferenceShift};
use advect_rs::physics::{rotate, PeriodicGrid};
use advect_rs::solver::{
    integrate, AdvectionParameters, ExplicitCenteredSolver, Scenario, SemiLagrangianSolver, Solver,
    SolverConfiguration,
};
use advect_rs::AdvectionError;
use nalgebra::DVector;
use proptest::prelude::*;

mod common;
use common::{assert_fields_close, sinusoid_scenario, smoothed_step_scenario};

fn solvers() -> Vec<Box<dyn Solver>> {
    vec![
        Box::new(ExplicitCenteredSolver::new()),
        Box::new(SemiLagrangianSolver::new()),
    ]
}

// =================================================================================================
// Deterministic properties
// =================================================================================================

#[test]
fn test_exact_shift_reference() {
    // 101 points over [0, 100], Δx = 1, u = 1, T = 50 → rotate by 50 cells
    let scenario = sinusoid_scenario();
    let config = SolverConfiguration::new(0.05, 1.0, 50.0);
    let params = config.parameters(scenario.grid());

    let reference = reference_for(&scenario, &params, ReferenceShift::Nearest).unwrap();
    let initial = scenario.initial();

    assert_eq!(reference.len(), 101);
    for i in 0..101 {
        assert_eq!(reference[i], initial[(i + 101 - 50) % 101], "node {}", i);
    }
}

#[test]
fn test_zero_velocity_leaves_field_unchanged() {
    for scenario in [sinusoid_scenario(), smoothed_step_scenario()] {
        let config = SolverConfiguration::new(0.5, 0.0, 500.0);
        for solver in solvers() {
            let result = solver.solve(&scenario, &config).unwrap();
            assert_eq!(result.time_steps, 1000);
            assert_eq!(&result.final_field, scenario.initial(), "{}", solver.name());
        }
    }
}

#[test]
fn test_shape_is_preserved_by_solve() {
    let scenario = smoothed_step_scenario();
    let config = SolverConfiguration::new(0.3, -1.0, 30.0).with_checkpoints(25);

    for solver in solvers() {
        let result = solver.solve(&scenario, &config).unwrap();
        assert_eq!(result.final_field.len(), scenario.points());
        for checkpoint in &result.checkpoints {
            assert_eq!(checkpoint.field.len(), scenario.points());
        }
        assert_eq!(result.history().ncols(), scenario.points());
    }
}

#[test]
fn test_negative_velocity_moves_the_other_way() {
    let scenario = sinusoid_scenario();
    let config = SolverConfiguration::new(1.0, -1.0, 10.0);

    let result = SemiLagrangianSolver::new().solve(&scenario, &config).unwrap();
    let expected = rotate(scenario.initial().as_slice(), -10);
    assert_eq!(result.final_field, expected);
}

#[test]
fn test_fractional_reference_tracks_semi_lagrangian_single_step() {
    // one step of the semi-Lagrangian scheme is a fractional rigid shift
    let scenario = smoothed_step_scenario();
    let config = SolverConfiguration::new(0.4, 1.0, 0.4);
    let params = config.parameters(scenario.grid());

    let result = SemiLagrangianSolver::new().solve(&scenario, &config).unwrap();
    let reference = reference_for(&scenario, &params, ReferenceShift::Fractional).unwrap();

    assert_fields_close(
        result.final_field.as_slice(),
        reference.as_slice(),
        1e-14,
        "single fractional step",
    );
}

#[test]
fn test_small_grids_are_rejected_for_both_schemes() {
    let params = AdvectionParameters::new(1.0, 0.1, 1.0, 1.0);
    for n in 0..3 {
        let initial = DVector::from_element(n, 1.0);
        for solver in solvers() {
            assert_eq!(
                integrate(solver.as_ref(), &initial, &params, None).unwrap_err(),
                AdvectionError::InvalidGridSize { points: n }
            );
        }
    }
}

#[test]
fn test_invalid_parameters_are_rejected() {
    let scenario = sinusoid_scenario();
    for config in [
        SolverConfiguration::new(0.0, 1.0, 10.0),
        SolverConfiguration::new(-0.1, 1.0, 10.0),
        SolverConfiguration::new(0.1, 1.0, -10.0),
    ] {
        for solver in solvers() {
            assert!(matches!(
                solver.solve(&scenario, &config),
                Err(AdvectionError::InvalidParameter { .. })
            ));
        }
    }
    assert!(PeriodicGrid::new(10, 0.0).is_err());
    assert!(Scenario::new(PeriodicGrid::new(10, 1.0).unwrap(), &[0.0; 9]).is_err());
}

#[test]
fn test_truncated_reference_differs_from_nearest_off_grid() {
    // 7.6 cells: rounding gives 8, truncation 7
    let initial: Vec<f64> = (0..13).map(|i| (i as f64).sin()).collect();
    let nearest = analytic_reference(&initial, 7.6, 1.0, ReferenceShift::Nearest).unwrap();
    let truncated = analytic_reference(&initial, 7.6, 1.0, ReferenceShift::Truncate).unwrap();

    assert_eq!(nearest, rotate(&initial, 8));
    assert_eq!(truncated, rotate(&initial, 7));
    assert!(rmse(nearest.as_slice(), truncated.as_slice()).unwrap() > 0.0);
}

// =================================================================================================
// Randomised properties
// =================================================================================================

fn field_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-10.0f64..10.0, 3..48)
}

fn run(solver: &dyn Solver, field: &[f64], courant: f64, steps: usize) -> DVector<f64> {
    let mut current = DVector::from_column_slice(field);
    for _ in 0..steps {
        current = solver.advance(&current, courant).unwrap();
    }
    current
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64, .. ProptestConfig::default()
    })]

    #[test]
    fn step_preserves_length(field in field_strategy(), courant in -3.0f64..3.0) {
        for solver in solvers() {
            let next = solver.advance(&DVector::from_column_slice(&field), courant).unwrap();
            prop_assert_eq!(next.len(), field.len());
        }
    }

    #[test]
    fn schemes_commute_with_rotation(
        field in field_strategy(),
        shift in -60i64..60,
        courant in -2.5f64..2.5,
        steps in 1usize..12,
    ) {
        let shifted = rotate(&field, shift);

        for solver in solvers() {
            let shift_then_run = run(solver.as_ref(), shifted.as_slice(), courant, steps);
            let run_then_shift = rotate(run(solver.as_ref(), &field, courant, steps).as_slice(), shift);
            prop_assert_eq!(shift_then_run, run_then_shift, "{}", solver.name());
        }
    }

    #[test]
    fn zero_courant_is_identity(field in field_strategy(), steps in 1usize..30) {
        for solver in solvers() {
            let out = run(solver.as_ref(), &field, 0.0, steps);
            prop_assert_eq!(out.as_slice(), field.as_slice());
        }
    }

    #[test]
    fn semi_lagrangian_is_bounded(field in field_strategy(), courant in -8.0f64..8.0, steps in 1usize..40) {
        let peak = field.iter().fold(0.0f64, |m, x| m.max(x.abs()));
        let out = run(&SemiLagrangianSolver::new(), &field, courant, steps);
        prop_assert!(out.iter().all(|x| x.abs() <= peak * (1.0 + 1e-12) + 1e-300));
    }

    #[test]
    fn rmse_identities(a in field_strategy(), noise in prop::collection::vec(-1.0f64..1.0, 48)) {
        let b: Vec<f64> = a.iter().zip(&noise).map(|(x, n)| x + n).collect();

        prop_assert_eq!(rmse(&a, &a).unwrap(), 0.0);
        prop_assert_eq!(rmse(&a, &b).unwrap(), rmse(&b, &a).unwrap());
        prop_assert!(rmse(&a, &b).unwrap() >= 0.0);
    }
}

//! Analytic reference solution
//!
//! Constant-velocity advection translates the initial field rigidly by
//! `uT`. On the grid that is an index rotation by `uT/Δx` cells, exact only
//! when `uT/Δx` is a whole number. [`ReferenceShift`] decides what happens
//! otherwise.

use log::debug;
use nalgebra::DVector;

use crate::error::{ensure_grid_size, ensure_positive, AdvectionError, Result};
use crate::physics::{rotate, shift_fractional};
use crate::solver::{AdvectionParameters, Scenario};

/// How a non-integer cell displacement is turned into a reference field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferenceShift {
    /// Rotate by `round(uT/Δx)` cells
    #[default]
    Nearest,

    /// Rotate by `uT/Δx` truncated toward zero
    Truncate,

    /// Interpolate linearly between the two bracketing whole-cell rotations
    Fractional,
}

/// Rigidly translate `initial` by `displacement` (same units as `spacing`)
///
/// # Example
///
/// ```rust
/// use advect_rs::analysis::{analytic_reference, ReferenceShift};
///
/// let initial = [0.0, 1.0, 2.0, 3.0];
/// let moved = analytic_reference(&initial, 2.0, 1.0, ReferenceShift::Nearest)?;
/// assert_eq!(moved.as_slice(), &[2.0, 3.0, 0.0, 1.0]);
/// # Ok::<(), advect_rs::AdvectionError>(())
/// ```
pub fn analytic_reference(
    initial: &[f64],
    displacement: f64,
    spacing: f64,
    mode: ReferenceShift,
) -> Result<DVector<f64>> {
    ensure_grid_size(initial.len())?;
    ensure_positive("spacing", spacing)?;
    if !displacement.is_finite() {
        return Err(AdvectionError::parameter("displacement", displacement, "must be finite"));
    }

    let cells = displacement / spacing;

    let reference = match mode {
        ReferenceShift::Nearest => {
            let whole = cells.round();
            log_discarded_fraction(cells, whole);
            rotate(initial, reduce(whole, initial.len()))
        }
        ReferenceShift::Truncate => {
            let whole = cells.trunc();
            log_discarded_fraction(cells, whole);
            rotate(initial, reduce(whole, initial.len()))
        }
        ReferenceShift::Fractional => shift_fractional(initial, cells),
    };

    Ok(reference)
}

/// Reference for a scenario integrated with `params`
///
/// Uses the time actually integrated (`⌈T/Δt⌉·Δt`), which is what the
/// schemes see.
pub fn reference_for(
    scenario: &Scenario,
    params: &AdvectionParameters,
    mode: ReferenceShift,
) -> Result<DVector<f64>> {
    params.validate()?;
    analytic_reference(
        scenario.initial().as_slice(),
        params.displacement(),
        params.spacing,
        mode,
    )
}

/// True when `displacement/spacing` is within `tolerance` of a whole number
///
/// Only then do [`ReferenceShift::Nearest`] and [`ReferenceShift::Truncate`]
/// give the exact solution.
pub fn is_integer_shift(displacement: f64, spacing: f64, tolerance: f64) -> bool {
    let cells = displacement / spacing;
    cells.is_finite() && (cells - cells.round()).abs() <= tolerance
}

/// Whole number of cells reduced to one period, as an index shift
fn reduce(whole: f64, len: usize) -> i64 {
    whole.rem_euclid(len as f64) as i64
}

fn log_discarded_fraction(cells: f64, whole: f64) {
    let discarded = cells - whole;
    if discarded.abs() > 1e-9 {
        debug!(
            "reference shift of {cells} cells applied as {whole}; \
             discarding {discarded} cell(s), the reference is approximate"
        );
    }
}

//! Error metrics between a computed and a reference field

use crate::error::{ensure_same_len, AdvectionError, Result};

/// Root-mean-square error `sqrt(mean((a − b)²))`
///
/// Symmetric in its arguments and zero for identical fields. NaN or Inf in
/// either field propagate to the result, which is how a divergent run shows
/// up in a comparison.
///
/// # Example
///
/// ```rust
/// use advect_rs::analysis::rmse;
///
/// let err = rmse(&[1.0, 2.0, 3.0, 4.0], &[1.0, 2.0, 3.0, 6.0])?;
/// assert_eq!(err, 1.0);
/// # Ok::<(), advect_rs::AdvectionError>(())
/// ```
pub fn rmse(computed: &[f64], reference: &[f64]) -> Result<f64> {
    ensure_same_len(reference.len(), computed.len())?;
    if computed.is_empty() {
        return Err(AdvectionError::InvalidGridSize { points: 0 });
    }

    let sum_squared: f64 = computed
        .iter()
        .zip(reference)
        .map(|(a, b)| (a - b).powi(2))
        .sum();

    Ok((sum_squared / computed.len() as f64).sqrt())
}

/// Largest absolute value, NaN if any entry is NaN
pub fn max_abs(field: &[f64]) -> f64 {
    field.iter().fold(0.0_f64, |acc, &x| {
        if x.is_nan() || acc.is_nan() {
            f64::NAN
        } else {
            acc.max(x.abs())
        }
    })
}

/// Growth of the peak amplitude, `max|final| / max|initial|`
///
/// Above 1 the field has been amplified; a bounded scheme stays at or
/// below 1 up to rounding.
pub fn amplification(initial: &[f64], final_field: &[f64]) -> f64 {
    max_abs(final_field) / max_abs(initial)
}

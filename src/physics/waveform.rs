//! Initial-condition profiles
//!
//! A [`Waveform`] turns a [`PeriodicGrid`] into the field the integration
//! starts from. It is consumed once, before the first step.

use std::f64::consts::PI;

use nalgebra::DVector;

use crate::error::{ensure_positive, AdvectionError, Result};
use crate::physics::grid::{periodic_index, PeriodicGrid};

/// Shape of the initial scalar field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Waveform {
    /// `amplitude · sin(2π x / wavelength)`
    ///
    /// Exactly periodic on the grid only when `wavelength` divides the
    /// grid period; see [`Waveform::periodic_sinusoid`].
    Sinusoid { wavelength: f64, amplitude: f64 },

    /// Square step from `−amplitude` to `+amplitude` at mid-domain,
    /// softened by one periodic three-point running mean.
    ///
    /// The discontinuity excites every wavenumber, which makes it a harsh
    /// test of dispersion in the explicit scheme.
    SmoothedStep { amplitude: f64 },

    /// `amplitude · exp(−(d/width)²)` where `d` is the periodic distance
    /// to `center`.
    Gaussian { center: f64, width: f64, amplitude: f64 },
}

impl Waveform {
    /// Unit sinusoid whose wavelength is the grid period
    ///
    /// One full wave fits the domain, so rigid translation by any integer
    /// number of cells is reproduced exactly by index rotation.
    pub fn periodic_sinusoid(grid: &PeriodicGrid) -> Self {
        Waveform::Sinusoid {
            wavelength: grid.period(),
            amplitude: 1.0,
        }
    }

    /// Short identifier for logs and reports
    pub fn name(&self) -> &'static str {
        match self {
            Waveform::Sinusoid { .. } => "sinusoid",
            Waveform::SmoothedStep { .. } => "smoothed step",
            Waveform::Gaussian { .. } => "gaussian",
        }
    }

    /// Check that the shape parameters are usable
    pub fn validate(&self) -> Result<()> {
        match *self {
            Waveform::Sinusoid { wavelength, amplitude } => {
                ensure_positive("wavelength", wavelength)?;
                ensure_finite("amplitude", amplitude)
            }
            Waveform::SmoothedStep { amplitude } => ensure_finite("amplitude", amplitude),
            Waveform::Gaussian { center, width, amplitude } => {
                ensure_finite("center", center)?;
                ensure_positive("width", width)?;
                ensure_finite("amplitude", amplitude)
            }
        }
    }

    /// Sample the waveform on every grid node
    pub fn evaluate(&self, grid: &PeriodicGrid) -> Result<DVector<f64>> {
        self.validate()?;

        let field = match *self {
            Waveform::Sinusoid { wavelength, amplitude } => {
                DVector::from_fn(grid.points(), |i, _| {
                    amplitude * (2.0 * PI * grid.coordinate(i) / wavelength).sin()
                })
            }

            Waveform::SmoothedStep { amplitude } => {
                let half = grid.extent() / 2.0;
                let step: Vec<f64> = (0..grid.points())
                    .map(|i| if grid.coordinate(i) > half { amplitude } else { -amplitude })
                    .collect();
                let n = step.len();
                DVector::from_fn(n, |i, _| {
                    let left = step[periodic_index(i as i64 - 1, n)];
                    let right = step[periodic_index(i as i64 + 1, n)];
                    (left + step[i] + right) / 3.0
                })
            }

            Waveform::Gaussian { center, width, amplitude } => {
                let period = grid.period();
                DVector::from_fn(grid.points(), |i, _| {
                    let d = (grid.coordinate(i) - center).rem_euclid(period);
                    let d = d.min(period - d);
                    amplitude * (-(d / width).powi(2)).exp()
                })
            }
        };

        Ok(field)
    }
}

fn ensure_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AdvectionError::parameter(name, value, "must be finite"))
    }
}

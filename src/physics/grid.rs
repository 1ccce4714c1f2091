//! Periodic one-dimensional grid
//!
//! # Convention
//!
//! A grid of `points` nodes with spacing `Δx` sits at `x_i = i·Δx`. The node
//! after the last one is node 0 again, so the period of the domain is
//! `points·Δx` (not `(points − 1)·Δx`).
//!
//! ```text
//!  x_0   x_1   x_2         x_{N}  | x_0 (wrapped)
//!   •─────•─────•─── ··· ───•─────|─•
//!   <─ Δx ─>                      period = (N+1)·Δx
//! ```
//!
//! # Wraparound helpers
//!
//! [`periodic_index`] and [`rotate`] are the only places in the crate that
//! reduce an index modulo the grid length. The schemes and the analytic
//! reference both go through them.

use nalgebra::DVector;

use crate::error::{ensure_grid_size, ensure_positive, AdvectionError, Result};

// =================================================================================================
// Periodic Grid
// =================================================================================================

/// Evenly spaced periodic grid
///
/// Immutable once constructed.
///
/// # Example
///
/// ```rust
/// use advect_rs::physics::PeriodicGrid;
///
/// // linspace(0, 100, 101): 101 nodes, dx = 1, period 101
/// let grid = PeriodicGrid::from_extent(100.0, 1.0)?;
/// assert_eq!(grid.points(), 101);
/// assert_eq!(grid.period(), 101.0);
/// # Ok::<(), advect_rs::AdvectionError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodicGrid {
    points: usize,
    spacing: f64,
}

impl PeriodicGrid {
    /// Create a grid of `points` nodes separated by `spacing`
    pub fn new(points: usize, spacing: f64) -> Result<Self> {
        ensure_grid_size(points)?;
        ensure_positive("spacing", spacing)?;
        Ok(Self { points, spacing })
    }

    /// Create the grid `0, Δx, 2Δx, …, L`
    ///
    /// Both ends are included as distinct nodes, giving `floor(L/Δx) + 1`
    /// points. Because the domain is periodic the last node's right-hand
    /// neighbour is the first node, so the period is `L + Δx`.
    pub fn from_extent(extent: f64, spacing: f64) -> Result<Self> {
        ensure_positive("extent", extent)?;
        ensure_positive("spacing", spacing)?;

        // Snap L/Δx onto an integer when it is one up to rounding noise
        let ratio = extent / spacing;
        let cells = if (ratio - ratio.round()).abs() < 1e-9 * ratio.max(1.0) {
            ratio.round()
        } else {
            ratio.floor()
        };
        if !cells.is_finite() || cells >= usize::MAX as f64 {
            return Err(AdvectionError::parameter(
                "extent",
                extent,
                "too large for the spacing: node count exceeds usize",
            ));
        }

        Self::new(cells as usize + 1, spacing)
    }

    /// Number of grid nodes
    pub fn points(&self) -> usize {
        self.points
    }

    /// Distance between neighbouring nodes
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Distance after which the domain repeats
    pub fn period(&self) -> f64 {
        self.points as f64 * self.spacing
    }

    /// Coordinate of the last node
    pub fn extent(&self) -> f64 {
        (self.points - 1) as f64 * self.spacing
    }

    /// Coordinate of node `i` (taken modulo the grid length)
    pub fn coordinate(&self, i: usize) -> f64 {
        (i % self.points) as f64 * self.spacing
    }

    /// All node coordinates
    pub fn coordinates(&self) -> DVector<f64> {
        DVector::from_fn(self.points, |i, _| i as f64 * self.spacing)
    }

    /// Check that a field lives on this grid
    pub fn check_field(&self, field: &[f64]) -> Result<()> {
        if field.len() != self.points {
            return Err(AdvectionError::DimensionMismatch {
                expected: self.points,
                found: field.len(),
            });
        }
        Ok(())
    }
}

// =================================================================================================
// Wraparound helpers
// =================================================================================================

/// Reduce a (possibly negative) index onto `0..len`
///
/// # Panics
///
/// Panics when `len == 0`.
///
/// # Example
///
/// ```rust
/// use advect_rs::physics::periodic_index;
///
/// assert_eq!(periodic_index(-1, 5), 4);
/// assert_eq!(periodic_index(5, 5), 0);
/// assert_eq!(periodic_index(-11, 5), 4);
/// ```
#[inline]
pub fn periodic_index(i: i64, len: usize) -> usize {
    i.rem_euclid(len as i64) as usize
}

/// Rotate values by `shift` cells: `out[i] = values[i − shift]` (periodic)
///
/// A positive shift moves every feature toward higher indices, which is
/// the displacement produced by a positive velocity.
///
/// # Example
///
/// ```rust
/// use advect_rs::physics::rotate;
///
/// let out = rotate(&[0.0, 1.0, 2.0, 3.0], 1);
/// assert_eq!(out.as_slice(), &[3.0, 0.0, 1.0, 2.0]);
/// ```
pub fn rotate(values: &[f64], shift: i64) -> DVector<f64> {
    let len = values.len();
    if len == 0 {
        return DVector::zeros(0);
    }
    DVector::from_fn(len, |i, _| values[periodic_index(i as i64 - shift, len)])
}

/// Linear-interpolation stencil for a rigid displacement of `cells` grid cells
///
/// A node at index `i` that is displaced by `cells` came from the departure
/// position `s = i − cells`. With `m = floor(−cells)` and
/// `frac = −cells − m ∈ [0, 1)`, the departure point lies between nodes
/// `i + m` and `i + m + 1`:
///
/// ```text
/// q'[i] = (1 − frac)·q[i + m] + frac·q[i + m + 1]
/// ```
///
/// `m` and `frac` do not depend on `i`, so they are computed once and the
/// same weights are applied to every node. A whole-cell displacement gives
/// `frac = 0` and reduces to [`rotate`]; a zero displacement is the identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepartureWeights {
    /// `m mod len`: offset from a node to the left end of its departure cell
    pub offset: usize,
    /// Fractional position inside the departure cell, in `[0, 1)`
    pub frac: f64,
}

impl DepartureWeights {
    /// Weights for a displacement of `cells` on a grid of `len` nodes
    ///
    /// # Panics
    ///
    /// Panics when `len == 0`.
    pub fn new(cells: f64, len: usize) -> Self {
        let mut back = (-cells).floor();
        let mut frac = -cells - back;

        // -cells just below an integer can round frac up to exactly 1
        if frac >= 1.0 {
            back += 1.0;
            frac = 0.0;
        }

        let offset = back.rem_euclid(len as f64) as usize % len;
        Self { offset, frac }
    }

    /// Interpolated value arriving at node `i`
    #[inline]
    pub fn sample(&self, values: &[f64], i: usize) -> f64 {
        let n = values.len();
        let left = (i + self.offset) % n;
        let right = (left + 1) % n;
        (1.0 - self.frac) * values[left] + self.frac * values[right]
    }
}

/// Displace values by a possibly fractional number of cells
///
/// Linear interpolation between the two nodes bracketing each departure
/// point. Integer displacements are exact.
pub fn shift_fractional(values: &[f64], cells: f64) -> DVector<f64> {
    let len = values.len();
    if len == 0 {
        return DVector::zeros(0);
    }
    let weights = DepartureWeights::new(cells, len);
    DVector::from_fn(len, |i, _| weights.sample(values, i))
}

// =================================================================================================
// Tests
// =================================================================================================

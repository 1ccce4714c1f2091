//! The advected quantity and the space it lives on
//!
//! - [`PeriodicGrid`]: evenly spaced, periodic 1-D grid
//! - [`Waveform`]: initial profiles sampled on a grid
//! - [`periodic_index`] / [`rotate`] / [`shift_fractional`]: the shared
//!   wraparound helpers
//!
//! Fields themselves are plain `nalgebra::DVector<f64>` values, one entry
//! per grid node.

pub mod grid;
pub mod waveform;

pub use grid::{periodic_index, rotate, shift_fractional, DepartureWeights, PeriodicGrid};
pub use waveform::Waveform;

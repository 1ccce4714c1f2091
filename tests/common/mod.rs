//! Common utilities for integration tests

pub mod test_helpers;

// Re-export commonly used items
pub use test_helpers::{
    assert_fields_close,
    has_diverged,
    sinusoid_scenario,
    smoothed_step_scenario,
};

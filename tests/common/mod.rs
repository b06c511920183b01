//! Common utilities for integration tests

pub mod reference_problems;
pub mod test_helpers;

// Re-export commonly used items
pub use reference_problems::{heated_edge, heated_top, uniform_boundary, Edge};
pub use test_helpers::{
    assert_boundary_holds,
    assert_grids_close,
    interior_max_difference,
    mirror_error,
};

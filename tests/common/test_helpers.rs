//! Helper functions for integration tests

use laplace_rs::grid::{DirichletBoundary, Grid};

/// Assert that two grids are close (within tolerance), cell by cell
pub fn assert_grids_close(a: &Grid, b: &Grid, tolerance: f64, message: &str) {
    assert_eq!(a.size(), b.size(), "{}: Dimension mismatch", message);

    for i in 0..a.size() {
        for j in 0..a.size() {
            let diff = (a[(i, j)] - b[(i, j)]).abs();
            assert!(
                diff < tolerance,
                "{}: cell ({}, {}) differs by {} (tolerance {})",
                message, i, j, diff, tolerance
            );
        }
    }
}

/// Assert that every edge cell carries the boundary value, corners included
pub fn assert_boundary_holds(grid: &Grid, boundary: &DirichletBoundary, message: &str) {
    let n = grid.size();
    for k in 0..n {
        for (i, j) in [(0, k), (n - 1, k), (k, 0), (k, n - 1)] {
            let expected = boundary.value_at(n, i, j).unwrap();
            assert_eq!(
                grid[(i, j)], expected,
                "{}: edge cell ({}, {}) is {}, expected {}",
                message, i, j, grid[(i, j)], expected
            );
        }
    }
}

/// Largest |a - b| over interior cells only
pub fn interior_max_difference(a: &Grid, b: &Grid) -> f64 {
    let n = a.size();
    let mut max: f64 = 0.0;
    for i in 1..n - 1 {
        for j in 1..n - 1 {
            max = max.max((a[(i, j)] - b[(i, j)]).abs());
        }
    }
    max
}

/// Largest deviation from left-right mirror symmetry
pub fn mirror_error(grid: &Grid) -> f64 {
    let n = grid.size();
    let mut max: f64 = 0.0;
    for i in 0..n {
        for j in 0..n {
            max = max.max((grid[(i, j)] - grid[(i, n - 1 - j)]).abs());
        }
    }
    max
}

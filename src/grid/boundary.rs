//! Dirichlet boundary conditions on the four edges of a square grid
//!
//! # Assignment Order
//!
//! Edges are written in a fixed order: top row, bottom row, left column,
//! right column. Each corner belongs to one row and one column, and the
//! column pass runs last, so corners always carry the left/right value.
//! With the default constants (top = 100, others 0) the two top corners are
//! therefore 0, not 100.
//!
//! ```text
//!   col:  0    1    2   ...  N-1
//! row 0 [ L  100  100  ...   R ]
//!       [ L    .    .  ...   R ]
//!       [ L    .    .  ...   R ]
//! N-1   [ L    B    B  ...   R ]
//! ```

use crate::error::{LaplaceError, Result};
use crate::grid::field::Grid;

/// Fixed values prescribed on the four edges
///
/// # Examples
///
/// ```rust
/// use laplace_rs::grid::{DirichletBoundary, Grid};
///
/// let boundary = DirichletBoundary::default();
/// let mut grid = Grid::new(4).unwrap();
/// boundary.apply(&mut grid);
///
/// assert_eq!(grid[(0, 1)], 100.0);
/// assert_eq!(grid[(0, 0)], 0.0);   // corner: left value wins
/// assert!(boundary.is_satisfied_by(&grid));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirichletBoundary {
    /// Value on row 0
    pub top: f64,

    /// Value on row N-1
    pub bottom: f64,

    /// Value on column 0
    pub left: f64,

    /// Value on column N-1
    pub right: f64,
}

impl Default for DirichletBoundary {
    /// Heated top edge, every other edge grounded
    fn default() -> Self {
        Self {
            top: 100.0,
            bottom: 0.0,
            left: 0.0,
            right: 0.0,
        }
    }
}

impl DirichletBoundary {
    /// Create a boundary from its four edge values
    pub fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// Same value on every edge
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Reject non-finite edge values
    pub fn validate(&self) -> Result<()> {
        let edges = [
            ("top", self.top),
            ("bottom", self.bottom),
            ("left", self.left),
            ("right", self.right),
        ];

        for (name, value) in edges {
            if !value.is_finite() {
                return Err(LaplaceError::configuration(format!(
                    "{} boundary value is not finite",
                    name
                )));
            }
        }
        Ok(())
    }

    /// Overwrite the four edges of `grid`, interior cells untouched
    ///
    /// Idempotent.
    pub fn apply(&self, grid: &mut Grid) {
        let last = grid.size() - 1;
        let values = grid.as_matrix_mut();

        values.row_mut(0).fill(self.top);
        values.row_mut(last).fill(self.bottom);
        values.column_mut(0).fill(self.left);
        values.column_mut(last).fill(self.right);
    }

    /// Prescribed value of a boundary cell, `None` for interior cells
    pub fn value_at(&self, size: usize, row: usize, col: usize) -> Option<f64> {
        let last = size - 1;
        if col == last {
            Some(self.right)
        } else if col == 0 {
            Some(self.left)
        } else if row == last {
            Some(self.bottom)
        } else if row == 0 {
            Some(self.top)
        } else {
            None
        }
    }

    /// `true` when every edge cell of `grid` holds exactly its prescribed value
    pub fn is_satisfied_by(&self, grid: &Grid) -> bool {
        let n = grid.size();
        let last = n - 1;

        (0..n)
            .flat_map(|k| [(0, k), (last, k), (k, 0), (k, last)])
            .all(|(i, j)| self.value_at(n, i, j) == Some(grid[(i, j)]))
    }
}

/// Apply the default boundary (top = 100, bottom = left = right = 0)
///
/// Takes the grid by value and hands it back, so it composes with
/// constructors:
///
/// ```rust
/// use laplace_rs::grid::{apply_boundary_conditions, Grid};
///
/// let grid = apply_boundary_conditions(Grid::new(3).unwrap());
/// assert_eq!(grid[(0, 1)], 100.0);
/// ```
pub fn apply_boundary_conditions(mut grid: Grid) -> Grid {
    DirichletBoundary::default().apply(&mut grid);
    grid
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_edges() {
        let grid = apply_boundary_conditions(Grid::new(5).unwrap());

        for j in 1..4 {
            assert_eq!(grid[(0, j)], 100.0);
            assert_eq!(grid[(4, j)], 0.0);
        }
        for i in 0..5 {
            assert_eq!(grid[(i, 0)], 0.0);
            assert_eq!(grid[(i, 4)], 0.0);
        }
    }

    #[test]
    fn test_corners_take_column_value() {
        let boundary = DirichletBoundary::new(1.0, 2.0, 3.0, 4.0);
        let mut grid = Grid::new(4).unwrap();
        boundary.apply(&mut grid);

        assert_eq!(grid[(0, 0)], 3.0);
        assert_eq!(grid[(3, 0)], 3.0);
        assert_eq!(grid[(0, 3)], 4.0);
        assert_eq!(grid[(3, 3)], 4.0);
        assert_eq!(grid[(0, 1)], 1.0);
        assert_eq!(grid[(3, 2)], 2.0);
    }

    #[test]
    fn test_interior_untouched() {
        let mut grid = Grid::from_fn(4, |_, _| 7.0).unwrap();
        DirichletBoundary::default().apply(&mut grid);

        assert_eq!(grid[(1, 1)], 7.0);
        assert_eq!(grid[(2, 2)], 7.0);
    }

    #[test]
    fn test_idempotent() {
        let once = apply_boundary_conditions(Grid::new(6).unwrap());
        let twice = apply_boundary_conditions(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_is_satisfied_by() {
        let boundary = DirichletBoundary::default();
        let mut grid = Grid::new(4).unwrap();
        assert!(!boundary.is_satisfied_by(&grid));

        boundary.apply(&mut grid);
        assert!(boundary.is_satisfied_by(&grid));

        grid[(0, 0)] = 100.0;
        assert!(!boundary.is_satisfied_by(&grid));
    }

    #[test]
    fn test_value_at_interior_is_none() {
        let boundary = DirichletBoundary::default();
        assert_eq!(boundary.value_at(5, 2, 2), None);
        assert_eq!(boundary.value_at(5, 0, 2), Some(100.0));
        assert_eq!(boundary.value_at(5, 0, 0), Some(0.0));
    }

    #[test]
    fn test_validate_rejects_nan() {
        assert!(DirichletBoundary::default().validate().is_ok());
        assert!(DirichletBoundary::uniform(f64::NAN).validate().is_err());
    }
}

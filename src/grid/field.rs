//! Square scalar field
//!
//! [`Grid`] is the N×N potential field the relaxation methods operate on.
//! It is a thin newtype over [`nalgebra::DMatrix<f64>`] indexed as
//! `(row, column)`, with row 0 being the top edge of the domain.
//!
//! # Memory Layout
//!
//! nalgebra stores matrices column-major, so `as_slice()` yields column 0
//! first. The parallel Jacobi sweep relies on this to hand out whole columns
//! to worker threads.

use nalgebra::DMatrix;
use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::{LaplaceError, Result};
use crate::grid::boundary::DirichletBoundary;

/// N×N field of `f64` values, N ≥ 3
///
/// # Examples
///
/// ```rust
/// use laplace_rs::grid::{Grid, DirichletBoundary};
///
/// let grid = Grid::with_boundary(5, &DirichletBoundary::default()).unwrap();
/// assert_eq!(grid.size(), 5);
/// assert_eq!(grid.interior_len(), 9);
/// assert_eq!(grid[(0, 2)], 100.0);
/// assert_eq!(grid[(2, 2)], 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    values: DMatrix<f64>,
}

impl Grid {
    /// Smallest admissible size (a single interior cell)
    pub const MIN_SIZE: usize = 3;

    /// Create a zero-filled grid
    ///
    /// # Errors
    ///
    /// [`LaplaceError::InvalidGridSize`] when `size < 3`.
    pub fn new(size: usize) -> Result<Self> {
        Self::check_size(size)?;
        Ok(Self {
            values: DMatrix::zeros(size, size),
        })
    }

    /// Create a zero-filled grid and apply `boundary` to it
    ///
    /// This is the initial state every solver starts from.
    pub fn with_boundary(size: usize, boundary: &DirichletBoundary) -> Result<Self> {
        let mut grid = Self::new(size)?;
        boundary.apply(&mut grid);
        Ok(grid)
    }

    /// Build a grid from a function of `(row, column)`
    pub fn from_fn<F>(size: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> f64,
    {
        Self::check_size(size)?;
        Ok(Self {
            values: DMatrix::from_fn(size, size, |i, j| f(i, j)),
        })
    }

    /// Wrap an existing square matrix
    pub fn from_matrix(values: DMatrix<f64>) -> Result<Self> {
        if values.nrows() != values.ncols() {
            return Err(LaplaceError::configuration(format!(
                "grid must be square, got {}x{}",
                values.nrows(),
                values.ncols()
            )));
        }
        Self::check_size(values.nrows())?;
        Ok(Self { values })
    }

    fn check_size(size: usize) -> Result<()> {
        if size < Self::MIN_SIZE {
            return Err(LaplaceError::InvalidGridSize { size });
        }
        Ok(())
    }

    // ========================================== Shape ============================================

    /// Number of points per side (N)
    pub fn size(&self) -> usize {
        self.values.nrows()
    }

    /// Number of interior cells, (N-2)²
    pub fn interior_len(&self) -> usize {
        let inner = self.size() - 2;
        inner * inner
    }

    /// `true` when `(row, col)` lies on one of the four edges
    pub fn is_boundary(&self, row: usize, col: usize) -> bool {
        let last = self.size() - 1;
        row == 0 || col == 0 || row == last || col == last
    }

    // ========================================== Access ===========================================

    /// Read a value, `None` when out of range
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get((row, col)).copied()
    }

    /// Copy of one row, left to right
    pub fn row(&self, row: usize) -> Vec<f64> {
        self.values.row(row).iter().copied().collect()
    }

    /// Copy of one column, top to bottom
    pub fn column(&self, col: usize) -> Vec<f64> {
        self.values.column(col).iter().copied().collect()
    }

    /// All rows, top to bottom
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.size()).map(|i| self.row(i)).collect()
    }

    /// Underlying matrix
    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.values
    }

    pub(crate) fn as_matrix_mut(&mut self) -> &mut DMatrix<f64> {
        &mut self.values
    }

    /// Overwrite every cell with the matching cell of `other`, reusing storage
    ///
    /// # Panics
    ///
    /// Panics when the sizes differ.
    pub fn copy_from(&mut self, other: &Grid) {
        self.values.copy_from(&other.values);
    }

    // ========================================== Stencil ==========================================

    /// Unweighted mean of the four orthogonal neighbours of an interior cell
    ///
    /// The summation order (down, up, right, left) is fixed so that every
    /// method rounds identically.
    #[inline]
    pub fn neighbour_mean(&self, row: usize, col: usize) -> f64 {
        let v = &self.values;
        0.25 * (v[(row + 1, col)] + v[(row - 1, col)] + v[(row, col + 1)] + v[(row, col - 1)])
    }

    // ========================================== Norms ============================================

    /// Euclidean norm of the element-wise difference `self - other`
    ///
    /// Both grids must have the same size.
    pub fn l2_distance(&self, other: &Grid) -> f64 {
        debug_assert_eq!(self.size(), other.size(), "grid size mismatch");
        self.values
            .iter()
            .zip(other.values.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt()
    }

    /// Largest absolute element-wise difference
    pub fn max_abs_difference(&self, other: &Grid) -> f64 {
        debug_assert_eq!(self.size(), other.size(), "grid size mismatch");
        self.values
            .iter()
            .zip(other.values.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }

    /// `true` when no cell holds NaN or ±Inf
    pub fn is_finite(&self) -> bool {
        self.values.iter().all(|x| x.is_finite())
    }

    /// Smallest and largest value
    pub fn min_max(&self) -> (f64, f64) {
        self.values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            })
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &f64 {
        &self.values[index]
    }
}

impl IndexMut<(usize, usize)> for Grid {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut f64 {
        &mut self.values[index]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.size() {
            let row: Vec<String> = self
                .values
                .row(i)
                .iter()
                .map(|x| format!("{:8.3}", x))
                .collect();
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================

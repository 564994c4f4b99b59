//! # Matrices
//!
//! Square matrices over [`Vector`] rows, used with the row-vector convention
//! `v' = v·M`. Composition is right-multiplication: applying `A` then `B` is
//! `A × B`.

use std::ops::{Index, Mul};

use serde::{Deserialize, Serialize};

use crate::config::Dimension;
use crate::error::{CanvasError, Result};
use crate::vector::Vector;

/// A `dimension × dimension` matrix stored as rows.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    rows: [Vector; 4],
    dimension: Dimension,
}

impl Matrix {
    /// The identity matrix.
    pub fn identity(dimension: Dimension) -> Self {
        let mut m = Self::zero(dimension);
        for i in 0..dimension.len() {
            m.rows[i][i] = 1.0;
        }
        m
    }

    /// The all-zero matrix.
    pub fn zero(dimension: Dimension) -> Self {
        Self {
            rows: [Vector::zero(dimension); 4],
            dimension,
        }
    }

    /// Builds a matrix from exactly `dimension` rows of that dimension.
    pub fn from_rows(rows: &[Vector]) -> Result<Self> {
        let first = rows.first().ok_or(CanvasError::InvalidLength {
            expected: 3,
            found: 0,
        })?;
        let dimension = first.dimension();
        if rows.len() != dimension.len() {
            return Err(CanvasError::InvalidLength {
                expected: dimension.len(),
                found: rows.len(),
            });
        }
        let mut m = Self::zero(dimension);
        for (slot, row) in m.rows.iter_mut().zip(rows) {
            row.check_dimension(dimension)?;
            *slot = *row;
        }
        Ok(m)
    }

    /// Diagonal matrix with `values` on the diagonal.
    pub fn diagonal(values: &Vector) -> Self {
        let dimension = values.dimension();
        let mut m = Self::zero(dimension);
        for (i, value) in values.as_slice().iter().enumerate() {
            m.rows[i][i] = *value;
        }
        m
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// The live rows, `dimension.len()` of them.
    pub fn rows(&self) -> &[Vector] {
        &self.rows[..self.dimension.len()]
    }

    /// Bounds-checked row access.
    pub fn row(&self, index: usize) -> Result<&Vector> {
        self.rows().get(index).ok_or(CanvasError::IndexOutOfRange {
            index,
            dimension: self.dimension.len(),
        })
    }

    /// Replaces a row. The row must share the matrix dimension.
    pub fn set_row(&mut self, index: usize, row: Vector) -> Result<()> {
        row.check_dimension(self.dimension)?;
        let dimension = self.dimension.len();
        if index >= dimension {
            return Err(CanvasError::IndexOutOfRange { index, dimension });
        }
        self.rows[index] = row;
        Ok(())
    }

    /// Bounds-checked element access.
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        self.row(row)?.get(col)
    }

    /// Bounds-checked element update.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        let dimension = self.dimension.len();
        if row >= dimension {
            return Err(CanvasError::IndexOutOfRange {
                index: row,
                dimension,
            });
        }
        self.rows[row].set(col, value)
    }

    /// Checked product `R[h][j] = Σᵢ self[h][i]·other[i][j]`.
    pub fn try_mul(&self, other: &Matrix) -> Result<Matrix> {
        if self.dimension != other.dimension {
            return Err(CanvasError::DimensionMismatch {
                expected: self.dimension,
                found: other.dimension,
            });
        }
        let n = self.dimension.len();
        let mut r = Matrix::zero(self.dimension);
        for h in 0..n {
            for j in 0..n {
                r.rows[h][j] = (0..n).map(|i| self[h][i] * other[i][j]).sum();
            }
        }
        Ok(r)
    }

    pub fn transpose(&self) -> Matrix {
        let n = self.dimension.len();
        let mut t = Matrix::zero(self.dimension);
        for i in 0..n {
            for j in 0..n {
                t.rows[j][i] = self[i][j];
            }
        }
        t
    }

    /// True when every element is within `epsilon` of the other's.
    pub fn approx_eq(&self, other: &Matrix, epsilon: f64) -> bool {
        self.dimension == other.dimension
            && self
                .rows()
                .iter()
                .zip(other.rows())
                .all(|(a, b)| a.approx_eq(b, epsilon))
    }

    pub fn is_identity(&self, epsilon: f64) -> bool {
        self.approx_eq(&Matrix::identity(self.dimension), epsilon)
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity(Dimension::default())
    }
}

/// # Panics
/// Panics when `index >= dimension`. Use [`Matrix::row`] for a checked read.
impl Index<usize> for Matrix {
    type Output = Vector;

    fn index(&self, index: usize) -> &Vector {
        &self.rows()[index]
    }
}

impl Mul<&Matrix> for &Matrix {
    type Output = Matrix;

    /// # Panics
    /// Panics on a dimension mismatch. Use [`Matrix::try_mul`] for a checked product.
    fn mul(self, rhs: &Matrix) -> Matrix {
        match self.try_mul(rhs) {
            Ok(m) => m,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        &self * &rhs
    }
}

//! # Homogeneous vectors
//!
//! A [`Vector`] is a row of 3 (`Planar`) or 4 (`Spatial`) coordinates whose
//! last component is the homogeneous weight `w`. Every other piece of geometry
//! in the crate is built from it.

use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::config::Dimension;
use crate::error::{CanvasError, Result};
use crate::matrix::Matrix;

/// A point or direction in homogeneous coordinates.
///
/// Components past `dimension` are kept at zero, so two vectors of the same
/// dimension compare equal exactly when their live components do.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    components: [f64; 4],
    dimension: Dimension,
}

impl Vector {
    /// The all-zero vector.
    pub const fn zero(dimension: Dimension) -> Self {
        Self {
            components: [0.0; 4],
            dimension,
        }
    }

    /// A point with weight `w = 1`. `z` is dropped in `Planar` mode.
    pub fn point(x: f64, y: f64, z: f64, dimension: Dimension) -> Self {
        Self::homogeneous(x, y, z, 1.0, dimension)
    }

    /// A vector with an explicit weight. `z` is dropped in `Planar` mode.
    pub fn homogeneous(x: f64, y: f64, z: f64, w: f64, dimension: Dimension) -> Self {
        let components = match dimension {
            Dimension::Planar => [x, y, w, 0.0],
            Dimension::Spatial => [x, y, z, w],
        };
        Self {
            components,
            dimension,
        }
    }

    /// Builds a vector from exactly 3 or 4 raw components.
    pub fn new(components: &[f64]) -> Result<Self> {
        let dimension = match components.len() {
            3 => Dimension::Planar,
            4 => Dimension::Spatial,
            n => {
                return Err(CanvasError::InvalidLength {
                    expected: if n < 3 { 3 } else { 4 },
                    found: n,
                });
            }
        };
        let mut v = Self::zero(dimension);
        v.components[..components.len()].copy_from_slice(components);
        Ok(v)
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// The live components, `dimension.len()` of them.
    pub fn as_slice(&self) -> &[f64] {
        &self.components[..self.dimension.len()]
    }

    /// Bounds-checked component access.
    pub fn get(&self, index: usize) -> Result<f64> {
        self.as_slice()
            .get(index)
            .copied()
            .ok_or(CanvasError::IndexOutOfRange {
                index,
                dimension: self.dimension.len(),
            })
    }

    /// Bounds-checked component update.
    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        let dimension = self.dimension.len();
        if index >= dimension {
            return Err(CanvasError::IndexOutOfRange { index, dimension });
        }
        self.components[index] = value;
        Ok(())
    }

    pub fn x(&self) -> f64 {
        self.components[0]
    }

    pub fn y(&self) -> f64 {
        self.components[1]
    }

    /// The z coordinate, or `0.0` in `Planar` mode.
    pub fn z(&self) -> f64 {
        match self.dimension {
            Dimension::Planar => 0.0,
            Dimension::Spatial => self.components[2],
        }
    }

    /// The homogeneous weight.
    pub fn w(&self) -> f64 {
        self.components[self.dimension.w_index()]
    }

    /// Projects onto the xy plane.
    pub fn xy(&self) -> DVec2 {
        DVec2::new(self.x(), self.y())
    }

    /// `Σ vᵢ·wᵢ` over every live component.
    pub fn dot(&self, other: &Vector) -> Result<f64> {
        self.check_dimension(other.dimension)?;
        Ok(self
            .as_slice()
            .iter()
            .zip(other.as_slice())
            .map(|(a, b)| a * b)
            .sum())
    }

    /// Component-wise scale, `w` included.
    pub fn scale(&self, factor: f64) -> Vector {
        let mut v = *self;
        for c in &mut v.components {
            *c *= factor;
        }
        v
    }

    /// Row-vector product `v' = v·M`, i.e. `v'ⱼ = Σᵢ vᵢ·M[i][j]`.
    pub fn try_transform(&self, matrix: &Matrix) -> Result<Vector> {
        self.check_dimension(matrix.dimension())?;
        let n = self.dimension.len();
        let mut out = Vector::zero(self.dimension);
        for j in 0..n {
            out.components[j] = (0..n).map(|i| self.components[i] * matrix[i][j]).sum();
        }
        Ok(out)
    }

    /// Euclidean distance between the xy projections of two points.
    pub fn distance_xy(&self, other: &Vector) -> f64 {
        self.xy().distance(other.xy())
    }

    /// True when every live component is within `epsilon` of the other's.
    pub fn approx_eq(&self, other: &Vector, epsilon: f64) -> bool {
        self.dimension == other.dimension
            && self
                .as_slice()
                .iter()
                .zip(other.as_slice())
                .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    pub(crate) fn check_dimension(&self, found: Dimension) -> Result<()> {
        if self.dimension == found {
            Ok(())
        } else {
            Err(CanvasError::DimensionMismatch {
                expected: self.dimension,
                found,
            })
        }
    }

    fn zip_with(self, rhs: Vector, f: impl Fn(f64, f64) -> f64) -> Vector {
        assert_eq!(self.dimension, rhs.dimension, "vector dimension mismatch");
        let mut out = self;
        for (a, b) in out.components.iter_mut().zip(rhs.components) {
            *a = f(*a, b);
        }
        out
    }
}

/// # Panics
/// Panics when `index >= dimension`. Use [`Vector::get`] for a checked read.
impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.as_slice()[index]
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        let n = self.dimension.len();
        &mut self.components[..n][index]
    }
}

impl Add for Vector {
    type Output = Vector;

    /// # Panics
    /// Panics on a dimension mismatch.
    fn add(self, rhs: Vector) -> Vector {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl Sub for Vector {
    type Output = Vector;

    /// # Panics
    /// Panics on a dimension mismatch.
    fn sub(self, rhs: Vector) -> Vector {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.scale(-1.0)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        self.scale(rhs)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Vector {
        rhs.scale(self)
    }
}

impl Mul<&Matrix> for Vector {
    type Output = Vector;

    /// # Panics
    /// Panics on a dimension mismatch. Use [`Vector::try_transform`] for a checked product.
    fn mul(self, rhs: &Matrix) -> Vector {
        match self.try_transform(rhs) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Mul<Matrix> for Vector {
    type Output = Vector;

    fn mul(self, rhs: Matrix) -> Vector {
        self * &rhs
    }
}

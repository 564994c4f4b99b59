//! # Transform builders
//!
//! Pure constructors for the affine maps the editor composes into shapes and
//! the window. Every builder returns a [`Matrix`] in the row-vector convention,
//! so it is applied by right-multiplying an accumulated transform.
//!
//! Rotations are counterclockwise for positive angles in the y-up world frame.
//! Which sign a user-facing "clockwise" maps to depends on the target (shape or
//! window) and is decided by the editor, not here.

use serde::{Deserialize, Serialize};

use crate::config::Dimension;
use crate::error::{CanvasError, Result};
use crate::matrix::Matrix;
use crate::vector::Vector;

/// Rotation axis for `Spatial` rotations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    /// The only axis available in `Planar` mode.
    #[default]
    Z,
}

/// Identity with the homogeneous row replaced by `offset`.
///
/// In `Planar` mode the offset occupies row 2, in `Spatial` mode row 3.
pub fn translation(offset: Vector) -> Matrix {
    let dimension = offset.dimension();
    let mut m = Matrix::identity(dimension);
    // Same dimension by construction, the row index is always in range.
    let _ = m.set_row(dimension.w_index(), offset);
    m
}

/// Translation by explicit deltas. `dz` is ignored in `Planar` mode.
pub fn translation_by(dx: f64, dy: f64, dz: f64, dimension: Dimension) -> Matrix {
    translation(Vector::point(dx, dy, dz, dimension))
}

/// Uniform scale about `pivot`: `translate(-pivot) × diag(f, …, f, 1) × translate(pivot)`.
///
/// `factor` must be finite and strictly positive; `1.0` is the identity.
pub fn scale(factor: f64, pivot: &Vector) -> Result<Matrix> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(CanvasError::InvalidScaleFactor(factor));
    }
    let dimension = pivot.dimension();
    let diagonal = Vector::point(factor, factor, factor, dimension);
    Ok(about_pivot(Matrix::diagonal(&diagonal), pivot))
}

/// Rotation by `angle_radians` about the z axis through `pivot`.
pub fn rotation(angle_radians: f64, pivot: &Vector) -> Matrix {
    about_pivot(rotation_matrix(Axis::Z, angle_radians, pivot.dimension()), pivot)
}

/// Rotation about an arbitrary axis through `pivot`.
///
/// Only [`Axis::Z`] exists in `Planar` mode; asking for X or Y there is a
/// dimension mismatch.
pub fn rotation_about(axis: Axis, angle_radians: f64, pivot: &Vector) -> Result<Matrix> {
    let dimension = pivot.dimension();
    if axis != Axis::Z && !dimension.is_spatial() {
        return Err(CanvasError::DimensionMismatch {
            expected: Dimension::Spatial,
            found: dimension,
        });
    }
    Ok(about_pivot(
        rotation_matrix(axis, angle_radians, dimension),
        pivot,
    ))
}

/// Conjugates `linear` so that it acts about `pivot` instead of the origin.
fn about_pivot(linear: Matrix, pivot: &Vector) -> Matrix {
    let dimension = pivot.dimension();
    let to_origin = translation_by(-pivot.x(), -pivot.y(), -pivot.z(), dimension);
    let go_back = translation_by(pivot.x(), pivot.y(), pivot.z(), dimension);
    to_origin * linear * go_back
}

fn rotation_matrix(axis: Axis, angle: f64, dimension: Dimension) -> Matrix {
    let (s, c) = angle.sin_cos();
    let mut m = Matrix::identity(dimension);
    let (a, b) = match axis {
        Axis::Z => (0, 1),
        Axis::X => (1, 2),
        Axis::Y => (2, 0),
    };
    // Row-vector form: a' = a·c - b·s, b' = a·s + b·c.
    let entries = [(a, a, c), (a, b, s), (b, a, -s), (b, b, c)];
    for (row, col, value) in entries {
        let _ = m.set(row, col, value);
    }
    m
}

//! # Window
//!
//! The camera of the editor: a viewing rectangle in world space plus its own
//! accumulated transform. Panning, zooming and rotating the camera compose into
//! that transform instead of moving the rectangle, so the normalization mapping
//! never has to be re-derived from rotated bounds.

use serde::{Deserialize, Serialize};

use crate::clip::ClipRect;
use crate::config::Dimension;
use crate::error::{CanvasError, Result};
use crate::matrix::Matrix;
use crate::transform;
use crate::vector::Vector;

/// The viewing rectangle and its transform.
///
/// The transform is applied to the world (it is the inverse of the camera
/// motion): moving the camera left shifts every shape right.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Window {
    min: Vector,
    max: Vector,
    transform: Matrix,
}

impl Window {
    /// Creates a window over `[min, max]`. The rectangle must have positive
    /// width and height.
    pub fn new(min: Vector, max: Vector) -> Result<Self> {
        min.check_dimension(max.dimension())?;
        if !(max.x() > min.x() && max.y() > min.y()) {
            return Err(CanvasError::DegenerateWindow);
        }
        Ok(Self {
            transform: Matrix::identity(min.dimension()),
            min,
            max,
        })
    }

    /// A window centered on the origin with the given half extents.
    pub fn centered(half_width: f64, half_height: f64, dimension: Dimension) -> Result<Self> {
        Self::new(
            Vector::point(-half_width, -half_height, 0.0, dimension),
            Vector::point(half_width, half_height, 0.0, dimension),
        )
    }

    pub fn dimension(&self) -> Dimension {
        self.transform.dimension()
    }

    pub fn min(&self) -> &Vector {
        &self.min
    }

    pub fn max(&self) -> &Vector {
        &self.max
    }

    /// The accumulated camera transform.
    pub fn transform(&self) -> &Matrix {
        &self.transform
    }

    /// Right-multiplies the accumulated transform: `transform = transform × t`.
    pub fn apply_transform(&mut self, t: &Matrix) -> Result<()> {
        self.transform = self.transform.try_mul(t)?;
        Ok(())
    }

    /// Drops every pan, zoom and rotation applied so far.
    pub fn reset(&mut self) {
        self.transform = Matrix::identity(self.dimension());
    }

    pub fn width(&self) -> f64 {
        let right = Vector::point(self.max.x(), self.min.y(), self.min.z(), self.dimension());
        self.min.distance_xy(&right)
    }

    pub fn height(&self) -> f64 {
        let top = Vector::point(self.min.x(), self.max.y(), self.min.z(), self.dimension());
        self.min.distance_xy(&top)
    }

    /// Center of the viewing rectangle.
    pub fn mass_center(&self) -> Vector {
        Vector::point(
            (self.min.x() + self.max.x()) / 2.0,
            (self.min.y() + self.max.y()) / 2.0,
            (self.min.z() + self.max.z()) / 2.0,
            self.dimension(),
        )
    }

    /// Maps the viewing rectangle onto `[-1, 1]²`; z and w are left alone.
    pub fn normalization(&self) -> Matrix {
        let center = self.mass_center();
        let dimension = self.dimension();
        let to_center = transform::translation_by(-center.x(), -center.y(), 0.0, dimension);
        let fit = Matrix::diagonal(&Vector::point(
            2.0 / self.width(),
            2.0 / self.height(),
            1.0,
            dimension,
        ));
        to_center * fit
    }

    /// Full world-to-clip-space matrix: `transform × normalization`.
    pub fn view_matrix(&self) -> Matrix {
        self.transform * self.normalization()
    }

    /// The rectangle window vertices are clipped against.
    pub fn clip_rect(&self) -> ClipRect {
        ClipRect::canonical()
    }
}

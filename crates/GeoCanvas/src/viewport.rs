//! # Viewport System
//!
//! This module maps normalized clip space (`[-1, 1]²`, y up) onto device pixels
//! (y down). It is the last step of the world → window → viewport pipeline.

use glam::{DVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::vector::Vector;

/// The device area the window is shown in.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// The size of the drawing area in pixels.
    pub size: Vec2,
    /// Inset between the drawing-area edge and the clip region, in pixels.
    pub margin: f32,
}

impl Viewport {
    /// Creates a new Viewport.
    pub fn new(size: Vec2, margin: f32) -> Self {
        Self { size, margin }
    }

    /// Pixel size of the clip region.
    pub fn inner_size(&self) -> Vec2 {
        (self.size - Vec2::splat(2.0 * self.margin)).max(Vec2::ZERO)
    }

    /// Converts a point from **clip space** to **device space**.
    ///
    /// Formula: `x = m + (xn + 1) / 2 · w`, `y = m + (1 - (yn + 1) / 2) · h`
    pub fn to_device(&self, v: &Vector) -> Vec2 {
        let inner = self.inner_size().as_dvec2();
        let margin = f64::from(self.margin);
        let x = margin + (v.x() + 1.0) / 2.0 * inner.x;
        let y = margin + (1.0 - (v.y() + 1.0) / 2.0) * inner.y;
        DVec2::new(x, y).as_vec2()
    }

    /// Converts a point from **device space** back to **clip space**.
    pub fn to_normalized(&self, device: Vec2) -> DVec2 {
        let inner = self.inner_size().as_dvec2().max(DVec2::splat(f64::EPSILON));
        let local = device.as_dvec2() - DVec2::splat(f64::from(self.margin));
        DVec2::new(local.x / inner.x * 2.0 - 1.0, 1.0 - local.y / inner.y * 2.0)
    }

    /// Top-left corner and size of the clip region in pixels.
    pub fn border(&self) -> (Vec2, Vec2) {
        (Vec2::splat(self.margin), self.inner_size())
    }
}

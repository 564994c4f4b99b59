//! # Configuration
//!
//! This module defines the configuration struct for the Editor.
//! The configuration is fixed when the session is created; in particular the
//! coordinate [`Dimension`] is a session-wide constant.

use glam::{Vec2, Vec4};
use serde::{Deserialize, Serialize};

use crate::error::{CanvasError, Result};

/// Number of homogeneous components every vector and matrix row carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Dimension {
    /// 2D points in homogeneous form: `(x, y, w)`.
    #[default]
    Planar,
    /// 3D points in homogeneous form: `(x, y, z, w)`.
    Spatial,
}

impl Dimension {
    /// Number of components (3 or 4).
    pub const fn len(self) -> usize {
        match self {
            Dimension::Planar => 3,
            Dimension::Spatial => 4,
        }
    }

    /// Index of the homogeneous weight `w`.
    pub const fn w_index(self) -> usize {
        self.len() - 1
    }

    pub const fn is_spatial(self) -> bool {
        matches!(self, Dimension::Spatial)
    }
}

/// Configuration parameters for the Editor.
///
/// These settings allow the host application to tune the feel of the editing commands.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Coordinate dimensionality. Default: `Planar`.
    pub dimension: Dimension,
    /// z assigned to Spatial vertices that omit it. Default: 0.0.
    pub default_z: f64,
    /// Homogeneous weight of points. Default: 1.0.
    pub default_w: f64,
    /// World units moved by one arrow command. Default: 10.0.
    pub step: f64,
    /// Scale factor of one zoom-in command; zoom-out uses the inverse. Default: 1.1.
    pub zoom_factor: f64,
    /// Angle of one rotate command, in degrees. Default: 15.0.
    pub rotation_degrees: f64,
    /// Number of subdivisions used to flatten a cubic Bezier. Default: 100.
    pub bezier_steps: usize,
    /// Device size of the viewport in pixels. Default: 800x600.
    pub viewport_size: Vec2,
    /// Inset in pixels between the device edge and the clip region. Default: 10.0.
    pub viewport_margin: f32,
    /// Maximum number of undo snapshots. Default: 50.
    pub max_history: usize,
    /// Visual styling configuration.
    pub style: CanvasStyle,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            dimension: Dimension::Planar,
            default_z: 0.0,
            default_w: 1.0,
            step: 10.0,
            zoom_factor: 1.1,
            rotation_degrees: 15.0,
            bezier_steps: 100,
            viewport_size: Vec2::new(800.0, 600.0),
            viewport_margin: 10.0,
            max_history: 50,
            style: CanvasStyle::default(),
        }
    }
}

impl EditorConfig {
    /// Parses a configuration from JSON. Missing fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the values every command relies on.
    ///
    /// Points are never divided by their weight, so `default_w` must be 1 for
    /// translations to move a point by exactly their offset.
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("default_w", self.default_w == 1.0, "must be 1"),
            ("default_z", self.default_z.is_finite(), "must be finite"),
            ("step", self.step.is_finite(), "must be finite"),
            (
                "zoom_factor",
                self.zoom_factor.is_finite() && self.zoom_factor > 0.0,
                "must be finite and greater than zero",
            ),
            (
                "rotation_degrees",
                self.rotation_degrees.is_finite(),
                "must be finite",
            ),
            ("bezier_steps", self.bezier_steps > 0, "must be at least 1"),
            (
                "viewport_margin",
                self.viewport_margin.is_finite() && self.viewport_margin >= 0.0,
                "must be finite and not negative",
            ),
        ];
        match checks.into_iter().find(|(_, ok, _)| !ok) {
            Some((field, _, reason)) => Err(CanvasError::InvalidConfig { field, reason }),
            None => Ok(()),
        }
    }
}

/// Visual styling configuration for the render list.
///
/// It uses `glam::Vec4` for RGBA colors.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasStyle {
    /// Color of the clip-region border.
    pub border_color: Vec4,
    /// Default style for shapes.
    pub shape_default: ShapeStyle,
    /// Style applied to the selected shape.
    pub shape_selected: ShapeStyle,
}

impl Default for CanvasStyle {
    fn default() -> Self {
        Self {
            border_color: Vec4::new(0.8, 0.2, 0.2, 1.0),
            shape_default: ShapeStyle::default(),
            shape_selected: ShapeStyle {
                color: Vec4::new(0.2, 0.6, 1.0, 1.0),
                width: 2.0,
            },
        }
    }
}

/// Visual style for a Shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Stroke color.
    pub color: Vec4,
    /// Stroke width in screen pixels (also the point radius).
    pub width: f32,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            color: Vec4::new(0.0, 0.0, 0.0, 1.0),
            width: 1.0,
        }
    }
}

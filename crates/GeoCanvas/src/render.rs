//! # Rendering System
//!
//! The Editor never rasterizes. It outputs a display list of `DrawCommand`s and
//! the host application (GTK/Cairo, egui, a canvas element) turns them into pixels.

use glam::{Vec2, Vec4};
use serde::{Deserialize, Serialize};

/// A single drawing primitive.
///
/// Coordinates are in **Device Space** (Pixels), already clipped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// An unfilled rectangle outline.
    Rect {
        /// Top-left position in device pixels.
        pos: Vec2,
        /// Size in device pixels.
        size: Vec2,
        /// Stroke color (RGBA, 0.0 - 1.0).
        color: Vec4,
        /// Stroke width in pixels.
        width: f32,
    },
    /// A straight line segment.
    Line {
        /// Start point in device pixels.
        start: Vec2,
        /// End point in device pixels.
        end: Vec2,
        /// Line color (RGBA, 0.0 - 1.0).
        color: Vec4,
        /// Line thickness in pixels.
        width: f32,
    },
    /// A dot, for Point shapes.
    Point {
        /// Center in device pixels.
        pos: Vec2,
        /// Dot color.
        color: Vec4,
        /// Radius in pixels.
        radius: f32,
    },
}

/// A list of draw commands representing the current frame.
pub type RenderList = Vec<DrawCommand>;

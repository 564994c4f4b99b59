//! # Core Data Models
//!
//! This module defines the shapes of a drawing and the arena that owns them.
//! It uses `SlotMap` for stable ids, and keeps insertion order next to it so
//! that iteration (and therefore paint order) never depends on slot reuse.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use slotmap::{Key, SlotMap, new_key_type};

use crate::clip::{self, ClipRect, ClippedShape};
use crate::config::{Dimension, ShapeStyle};
use crate::curve;
use crate::error::{CanvasError, Result};
use crate::matrix::Matrix;
use crate::vector::Vector;
use crate::window::Window;

new_key_type! {
    /// Unique identifier for a Shape.
    pub struct ShapeId;
}

impl ShapeId {
    /// Integer form of the id, for list views.
    pub fn as_u64(self) -> u64 {
        self.data().as_ffi()
    }
}

bitflags! {
    /// Bitflags representing various boolean states of a Shape.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct ShapeFlags: u8 {
        /// The shape is the target of transform commands.
        const SELECTED = 1 << 0;
        /// The shape is not rendered.
        const HIDDEN = 1 << 1;
    }
}

impl Serialize for ShapeFlags {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.bits())
    }
}

impl<'de> Deserialize<'de> for ShapeFlags {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(Self::from_bits_truncate(bits))
    }
}

/// The closed set of shape kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Point,
    Line,
    /// Axis-aligned at creation; stored as its four corners.
    Rectangle,
    Polygon,
    /// One or more cubic segments sharing endpoints (`3k + 1` control points).
    Bezier,
}

impl ShapeKind {
    /// Label shown in object lists.
    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Point => "Point",
            ShapeKind::Line => "Line",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Polygon => "Polygon",
            ShapeKind::Bezier => "Bezier Curve",
        }
    }

    /// Whether the outline joins the last vertex back to the first.
    pub fn is_closed(self) -> bool {
        matches!(self, ShapeKind::Rectangle | ShapeKind::Polygon)
    }

    fn accepts(self, count: usize) -> bool {
        match self {
            ShapeKind::Point => count == 1,
            ShapeKind::Line => count == 2,
            ShapeKind::Rectangle => count == 2 || count == 4,
            ShapeKind::Polygon => count >= 3,
            ShapeKind::Bezier => count >= 4 && (count - 1) % 3 == 0,
        }
    }
}

/// A shape of the drawing.
///
/// World vertices are fixed at creation. Everything the user does to the shape
/// is accumulated in `transform`; the window vertices are derived from both and
/// recomputed whenever the shape or the window changes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Shape {
    /// Self-reference ID.
    pub id: ShapeId,
    /// User-assigned name.
    pub name: String,
    pub kind: ShapeKind,
    /// State flags.
    pub flags: ShapeFlags,
    /// Optional visual style override.
    pub style: Option<ShapeStyle>,
    world: Vec<Vector>,
    window: Vec<Vector>,
    transform: Matrix,
}

impl Shape {
    /// Builds a shape, checking the kind-specific vertex count.
    ///
    /// A Rectangle given two opposite corners is expanded to its four corners.
    pub fn new(kind: ShapeKind, name: impl Into<String>, vertices: Vec<Vector>) -> Result<Self> {
        if !kind.accepts(vertices.len()) {
            return Err(CanvasError::InvalidVertexCount {
                kind,
                count: vertices.len(),
            });
        }
        let dimension = vertices[0].dimension();
        for v in &vertices {
            v.check_dimension(dimension)?;
        }

        let world = match (kind, vertices.as_slice()) {
            (ShapeKind::Rectangle, [a, b]) => vec![
                *a,
                Vector::homogeneous(b.x(), a.y(), a.z(), a.w(), dimension),
                *b,
                Vector::homogeneous(a.x(), b.y(), b.z(), b.w(), dimension),
            ],
            _ => vertices,
        };

        Ok(Self {
            id: ShapeId::default(),
            name: name.into(),
            kind,
            flags: ShapeFlags::default(),
            style: None,
            window: world.clone(),
            world,
            transform: Matrix::identity(dimension),
        })
    }

    pub fn dimension(&self) -> Dimension {
        self.transform.dimension()
    }

    /// Vertices as created.
    pub fn world_vertices(&self) -> &[Vector] {
        &self.world
    }

    /// Vertices in normalized window space, as of the last [`Shape::world_to_window`].
    pub fn window_vertices(&self) -> &[Vector] {
        &self.window
    }

    /// The accumulated transformation matrix.
    pub fn transform(&self) -> &Matrix {
        &self.transform
    }

    /// World vertices moved by the accumulated transform.
    pub fn current_vertices(&self) -> Vec<Vector> {
        self.world.iter().map(|v| *v * &self.transform).collect()
    }

    /// Right-multiplies the accumulated transform: `transform = transform × t`.
    pub fn apply_transform(&mut self, t: &Matrix) -> Result<()> {
        if self.world.is_empty() {
            return Ok(());
        }
        self.transform = self.transform.try_mul(t)?;
        Ok(())
    }

    /// Recomputes window vertices as `vertex × transform × window_t × normalization`.
    ///
    /// Bezier shapes transform their control points first and then store the
    /// flattened curve (`bezier_steps + 1` samples per segment).
    pub fn world_to_window(
        &mut self,
        window_t: &Matrix,
        normalization: &Matrix,
        bezier_steps: usize,
    ) -> Result<()> {
        let m = self.transform.try_mul(window_t)?.try_mul(normalization)?;
        let transformed = self
            .world
            .iter()
            .map(|v| v.try_transform(&m))
            .collect::<Result<Vec<_>>>()?;

        self.window = match self.kind {
            ShapeKind::Bezier => curve::flatten(&transformed, bezier_steps),
            _ => transformed,
        };
        Ok(())
    }

    /// Arithmetic mean of the current vertices, used as the default pivot.
    ///
    /// An empty shape has its center at the origin.
    pub fn mass_center(&self) -> Vector {
        let current = self.current_vertices();
        if current.is_empty() {
            return Vector::point(0.0, 0.0, 0.0, self.dimension());
        }
        let sum = current
            .iter()
            .fold(Vector::zero(self.dimension()), |acc, v| acc + *v);
        sum * (1.0 / current.len() as f64)
    }

    /// Clips the window vertices against `rect`.
    pub fn clip(&self, rect: &ClipRect) -> ClippedShape {
        match self.kind {
            ShapeKind::Point => ClippedShape::Points(
                self.window
                    .iter()
                    .filter_map(|p| clip::clip_point(p, rect))
                    .collect(),
            ),
            kind => {
                ClippedShape::Segments(clip::clip_polyline(&self.window, kind.is_closed(), rect))
            }
        }
    }
}

/// Read-only row for object lists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShapeSummary {
    pub id: ShapeId,
    pub name: String,
    pub kind: ShapeKind,
}

impl ShapeSummary {
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }
}

/// The shapes of one drawing.
///
/// Storage is a flat arena (`SlotMap`). Insertion order is tracked alongside and
/// only `insert`/`remove` touch either, so the two cannot drift apart.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Drawing {
    shapes: SlotMap<ShapeId, Shape>,
    order: Vec<ShapeId>,
}

impl Drawing {
    /// Inserts a shape and returns its new id.
    pub fn insert(&mut self, mut shape: Shape) -> ShapeId {
        let id = self.shapes.insert_with_key(|key| {
            shape.id = key;
            shape
        });
        self.order.push(id);
        id
    }

    /// Removes a shape; its id is never handed out again while the drawing lives.
    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        let shape = self.shapes.remove(id)?;
        self.order.retain(|&other| other != id);
        Some(shape)
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(id)
    }

    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.get_mut(id)
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.shapes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Ids in insertion order.
    pub fn ids(&self) -> &[ShapeId] {
        &self.order
    }

    /// Shapes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.order.iter().filter_map(|&id| self.shapes.get(id))
    }

    /// Shapes in arbitrary order, mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Shape> {
        self.shapes.values_mut()
    }

    /// First shape with the given name, in insertion order.
    pub fn find_by_name(&self, name: &str) -> Option<&Shape> {
        self.iter().find(|shape| shape.name == name)
    }

    /// `(id, name, kind)` rows in insertion order.
    pub fn summaries(&self) -> Vec<ShapeSummary> {
        self.iter()
            .map(|shape| ShapeSummary {
                id: shape.id,
                name: shape.name.clone(),
                kind: shape.kind,
            })
            .collect()
    }
}

/// The undoable state of an editing session: the shapes and the camera.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scene {
    pub drawing: Drawing,
    pub window: Window,
}

impl Scene {
    pub fn new(window: Window) -> Self {
        Self {
            drawing: Drawing::default(),
            window,
        }
    }

    /// Recomputes the window vertices of one shape.
    pub fn refresh_shape(&mut self, id: ShapeId, bezier_steps: usize) -> Result<()> {
        let normalization = self.window.normalization();
        let shape = self
            .drawing
            .get_mut(id)
            .ok_or(CanvasError::UnknownShape(id))?;
        shape.world_to_window(self.window.transform(), &normalization, bezier_steps)
    }

    /// Recomputes the window vertices of every shape, e.g. after a camera move.
    pub fn refresh_all(&mut self, bezier_steps: usize) -> Result<()> {
        let normalization = self.window.normalization();
        let window_t = *self.window.transform();
        for shape in self.drawing.iter_mut() {
            shape.world_to_window(&window_t, &normalization, bezier_steps)?;
        }
        Ok(())
    }
}

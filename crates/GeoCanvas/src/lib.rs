//! # GeoCanvas
//!
//! `geo_canvas` is a headless 2D/3D geometry editing engine. It owns the shapes
//! of a drawing, the camera window, and the world → window → viewport pipeline,
//! while delegating widgets and rasterization to the host application.
//!
//! ## Core Architecture
//! - **Algebra (`src/vector.rs`, `src/matrix.rs`)**: homogeneous row vectors and matrices.
//! - **Transforms (`src/transform.rs`)**: translation, scale and rotation about a pivot.
//! - **Model (`src/model.rs`)**: shapes stored in a flat arena (SlotMap).
//! - **Window (`src/window.rs`)**: camera transform and normalization to clip space.
//! - **Clip (`src/clip.rs`)**: parametric line clipping of every shape outline.
//! - **Render (`src/render.rs`)**: outputs a list of `DrawCommand`s for the host to draw.

pub mod clip;
pub mod command;
pub mod config;
pub mod curve;
pub mod error;
pub mod history;
pub mod input;
pub mod matrix;
pub mod model;
pub mod painter;
pub mod render;
pub mod transform;
pub mod vector;
pub mod viewport;
pub mod window;

use glam::Vec2;

use clip::ClippedShape;
use history::HistoryManager;
use model::{Scene, Shape, ShapeFlags, ShapeId, ShapeKind, ShapeSummary};
use render::RenderList;
use viewport::Viewport;
use window::Window;

// Re-exports for convenience
pub use command::{
    Command, Direction, EditorEvent, PivotMode, RotationDirection, Target, ZoomDirection,
};
pub use config::{Dimension, EditorConfig, ShapeStyle};
pub use error::{CanvasError, Result};
pub use matrix::Matrix;
pub use vector::Vector;

/// The main entry point for the library: one editing session.
///
/// The `Editor` holds the scene (shapes and window), the viewport, the current
/// selection and the undo history. Every mutation goes through `&mut self`, so a
/// session always has exactly one owner and commands never interleave.
pub struct Editor {
    config: EditorConfig,
    /// The device area the window is mapped onto.
    pub viewport: Viewport,
    scene: Scene,
    selected: Option<ShapeId>,
    history: HistoryManager<Scene>,
}

impl Editor {
    /// Creates a new session with the given configuration.
    ///
    /// The configuration is validated first (see [`EditorConfig::validate`]).
    ///
    /// The window starts centered on the origin, one world unit per pixel of the
    /// clip region.
    pub fn new(config: EditorConfig) -> Result<Self> {
        config.validate()?;
        let viewport = Viewport::new(config.viewport_size, config.viewport_margin);
        let inner = viewport.inner_size().as_dvec2();
        let window = Window::centered(inner.x / 2.0, inner.y / 2.0, config.dimension)?;
        tracing::debug!(
            dimension = ?config.dimension,
            width = window.width(),
            height = window.height(),
            "Editor created"
        );
        Ok(Self {
            history: HistoryManager::new(config.max_history),
            scene: Scene::new(window),
            selected: None,
            viewport,
            config,
        })
    }

    /// Configuration is fixed for the lifetime of the session.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn dimension(&self) -> Dimension {
        self.config.dimension
    }

    pub fn window(&self) -> &Window {
        &self.scene.window
    }

    pub fn drawing(&self) -> &model::Drawing {
        &self.scene.drawing
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.scene.drawing.get(id)
    }

    pub fn selected(&self) -> Option<ShapeId> {
        self.selected
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Updates the viewport size (e.g., on window resize).
    ///
    /// Only the device mapping changes; the world-space window stays put.
    pub fn update_viewport_size(&mut self, size: Vec2) {
        self.viewport.size = size;
    }

    /// Point of the configured dimension.
    pub fn point(&self, x: f64, y: f64, z: f64) -> Vector {
        Vector::homogeneous(x, y, z, self.config.default_w, self.config.dimension)
    }

    /// The core update step: applies one command and returns the new frame.
    pub fn update(&mut self, command: Command) -> Result<(RenderList, Vec<EditorEvent>)> {
        let events = self.apply(command)?;
        Ok((self.render(), events))
    }

    /// Applies one command.
    ///
    /// A rejected command leaves the session untouched and is not recorded in
    /// the history.
    pub fn apply(&mut self, command: Command) -> Result<Vec<EditorEvent>> {
        let result = self.dispatch(command);
        if let Err(e) = &result {
            tracing::warn!(error = %e, "Command rejected");
        }
        result
    }

    fn dispatch(&mut self, command: Command) -> Result<Vec<EditorEvent>> {
        match command {
            Command::InsertShape {
                kind,
                name,
                vertices,
            } => {
                let id = self.create_shape(kind, name, vertices)?;
                Ok(vec![EditorEvent::ShapeInserted(id), EditorEvent::RepaintNeeded])
            }
            Command::RemoveShape(id) => {
                self.remove_shape(id)?;
                Ok(vec![EditorEvent::ShapeRemoved(id), EditorEvent::RepaintNeeded])
            }
            Command::Select(id) => {
                self.select(id)?;
                Ok(vec![EditorEvent::SelectionChanged(id), EditorEvent::RepaintNeeded])
            }
            Command::Move(direction) => {
                let step = self.config.step;
                let (dx, dy) = match direction {
                    Direction::Up => (0.0, step),
                    Direction::Down => (0.0, -step),
                    Direction::Left => (-step, 0.0),
                    Direction::Right => (step, 0.0),
                };
                // Moving the camera shifts the world the opposite way.
                let sign = match self.target() {
                    Target::Shape(_) => 1.0,
                    Target::Window => -1.0,
                };
                let t = transform::translation_by(sign * dx, sign * dy, 0.0, self.dimension());
                self.transform_target(&t)
            }
            Command::Translate { dx, dy, dz } => {
                let t = transform::translation_by(dx, dy, dz, self.dimension());
                self.transform_target(&t)
            }
            Command::Zoom(direction) => {
                let factor = match direction {
                    ZoomDirection::In => self.config.zoom_factor,
                    ZoomDirection::Out => 1.0 / self.config.zoom_factor,
                };
                let pivot = self.resolve_pivot(PivotMode::ObjectCenter)?;
                let t = transform::scale(factor, &pivot)?;
                self.transform_target(&t)
            }
            Command::Scale { factor, pivot } => {
                let pivot = self.resolve_pivot(pivot)?;
                let t = transform::scale(factor, &pivot)?;
                self.transform_target(&t)
            }
            Command::Rotate {
                degrees,
                direction,
                pivot,
            } => {
                let radians = degrees.unwrap_or(self.config.rotation_degrees).to_radians();
                // Shapes turn the way the user asked; turning the camera turns
                // the world the opposite way.
                let angle = match (self.target(), direction) {
                    (Target::Shape(_), RotationDirection::Clockwise) => -radians,
                    (Target::Shape(_), RotationDirection::Counterclockwise) => radians,
                    (Target::Window, RotationDirection::Clockwise) => radians,
                    (Target::Window, RotationDirection::Counterclockwise) => -radians,
                };
                let pivot = self.resolve_pivot(pivot)?;
                let t = transform::rotation(angle, &pivot);
                self.transform_target(&t)
            }
            Command::ResetWindow => {
                self.history.commit(&self.scene);
                self.scene.window.reset();
                self.scene.refresh_all(self.config.bezier_steps)?;
                tracing::debug!("Window reset");
                Ok(vec![
                    EditorEvent::Transformed(Target::Window),
                    EditorEvent::RepaintNeeded,
                ])
            }
            Command::SetHidden { id, hidden } => {
                self.set_hidden(id, hidden)?;
                Ok(vec![EditorEvent::ShapeUpdated(id), EditorEvent::RepaintNeeded])
            }
            Command::SetStyle { id, style } => {
                self.set_style(id, style)?;
                Ok(vec![EditorEvent::ShapeUpdated(id), EditorEvent::RepaintNeeded])
            }
            Command::Undo => self.restore(true),
            Command::Redo => self.restore(false),
        }
    }

    /// The current transform target: the selected shape, or the window.
    pub fn target(&self) -> Target {
        match self.selected {
            Some(id) => Target::Shape(id),
            None => Target::Window,
        }
    }

    /// Creates a shape and computes its window vertices.
    pub fn create_shape(
        &mut self,
        kind: ShapeKind,
        name: impl Into<String>,
        vertices: Vec<Vector>,
    ) -> Result<ShapeId> {
        for v in &vertices {
            v.check_dimension(self.config.dimension)?;
        }
        let shape = Shape::new(kind, name, vertices)?;

        self.history.commit(&self.scene);
        let id = self.scene.drawing.insert(shape);
        self.scene.refresh_shape(id, self.config.bezier_steps)?;
        tracing::debug!(shape = ?id, kind = kind.label(), "Shape inserted");
        Ok(id)
    }

    /// Removes a shape, dropping the selection if it pointed at it.
    pub fn remove_shape(&mut self, id: ShapeId) -> Result<Shape> {
        if !self.scene.drawing.contains(id) {
            return Err(CanvasError::UnknownShape(id));
        }
        self.history.commit(&self.scene);
        let shape = self
            .scene
            .drawing
            .remove(id)
            .ok_or(CanvasError::UnknownShape(id))?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        tracing::debug!(shape = ?id, name = %shape.name, "Shape removed");
        Ok(shape)
    }

    /// Changes the transform target. Selection is not recorded in the history.
    pub fn select(&mut self, id: Option<ShapeId>) -> Result<()> {
        if let Some(id) = id
            && !self.scene.drawing.contains(id)
        {
            return Err(CanvasError::UnknownShape(id));
        }
        if let Some(previous) = self.selected.and_then(|p| self.scene.drawing.get_mut(p)) {
            previous.flags.remove(ShapeFlags::SELECTED);
        }
        if let Some(shape) = id.and_then(|id| self.scene.drawing.get_mut(id)) {
            shape.flags.insert(ShapeFlags::SELECTED);
        }
        self.selected = id;
        tracing::debug!(shape = ?id, "Selection changed");
        Ok(())
    }

    /// Hides or shows a shape. Recorded in the history.
    pub fn set_hidden(&mut self, id: ShapeId, hidden: bool) -> Result<()> {
        if !self.scene.drawing.contains(id) {
            return Err(CanvasError::UnknownShape(id));
        }
        self.history.commit(&self.scene);
        if let Some(shape) = self.scene.drawing.get_mut(id) {
            shape.flags.set(ShapeFlags::HIDDEN, hidden);
        }
        tracing::debug!(shape = ?id, hidden, "Visibility changed");
        Ok(())
    }

    /// Sets or clears a shape's style override. The selection highlight still wins.
    pub fn set_style(&mut self, id: ShapeId, style: Option<ShapeStyle>) -> Result<()> {
        if !self.scene.drawing.contains(id) {
            return Err(CanvasError::UnknownShape(id));
        }
        self.history.commit(&self.scene);
        if let Some(shape) = self.scene.drawing.get_mut(id) {
            shape.style = style;
        }
        tracing::debug!(shape = ?id, "Style override changed");
        Ok(())
    }

    /// Composes `t` into a shape's accumulated transform.
    pub fn apply_transform_to_shape(&mut self, id: ShapeId, t: &Matrix) -> Result<()> {
        if !self.scene.drawing.contains(id) {
            return Err(CanvasError::UnknownShape(id));
        }
        self.check_matrix(t)?;
        self.history.commit(&self.scene);
        if let Some(shape) = self.scene.drawing.get_mut(id) {
            shape.apply_transform(t)?;
        }
        self.scene.refresh_shape(id, self.config.bezier_steps)?;
        tracing::debug!(shape = ?id, "Transform applied to shape");
        Ok(())
    }

    /// Composes `t` into the window transform and refreshes every shape.
    pub fn apply_transform_to_window(&mut self, t: &Matrix) -> Result<()> {
        self.check_matrix(t)?;
        self.history.commit(&self.scene);
        self.scene.window.apply_transform(t)?;
        self.scene.refresh_all(self.config.bezier_steps)?;
        tracing::debug!("Transform applied to window");
        Ok(())
    }

    /// Mass center of a shape's current vertices.
    pub fn mass_center_of(&self, id: ShapeId) -> Result<Vector> {
        self.scene
            .drawing
            .get(id)
            .map(Shape::mass_center)
            .ok_or(CanvasError::UnknownShape(id))
    }

    /// `(id, name, kind)` rows for the object list, in insertion order.
    pub fn summaries(&self) -> Vec<ShapeSummary> {
        self.scene.drawing.summaries()
    }

    /// Clipped clip-space geometry of every visible shape, in insertion order.
    pub fn visible_geometry(&self) -> Vec<(ShapeId, ClippedShape)> {
        let rect = self.scene.window.clip_rect();
        self.scene
            .drawing
            .iter()
            .filter(|shape| !shape.flags.contains(ShapeFlags::HIDDEN))
            .map(|shape| (shape.id, shape.clip(&rect)))
            .filter(|(_, clipped)| !clipped.is_empty())
            .collect()
    }

    /// Draw commands for the current state.
    pub fn render(&self) -> RenderList {
        painter::Painter::draw(
            &self.scene.window,
            &self.viewport,
            &self.scene.drawing,
            &self.config.style,
        )
    }

    fn transform_target(&mut self, t: &Matrix) -> Result<Vec<EditorEvent>> {
        let target = self.target();
        match target {
            Target::Shape(id) => self.apply_transform_to_shape(id, t)?,
            Target::Window => self.apply_transform_to_window(t)?,
        }
        Ok(vec![EditorEvent::Transformed(target), EditorEvent::RepaintNeeded])
    }

    fn check_matrix(&self, t: &Matrix) -> Result<()> {
        if t.dimension() == self.config.dimension {
            Ok(())
        } else {
            Err(CanvasError::DimensionMismatch {
                expected: self.config.dimension,
                found: t.dimension(),
            })
        }
    }

    fn resolve_pivot(&self, pivot: PivotMode) -> Result<Vector> {
        let pivot = match pivot {
            PivotMode::ObjectCenter => match self.target() {
                Target::Shape(id) => self.mass_center_of(id)?,
                Target::Window => self.scene.window.mass_center(),
            },
            PivotMode::WorldOrigin => self.point(0.0, 0.0, 0.0),
            PivotMode::Specific(v) => v,
        };
        pivot.check_dimension(self.config.dimension)?;
        Ok(pivot)
    }

    fn restore(&mut self, undo: bool) -> Result<Vec<EditorEvent>> {
        let restored = if undo {
            self.history.undo(&mut self.scene)
        } else {
            self.history.redo(&mut self.scene)
        };
        if !restored {
            return Ok(Vec::new());
        }

        // Snapshots carry the flags of their time; the live selection wins.
        let previous = self.selected;
        let selected = self.selected.filter(|&id| self.scene.drawing.contains(id));
        for shape in self.scene.drawing.iter_mut() {
            shape.flags.set(ShapeFlags::SELECTED, Some(shape.id) == selected);
        }
        self.selected = selected;
        self.scene.refresh_all(self.config.bezier_steps)?;
        tracing::debug!(undo, "History restored");

        let mut events = vec![EditorEvent::HistoryRestored];
        if selected != previous {
            events.push(EditorEvent::SelectionChanged(None));
        }
        events.push(EditorEvent::RepaintNeeded);
        Ok(events)
    }
}

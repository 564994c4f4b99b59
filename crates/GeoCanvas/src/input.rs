//! # Input Protocol
//!
//! Helpers for the boundary between form fields and the engine. Hosts collect
//! raw text from their widgets and run it through here, so bad numbers and
//! non-positive factors are reported as validation errors before any matrix is
//! built.

use serde::{Deserialize, Serialize};

use crate::command::{Command, PivotMode};
use crate::config::EditorConfig;
use crate::error::{CanvasError, Result};
use crate::model::ShapeKind;
use crate::vector::Vector;

/// Parses a finite number from a form field. Surrounding whitespace is ignored.
pub fn parse_coordinate(field: &str, text: &str) -> Result<f64> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CanvasError::InvalidNumber {
            field: field.to_string(),
            text: text.to_string(),
        }),
    }
}

/// Parses a scale factor; it must be strictly positive.
pub fn parse_scale_factor(field: &str, text: &str) -> Result<f64> {
    let value = parse_coordinate(field, text)?;
    if value <= 0.0 {
        return Err(CanvasError::InvalidScaleFactor(value));
    }
    Ok(value)
}

/// The x/y/z text fields of one vertex.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexForm {
    pub x: String,
    pub y: String,
    /// Only read in `Spatial` mode; an empty field means `default_z`.
    pub z: String,
}

impl VertexForm {
    pub fn new(x: impl Into<String>, y: impl Into<String>, z: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            z: z.into(),
        }
    }

    /// Parses the fields into a point of the configured dimension.
    pub fn to_vector(&self, config: &EditorConfig) -> Result<Vector> {
        let x = parse_coordinate("x", &self.x)?;
        let y = parse_coordinate("y", &self.y)?;
        let z = if config.dimension.is_spatial() && !self.z.trim().is_empty() {
            parse_coordinate("z", &self.z)?
        } else {
            config.default_z
        };
        Ok(Vector::homogeneous(x, y, z, config.default_w, config.dimension))
    }

    /// A `Specific` pivot from the fields.
    pub fn to_pivot(&self, config: &EditorConfig) -> Result<PivotMode> {
        Ok(PivotMode::Specific(self.to_vector(config)?))
    }
}

/// Collects vertices one at a time before a shape is created.
///
/// Mirrors the usual "add vertex / delete vertex / insert" dialog flow.
#[derive(Clone, Debug, Default)]
pub struct PolygonBuilder {
    vertices: Vec<Vector>,
}

impl PolygonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and appends a vertex; returns its index.
    pub fn push_form(&mut self, form: &VertexForm, config: &EditorConfig) -> Result<usize> {
        let vertex = form.to_vector(config)?;
        Ok(self.push(vertex))
    }

    /// Appends a vertex; returns its index.
    pub fn push(&mut self, vertex: Vector) -> usize {
        self.vertices.push(vertex);
        self.vertices.len() - 1
    }

    pub fn remove(&mut self, index: usize) -> Option<Vector> {
        (index < self.vertices.len()).then(|| self.vertices.remove(index))
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn vertices(&self) -> &[Vector] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Drains the collected vertices into an insert command.
    ///
    /// Vertex counts are checked when the command is applied.
    pub fn build(&mut self, kind: ShapeKind, name: impl Into<String>) -> Command {
        Command::InsertShape {
            kind,
            name: name.into(),
            vertices: std::mem::take(&mut self.vertices),
        }
    }
}

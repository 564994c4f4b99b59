//! # Commands
//!
//! Every state transition of an editing session is one [`Command`]. The host maps
//! its buttons, dialogs and key bindings onto these and hands them to
//! `Editor::apply`; the editor answers with [`EditorEvent`]s.

use serde::{Deserialize, Serialize};

use crate::config::ShapeStyle;
use crate::model::{ShapeId, ShapeKind};
use crate::vector::Vector;

/// Arrow-button directions, from the user's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomDirection {
    In,
    Out,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RotationDirection {
    Clockwise,
    Counterclockwise,
}

/// Fixed point of a scale or rotation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PivotMode {
    /// Mass center of the selected shape, or the window center.
    ObjectCenter,
    /// The world origin.
    WorldOrigin,
    /// A user-supplied point.
    Specific(Vector),
}

/// What a transform command acts on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Target {
    Shape(ShapeId),
    Window,
}

/// A request from the host application.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Create a shape from already-parsed vertices.
    InsertShape {
        kind: ShapeKind,
        name: String,
        vertices: Vec<Vector>,
    },
    RemoveShape(ShapeId),
    /// Choose the target of transform commands; `None` targets the window.
    Select(Option<ShapeId>),
    /// Move the target one configured step.
    ///
    /// With no selection this moves the camera, so the world shifts the other way.
    Move(Direction),
    /// Translate the target by explicit deltas, applied as given (for the
    /// window this moves the world). `dz` is ignored in `Planar` mode.
    Translate { dx: f64, dy: f64, dz: f64 },
    /// Scale the target by the configured zoom factor (or its inverse).
    Zoom(ZoomDirection),
    /// Scale the target by an explicit factor.
    Scale { factor: f64, pivot: PivotMode },
    /// Rotate the target as the user sees it.
    ///
    /// With no selection the camera turns, so the world turns the other way.
    /// `degrees: None` uses the configured rotation step.
    Rotate {
        degrees: Option<f64>,
        direction: RotationDirection,
        pivot: PivotMode,
    },
    /// Drop every camera transform.
    ResetWindow,
    /// Show or hide a shape. Hidden shapes are neither clipped nor painted.
    SetHidden { id: ShapeId, hidden: bool },
    /// Override the style of one shape; `None` restores the default style.
    SetStyle {
        id: ShapeId,
        style: Option<ShapeStyle>,
    },
    Undo,
    Redo,
}

/// Events emitted by the Editor to the host application.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditorEvent {
    ShapeInserted(ShapeId),
    ShapeRemoved(ShapeId),
    /// Visibility or style of a shape changed.
    ShapeUpdated(ShapeId),
    SelectionChanged(Option<ShapeId>),
    /// A shape or the window received a new transform.
    Transformed(Target),
    /// Undo or redo replaced the scene.
    HistoryRestored,
    /// The drawing visual state has changed, requiring a repaint.
    RepaintNeeded,
}

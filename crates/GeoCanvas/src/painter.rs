use crate::clip::ClippedShape;
use crate::config::CanvasStyle;
use crate::model::{Drawing, ShapeFlags};
use crate::render::{DrawCommand, RenderList};
use crate::viewport::Viewport;
use crate::window::Window;

/// Turns a drawing into device-space draw commands.
///
/// The `Painter` expects window vertices to be current (see
/// `Shape::world_to_window`). It handles:
/// - The border of the clip region
/// - Clipping every shape against the window's clip rectangle
/// - Viewport mapping of the surviving geometry
/// - Selection highlight and hidden shapes
pub struct Painter;

impl Painter {
    /// Generates a list of draw commands to render the entire drawing.
    ///
    /// Shapes are painted in insertion order, after the border.
    pub fn draw(
        window: &Window,
        viewport: &Viewport,
        drawing: &Drawing,
        style: &CanvasStyle,
    ) -> RenderList {
        let mut draw_list = Vec::new();

        let (pos, size) = viewport.border();
        draw_list.push(DrawCommand::Rect {
            pos,
            size,
            color: style.border_color,
            width: 1.0,
        });

        let rect = window.clip_rect();
        for shape in drawing.iter() {
            if shape.flags.contains(ShapeFlags::HIDDEN) {
                continue;
            }

            // Resolve style: Selected > Override > Default
            let shape_style = if shape.flags.contains(ShapeFlags::SELECTED) {
                &style.shape_selected
            } else {
                shape.style.as_ref().unwrap_or(&style.shape_default)
            };

            match shape.clip(&rect) {
                ClippedShape::Points(points) => {
                    draw_list.extend(points.iter().map(|p| DrawCommand::Point {
                        pos: viewport.to_device(p),
                        color: shape_style.color,
                        radius: shape_style.width,
                    }));
                }
                ClippedShape::Segments(segments) => {
                    draw_list.extend(segments.iter().map(|s| DrawCommand::Line {
                        start: viewport.to_device(&s.start),
                        end: viewport.to_device(&s.end),
                        color: shape_style.color,
                        width: shape_style.width,
                    }));
                }
            }
        }

        draw_list
    }
}

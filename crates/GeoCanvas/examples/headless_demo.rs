use geo_canvas::input::{PolygonBuilder, VertexForm};
use geo_canvas::model::ShapeKind;
use geo_canvas::render::DrawCommand;
use geo_canvas::{
    Command, Direction, Editor, EditorConfig, PivotMode, RotationDirection, ZoomDirection,
};
use glam::Vec2;

fn main() -> geo_canvas::Result<()> {
    tracing_subscriber::fmt::init();
    println!("=== GeoCanvas Headless Demo ===");

    // 1. Initialize Editor
    let config = EditorConfig::default();
    let mut editor = Editor::new(config.clone())?;
    editor.update_viewport_size(Vec2::new(1280.0, 720.0));

    // 2. Populate the drawing through the same forms a GUI would use
    let mut builder = PolygonBuilder::new();
    for (x, y) in [("-100", "-50"), ("100", "-50"), ("0", "120")] {
        builder.push_form(&VertexForm::new(x, y, ""), &config)?;
    }
    editor.apply(builder.build(ShapeKind::Polygon, "Triangle"))?;

    editor.apply(Command::InsertShape {
        kind: ShapeKind::Bezier,
        name: "Wave".into(),
        vertices: vec![
            editor.point(-300.0, 0.0, 0.0),
            editor.point(-200.0, 200.0, 0.0),
            editor.point(200.0, -200.0, 0.0),
            editor.point(300.0, 0.0, 0.0),
        ],
    })?;

    println!("Created drawing:");
    for summary in editor.summaries() {
        println!(
            "  - #{} {} ({})",
            summary.id.as_u64(),
            summary.name,
            summary.label()
        );
    }

    // 3. Script a short editing session
    let triangle = editor
        .drawing()
        .find_by_name("Triangle")
        .map(|shape| shape.id);
    let script = vec![
        Command::Select(triangle),
        Command::Rotate {
            degrees: None,
            direction: RotationDirection::Clockwise,
            pivot: PivotMode::ObjectCenter,
        },
        Command::Move(Direction::Right),
        Command::Select(None),
        Command::Zoom(ZoomDirection::In),
        Command::Move(Direction::Up),
        Command::Undo,
    ];

    for (frame, command) in script.into_iter().enumerate() {
        println!("\n--- Frame {} ---", frame);
        println!(">> {:?}", command);

        let (draw_list, events) = editor.update(command)?;
        for event in &events {
            println!("Event: {:?}", event);
        }

        let lines = draw_list
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Line { .. }))
            .count();
        println!("Render: {} commands ({} lines)", draw_list.len(), lines);
    }

    println!("\nDemo Finished.");
    Ok(())
}

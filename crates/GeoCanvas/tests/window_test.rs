use geo_canvas::transform;
use geo_canvas::viewport::Viewport;
use geo_canvas::window::Window;
use geo_canvas::{CanvasError, Dimension, Vector};
use glam::{DVec2, Vec2};

fn p(x: f64, y: f64) -> Vector {
    Vector::point(x, y, 0.0, Dimension::Planar)
}

#[test]
fn test_normalization_maps_corners() {
    let window = Window::new(p(0.0, 0.0), p(200.0, 100.0)).unwrap();
    assert_eq!(window.width(), 200.0);
    assert_eq!(window.height(), 100.0);
    assert_eq!(window.mass_center(), p(100.0, 50.0));

    let n = window.normalization();
    assert!((p(0.0, 0.0) * &n).approx_eq(&p(-1.0, -1.0), 1e-12));
    assert!((p(200.0, 100.0) * &n).approx_eq(&p(1.0, 1.0), 1e-12));
    assert!((p(100.0, 50.0) * &n).approx_eq(&p(0.0, 0.0), 1e-12));
}

#[test]
fn test_view_matrix_includes_camera() {
    let mut window = Window::centered(100.0, 100.0, Dimension::Planar).unwrap();
    assert!(window.view_matrix().approx_eq(&window.normalization(), 0.0));

    // Shift the world left by half the window: the right edge lands in the center.
    let t = transform::translation_by(-100.0, 0.0, 0.0, Dimension::Planar);
    window.apply_transform(&t).unwrap();
    let v = p(100.0, 0.0) * &window.view_matrix();
    assert!(v.approx_eq(&p(0.0, 0.0), 1e-12));

    window.reset();
    assert!(window.transform().is_identity(0.0));
}

#[test]
fn test_degenerate_window() {
    assert!(matches!(
        Window::new(p(0.0, 0.0), p(0.0, 10.0)),
        Err(CanvasError::DegenerateWindow)
    ));
    assert!(matches!(
        Window::new(p(5.0, 5.0), p(1.0, 10.0)),
        Err(CanvasError::DegenerateWindow)
    ));
    assert!(Window::new(p(0.0, 0.0), Vector::point(1.0, 1.0, 0.0, Dimension::Spatial)).is_err());
}

#[test]
fn test_viewport_mapping() {
    let viewport = Viewport::new(Vec2::new(220.0, 120.0), 10.0);
    assert_eq!(viewport.inner_size(), Vec2::new(200.0, 100.0));
    assert_eq!(viewport.border(), (Vec2::splat(10.0), Vec2::new(200.0, 100.0)));

    // Clip-space corners; device y grows downwards.
    assert_eq!(viewport.to_device(&p(-1.0, 1.0)), Vec2::new(10.0, 10.0));
    assert_eq!(viewport.to_device(&p(1.0, -1.0)), Vec2::new(210.0, 110.0));
    assert_eq!(viewport.to_device(&p(0.0, 0.0)), Vec2::new(110.0, 60.0));

    let back = viewport.to_normalized(Vec2::new(160.0, 35.0));
    assert!((back - DVec2::new(0.5, 0.5)).length() < 1e-12);
}

#[test]
fn test_viewport_smaller_than_margin() {
    let viewport = Viewport::new(Vec2::new(10.0, 10.0), 10.0);
    assert_eq!(viewport.inner_size(), Vec2::ZERO);
}

use geo_canvas::clip::{self, ClipRect};
use geo_canvas::{Dimension, Vector};
use glam::DVec2;

fn p(x: f64, y: f64) -> Vector {
    Vector::point(x, y, 0.0, Dimension::Planar)
}

fn rect() -> ClipRect {
    ClipRect::new(DVec2::ZERO, DVec2::splat(10.0))
}

#[test]
fn test_segment_inside_is_unchanged() {
    let a = p(1.0, 2.0);
    let b = p(8.0, 9.0);
    let s = clip::clip_segment(&a, &b, &rect()).unwrap();
    assert_eq!(s.start, a);
    assert_eq!(s.end, b);
}

#[test]
fn test_segment_outside_is_rejected() {
    assert!(clip::clip_segment(&p(-10.0, -10.0), &p(-5.0, -5.0), &rect()).is_none());
    // Crosses the corner region without touching the rectangle.
    assert!(clip::clip_segment(&p(-5.0, 8.0), &p(2.0, 15.0), &rect()).is_none());
}

#[test]
fn test_segment_crossing_edge_is_cut() {
    let a = p(5.0, 5.0);
    let s = clip::clip_segment(&a, &p(15.0, 5.0), &rect()).unwrap();
    assert_eq!(s.start, a);
    assert!(s.end.approx_eq(&p(10.0, 5.0), 1e-12));

    // Both ends outside, middle visible.
    let s = clip::clip_segment(&p(-5.0, 5.0), &p(15.0, 5.0), &rect()).unwrap();
    assert!(s.start.approx_eq(&p(0.0, 5.0), 1e-12));
    assert!(s.end.approx_eq(&p(10.0, 5.0), 1e-12));
}

#[test]
fn test_parallel_segments_outside_any_side() {
    // Vertical, left and right of the rectangle.
    assert!(clip::clip_segment(&p(-1.0, 2.0), &p(-1.0, 8.0), &rect()).is_none());
    assert!(clip::clip_segment(&p(11.0, 2.0), &p(11.0, 8.0), &rect()).is_none());
    // Horizontal, below and above.
    assert!(clip::clip_segment(&p(2.0, -1.0), &p(8.0, -1.0), &rect()).is_none());
    assert!(clip::clip_segment(&p(2.0, 11.0), &p(8.0, 11.0), &rect()).is_none());
}

#[test]
fn test_segment_on_boundary_is_kept() {
    let s = clip::clip_segment(&p(0.0, 0.0), &p(10.0, 0.0), &rect()).unwrap();
    assert_eq!(s.start, p(0.0, 0.0));
    assert_eq!(s.end, p(10.0, 0.0));
}

#[test]
fn test_degenerate_segment() {
    assert!(clip::clip_segment(&p(3.0, 3.0), &p(3.0, 3.0), &rect()).is_some());
    assert!(clip::clip_segment(&p(30.0, 3.0), &p(30.0, 3.0), &rect()).is_none());
}

#[test]
fn test_points() {
    assert_eq!(clip::clip_point(&p(10.0, 0.0), &rect()), Some(p(10.0, 0.0)));
    assert_eq!(clip::clip_point(&p(10.5, 0.0), &rect()), None);
}

#[test]
fn test_polyline_closing_edge() {
    let triangle = [p(1.0, 1.0), p(9.0, 1.0), p(5.0, 8.0)];
    assert_eq!(clip::clip_polyline(&triangle, false, &rect()).len(), 2);

    let closed = clip::clip_polyline(&triangle, true, &rect());
    assert_eq!(closed.len(), 3);
    assert_eq!(closed[2].start, p(5.0, 8.0));
    assert_eq!(closed[2].end, p(1.0, 1.0));

    // Edges entirely outside are dropped.
    let partly = [p(1.0, 1.0), p(5.0, 5.0), p(20.0, 20.0), p(30.0, 20.0)];
    assert_eq!(clip::clip_polyline(&partly, false, &rect()).len(), 2);
}

#[test]
fn test_canonical_rect() {
    let rect = ClipRect::canonical();
    assert!(rect.contains(&p(-1.0, 1.0)));
    assert!(!rect.contains(&p(0.0, 1.01)));
}

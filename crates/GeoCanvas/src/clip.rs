//! # Clipping
//!
//! Parametric (Liang–Barsky) line clipping against an axis-aligned rectangle.
//! Every function here is pure and total: a well-formed rectangle and any pair
//! of points always produce a (possibly empty) result.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::vector::Vector;

/// Axis-aligned clipping rectangle in the xy plane.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClipRect {
    pub min: DVec2,
    pub max: DVec2,
}

impl ClipRect {
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    /// The normalized clip space, `[-1, 1]²`.
    pub fn canonical() -> Self {
        Self::new(DVec2::splat(-1.0), DVec2::splat(1.0))
    }

    /// Inclusive containment test on the xy projection.
    pub fn contains(&self, p: &Vector) -> bool {
        p.x() >= self.min.x && p.x() <= self.max.x && p.y() >= self.min.y && p.y() <= self.max.y
    }
}

/// A visible piece of a shape outline.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Vector,
    pub end: Vector,
}

/// Clipped geometry of one shape, ready for the viewport mapping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ClippedShape {
    /// Isolated points that fell inside the rectangle.
    Points(Vec<Vector>),
    /// Surviving (sub)segments, in outline order.
    Segments(Vec<Segment>),
}

impl ClippedShape {
    pub fn is_empty(&self) -> bool {
        match self {
            ClippedShape::Points(points) => points.is_empty(),
            ClippedShape::Segments(segments) => segments.is_empty(),
        }
    }
}

/// Keeps `p` when it lies inside `rect`.
pub fn clip_point(p: &Vector, rect: &ClipRect) -> Option<Vector> {
    rect.contains(p).then_some(*p)
}

/// Clips the segment `pa → pb` against `rect`.
///
/// Returns `None` when nothing of the segment is visible. Endpoints that are
/// already inside are returned bit-for-bit unchanged.
pub fn clip_segment(pa: &Vector, pb: &Vector, rect: &ClipRect) -> Option<Segment> {
    let dx = pb.x() - pa.x();
    let dy = pb.y() - pa.y();

    let p = [-dx, dx, -dy, dy];
    let q = [
        pa.x() - rect.min.x,
        rect.max.x - pa.x(),
        pa.y() - rect.min.y,
        rect.max.y - pa.y(),
    ];

    // Parallel to a boundary and outside of its slab.
    if p.iter().zip(&q).any(|(&p, &q)| p == 0.0 && q < 0.0) {
        return None;
    }

    let mut entering = 0.0_f64;
    let mut leaving = 1.0_f64;
    for (&p, &q) in p.iter().zip(&q) {
        if p < 0.0 {
            entering = entering.max(q / p);
        } else if p > 0.0 {
            leaving = leaving.min(q / p);
        }
    }

    if entering > leaving {
        return None;
    }

    Some(Segment {
        start: lerp(pa, pb, entering),
        end: lerp(pa, pb, leaving),
    })
}

/// Clips every consecutive vertex pair of a polyline.
///
/// A `closed` polyline also clips the edge from the last vertex back to the
/// first. The result may be shorter than the input, or empty.
pub fn clip_polyline(points: &[Vector], closed: bool, rect: &ClipRect) -> Vec<Segment> {
    let mut segments: Vec<Segment> = points
        .windows(2)
        .filter_map(|pair| clip_segment(&pair[0], &pair[1], rect))
        .collect();

    if closed
        && points.len() > 2
        && let (Some(last), Some(first)) = (points.last(), points.first())
        && let Some(segment) = clip_segment(last, first, rect)
    {
        segments.push(segment);
    }
    segments
}

fn lerp(pa: &Vector, pb: &Vector, t: f64) -> Vector {
    if t == 0.0 {
        *pa
    } else if t == 1.0 {
        *pb
    } else {
        *pa + (*pb - *pa) * t
    }
}

//! Cubic Bezier flattening.

use crate::vector::Vector;

/// Evaluates `B(t) = (1-t)³p1 + 3t(1-t)²p2 + 3t²(1-t)p3 + t³p4`.
pub fn evaluate_cubic(p: &[Vector; 4], t: f64) -> Vector {
    let u = 1.0 - t;
    p[0] * (u * u * u) + p[1] * (3.0 * t * u * u) + p[2] * (3.0 * t * t * u) + p[3] * (t * t * t)
}

/// Samples one cubic at `steps + 1` evenly spaced parameters, both ends included.
pub fn sample_cubic(p: &[Vector; 4], steps: usize) -> Vec<Vector> {
    let steps = steps.max(1);
    (0..=steps)
        .map(|i| evaluate_cubic(p, i as f64 / steps as f64))
        .collect()
}

/// Flattens a chain of cubics sharing endpoints (`3k + 1` control points).
///
/// The join point of two consecutive segments is emitted once. Trailing
/// control points that do not complete a segment are ignored.
pub fn flatten(control: &[Vector], steps: usize) -> Vec<Vector> {
    let mut out: Vec<Vector> = Vec::new();
    let mut start = 0;
    while start + 3 < control.len() {
        let segment = [
            control[start],
            control[start + 1],
            control[start + 2],
            control[start + 3],
        ];
        let samples = sample_cubic(&segment, steps);
        let skip = usize::from(!out.is_empty());
        out.extend(samples.into_iter().skip(skip));
        start += 3;
    }
    out
}

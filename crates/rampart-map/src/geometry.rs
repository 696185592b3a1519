//! Pure geometry helpers for placement tests.

use rampart_core::types::Position;

/// Guard against division by zero on horizontal polygon edges.
const EDGE_EPSILON: f64 = 1e-10;

/// Ray-casting parity test: is `point` inside the polygon?
///
/// Casts a ray in +x and counts edge crossings. Points exactly on an
/// edge may land on either side; callers treat that as tolerance, not
/// contract.
pub fn point_in_polygon(point: Position, polygon: &[Position]) -> bool {
    let mut inside = false;
    let n = polygon.len();
    for i in 0..n {
        let a = polygon[i];
        let b = polygon[(i + 1) % n];
        if (a.y > point.y) != (b.y > point.y) {
            let x_cross = (b.x - a.x) * (point.y - a.y) / ((b.y - a.y) + EDGE_EPSILON) + a.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
    }
    inside
}

/// Shortest distance from `point` to the segment `a`-`b`.
pub fn point_segment_distance(point: Position, a: Position, b: Position) -> f64 {
    let ab = b.to_vec() - a.to_vec();
    let ap = point.to_vec() - a.to_vec();
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return point.distance_to(&a);
    }
    let t = (ap.dot(ab) / len_sq).clamp(0.0, 1.0);
    let closest = a.to_vec() + ab * t;
    point.to_vec().distance(closest)
}

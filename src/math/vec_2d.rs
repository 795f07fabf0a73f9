use super::{Point2, Vector2, TOLERANCE};

/// Returns the left-pointing normal of a vector: `(x, y) → (-y, x)`.
#[must_use]
pub fn left_normal(v: Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

/// Signed angle in degrees from `v` to `w`.
///
/// Magnitude is `acos(v·w / (‖v‖‖w‖))`; the sign comes from which half-plane
/// of `v` the vector `w` falls in (positive when `left_normal(v)·w > 0`).
/// Returns `0.0` when either vector has zero length: a division guard, not
/// a geometric answer.
#[must_use]
pub fn signed_angle_deg(v: Vector2, w: Vector2) -> f64 {
    let denom = (v.dot(&v) * w.dot(&w)).sqrt();
    if denom == 0.0 {
        return 0.0;
    }

    let cosine = (v.dot(&w) / denom).clamp(-1.0, 1.0);
    let radians = cosine.acos();

    let sign = left_normal(v).dot(&w);
    let radians = if sign < 0.0 { -radians } else { radians };

    radians.to_degrees()
}

/// Tolerance-based coordinate comparison of two points.
///
/// Used consistently for ring splitting, walk splitting and route
/// deduplication, where computed intersection points accumulate rounding.
#[must_use]
pub fn points_coincident(a: Point2, b: Point2) -> bool {
    (a.x - b.x).abs() <= TOLERANCE && (a.y - b.y).abs() <= TOLERANCE
}

use super::Point2;

/// A bounded segment/segment crossing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentCrossing {
    /// The intersection point.
    pub point: Point2,
    /// Fraction of the way along the *first* segment at which the crossing
    /// occurs, in `[0, 1]`.
    pub k: f64,
}

/// Parametric 2D segment-segment intersection.
///
/// Solves `a + k·(b−a) = c + u·(d−c)` and returns the crossing when both
/// parameters lie in `[0, 1]`. Returns `None` for a singular system
/// (parallel or collinear segments) or an out-of-span solution.
///
/// Boundary comparisons are exact floating comparisons on purpose: endpoint
/// grazes register as crossings with `k` of exactly `0` or `1`, and the
/// caller filters them with its own tolerance window.
#[must_use]
pub fn segment_segment_intersect_2d(
    a: Point2,
    b: Point2,
    c: Point2,
    d: Point2,
) -> Option<SegmentCrossing> {
    let da = b - a;
    let db = d - c;

    let denom = da.x * db.y - da.y * db.x;
    if denom == 0.0 {
        return None;
    }

    let dx = c.x - a.x;
    let dy = c.y - a.y;
    let k = (dx * db.y - dy * db.x) / denom;
    let u = (dx * da.y - dy * da.x) / denom;

    if !(0.0..=1.0).contains(&k) || !(0.0..=1.0).contains(&u) {
        return None;
    }

    Some(SegmentCrossing {
        point: Point2::new(a.x + da.x * k, a.y + da.y * k),
        k,
    })
}

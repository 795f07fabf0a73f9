use std::cmp::Ordering;

use crate::geometry::{ObstacleRing, Segment};
use crate::math::intersect_2d::segment_segment_intersect_2d;
use crate::math::Point2;

/// A qualifying crossing of the probe with one obstacle edge.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RingCrossing {
    /// Fraction along the probe at which the crossing occurs.
    pub k: f64,
    /// The crossing point.
    pub point: Point2,
    /// The obstacle edge that was hit.
    pub edge: Segment,
}

/// Finds all crossings of `probe` with the edges of `ring` whose parameter
/// lies in `[tolerance, 1 − tolerance]`, sorted ascending by `k`.
///
/// The tolerance window drops near-endpoint touches: a probe endpoint
/// resting (almost) exactly on the boundary would otherwise register a
/// spurious obstruction.
///
/// Fewer than two qualifying crossings report no obstruction at all: the
/// planner needs an entry *and* an exit point to build a detour, and a lone
/// crossing is a tangential graze. The empty result encodes that rule.
pub(crate) fn scan_ring(probe: Segment, ring: &ObstacleRing, tolerance: f64) -> Vec<RingCrossing> {
    let mut crossings: Vec<RingCrossing> = ring
        .edges()
        .filter_map(|edge| {
            segment_segment_intersect_2d(probe.start, probe.end, edge.start, edge.end)
                .filter(|hit| hit.k >= tolerance && hit.k <= 1.0 - tolerance)
                .map(|hit| RingCrossing {
                    k: hit.k,
                    point: hit.point,
                    edge,
                })
        })
        .collect();

    if crossings.len() < 2 {
        return Vec::new();
    }

    crossings.sort_by(|a, b| a.k.partial_cmp(&b.k).unwrap_or(Ordering::Equal));
    crossings
}

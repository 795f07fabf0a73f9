use crate::error::Result;
use crate::geometry::{ObstacleRing, PathVertex, Segment, Side};
use crate::math::Point2;

use super::circumvent::boundary_walk;
use super::route::{dedup_consecutive, path_length};
use super::scan::scan_ring;

/// Recursively resolves `seg` against `obstacles` into a detour route.
///
/// `obstacles` shrinks from the front: the head obstacle is either irrelevant
/// to this probe (dropped) or circumvented (dropped, with both sub-probes
/// recursing on the tail). Every recursion level consumes one obstacle, so
/// the depth is bounded by the obstacle count and the remaining list is
/// always a borrowed suffix, never a per-call copy.
///
/// Only the first and last qualifying crossing of the head obstacle are
/// used as entry and exit; interior crossings are deliberately ignored (the
/// detour around the outermost pair clears them for a simple ring).
pub(crate) fn resolve(
    seg: Segment,
    obstacles: &[ObstacleRing],
    tolerance: f64,
) -> Result<Vec<PathVertex>> {
    let Some((head, tail)) = obstacles.split_first() else {
        return Ok(vec![PathVertex::new(seg.start), PathVertex::new(seg.end)]);
    };

    let crossings = scan_ring(seg, head, tolerance);
    let (Some(first), Some(last)) = (crossings.first(), crossings.last()) else {
        // Head obstacle is not in the way of this probe.
        return resolve(seg, tail, tolerance);
    };

    let (entry, edge_in) = (first.point, first.edge);
    let (exit, edge_out) = (last.point, last.edge);

    // Two candidate detours: one around each way. The walked arc carries the
    // side it passed on; the entry and exit points adopt it.
    let cw = candidate_detour(
        Segment::new(edge_in.end, edge_out.start),
        head,
        true,
        entry,
        exit,
    )?;
    let ccw = candidate_detour(
        Segment::new(edge_in.start, edge_out.end),
        head,
        false,
        entry,
        exit,
    )?;
    let detour = if path_length(&cw) < path_length(&ccw) {
        cw
    } else {
        ccw
    };

    // Resolve the probe up to the entry and from the exit onward against the
    // remaining obstacles, independently on each side.
    let mut verts = resolve(Segment::new(seg.start, entry), tail, tolerance)?;
    let suffix = resolve(Segment::new(exit, seg.end), tail, tolerance)?;

    // The entry re-enters with the detour's tags, the exit leaves with them.
    verts.pop();
    verts.extend(detour);
    verts.extend(suffix.into_iter().skip(1));

    Ok(dedup_consecutive(verts))
}

/// Builds one candidate detour: the directed boundary walk over `chord`,
/// bracketed by the entry and exit points tagged with the walk's side.
fn candidate_detour(
    chord: Segment,
    ring: &ObstacleRing,
    clockwise: bool,
    entry: Point2,
    exit: Point2,
) -> Result<Vec<PathVertex>> {
    let walk = boundary_walk(chord, ring, clockwise)?;
    let side = walk.first().map_or(Side::Right, |v| v.side);

    let mut detour = Vec::with_capacity(walk.len() + 2);
    detour.push(PathVertex::on_boundary(entry).with_side(side));
    detour.extend(walk);
    detour.push(PathVertex::on_boundary(exit).with_side(side));
    Ok(detour)
}

use crate::error::Result;
use crate::geometry::ring::{reverse_walk, split_vertices};
use crate::geometry::{ObstacleRing, PathVertex, Segment};

use super::route::path_length;

/// Walks the obstacle boundary from `chord.start` to `chord.end`.
///
/// `clockwise` selects stored vertex order; the reversed direction flips the
/// side tag on every vertex of the walk. Both chord endpoints must be ring
/// vertices (detour chords are built from the hit edges' endpoints, so this
/// holds by construction).
///
/// # Errors
///
/// Returns `GeometryError::SplitPointNotFound` when a chord endpoint is not
/// on the ring.
pub fn boundary_walk(
    chord: Segment,
    ring: &ObstacleRing,
    clockwise: bool,
) -> Result<Vec<PathVertex>> {
    // Rotate the boundary so traversal begins at the entry point.
    let mut walk = ring.rotated_to(chord.start)?;

    // Walk the other way around if asked.
    if !clockwise {
        walk = reverse_walk(walk);
    }

    // Cut at the exit point; the leading arc is the walked path.
    let split = split_vertices(&walk, chord.end)?;
    Ok(split.before)
}

/// The shorter of the two directed walks between the chord endpoints.
///
/// A strict comparison means ties pick the counter-clockwise walk.
///
/// # Errors
///
/// Returns `GeometryError::SplitPointNotFound` when a chord endpoint is not
/// on the ring.
pub fn shortest_walk(chord: Segment, ring: &ObstacleRing) -> Result<Vec<PathVertex>> {
    let cw = boundary_walk(chord, ring, true)?;
    let ccw = boundary_walk(chord, ring, false)?;

    if path_length(&cw) < path_length(&ccw) {
        Ok(cw)
    } else {
        Ok(ccw)
    }
}

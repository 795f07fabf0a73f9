use crate::error::Result;
use crate::geometry::{ObstacleRing, PathVertex, Segment, Side};
use crate::math::vec_2d::left_normal;

use super::find_path::resolve;
use super::route::path_length;

/// Corner-cutting sweep over a planned route.
///
/// A single left-to-right pass with the cursor on the third vertex. Each
/// window `(anchor, candidate, next)` first passes a sign test: the straight
/// shortcut `anchor → next` must leave on the side the route passed the
/// candidate's obstacle on. Passing windows are replanned against the full
/// obstacle list; a strictly shorter alternative replaces the candidate with
/// its interior, and the same neighborhood is examined again since the
/// splice may expose further shortenings. The result is a local optimum, not
/// a globally shortest route.
pub(crate) fn optimize(
    route: &mut Vec<PathVertex>,
    obstacles: &[ObstacleRing],
    tolerance: f64,
) -> Result<()> {
    let mut cursor = 2;
    while cursor < route.len() {
        if cursor < 2 {
            // A splice can pull the cursor back past the start window.
            cursor += 1;
            continue;
        }

        let anchor = route[cursor - 2];
        let candidate = route[cursor - 1];
        let next = route[cursor];

        let v = candidate.position - anchor.position;
        let w = next.position - anchor.position;
        let vperp = match candidate.side {
            Side::Left => left_normal(v),
            Side::Right => -left_normal(v),
        };

        if vperp.dot(&w) > 0.0 {
            let alt = resolve(
                Segment::new(anchor.position, next.position),
                obstacles,
                tolerance,
            )?;
            let corner = path_length(&[anchor, candidate, next]);
            if alt.len() >= 2 && path_length(&alt) < corner {
                // Splice the alternative's interior in place of the
                // candidate; the cursor stays on `next`.
                let interior = alt.len() - 2;
                route.splice(cursor - 1..cursor, alt.into_iter().skip(1).take(interior));
                cursor = cursor - 1 + interior;
                continue;
            }
        }

        cursor += 1;
    }

    Ok(())
}

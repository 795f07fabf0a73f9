use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::point_in_polygon;
use crate::math::vec_2d::points_coincident;
use crate::math::Point2;

use super::{PathVertex, Segment};

/// Result of splitting a boundary vertex sequence at a point.
///
/// `before` runs up to and including the first match, `after` from the match
/// (inclusive) onward, so the matched vertex terminates one arc and opens
/// the other.
#[derive(Debug, Clone)]
pub struct RingSplit {
    pub before: Vec<PathVertex>,
    pub after: Vec<PathVertex>,
    /// Zero-based index of the matched vertex.
    pub index: usize,
}

/// An ordered, closed polygon boundary representing a region to avoid.
///
/// The ring is stored *open*: no duplicated terminator vertex. [`Self::edges`]
/// closes it internally by yielding the wrapping `last → first` edge, and a
/// caller-supplied closing duplicate is stripped on construction. The ring
/// must be simple (non-self-intersecting) for boundary walks to be
/// well-defined; this is the caller's responsibility.
#[derive(Debug, Clone)]
pub struct ObstacleRing {
    verts: Vec<PathVertex>,
}

impl ObstacleRing {
    /// Builds a ring from raw boundary points in traversal order.
    ///
    /// Every vertex is tagged as lying on an obstacle, with the `Right`
    /// placeholder side (flipped by [`Self::reversed`]).
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateRing` when fewer than 3 vertices
    /// remain after stripping a caller-supplied closing duplicate.
    pub fn new(points: &[Point2]) -> Result<Self> {
        let mut points = points.to_vec();
        if points.len() > 1 {
            let (first, last) = (points[0], points[points.len() - 1]);
            if points_coincident(first, last) {
                points.pop();
            }
        }

        if points.len() < 3 {
            return Err(GeometryError::DegenerateRing {
                vertices: points.len(),
            }
            .into());
        }

        let verts = points.into_iter().map(PathVertex::on_boundary).collect();
        Ok(Self { verts })
    }

    /// The boundary vertices in traversal order, without a closing duplicate.
    #[must_use]
    pub fn vertices(&self) -> &[PathVertex] {
        &self.verts
    }

    /// Number of boundary vertices (equals the number of edges).
    #[must_use]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// Boundary edges in traversal order, including the wrapping
    /// `last → first` edge.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.verts.len();
        (0..n).map(move |i| {
            Segment::new(
                self.verts[i].position,
                self.verts[(i + 1) % n].position,
            )
        })
    }

    /// Whether `point` lies strictly inside the bounded region.
    #[must_use]
    pub fn contains(&self, point: Point2) -> bool {
        let boundary: Vec<Point2> = self.verts.iter().map(|v| v.position).collect();
        point_in_polygon(point, &boundary)
    }

    /// Splits the boundary at the first vertex coincident with `at`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::SplitPointNotFound` when no vertex matches
    /// within tolerance. The whole-ring-in-`before` fallback of a missing
    /// match is never produced.
    pub fn split(&self, at: Point2) -> Result<RingSplit> {
        split_vertices(&self.verts, at)
    }

    /// A new ring with vertex order reversed and every side tag flipped.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            verts: reverse_walk(self.verts.clone()),
        }
    }

    /// The closed boundary walk that begins and ends at `start`: the
    /// concatenation `after ⊕ before` of a split at `start`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::SplitPointNotFound` when `start` is not a
    /// ring vertex.
    pub fn rotated_to(&self, start: Point2) -> Result<Vec<PathVertex>> {
        let split = self.split(start)?;
        let mut walk = split.after;
        walk.extend(split.before);
        Ok(walk)
    }
}

/// Splits a vertex run at the first vertex coincident with `at`; both halves
/// include the match.
pub(crate) fn split_vertices(verts: &[PathVertex], at: Point2) -> Result<RingSplit> {
    let index = verts
        .iter()
        .position(|v| points_coincident(v.position, at))
        .ok_or(GeometryError::SplitPointNotFound { x: at.x, y: at.y })?;

    Ok(RingSplit {
        before: verts[..=index].to_vec(),
        after: verts[index..].to_vec(),
        index,
    })
}

/// Reverses a vertex run in place, flipping each side tag to keep the
/// passed-on-this-side reading consistent with the new direction.
pub(crate) fn reverse_walk(mut verts: Vec<PathVertex>) -> Vec<PathVertex> {
    verts.reverse();
    for v in &mut verts {
        v.side = v.side.opposite();
    }
    verts
}

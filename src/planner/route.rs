use crate::geometry::PathVertex;
use crate::math::vec_2d::points_coincident;

/// An ordered waypoint sequence from start to destination.
///
/// Produced by [`super::PathFinder::find`] and mutated in place by
/// [`super::PathFinder::optimize`]. No two consecutive vertices are
/// coordinate-coincident.
#[derive(Debug, Clone)]
pub struct Route {
    pub vertices: Vec<PathVertex>,
}

impl Route {
    pub(crate) fn from_vertices(vertices: Vec<PathVertex>) -> Self {
        Self { vertices }
    }

    /// Number of waypoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// First waypoint (the start point), if any.
    #[must_use]
    pub fn first(&self) -> Option<&PathVertex> {
        self.vertices.first()
    }

    /// Last waypoint (the destination), if any.
    #[must_use]
    pub fn last(&self) -> Option<&PathVertex> {
        self.vertices.last()
    }

    /// Total length: the sum of consecutive waypoint distances.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        path_length(&self.vertices)
    }
}

/// Sum of consecutive-vertex Euclidean distances along a vertex run.
pub(crate) fn path_length(verts: &[PathVertex]) -> f64 {
    verts
        .windows(2)
        .map(|pair| (pair[1].position - pair[0].position).norm())
        .sum()
}

/// Drops consecutive coincident vertices, keeping the first of each run.
pub(crate) fn dedup_consecutive(verts: Vec<PathVertex>) -> Vec<PathVertex> {
    let mut out: Vec<PathVertex> = Vec::with_capacity(verts.len());
    for v in verts {
        match out.last() {
            Some(kept) if points_coincident(kept.position, v.position) => {}
            _ => out.push(v),
        }
    }
    out
}

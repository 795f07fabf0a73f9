use std::fmt;

use crate::math::Point2;

/// Which side of an obstacle boundary a route passed on.
///
/// `Right` corresponds to walking the boundary in stored vertex order,
/// `Left` to the reversed direction. Reversing a boundary flips the tag on
/// every vertex so the "which side did we pass" reading stays consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The opposite side tag.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// A route or boundary vertex: a point plus path-planning metadata.
///
/// The metadata never participates in geometric computation; dot products
/// and lengths see only `position`. `side` is a placeholder (`Right`) until
/// a circumvention step assigns it; only the optimizer reads it, and only on
/// waypoints that circumvention produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathVertex {
    pub position: Point2,
    /// Vertex sits on an obstacle boundary (boundary vertices and detour
    /// entry/exit points).
    pub on_obstacle: bool,
    pub side: Side,
}

impl PathVertex {
    /// A free-space vertex (not on any obstacle boundary).
    #[must_use]
    pub fn new(position: Point2) -> Self {
        Self {
            position,
            on_obstacle: false,
            side: Side::Right,
        }
    }

    /// A vertex lying on an obstacle boundary.
    #[must_use]
    pub fn on_boundary(position: Point2) -> Self {
        Self {
            position,
            on_obstacle: true,
            side: Side::Right,
        }
    }

    /// The same vertex with its side tag replaced.
    #[must_use]
    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }
}

impl fmt::Display for PathVertex {
    /// Renders `(x,y)`, printing whole coordinates without a decimal point.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x, y) = (self.position.x, self.position.y);
        if x.fract() == 0.0 && y.fract() == 0.0 {
            write!(f, "({x:.0},{y:.0})")
        } else {
            write!(f, "({x},{y})")
        }
    }
}

mod circumvent;
mod find_path;
mod optimize;
mod route;
mod scan;

pub use circumvent::{boundary_walk, shortest_walk};
pub use route::Route;

use crate::error::{PlannerError, Result};
use crate::geometry::{ObstacleRing, Segment};

/// Plans collision-avoiding routes around a set of polygonal obstacles.
///
/// Obstacles are borrowed for the planner's lifetime and scanned in the
/// given order; the planner never mutates them. `tolerance` is the fraction
/// of a probe's length near each endpoint within which boundary crossings
/// are ignored as non-obstructive (defaults to `0`).
#[derive(Debug, Clone, Copy)]
pub struct PathFinder<'a> {
    obstacles: &'a [ObstacleRing],
    tolerance: f64,
}

impl<'a> PathFinder<'a> {
    /// Creates a planner over `obstacles` with zero tolerance.
    #[must_use]
    pub fn new(obstacles: &'a [ObstacleRing]) -> Self {
        Self {
            obstacles,
            tolerance: 0.0,
        }
    }

    /// Sets the endpoint tolerance window.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Computes a route from `segment.start` to `segment.end` around the
    /// obstacles.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidTolerance` for a tolerance outside
    /// `[0, 0.5)`, `PlannerError::DestinationInsideObstacle` when the
    /// destination lies inside an obstacle (routing to such a point is
    /// unsupported and would otherwise yield a silently wrong route), and
    /// propagates `GeometryError` from degenerate boundary operations.
    pub fn find(&self, segment: Segment) -> Result<Route> {
        self.check_tolerance()?;

        for (index, ring) in self.obstacles.iter().enumerate() {
            if ring.contains(segment.end) {
                return Err(PlannerError::DestinationInsideObstacle {
                    x: segment.end.x,
                    y: segment.end.y,
                    obstacle: index,
                }
                .into());
            }
        }

        let vertices = find_path::resolve(segment, self.obstacles, self.tolerance)?;
        Ok(Route::from_vertices(vertices))
    }

    /// Shortens `route` in place by cutting corners that admit a shorter
    /// collision-free alternative.
    ///
    /// Shortcut candidates are validated by replanning against this
    /// planner's full obstacle list, so the result stays collision-free
    /// under the same tolerance. The pass never lengthens the route.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidTolerance` for a tolerance outside
    /// `[0, 0.5)`; propagates planning errors from shortcut validation.
    pub fn optimize(&self, route: &mut Route) -> Result<()> {
        self.check_tolerance()?;
        optimize::optimize(&mut route.vertices, self.obstacles, self.tolerance)
    }

    fn check_tolerance(&self) -> Result<()> {
        if (0.0..0.5).contains(&self.tolerance) {
            Ok(())
        } else {
            Err(PlannerError::InvalidTolerance {
                value: self.tolerance,
            }
            .into())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::intersect_2d::segment_segment_intersect_2d;
    use crate::math::vec_2d::points_coincident;
    use crate::math::Point2;

    /// The 14-vertex teardrop shape.
    fn teardrop() -> ObstacleRing {
        ObstacleRing::new(&[
            Point2::new(24.0, 6.0),
            Point2::new(28.0, 6.0),
            Point2::new(28.0, 12.0),
            Point2::new(26.0, 17.0),
            Point2::new(25.0, 19.0),
            Point2::new(23.0, 25.0),
            Point2::new(21.0, 30.0),
            Point2::new(19.0, 34.0),
            Point2::new(15.0, 34.0),
            Point2::new(14.0, 31.0),
            Point2::new(14.0, 26.0),
            Point2::new(15.0, 22.0),
            Point2::new(19.0, 12.0),
            Point2::new(20.0, 5.0),
        ])
        .unwrap()
    }

    fn triangle() -> ObstacleRing {
        ObstacleRing::new(&[
            Point2::new(10.0, 10.0),
            Point2::new(15.0, 2.0),
            Point2::new(12.0, 15.0),
        ])
        .unwrap()
    }

    /// True when some route segment crosses an obstacle edge with a
    /// parameter strictly inside `(tolerance, 1 − tolerance)`. Touches at
    /// the window bounds (waypoints resting on boundaries) do not count.
    fn crosses_strictly(route: &Route, obstacles: &[ObstacleRing], tolerance: f64) -> bool {
        route.vertices.windows(2).any(|pair| {
            obstacles.iter().any(|ring| {
                ring.edges().any(|edge| {
                    segment_segment_intersect_2d(
                        pair[0].position,
                        pair[1].position,
                        edge.start,
                        edge.end,
                    )
                    .is_some_and(|hit| hit.k > tolerance && hit.k < 1.0 - tolerance)
                })
            })
        })
    }

    #[test]
    fn unobstructed_probe_is_the_straight_segment() {
        let obstacles = [teardrop(), triangle()];
        let finder = PathFinder::new(&obstacles);
        let seg = Segment::new(Point2::new(0.0, 0.0), Point2::new(5.0, 0.0));
        let route = finder.find(seg).unwrap();
        assert_eq!(route.len(), 2);
        assert!(points_coincident(route.first().unwrap().position, seg.start));
        assert!(points_coincident(route.last().unwrap().position, seg.end));
    }

    #[test]
    fn zero_length_probe_has_zero_length() {
        let obstacles = [triangle()];
        let finder = PathFinder::new(&obstacles);
        let p = Point2::new(0.0, 0.0);
        let route = finder.find(Segment::new(p, p)).unwrap();
        assert!(route.total_length().abs() < 1e-12);
    }

    #[test]
    fn demo_scenario_routes_around_both_obstacles() {
        let obstacles = [teardrop(), triangle()];
        let finder = PathFinder::new(&obstacles);
        let seg = Segment::new(Point2::new(6.0, 7.0), Point2::new(32.0, 23.0));

        let route = finder.find(seg).unwrap();

        assert!(points_coincident(route.first().unwrap().position, seg.start));
        assert!(points_coincident(route.last().unwrap().position, seg.end));

        // The straight line is obstructed, so the route must be longer.
        let straight = seg.length();
        assert!((straight - 30.528).abs() < 1e-2);
        assert!(route.total_length() > straight);

        // Both obstacles contribute detour waypoints.
        assert!(route
            .vertices
            .iter()
            .any(|v| points_coincident(v.position, Point2::new(12.0, 15.0))));
        assert!(route
            .vertices
            .iter()
            .any(|v| points_coincident(v.position, Point2::new(20.0, 5.0))));

        assert!(!crosses_strictly(&route, &obstacles, 0.0));
    }

    #[test]
    fn demo_scenario_optimization_cuts_corners() {
        let obstacles = [teardrop(), triangle()];
        let finder = PathFinder::new(&obstacles);
        let seg = Segment::new(Point2::new(6.0, 7.0), Point2::new(32.0, 23.0));
        let route = finder.find(seg).unwrap();

        let unoptimized_length = route.total_length();
        let unoptimized_count = route.len();

        // Optimize with a small tolerance so that shortcut probes grazing
        // a boundary vertex do not register as obstructions.
        let optimizer = finder.with_tolerance(1e-3);
        let mut optimized = route;
        optimizer.optimize(&mut optimized).unwrap();

        assert!(optimized.total_length() <= unoptimized_length);
        assert!(
            optimized.len() < unoptimized_count,
            "at least one waypoint must fall to a direct shortcut"
        );
        assert!(points_coincident(
            optimized.first().unwrap().position,
            seg.start,
        ));
        assert!(points_coincident(
            optimized.last().unwrap().position,
            seg.end,
        ));
        assert!(!crosses_strictly(&optimized, &obstacles, 1e-3));

        // A second pass finds nothing further to cut.
        let length = optimized.total_length();
        let count = optimized.len();
        optimizer.optimize(&mut optimized).unwrap();
        assert_eq!(optimized.len(), count);
        assert!((optimized.total_length() - length).abs() < 1e-9);
    }

    #[test]
    fn destination_inside_an_obstacle_is_rejected() {
        let obstacles = [teardrop(), triangle()];
        let finder = PathFinder::new(&obstacles);
        // (12.3, 9) is inside the triangle.
        let seg = Segment::new(Point2::new(0.0, 0.0), Point2::new(12.3, 9.0));
        let result = finder.find(seg);
        assert!(result.is_err());
    }

    #[test]
    fn out_of_range_tolerance_is_rejected() {
        let obstacles = [triangle()];
        let finder = PathFinder::new(&obstacles).with_tolerance(0.6);
        let seg = Segment::new(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0));
        assert!(finder.find(seg).is_err());

        let finder = PathFinder::new(&obstacles).with_tolerance(-0.1);
        assert!(finder.find(seg).is_err());
    }
}

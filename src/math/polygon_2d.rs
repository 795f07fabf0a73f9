use super::Point2;

/// Even-odd test for a point against a simple polygon in the plane.
///
/// `polygon` is an open vertex list; the closing edge `last → first` is
/// implied. Points exactly on an edge may land on either side; the planner
/// only uses this to reject destinations strictly inside an obstacle.
#[must_use]
pub fn point_in_polygon(point: Point2, polygon: &[Point2]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let pi = polygon[i];
        let pj = polygon[j];

        if ((pi.y > point.y) != (pj.y > point.y))
            && (point.x < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x)
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

//! Line segments, probes and the intersection tests built on them.

use nalgebra::{Rotation2, Vector2};
use thiserror::Error;

use super::{Angle, Direction, ObstacleId, Point};

/// Positional tolerance of the on-segment predicate.
const ON_SEGMENT_TOLERANCE: f64 = 1e-2;

/// A non-degenerate line segment between two points.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Segment {
    start: Point,
    end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Result<Self, GeometryError> {
        if start == end {
            return Err(GeometryError::DegenerateSegment(start));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.start.x() + self.end.x()) / 2.0,
            (self.start.y() + self.end.y()) / 2.0,
        )
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// True iff the two segments properly cross each other. Symmetric; merely
    /// touching at a shared endpoint does not count.
    pub fn crosses(&self, other: &Segment) -> bool {
        ccw(self.start, other.start, other.end) != ccw(self.end, other.start, other.end)
            && ccw(self.start, self.end, other.start) != ccw(self.start, self.end, other.end)
    }

    /// True iff `point` lies on the segment, within a small positional tolerance.
    pub fn contains(&self, point: Point) -> bool {
        let from_start = point.distance(self.start);
        let from_end = point.distance(self.end);
        (from_start + from_end - self.length()).abs() < ON_SEGMENT_TOLERANCE
    }

    /// Single-point intersection of a probe with this segment.
    ///
    /// Solves the two-line parametric system for the probe and the segment.
    /// `None` covers both parallel lines and an intersection point falling
    /// outside either finite segment; neither is an error.
    pub fn intersect_probe(&self, probe: &Probe) -> Option<Point> {
        let (x1, y1) = (probe.source().x(), probe.source().y());
        let (x2, y2) = (probe.tip().x(), probe.tip().y());
        let (x3, y3) = (self.start.x(), self.start.y());
        let (x4, y4) = (self.end.x(), self.end.y());

        let denominator = (y4 - y3) * (x2 - x1) - (x4 - x3) * (y2 - y1);
        if denominator.abs() < f64::EPSILON {
            // Parallel lines never meet in a single point.
            return None;
        }

        let ua = ((x4 - x3) * (y1 - y3) - (y4 - y3) * (x1 - x3)) / denominator;
        let ub = ((x2 - x1) * (y1 - y3) - (y2 - y1) * (x1 - x3)) / denominator;

        if !(0.0..=1.0).contains(&ua) || !(0.0..=1.0).contains(&ub) {
            return None;
        }

        Some(Point::new(x1 + ua * (x2 - x1), y1 + ua * (y2 - y1)))
    }

    /// Rotate both endpoints about the segment's center.
    pub fn rotate(&mut self, delta: Angle) {
        let rotation = Rotation2::new(f64::from(delta));
        let center = Vector2::new(self.center().x(), self.center().y());
        let start = rotation * (Vector2::new(self.start.x(), self.start.y()) - center) + center;
        let end = rotation * (Vector2::new(self.end.x(), self.end.y()) - center) + center;
        self.start = Point::new(start.x, start.y);
        self.end = Point::new(end.x, end.y);
    }

    /// Orientation angle of the segment as traversed toward `direction`.
    ///
    /// Only `Left` and `Right` carry a defined orientation; the vertical
    /// directions are reported as an explicit error.
    pub fn angle(&self, direction: Direction) -> Result<Angle, GeometryError> {
        let (dx, dy) = match direction {
            Direction::Left => (
                self.start.x() - self.end.x(),
                self.start.y() - self.end.y(),
            ),
            Direction::Right => (
                self.end.x() - self.start.x(),
                self.end.y() - self.start.y(),
            ),
            Direction::Up | Direction::Down => {
                return Err(GeometryError::UnsupportedDirection(direction))
            }
        };
        Ok(Angle::new(dy.atan2(dx)))
    }
}

fn ccw(a: Point, b: Point, c: Point) -> bool {
    (c.y() - a.y()) * (b.x() - a.x()) > (b.y() - a.y()) * (c.x() - a.x())
}

/// A transient ray cast from a source point, limited to `length`. Probes are
/// constructed, resolved against the scene and discarded within one query.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Probe {
    source: Point,
    direction: Point,
}

impl Probe {
    pub fn new(source: Point, angle: Angle, length: f64) -> Self {
        let unit = angle.unit_vector();
        Self {
            source,
            direction: Point::new(length * unit.x(), length * unit.y()),
        }
    }

    pub fn source(&self) -> Point {
        self.source
    }

    /// Far end of the probe when nothing obstructs it.
    pub fn tip(&self) -> Point {
        Point::new(
            self.source.x() + self.direction.x(),
            self.source.y() + self.direction.y(),
        )
    }
}

#[derive(Error, Debug)]
pub enum GeometryError {
    #[error("degenerate segment at {0:?}")]
    DegenerateSegment(Point),
    #[error("angle is not defined for direction {0:?}")]
    UnsupportedDirection(Direction),
    #[error("unknown obstacle id {0:?}")]
    UnknownObstacle(ObstacleId),
    #[error("obstacle {0:?} is not rotatable")]
    FixedObstacle(ObstacleId),
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_4, PI};

    use approx::{assert_abs_diff_eq, AbsDiffEq};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_segment_new_degenerate() {
        let point = Point::new(1.0, 2.0);
        assert!(matches!(
            Segment::new(point, point),
            Err(GeometryError::DegenerateSegment(_))
        ));
    }

    #[test]
    fn test_segment_center_and_length() {
        let wall = segment(300.0, 100.0, 500.0, 300.0);
        assert_abs_diff_eq!(wall.center(), Point::new(400.0, 200.0));
        assert_abs_diff_eq!(wall.length(), f64::hypot(200.0, 200.0));
    }

    #[rstest]
    #[case::crossing(
        segment(0.0, 0.0, 2.0, 2.0),
        segment(0.0, 2.0, 2.0, 0.0),
        true
    )]
    #[case::separated(
        segment(0.0, 0.0, 1.0, 1.0),
        segment(2.0, 0.0, 3.0, 1.0),
        false
    )]
    #[case::parallel(
        segment(0.0, 0.0, 2.0, 0.0),
        segment(0.0, 1.0, 2.0, 1.0),
        false
    )]
    #[case::shared_endpoint(
        segment(0.0, 0.0, 2.0, 2.0),
        segment(2.0, 2.0, 3.0, 0.0),
        false
    )]
    #[case::collinear_overlap(
        segment(0.0, 0.0, 3.0, 0.0),
        segment(1.0, 0.0, 2.0, 0.0),
        false
    )]
    fn test_segment_crosses(#[case] a: Segment, #[case] b: Segment, #[case] expected: bool) {
        assert_eq!(a.crosses(&b), expected);
        // The crossing test is symmetric.
        assert_eq!(b.crosses(&a), expected);
    }

    #[rstest]
    #[case::on_segment(segment(0.0, 0.0, 4.0, 4.0), Point::new(2.0, 2.0), true)]
    #[case::at_endpoint(segment(0.0, 0.0, 4.0, 4.0), Point::new(4.0, 4.0), true)]
    #[case::off_segment(segment(0.0, 0.0, 4.0, 4.0), Point::new(2.0, 3.0), false)]
    #[case::beyond_end(segment(0.0, 0.0, 4.0, 4.0), Point::new(5.0, 5.0), false)]
    fn test_segment_contains(#[case] wall: Segment, #[case] point: Point, #[case] expected: bool) {
        assert_eq!(wall.contains(point), expected);
    }

    #[rstest]
    #[case::perpendicular_hit(
        segment(2.0, -1.0, 2.0, 1.0),
        Probe::new(Point::new(0.0, 0.0), Angle::new(0.0), 10.0),
        Some(Point::new(2.0, 0.0))
    )]
    #[case::parallel(
        segment(0.0, 1.0, 10.0, 1.0),
        Probe::new(Point::new(0.0, 0.0), Angle::new(0.0), 10.0),
        None
    )]
    #[case::probe_too_short(
        segment(2.0, -1.0, 2.0, 1.0),
        Probe::new(Point::new(0.0, 0.0), Angle::new(0.0), 1.0),
        None
    )]
    #[case::outside_segment(
        segment(2.0, 1.0, 2.0, 3.0),
        Probe::new(Point::new(0.0, 0.0), Angle::new(0.0), 10.0),
        None
    )]
    #[case::behind_probe(
        segment(-2.0, -1.0, -2.0, 1.0),
        Probe::new(Point::new(0.0, 0.0), Angle::new(0.0), 10.0),
        None
    )]
    #[case::diagonal_hit(
        segment(300.0, 100.0, 500.0, 300.0),
        Probe::new(Point::new(250.0, 150.0), Angle::new(0.0), 1000.0),
        Some(Point::new(350.0, 150.0))
    )]
    fn test_segment_intersect_probe(
        #[case] wall: Segment,
        #[case] probe: Probe,
        #[case] intersection: Option<Point>,
    ) {
        let result = wall.intersect_probe(&probe);
        if let (Some(r), Some(i)) = (result, intersection) {
            assert_abs_diff_eq!(r, i, epsilon = EPSILON);
        } else {
            assert_eq!(result, intersection);
        }
    }

    #[test]
    fn test_segment_rotate_quarter_turn() {
        let mut wall = segment(0.0, 0.0, 2.0, 0.0);
        wall.rotate(Angle::from_deg(90.0));
        assert_abs_diff_eq!(wall.start(), Point::new(1.0, -1.0), epsilon = EPSILON);
        assert_abs_diff_eq!(wall.end(), Point::new(1.0, 1.0), epsilon = EPSILON);
    }

    #[test]
    fn test_segment_rotate_roundtrip() {
        let original = segment(300.0, 100.0, 500.0, 300.0);
        let mut wall = original;
        wall.rotate(Angle::from_deg(33.0));
        wall.rotate(Angle::from_deg(-33.0));
        assert_abs_diff_eq!(wall, original, epsilon = 1e-4);
    }

    #[test]
    fn test_segment_rotate_preserves_center_and_length() {
        let original = segment(200.0, 600.0, 500.0, 800.0);
        let mut wall = original;
        wall.rotate(Angle::from_deg(77.0));
        assert_abs_diff_eq!(wall.center(), original.center(), epsilon = 1e-9);
        assert_abs_diff_eq!(wall.length(), original.length(), epsilon = 1e-9);
    }

    #[rstest]
    #[case::diagonal_right(segment(0.0, 0.0, 1.0, 1.0), Direction::Right, FRAC_PI_4)]
    #[case::diagonal_left(segment(0.0, 0.0, 1.0, 1.0), Direction::Left, -3.0 * FRAC_PI_4)]
    #[case::horizontal_right(segment(0.0, 0.0, 1.0, 0.0), Direction::Right, 0.0)]
    #[case::horizontal_left(segment(0.0, 0.0, 1.0, 0.0), Direction::Left, PI)]
    #[case::vertical_right(segment(0.0, 0.0, 0.0, 2.0), Direction::Right, 0.5 * PI)]
    fn test_segment_angle(
        #[case] wall: Segment,
        #[case] direction: Direction,
        #[case] expected: f64,
    ) {
        assert_abs_diff_eq!(
            wall.angle(direction).unwrap(),
            Angle::new(expected),
            epsilon = EPSILON
        );
    }

    #[rstest]
    #[case(Direction::Up)]
    #[case(Direction::Down)]
    fn test_segment_angle_unsupported_direction(#[case] direction: Direction) {
        let wall = segment(0.0, 0.0, 1.0, 1.0);
        assert!(matches!(
            wall.angle(direction),
            Err(GeometryError::UnsupportedDirection(_))
        ));
    }

    pub fn segment(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
        Segment::new(Point::new(x1, y1), Point::new(x2, y2)).unwrap()
    }

    impl AbsDiffEq for Segment {
        type Epsilon = f64;

        fn default_epsilon() -> f64 {
            f64::EPSILON
        }

        fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
            Point::abs_diff_eq(&self.start, &other.start, epsilon)
                && Point::abs_diff_eq(&self.end, &other.end, epsilon)
        }
    }
}

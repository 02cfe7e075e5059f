//! Collision-aware movement of the light source.

use std::f64::consts::{FRAC_PI_4, PI};

use super::{Direction, ObstacleRegistry, Point, Segment};

/// Wall orientations treated as a full stop instead of a slide.
const STOP_ANGLES: [f64; 4] = [PI, -PI, FRAC_PI_4, -FRAC_PI_4];
const STOP_EPSILON: f64 = 1e-6;

/// Resolve a proposed displacement of the light source against the scene.
///
/// The first registered obstacle whose segment crosses the `current` to
/// `proposed` probe blocks the move, regardless of distance. A blocking wall
/// whose orientation toward `direction` is axis-aligned stops the move
/// outright; any other blocking wall redirects the full displacement along its
/// own orientation, sliding the light along the wall. A blocked move in a
/// direction without a defined wall orientation also stops.
pub fn resolve_movement(
    scene: &ObstacleRegistry,
    current: Point,
    proposed: Point,
    direction: Direction,
) -> Point {
    let probe = match Segment::new(current, proposed) {
        Ok(probe) => probe,
        // A zero-length move has nothing to collide with.
        Err(_) => return proposed,
    };

    for obstacle in scene.obstacles() {
        if !probe.crosses(obstacle.segment()) {
            continue;
        }

        let angle = match obstacle.segment().angle(direction) {
            Ok(angle) => angle,
            Err(_) => return current,
        };
        if is_stop_angle(angle.into()) {
            return current;
        }

        let length = current.distance(proposed);
        let unit = angle.unit_vector();
        return Point::new(
            current.x() + length * unit.x(),
            current.y() + length * unit.y(),
        );
    }

    proposed
}

fn is_stop_angle(angle: f64) -> bool {
    STOP_ANGLES
        .iter()
        .any(|stop| (angle - stop).abs() < STOP_EPSILON)
}

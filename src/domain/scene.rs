//! Scene registry of wall obstacles.

use super::{Angle, GeometryError, Segment};

/// Ordered collection of wall obstacles.
///
/// Registration order is preserved; the mover commits to the first registered
/// obstacle crossing its probe, so the order is observable behavior. The
/// registry is populated once at scene setup and afterwards mutated only by
/// rotating individual obstacles in place.
#[derive(Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct ObstacleRegistry {
    obstacles: Vec<Obstacle>,
}

impl ObstacleRegistry {
    pub fn new() -> Self {
        Self { obstacles: vec![] }
    }

    pub fn register(&mut self, segment: Segment, mobility: Mobility) -> ObstacleId {
        self.obstacles.push(Obstacle { segment, mobility });
        ObstacleId(self.obstacles.len() - 1)
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn get(&self, id: ObstacleId) -> Option<&Obstacle> {
        self.obstacles.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn ids(&self) -> Vec<ObstacleId> {
        (0..self.obstacles.len()).map(ObstacleId).collect()
    }

    /// Rotate a registered obstacle in place about its center.
    ///
    /// Fails for an unknown id and for a fixed obstacle; a failed rotation
    /// leaves the registry untouched.
    pub fn rotate(&mut self, id: ObstacleId, delta_degrees: f64) -> Result<(), GeometryError> {
        let obstacle = self
            .obstacles
            .get_mut(id.0)
            .ok_or(GeometryError::UnknownObstacle(id))?;
        if !obstacle.is_rotatable() {
            return Err(GeometryError::FixedObstacle(id));
        }
        obstacle.segment.rotate(Angle::from_deg(delta_degrees));
        Ok(())
    }

    pub fn x_min(&self) -> f64 {
        self.obstacles
            .iter()
            .flat_map(|o| [o.segment().start().x(), o.segment().end().x()])
            .min_by(|a, b| a.total_cmp(b))
            .unwrap_or_default()
    }

    pub fn x_max(&self) -> f64 {
        self.obstacles
            .iter()
            .flat_map(|o| [o.segment().start().x(), o.segment().end().x()])
            .max_by(|a, b| a.total_cmp(b))
            .unwrap_or_default()
    }

    pub fn y_min(&self) -> f64 {
        self.obstacles
            .iter()
            .flat_map(|o| [o.segment().start().y(), o.segment().end().y()])
            .min_by(|a, b| a.total_cmp(b))
            .unwrap_or_default()
    }

    pub fn y_max(&self) -> f64 {
        self.obstacles
            .iter()
            .flat_map(|o| [o.segment().start().y(), o.segment().end().y()])
            .max_by(|a, b| a.total_cmp(b))
            .unwrap_or_default()
    }
}

/// A wall obstacle: a segment tagged with its mobility.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Obstacle {
    segment: Segment,
    mobility: Mobility,
}

impl Obstacle {
    pub fn segment(&self) -> &Segment {
        &self.segment
    }

    pub fn is_rotatable(&self) -> bool {
        self.mobility == Mobility::Rotatable
    }
}

/// Fixed obstacles model the scene boundary edges; rotatable obstacles model
/// interior walls.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub enum Mobility {
    #[default]
    Fixed,
    Rotatable,
}

/// Handle to a registered obstacle.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct ObstacleId(usize);

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use pretty_assertions::assert_eq;

    use super::super::Point;
    use super::*;

    #[test]
    fn test_registry_register_preserves_order() {
        let mut registry = ObstacleRegistry::new();
        let first = registry.register(segment(0.0, 0.0, 1.0, 0.0), Mobility::Rotatable);
        let second = registry.register(segment(0.0, 1.0, 1.0, 1.0), Mobility::Fixed);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.ids(), vec![first, second]);
        assert!(registry.get(first).unwrap().is_rotatable());
        assert!(!registry.get(second).unwrap().is_rotatable());
        assert_eq!(
            registry.obstacles()[0].segment(),
            &segment(0.0, 0.0, 1.0, 0.0)
        );
    }

    #[test]
    fn test_registry_rotate_unknown_id() {
        let mut other = ObstacleRegistry::new();
        let id = other.register(segment(0.0, 0.0, 1.0, 0.0), Mobility::Rotatable);

        let mut registry = ObstacleRegistry::new();
        assert!(matches!(
            registry.rotate(id, 10.0),
            Err(GeometryError::UnknownObstacle(_))
        ));
    }

    #[test]
    fn test_registry_rotate_fixed_obstacle() {
        let mut registry = ObstacleRegistry::new();
        let id = registry.register(segment(0.0, 0.0, 1.0, 0.0), Mobility::Fixed);

        assert!(matches!(
            registry.rotate(id, 10.0),
            Err(GeometryError::FixedObstacle(_))
        ));
        assert_eq!(
            registry.get(id).unwrap().segment(),
            &segment(0.0, 0.0, 1.0, 0.0)
        );
    }

    #[test]
    fn test_registry_rotate_roundtrip() {
        let mut registry = ObstacleRegistry::new();
        let id = registry.register(segment(300.0, 100.0, 500.0, 300.0), Mobility::Rotatable);

        registry.rotate(id, 90.0).unwrap();
        assert!(registry.get(id).unwrap().segment() != &segment(300.0, 100.0, 500.0, 300.0));

        registry.rotate(id, -90.0).unwrap();
        assert_abs_diff_eq!(
            *registry.get(id).unwrap().segment(),
            segment(300.0, 100.0, 500.0, 300.0),
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_registry_bounds() {
        let mut registry = ObstacleRegistry::new();
        registry.register(segment(100.0, 50.0, 200.0, 80.0), Mobility::Fixed);
        registry.register(segment(150.0, 300.0, 400.0, 20.0), Mobility::Rotatable);

        assert_abs_diff_eq!(registry.x_min(), 100.0);
        assert_abs_diff_eq!(registry.x_max(), 400.0);
        assert_abs_diff_eq!(registry.y_min(), 20.0);
        assert_abs_diff_eq!(registry.y_max(), 300.0);
    }

    #[test]
    fn test_registry_bounds_empty() {
        let registry = ObstacleRegistry::new();
        assert!(registry.is_empty());
        assert_abs_diff_eq!(registry.x_min(), 0.0);
        assert_abs_diff_eq!(registry.x_max(), 0.0);
    }

    fn segment(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
        Segment::new(Point::new(x1, y1), Point::new(x2, y2)).unwrap()
    }
}

//! Batch ray casting producing the visible light field.

use std::f64::consts::PI;

use super::{Angle, ObstacleRegistry, Point, Probe};

/// Casts evenly spaced probes from a source point against a scene.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct RayCaster {
    ray_count: usize,
    max_length: f64,
}

impl RayCaster {
    pub fn new(ray_count: usize, max_length: f64) -> Self {
        Self {
            ray_count,
            max_length,
        }
    }

    /// Build the visibility fan: one `(source, endpoint)` pair per probe,
    /// ordered by angle. The endpoint is the nearest obstruction, or the probe
    /// tip when nothing is hit.
    ///
    /// Pure with respect to its inputs; the whole fan is returned in one batch
    /// so a renderer can submit it as a single draw operation.
    pub fn cast(&self, source: Point, scene: &ObstacleRegistry) -> Vec<(Point, Point)> {
        (0..self.ray_count)
            .map(|i| {
                let angle = Angle::new(i as f64 * 2.0 * PI / self.ray_count as f64);
                let probe = Probe::new(source, angle, self.max_length);

                let mut nearest = self.max_length;
                let mut endpoint = probe.tip();
                for obstacle in scene.obstacles() {
                    if let Some(hit) = obstacle.segment().intersect_probe(&probe) {
                        let distance = source.distance(hit);
                        if distance < nearest {
                            nearest = distance;
                            endpoint = hit;
                        }
                    }
                }

                (source, endpoint)
            })
            .collect()
    }
}

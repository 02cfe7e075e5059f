//! The domain module encapsulates the core geometry. It defines the `Segment` and
//! `ObstacleRegistry` entities, along with the visibility and movement rules built
//! on top of them.
//!
//! By minimizing hard dependencies, this module ensures the geometry remains adaptable and
//! independent of specific implementation details.

mod basis;
mod light;
mod mover;
mod raycast;
mod scene;
mod segment;

pub use basis::{Angle, Direction, Point};
pub use light::LightSource;
pub use mover::resolve_movement;
pub use raycast::RayCaster;
pub use scene::{Mobility, Obstacle, ObstacleId, ObstacleRegistry};
pub use segment::{GeometryError, Probe, Segment};

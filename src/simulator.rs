//! Simulation of the light source in a scene of walls.
//!
//! The light's position is updated from the pending movement intents and the
//! elapsed time, taking collisions with the walls into account. Horizontal
//! movement is resolved against the walls and may slide along them; vertical
//! movement is only clamped to the scene bounds. Pending rotation commands are
//! applied to every rotatable wall.

use bevy::prelude::*;

use crate::{
    controller::ControlState,
    domain::{resolve_movement, Direction, Point},
    resource::{LightRes, SceneRes},
};

pub struct Simulator;

impl Plugin for Simulator {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, simulate);
    }
}

fn simulate(
    time: Res<Time>,
    state: Res<ControlState>,
    mut scene: ResMut<SceneRes>,
    mut light: ResMut<LightRes>,
) {
    let step = state.move_speed * time.delta_seconds_f64();

    if let Some(direction) = state.vertical {
        let position = light.position();
        let dy = match direction {
            Direction::Up => -step,
            _ => step,
        };
        let y = (position.y() + dy).clamp(scene.y_min(), scene.y_max());
        light.set_position(Point::new(position.x(), y));
    }

    if let Some(direction) = state.horizontal {
        let position = light.position();
        let dx = match direction {
            Direction::Left => -step,
            _ => step,
        };
        let x = (position.x() + dx).clamp(scene.x_min(), scene.x_max());
        let proposed = Point::new(x, position.y());
        light.set_position(resolve_movement(&scene, position, proposed, direction));
    }

    if state.rotation != 0.0 {
        let delta = state.rotation * state.rotate_speed * time.delta_seconds_f64();
        for id in scene.ids() {
            // Boundary walls are fixed; their rotation attempts simply fail.
            let _ = scene.rotate(id, delta);
        }
    }
}

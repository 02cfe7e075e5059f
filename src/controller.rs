//! Controller steering the light source and the walls.
//!
//! Raw keyboard and mouse state is translated into per-frame intents consumed
//! by the simulator. Mouse placement of the light takes priority over the
//! keyboard; the cursor maps 1:1 to scene coordinates.

use bevy::prelude::*;

use crate::{
    domain::{Direction, Point},
    resource::LightRes,
};

/// Base speed of movement and rotation, in scene units per second.
pub const BASE_SPEED: f64 = 100.0;

#[derive(Resource)]
pub struct ControlState {
    pub move_speed: f64,
    pub rotate_speed: f64,
    pub horizontal: Option<Direction>,
    pub vertical: Option<Direction>,
    /// Sign of the requested wall rotation for this frame.
    pub rotation: f64,
    /// Whether the light field should be cast and drawn this frame.
    pub emitting: bool,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            move_speed: BASE_SPEED,
            rotate_speed: BASE_SPEED,
            horizontal: None,
            vertical: None,
            rotation: 0.0,
            emitting: false,
        }
    }
}

#[derive(Resource, Default)]
struct CursorMemory {
    last: Option<Vec2>,
}

pub struct Controller;

impl Plugin for Controller {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControlState>()
            .init_resource::<CursorMemory>()
            .add_systems(Update, control);
    }
}

fn control(
    keys: Res<ButtonInput<KeyCode>>,
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut cursor: ResMut<CursorMemory>,
    mut state: ResMut<ControlState>,
    mut light: ResMut<LightRes>,
) {
    if keys.pressed(KeyCode::Equal) {
        state.move_speed += 1.0;
    }
    if keys.pressed(KeyCode::Minus) {
        state.move_speed = (state.move_speed - 1.0).abs();
    }
    if keys.pressed(KeyCode::ArrowLeft) {
        state.rotate_speed = (state.rotate_speed - 1.0).abs();
    }
    if keys.pressed(KeyCode::ArrowRight) {
        state.rotate_speed += 1.0;
    }
    if keys.pressed(KeyCode::Escape) {
        state.move_speed = BASE_SPEED;
        state.rotate_speed = BASE_SPEED;
    }

    let mut pointer_moved = false;
    if let Some(position) = windows.single().cursor_position() {
        if cursor.last != Some(position) {
            light.set_position(Point::new(position.x as f64, position.y as f64));
            cursor.last = Some(position);
            pointer_moved = true;
        }
    }

    state.vertical = if pointer_moved {
        None
    } else {
        match (keys.pressed(KeyCode::KeyW), keys.pressed(KeyCode::KeyS)) {
            (true, false) => Some(Direction::Up),
            (false, true) => Some(Direction::Down),
            _ => None,
        }
    };
    state.horizontal = if pointer_moved {
        None
    } else {
        match (keys.pressed(KeyCode::KeyA), keys.pressed(KeyCode::KeyD)) {
            (true, false) => Some(Direction::Left),
            (false, true) => Some(Direction::Right),
            _ => None,
        }
    };

    state.rotation = match (
        keys.pressed(KeyCode::ShiftRight),
        keys.pressed(KeyCode::ShiftLeft),
    ) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    };

    state.emitting = buttons.pressed(MouseButton::Left) || keys.pressed(KeyCode::Space);
}

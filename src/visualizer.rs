//! 2D visualization.

use std::collections::VecDeque;
use std::f64::consts::PI;

use bevy::prelude::*;
use once_cell::sync::Lazy;
use rand::{
    distr::{Distribution, Uniform},
    SeedableRng,
};
use rand_chacha::ChaCha8Rng;

use crate::{
    controller::ControlState,
    domain::{LightSource, Mobility, ObstacleRegistry, Point, RayCaster, Segment},
    resource::{LightRes, SceneRes},
};

pub const CANVAS_WIDTH: f64 = 1600.0;
pub const CANVAS_HEIGHT: f64 = 900.0;

/// Probes are effectively unbounded within the canvas.
const PROBE_LENGTH: f64 = CANVAS_WIDTH * CANVAS_HEIGHT;
const RAY_COUNT: usize = 46_080;
const LIGHT_RADIUS: f64 = 5.0;
const LIGHT_COLOR: Color = Color::rgb(253.0 / 255.0, 184.0 / 255.0, 19.0 / 255.0);

const NUMBER_OF_SHARDS: usize = 6;
const SHARD_HALF_LENGTH: f64 = 40.0;
const RNG_SEED: u64 = 67226741255836;

const FPS_SAMPLES: usize = 60;

static INTERIOR_WALLS: Lazy<Vec<Segment>> = Lazy::new(|| {
    [
        ((300.0, 100.0), (500.0, 300.0)),
        ((200.0, 600.0), (500.0, 800.0)),
        ((600.0, 300.0), (600.0, 500.0)),
        ((800.0, 600.0), (1000.0, 600.0)),
        ((1200.0, 100.0), (1200.0, 700.0)),
    ]
    .into_iter()
    .map(|((x1, y1), (x2, y2))| Segment::new(Point::new(x1, y1), Point::new(x2, y2)).unwrap())
    .collect()
});

pub struct Visualizer;

impl Plugin for Visualizer {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, set_up)
            .add_systems(Update, (update_text, draw_scene))
            .insert_resource(create_scene())
            .insert_resource(create_light())
            .init_resource::<FrameStats>();
    }
}

#[derive(Resource, Default)]
struct FrameStats {
    fps_samples: VecDeque<f64>,
}

fn create_light() -> LightRes {
    LightSource::new(
        Point::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0),
        LIGHT_RADIUS,
        RAY_COUNT,
    )
    .into()
}

fn create_scene() -> SceneRes {
    let mut scene = ObstacleRegistry::new();

    for wall in INTERIOR_WALLS.iter() {
        scene.register(*wall, Mobility::Rotatable);
    }

    // A handful of small scattered wall shards, deterministic across runs.
    let mut rng = ChaCha8Rng::seed_from_u64(RNG_SEED);
    let x_range = Uniform::try_from(100.0..=CANVAS_WIDTH - 100.0).unwrap();
    let y_range = Uniform::try_from(100.0..=CANVAS_HEIGHT - 100.0).unwrap();
    let heading = Uniform::try_from(0.0..=PI).unwrap();

    for _ in 0..NUMBER_OF_SHARDS {
        let center = Point::new(x_range.sample(&mut rng), y_range.sample(&mut rng));
        let angle = heading.sample(&mut rng);
        let (dx, dy) = (
            SHARD_HALF_LENGTH * angle.cos(),
            SHARD_HALF_LENGTH * angle.sin(),
        );
        let start = Point::new(center.x() - dx, center.y() - dy);
        let end = Point::new(center.x() + dx, center.y() + dy);
        scene.register(Segment::new(start, end).unwrap(), Mobility::Rotatable);
    }

    // Scene boundaries.
    for ((x1, y1), (x2, y2)) in [
        ((0.0, 0.0), (CANVAS_WIDTH, 0.0)),
        ((0.0, 0.0), (0.0, CANVAS_HEIGHT)),
        ((CANVAS_WIDTH, 0.0), (CANVAS_WIDTH, CANVAS_HEIGHT)),
        ((0.0, CANVAS_HEIGHT), (CANVAS_WIDTH, CANVAS_HEIGHT)),
    ] {
        scene.register(
            Segment::new(Point::new(x1, y1), Point::new(x2, y2)).unwrap(),
            Mobility::Fixed,
        );
    }

    scene.into()
}

fn set_up(mut commands: Commands) {
    commands.spawn(Camera2dBundle {
        transform: Transform::from_xyz(
            CANVAS_WIDTH as f32 / 2.0,
            -CANVAS_HEIGHT as f32 / 2.0,
            0.0,
        ),
        ..default()
    });

    let text_style = TextStyle {
        font_size: 24.0,
        ..default()
    };
    commands.spawn(
        TextBundle::from_sections(vec![TextSection::new("", text_style)]).with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        }),
    );
}

fn draw_scene(
    mut gizmos: Gizmos,
    scene: Res<SceneRes>,
    light: Res<LightRes>,
    state: Res<ControlState>,
) {
    for obstacle in scene.obstacles() {
        gizmos.line_2d(
            to_bevy_position(obstacle.segment().start()),
            to_bevy_position(obstacle.segment().end()),
            Color::WHITE,
        );
    }

    if state.emitting {
        let caster = RayCaster::new(light.ray_count(), PROBE_LENGTH);
        for (source, endpoint) in caster.cast(light.position(), &scene) {
            gizmos.line_2d(
                to_bevy_position(source),
                to_bevy_position(endpoint),
                LIGHT_COLOR,
            );
        }
    }

    gizmos.circle_2d(
        to_bevy_position(light.position()),
        light.radius() as f32,
        LIGHT_COLOR,
    );
}

fn update_text(
    time: Res<Time>,
    state: Res<ControlState>,
    mut stats: ResMut<FrameStats>,
    mut text: Query<&mut Text>,
) {
    let dt = time.delta_seconds_f64();
    if dt > 0.0 {
        stats.fps_samples.push_back(1.0 / dt);
        if stats.fps_samples.len() > FPS_SAMPLES {
            stats.fps_samples.pop_front();
        }
    }
    let fps = stats.fps_samples.iter().sum::<f64>() / stats.fps_samples.len().max(1) as f64;

    let mut text = text.single_mut();
    text.sections[0].value = format!(
        "SPEED_MOV: {:.0}, SPEED_ROT: {:.0}, FPS: {:.0}",
        state.move_speed, state.rotate_speed, fps
    );
}

fn to_bevy_position(position: Point) -> Vec2 {
    Vec2::new(position.x() as f32, -position.y() as f32)
}

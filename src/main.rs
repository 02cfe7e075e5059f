use bevy::prelude::*;

mod controller;
mod domain;
mod resource;
mod simulator;
mod visualizer;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Rays".to_string(),
                resolution: (
                    visualizer::CANVAS_WIDTH as f32,
                    visualizer::CANVAS_HEIGHT as f32,
                )
                    .into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(controller::Controller)
        .add_plugins(visualizer::Visualizer)
        .add_plugins(simulator::Simulator)
        .run();
}

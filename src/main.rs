use bevy::prelude::*;

mod camera;
mod input;
mod visual;

use bevy::window::WindowResolution;
use camera::CameraPlugin;
use input::InputPlugin;

use crate::visual::plugin::GraphPlugin;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Flow Graph".into(),
            resolution: WindowResolution::new(1280, 720),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(CameraPlugin)
    .add_plugins(InputPlugin)
    .add_plugins(GraphPlugin);

    app.run();
}

use bevy::prelude::*;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GraphCamera>()
            .add_systems(Startup, setup_camera);
    }
}

/// Where the camera sits relative to the layout
#[derive(Resource, Debug, Clone)]
pub struct GraphCamera {
    /// Distance from the origin along +Z
    pub distance: f32,
    /// Point the camera looks at (the layout is scattered around the origin)
    pub focus: Vec3,
}

impl Default for GraphCamera {
    fn default() -> Self {
        Self {
            distance: 18.0,
            focus: Vec3::ZERO,
        }
    }
}

#[derive(Component)]
pub struct MainCamera;

/// Perspective camera on the +Z axis looking back at the layout, plus a key light
///
/// ```text
///        Y
///        ↑
///        |
///   -----+----→ X
///       /
///      ↙ Z (towards the camera)
/// ```
fn setup_camera(mut commands: Commands, graph_camera: Res<GraphCamera>) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(graph_camera.focus + Vec3::Z * graph_camera.distance)
            .looking_at(graph_camera.focus, Vec3::Y),
        MainCamera,
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            ..default()
        },
        Transform::from_xyz(4.0, 8.0, 6.0).looking_at(graph_camera.focus, Vec3::Y),
    ));
}

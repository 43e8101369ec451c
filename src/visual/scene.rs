use bevy::prelude::*;
use flow_graph::config::LayoutConfig;
use flow_graph::graph::NodeId;
use flow_graph::layout::LayoutSimulator;

/// Rendered radius of a node sphere, also used for picking
pub const NODE_RADIUS: f32 = 0.3;

const NODE_COLOR: Color = Color::srgb(0.2, 0.55, 1.0);

#[derive(Component, Debug)]
pub struct GraphNode {
    pub node_id: NodeId,
}

/// Build the layout from the config and store it as a resource
pub fn setup_layout(mut commands: Commands) {
    let config = LayoutConfig::load();
    match LayoutSimulator::new(config) {
        Ok(layout) => commands.insert_resource(layout),
        Err(err) => error!("Could not build layout: {}", err),
    }
}

/// One sphere per node, placed at the node's current position
pub fn spawn_nodes(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    layout: Res<LayoutSimulator>,
) {
    let mesh = meshes.add(Sphere::new(NODE_RADIUS).mesh().uv(24, 16));
    let material = materials.add(StandardMaterial {
        base_color: NODE_COLOR,
        perceptual_roughness: 0.6,
        ..default()
    });

    for (i, &position) in layout.graph().positions().iter().enumerate() {
        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(position),
            GraphNode { node_id: NodeId(i) },
        ));
    }
}

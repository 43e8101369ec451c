use bevy::prelude::*;
use flow_graph::layout::LayoutSimulator;

use crate::visual::scene::GraphNode;

/// System: advance the layout by this frame's elapsed time
pub fn advance_layout(time: Res<Time>, mut layout: ResMut<LayoutSimulator>) {
    layout.step(time.delta_secs());
}

/// System: move node spheres to the simulated positions
pub fn sync_node_transforms(
    layout: Res<LayoutSimulator>,
    mut nodes: Query<(&GraphNode, &mut Transform)>,
) {
    if !layout.is_changed() {
        return;
    }

    for (graph_node, mut transform) in &mut nodes {
        match layout.position_of(graph_node.node_id) {
            Ok(position) => transform.translation = position,
            Err(err) => warn!("Node entity without a layout node: {}", err),
        }
    }
}

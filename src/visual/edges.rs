use bevy::prelude::*;
use flow_graph::layout::LayoutSimulator;

use crate::visual::scene::NODE_RADIUS;

const EDGE_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);
const DRAG_COLOR: Color = Color::srgb(1.0, 0.85, 0.2);

/// System: draw every edge as a line between its endpoints
pub fn draw_edges(layout: Res<LayoutSimulator>, mut gizmos: Gizmos) {
    for edge in layout.all_edges() {
        if let Ok((start, end)) = edge.endpoints(layout.graph()) {
            gizmos.line(start, end, EDGE_COLOR);
        }
    }
}

/// System: ring the node currently being dragged
pub fn draw_drag_highlight(layout: Res<LayoutSimulator>, mut gizmos: Gizmos) {
    let Some(position) = layout
        .dragged_node()
        .and_then(|node| layout.position_of(node).ok())
    else {
        return;
    };

    gizmos.sphere(
        Isometry3d::new(position, Quat::IDENTITY),
        NODE_RADIUS * 1.4,
        DRAG_COLOR,
    );
}

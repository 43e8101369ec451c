use crate::visual::edges::{draw_drag_highlight, draw_edges};
use crate::visual::pointer::handle_pointer_input;
use crate::visual::scene::{setup_layout, spawn_nodes};
use crate::visual::sync::{advance_layout, sync_node_transforms};
use bevy::prelude::*;
use flow_graph::layout::LayoutSimulator;

pub struct GraphPlugin;

impl Plugin for GraphPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (
                setup_layout,
                spawn_nodes.run_if(resource_exists::<LayoutSimulator>),
            )
                .chain(),
        )
        .add_systems(
            Update,
            (
                // Input first so the force pass sees this frame's drag
                handle_pointer_input,
                advance_layout,
                sync_node_transforms,
                draw_edges,
                draw_drag_highlight,
            )
                .chain()
                .run_if(resource_exists::<LayoutSimulator>),
        );
    }
}

use bevy::prelude::*;
use flow_graph::layout::{LayoutSimulator, PointerInput};

use crate::{
    camera::{GraphCamera, MainCamera},
    input::{PointerEvent, PointerEventType, PointerPlane},
    visual::{picking::RayPicker, scene::NODE_RADIUS},
};

/// System: turn window pointer events into drag operations on the layout
pub fn handle_pointer_input(
    mut pointer_events: MessageReader<PointerEvent>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    graph_camera: Res<GraphCamera>,
    mut layout: ResMut<LayoutSimulator>,
) {
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    let plane = PointerPlane::facing(camera_transform, graph_camera.focus);

    for event in pointer_events.read() {
        // A release ends the drag even if the pointer left the plane
        if event.event_type == PointerEventType::Up {
            layout.end_drag();
            continue;
        }

        let Some(world_pos) = event
            .to_world_ray(camera, camera_transform)
            .and_then(|ray| plane.intersect(ray))
        else {
            continue;
        };

        let input = match event.event_type {
            PointerEventType::Down => PointerInput::Down(world_pos),
            PointerEventType::Move => PointerInput::Move(world_pos),
            PointerEventType::Up => PointerInput::Up,
        };

        // Picking reads a snapshot so the layout can be borrowed mutably
        let positions = layout.graph().positions().to_vec();
        let picker = RayPicker {
            eye: camera_transform.translation(),
            radius: NODE_RADIUS,
            positions: &positions,
        };

        layout.handle_pointer(input, &picker);
    }
}

use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::prelude::*;
use bevy::window::CursorMoved;

pub struct InputPlugin;
impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CursorPos>()
            .add_message::<PointerEvent>()
            .add_systems(Update, (track_cursor_pos, collect_pointer_events).chain());
    }
}

#[derive(Message, Debug, Clone)]
pub struct PointerEvent {
    /// Window (logical) coordinates
    pub position: Vec2,
    pub event_type: PointerEventType,
    /// 0 = mouse, >0 = touch id
    pub id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventType {
    Down,
    Move,
    Up,
}

impl PointerEvent {
    /// Ray from the camera through the pointer
    pub fn to_world_ray(&self, camera: &Camera, camera_transform: &GlobalTransform) -> Option<Ray3d> {
        camera.viewport_to_world(camera_transform, self.position).ok()
    }
}

/// Plane the pointer is projected onto to get a world position.
///
/// Faces the camera through the layout centre, so every pointer position maps
/// to a fixed depth and a dragged node keeps its own depth through the offset.
#[derive(Debug, Clone, Copy)]
pub struct PointerPlane {
    pub origin: Vec3,
    pub normal: Dir3,
}

impl PointerPlane {
    pub fn facing(camera_transform: &GlobalTransform, origin: Vec3) -> Self {
        PointerPlane {
            origin,
            normal: camera_transform.back(),
        }
    }

    /// Where `ray` crosses the plane, if it does
    pub fn intersect(&self, ray: Ray3d) -> Option<Vec3> {
        let distance = ray.intersect_plane(self.origin, InfinitePlane3d::new(self.normal))?;
        Some(ray.get_point(distance))
    }
}

#[derive(Resource, Default, Debug, Clone, Copy)]
struct CursorPos(pub Option<Vec2>);

fn track_cursor_pos(mut ev_cursor: MessageReader<CursorMoved>, mut pos: ResMut<CursorPos>) {
    for e in ev_cursor.read() {
        // last event wins
        pos.0 = Some(e.position);
    }
}

fn collect_pointer_events(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    cursor: Res<CursorPos>,
    mut touch_events: MessageReader<TouchInput>,
    mut out: MessageWriter<PointerEvent>,
) {
    if let Some(p) = cursor.0 {
        if mouse_buttons.just_pressed(MouseButton::Left) {
            out.write(PointerEvent {
                position: p,
                event_type: PointerEventType::Down,
                id: 0,
            });
        }
        if mouse_buttons.pressed(MouseButton::Left) {
            out.write(PointerEvent {
                position: p,
                event_type: PointerEventType::Move,
                id: 0,
            });
        }
        if mouse_buttons.just_released(MouseButton::Left) {
            out.write(PointerEvent {
                position: p,
                event_type: PointerEventType::Up,
                id: 0,
            });
        }
    }

    for ev in touch_events.read() {
        let event_type = match ev.phase {
            TouchPhase::Started => PointerEventType::Down,
            TouchPhase::Moved => PointerEventType::Move,
            TouchPhase::Ended | TouchPhase::Canceled => PointerEventType::Up,
        };
        out.write(PointerEvent {
            position: ev.position,
            event_type,
            id: ev.id,
        });
    }
}

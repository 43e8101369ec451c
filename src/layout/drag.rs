use bevy::math::Vec3;

use crate::graph::NodeId;

/// Pointer input in world space, as seen by the layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    Down(Vec3),
    Move(Vec3),
    Up,
}

/// Which node (if any) lies under a world-space pointer position.
///
/// Supplied by whoever renders the nodes; the layout never ray-casts itself.
pub trait HitTest {
    fn hit_test(&self, pointer: Vec3) -> Option<NodeId>;
}

impl<F> HitTest for F
where
    F: Fn(Vec3) -> Option<NodeId>,
{
    fn hit_test(&self, pointer: Vec3) -> Option<NodeId> {
        self(pointer)
    }
}

/// Drag state machine: `Idle` until a pointer-down lands on a node
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        node: NodeId,
        /// Node position minus pointer position at the moment of selection
        offset: Vec3,
    },
}

impl DragState {
    pub fn node(&self) -> Option<NodeId> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { node, .. } => Some(*node),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// Where the dragged node should sit for a given pointer position
    pub fn target(&self, pointer: Vec3) -> Option<(NodeId, Vec3)> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { node, offset } => Some((*node, pointer + *offset)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_has_no_target() {
        let state = DragState::default();
        assert!(!state.is_dragging());
        assert_eq!(state.node(), None);
        assert_eq!(state.target(Vec3::ONE), None);
    }

    #[test]
    fn test_target_keeps_offset() {
        let state = DragState::Dragging {
            node: NodeId(2),
            offset: Vec3::new(0.5, 0.0, -1.0),
        };

        assert!(state.is_dragging());
        assert_eq!(state.node(), Some(NodeId(2)));
        assert_eq!(
            state.target(Vec3::new(1.0, 1.0, 1.0)),
            Some((NodeId(2), Vec3::new(1.5, 1.0, 0.0)))
        );
    }

    #[test]
    fn test_closures_are_hit_tests() {
        let hit = |p: Vec3| (p.x > 0.0).then_some(NodeId(1));

        assert_eq!(hit.hit_test(Vec3::X), Some(NodeId(1)));
        assert_eq!(hit.hit_test(-Vec3::X), None);
    }
}

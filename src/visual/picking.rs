use bevy::prelude::*;
use flow_graph::graph::NodeId;
use flow_graph::layout::HitTest;

/// Picks the node sphere nearest to the camera along the ray from `eye`
/// through the pointer's world position
#[derive(Debug, Clone)]
pub struct RayPicker<'a> {
    pub eye: Vec3,
    pub radius: f32,
    pub positions: &'a [Vec3],
}

impl HitTest for RayPicker<'_> {
    fn hit_test(&self, pointer: Vec3) -> Option<NodeId> {
        let direction = (pointer - self.eye).try_normalize()?;
        let radius_sq = self.radius * self.radius;

        self.positions
            .iter()
            .enumerate()
            .filter_map(|(i, &center)| {
                let to_center = center - self.eye;
                let along = to_center.dot(direction);
                if along < 0.0 {
                    return None; // behind the camera
                }
                let miss_sq = to_center.length_squared() - along * along;
                (miss_sq <= radius_sq).then_some((i, along))
            })
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(i, _)| NodeId(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picks_sphere_under_pointer() {
        let positions = [Vec3::new(0.0, 0.0, 0.0), Vec3::new(3.0, 0.0, 0.0)];
        let picker = RayPicker {
            eye: Vec3::new(0.0, 0.0, 10.0),
            radius: 0.5,
            positions: &positions,
        };

        assert_eq!(picker.hit_test(Vec3::new(3.2, 0.0, 0.0)), Some(NodeId(1)));
        assert_eq!(picker.hit_test(Vec3::new(1.5, 0.0, 0.0)), None);
    }

    #[test]
    fn test_prefers_nearest_along_ray() {
        // Two spheres stacked along the view direction
        let positions = [Vec3::new(0.0, 0.0, -2.0), Vec3::new(0.0, 0.0, 2.0)];
        let picker = RayPicker {
            eye: Vec3::new(0.0, 0.0, 10.0),
            radius: 0.5,
            positions: &positions,
        };

        assert_eq!(picker.hit_test(Vec3::ZERO), Some(NodeId(1)));
    }

    #[test]
    fn test_ignores_spheres_behind_camera() {
        let positions = [Vec3::new(0.0, 0.0, 12.0)];
        let picker = RayPicker {
            eye: Vec3::new(0.0, 0.0, 10.0),
            radius: 0.5,
            positions: &positions,
        };

        assert_eq!(picker.hit_test(Vec3::ZERO), None);
    }
}

use bevy::math::Vec3;

use crate::config::LayoutConfig;

/// Force exerted on a node at `origin` by a node at `other`.
///
/// Only exactly coincident nodes (distance `0.0`) contribute nothing, since they
/// have no direction. Any non-zero separation, however small, gets the full
/// force for its branch. A non-finite offset also yields zero.
///
/// Neither branch is bounded: attraction grows linearly with distance and
/// repulsion diverges as non-adjacent nodes approach each other. Both are
/// kept as-is; very close non-adjacent pairs can throw nodes far in one step.
pub fn pair_force(origin: Vec3, other: Vec3, adjacent: bool, config: &LayoutConfig) -> Vec3 {
    let offset = other - origin;
    let distance = offset.length();
    if distance == 0.0 || !distance.is_finite() {
        return Vec3::ZERO;
    }
    let direction = offset / distance;

    if !adjacent {
        return repulsion(direction, distance, config.repulsion_force);
    }

    if distance < config.collision_threshold {
        collision(
            direction,
            distance,
            config.collision_threshold,
            config.collision_repulsion_force,
        )
    } else {
        attraction(direction, distance, config.attraction_force)
    }
}

/// Spring along an edge, pulling harder the further apart the nodes are
pub fn attraction(direction: Vec3, distance: f32, strength: f32) -> Vec3 {
    direction * strength * distance
}

/// Push between overlapping neighbors, fading to zero at `threshold`
pub fn collision(direction: Vec3, distance: f32, threshold: f32, strength: f32) -> Vec3 {
    -direction * strength * (threshold - distance)
}

/// Inverse-distance push between nodes that share no edge
pub fn repulsion(direction: Vec3, distance: f32, strength: f32) -> Vec3 {
    -direction * strength / distance
}

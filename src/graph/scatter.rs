use bevy::math::Vec3;
use rand::{Rng, RngCore};

/// Source of initial node positions
pub trait PositionProvider {
    fn position(&mut self, index: usize, rng: &mut dyn RngCore) -> Vec3;
}

/// Uniform scatter inside a ball centred on the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereScatter {
    pub radius: f32,
}

impl SphereScatter {
    pub fn new(radius: f32) -> Self {
        SphereScatter { radius }
    }
}

impl PositionProvider for SphereScatter {
    fn position(&mut self, _index: usize, rng: &mut dyn RngCore) -> Vec3 {
        if self.radius == 0.0 {
            return Vec3::ZERO;
        }

        // Rejection sampling from the enclosing cube keeps the density uniform
        loop {
            let candidate = Vec3::new(
                rng.random_range(-1.0..=1.0),
                rng.random_range(-1.0..=1.0),
                rng.random_range(-1.0..=1.0),
            );
            if candidate.length_squared() <= 1.0 {
                return candidate * self.radius;
            }
        }
    }
}

impl<F> PositionProvider for F
where
    F: FnMut(usize) -> Vec3,
{
    fn position(&mut self, index: usize, _rng: &mut dyn RngCore) -> Vec3 {
        self(index)
    }
}

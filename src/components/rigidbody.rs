//! Kinematic body component with named acceleration forces.
//!
//! The player carries a `gravity` force; enemies fly and bullets move on
//! their own, so they keep no forces. The `frozen` flag stops the movement
//! system from touching the body (dead player, dying enemy).

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;
use rustc_hash::FxHashMap;

pub const GRAVITY: &str = "gravity";

/// A named acceleration force that can be toggled on/off.
#[derive(Clone, Copy, Debug)]
pub struct AccelerationForce {
    /// Pixels per second squared.
    pub value: Vector2,
    pub enabled: bool,
}

/// Kinematic body storing velocity and named acceleration forces.
///
/// Updated by gameplay systems and consumed by the movement system to update
/// [`MapPosition`](super::mapposition::MapPosition).
#[derive(Component, Clone, Debug, Default)]
pub struct RigidBody {
    /// Current velocity in pixels per second.
    pub velocity: Vector2,
    /// The total acceleration is the sum of all enabled forces.
    pub forces: FxHashMap<String, AccelerationForce>,
    /// Velocity damping factor. Applied as: velocity *= (1 - friction * delta).
    pub friction: f32,
    /// Optional clamp on the speed along y (falling speed).
    pub max_fall_speed: Option<f32>,
    /// When true, the movement system skips this entity.
    pub frozen: bool,
}

impl RigidBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_velocity(mut self, velocity: Vector2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Add or update a named acceleration force (enabled).
    pub fn add_force(&mut self, name: &str, value: Vector2) {
        self.forces.insert(
            name.to_string(),
            AccelerationForce {
                value,
                enabled: true,
            },
        );
    }

    /// Returns false if the force doesn't exist.
    pub fn set_force_enabled(&mut self, name: &str, enabled: bool) -> bool {
        match self.forces.get_mut(name) {
            Some(force) => {
                force.enabled = enabled;
                true
            }
            None => false,
        }
    }

    pub fn total_acceleration(&self) -> Vector2 {
        self.forces
            .values()
            .filter(|f| f.enabled)
            .fold(Vector2::zero(), |acc, f| acc + f.value)
    }

    /// Stop and hold the body in place.
    pub fn freeze(&mut self) {
        self.frozen = true;
        self.velocity = Vector2::zero();
    }

    pub fn unfreeze(&mut self) {
        self.frozen = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_forces_are_ignored() {
        let mut rb = RigidBody::new();
        rb.add_force(GRAVITY, Vector2 { x: 0.0, y: 900.0 });
        rb.add_force("wind", Vector2 { x: 10.0, y: 0.0 });
        assert_eq!(rb.total_acceleration(), Vector2 { x: 10.0, y: 900.0 });
        assert!(rb.set_force_enabled(GRAVITY, false));
        assert_eq!(rb.total_acceleration(), Vector2 { x: 10.0, y: 0.0 });
        assert!(!rb.set_force_enabled("missing", true));
    }

    #[test]
    fn freeze_stops_velocity() {
        let mut rb = RigidBody::new().with_velocity(Vector2 { x: 5.0, y: 5.0 });
        rb.freeze();
        assert!(rb.frozen);
        assert_eq!(rb.velocity, Vector2::zero());
        rb.unfreeze();
        assert!(!rb.frozen);
    }
}

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

pub const DEFAULT_BULLET_SPEED: f32 = 320.0;
pub const DEFAULT_BULLET_DAMAGE: i32 = 1;
/// Bullets that somehow never leave the view still go away.
pub const BULLET_LIFETIME: f32 = 5.0;

/// Straight-line projectile fired by the player.
///
/// Moves kinematically, ignores platforms and is consumed by the first enemy
/// it touches.
#[derive(Component, Debug, Clone)]
pub struct Bullet {
    direction: Vector2,
    pub speed: f32,
    pub damage: i32,
}

impl Default for Bullet {
    fn default() -> Self {
        Self {
            direction: Vector2::zero(),
            speed: DEFAULT_BULLET_SPEED,
            damage: DEFAULT_BULLET_DAMAGE,
        }
    }
}

impl Bullet {
    pub fn new(direction: Vector2) -> Self {
        let mut bullet = Self::default();
        bullet.set_direction(direction);
        bullet
    }

    /// Stored normalised; a zero vector stays zero.
    pub fn set_direction(&mut self, direction: Vector2) {
        self.direction = if direction.length() > f32::EPSILON {
            direction.normalized()
        } else {
            Vector2::zero()
        };
    }

    pub fn direction(&self) -> Vector2 {
        self.direction
    }

    pub fn displacement(&self, dt: f32) -> Vector2 {
        self.direction.scale_by(self.speed * dt)
    }
}

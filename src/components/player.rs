//! Player components: movement/jump/shoot intent and the heart-based health.
//!
//! The logic lives in plain methods so it can be exercised without a window;
//! [`crate::systems::player`] wires it to input, physics and timers.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;
use smallvec::SmallVec;

/// Horizontal speed in pixels per second.
pub const DEFAULT_MOVE_SPEED: f32 = 160.0;
/// Upward speed applied on each jump.
pub const DEFAULT_JUMP_FORCE: f32 = 360.0;
/// Downward acceleration applied through the `gravity` force.
pub const DEFAULT_GRAVITY: f32 = 900.0;
pub const DEFAULT_DEATH_DELAY: f32 = 1.0;
/// Three hearts of two points each.
pub const DEFAULT_MAX_HEALTH: i32 = 6;

#[derive(Component, Debug, Clone)]
pub struct PlayerController {
    pub move_speed: f32,
    pub jump_force: f32,
    pub gravity: f32,
    /// Granted by the double-jump power-up while its timer runs.
    pub can_double_jump: bool,
    /// Set by the mid-air jump, cleared on landing.
    pub has_double_jumped: bool,
    /// Bullet origin relative to the pivot, for a player facing right.
    pub bullet_spawn_offset: Vector2,
    pub facing_right: bool,
    /// False once the player died; input is ignored from then on.
    pub alive: bool,
    pub death_delay: f32,
}

impl Default for PlayerController {
    fn default() -> Self {
        Self {
            move_speed: DEFAULT_MOVE_SPEED,
            jump_force: DEFAULT_JUMP_FORCE,
            gravity: DEFAULT_GRAVITY,
            can_double_jump: false,
            has_double_jumped: false,
            bullet_spawn_offset: Vector2 { x: 10.0, y: -14.0 },
            facing_right: true,
            alive: true,
            death_delay: DEFAULT_DEATH_DELAY,
        }
    }
}

impl PlayerController {
    /// Horizontal velocity for an input axis in `[-1, 1]`.
    pub fn horizontal_velocity(&self, axis: f32) -> f32 {
        axis.clamp(-1.0, 1.0) * self.move_speed
    }

    /// Turn towards the input direction; zero input keeps the facing.
    pub fn update_facing(&mut self, axis: f32) {
        if axis > 0.0 {
            self.facing_right = true;
        } else if axis < 0.0 {
            self.facing_right = false;
        }
    }

    /// Resolve a jump press.
    ///
    /// Returns the new vertical velocity when a jump happens: a grounded jump
    /// or, while the power-up is active, a single extra jump in the air.
    pub fn try_jump(&mut self, grounded: bool) -> Option<f32> {
        if grounded {
            self.has_double_jumped = false;
            Some(-self.jump_force)
        } else if self.can_double_jump && !self.has_double_jumped {
            self.has_double_jumped = true;
            Some(-self.jump_force)
        } else {
            None
        }
    }

    /// Touching the ground makes the extra jump available again.
    pub fn land(&mut self) {
        self.has_double_jumped = false;
    }

    pub fn activate_double_jump(&mut self) {
        self.can_double_jump = true;
    }

    pub fn end_double_jump(&mut self) {
        self.can_double_jump = false;
    }

    pub fn bullet_spawn_point(&self, position: Vector2) -> Vector2 {
        let dx = if self.facing_right {
            self.bullet_spawn_offset.x
        } else {
            -self.bullet_spawn_offset.x
        };
        Vector2 {
            x: position.x + dx,
            y: position.y + self.bullet_spawn_offset.y,
        }
    }
}

/// Unit vector from `from` to `to`, or zero when both points coincide.
pub fn aim_direction(from: Vector2, to: Vector2) -> Vector2 {
    let delta = to - from;
    if delta.length() <= f32::EPSILON {
        Vector2::zero()
    } else {
        delta.normalized()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeartState {
    Full,
    Half,
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Invincible, already dead or a non-positive amount.
    Ignored,
    Hurt,
    /// Health reached zero with this hit.
    Died,
}

#[derive(Component, Debug, Clone)]
pub struct PlayerHealth {
    pub max_health: i32,
    pub current: i32,
    pub invincible: bool,
    pub dead: bool,
}

impl Default for PlayerHealth {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HEALTH)
    }
}

impl PlayerHealth {
    pub fn new(max_health: i32) -> Self {
        let max_health = max_health.max(1);
        Self {
            max_health,
            current: max_health,
            invincible: false,
            dead: false,
        }
    }

    pub fn take_damage(&mut self, amount: i32) -> DamageOutcome {
        if self.invincible || self.dead || amount <= 0 {
            return DamageOutcome::Ignored;
        }
        self.current = (self.current - amount).max(0);
        if self.current == 0 {
            self.dead = true;
            DamageOutcome::Died
        } else {
            DamageOutcome::Hurt
        }
    }

    /// Returns the health after healing.
    pub fn restore_health(&mut self, amount: i32) -> i32 {
        if !self.dead && amount > 0 {
            self.current = (self.current + amount).min(self.max_health);
        }
        self.current
    }

    /// Returns false (and changes nothing) for non-positive durations.
    pub fn activate_invincibility(&mut self, duration: f32) -> bool {
        if duration <= 0.0 {
            return false;
        }
        self.invincible = true;
        true
    }

    pub fn end_invincibility(&mut self) {
        self.invincible = false;
    }

    pub fn heart_count(&self) -> usize {
        (self.max_health / 2).max(1) as usize
    }

    /// Heart `index` stands for `2 * (index + 1)` health points.
    pub fn heart(&self, index: usize) -> HeartState {
        let full_at = 2 * (index as i32 + 1);
        if self.current >= full_at {
            HeartState::Full
        } else if self.current >= full_at - 1 {
            HeartState::Half
        } else {
            HeartState::Empty
        }
    }

    pub fn hearts(&self) -> SmallVec<[HeartState; 8]> {
        (0..self.heart_count()).map(|i| self.heart(i)).collect()
    }
}

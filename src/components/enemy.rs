//! Enemy health/damage and the chase-and-attack AI.
//!
//! [`EnemyAi`] picks a state from the distance to the player and smooths its
//! velocity towards a target with a bounded acceleration. The
//! [`crate::systems::enemy`] systems feed it positions and apply its output.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

use crate::components::player::DamageOutcome;

pub const DEFAULT_ENEMY_HEALTH: i32 = 2;
pub const DEFAULT_CONTACT_DAMAGE: i32 = 1;
pub const DEFAULT_ATTACK_DAMAGE: i32 = 1;
/// Seconds the death animation plays before the entity despawns.
pub const DEATH_DESPAWN_DELAY: f32 = 0.4;

#[derive(Component, Debug, Clone)]
pub struct Enemy {
    pub health: i32,
    /// Damage dealt when the player touches the enemy.
    pub damage: i32,
    /// Damage dealt by a melee attack that lands.
    pub attack_damage: i32,
    pub hit_box_size: Vector2,
    /// Centre of the hit box relative to the pivot, for an enemy facing right.
    pub hit_offset: Vector2,
    pub facing_right: bool,
    pub dead: bool,
}

impl Default for Enemy {
    fn default() -> Self {
        Self {
            health: DEFAULT_ENEMY_HEALTH,
            damage: DEFAULT_CONTACT_DAMAGE,
            attack_damage: DEFAULT_ATTACK_DAMAGE,
            hit_box_size: Vector2 { x: 20.0, y: 16.0 },
            hit_offset: Vector2 { x: 18.0, y: 0.0 },
            facing_right: true,
            dead: false,
        }
    }
}

impl Enemy {
    pub fn take_damage(&mut self, amount: i32) -> DamageOutcome {
        if self.dead || amount <= 0 {
            return DamageOutcome::Ignored;
        }
        self.health -= amount;
        if self.health <= 0 {
            self.dead = true;
            DamageOutcome::Died
        } else {
            DamageOutcome::Hurt
        }
    }

    /// World-space (min, max) corners of the melee hit box.
    pub fn hit_box(&self, position: Vector2) -> (Vector2, Vector2) {
        let dx = if self.facing_right {
            self.hit_offset.x
        } else {
            -self.hit_offset.x
        };
        let center = Vector2 {
            x: position.x + dx,
            y: position.y + self.hit_offset.y,
        };
        let half = self.hit_box_size.scale_by(0.5);
        (center - half, center + half)
    }

    /// Face the target horizontally; an exactly aligned target keeps the facing.
    pub fn face_towards(&mut self, own_x: f32, target_x: f32) {
        if target_x > own_x {
            self.facing_right = true;
        } else if target_x < own_x {
            self.facing_right = false;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnemyState {
    #[default]
    Idle,
    Walking,
    Attacking,
}

pub const DEFAULT_ENEMY_SPEED: f32 = 112.0;
pub const DEFAULT_ENEMY_ACCELERATION: f32 = 256.0;
pub const DEFAULT_VISION_RANGE: f32 = 160.0;
pub const DEFAULT_ATTACK_DISTANCE: f32 = 48.0;
pub const DEFAULT_ATTACK_COOLDOWN: f32 = 0.6;

#[derive(Component, Debug, Clone)]
pub struct EnemyAi {
    pub move_speed: f32,
    pub acceleration: f32,
    pub vision_range: f32,
    pub attack_distance: f32,
    pub attack_cooldown: f32,
    pub state: EnemyState,
    /// World time at which the next attack is allowed.
    pub next_attack_time: f32,
    pub target_velocity: Vector2,
    pub current_velocity: Vector2,
    pub can_move: bool,
}

impl Default for EnemyAi {
    fn default() -> Self {
        Self {
            move_speed: DEFAULT_ENEMY_SPEED,
            acceleration: DEFAULT_ENEMY_ACCELERATION,
            vision_range: DEFAULT_VISION_RANGE,
            attack_distance: DEFAULT_ATTACK_DISTANCE,
            attack_cooldown: DEFAULT_ATTACK_COOLDOWN,
            state: EnemyState::Idle,
            next_attack_time: 0.0,
            target_velocity: Vector2::zero(),
            current_velocity: Vector2::zero(),
            can_move: true,
        }
    }
}

/// What the AI wants this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiDecision {
    /// Value for the `speed` animation signal.
    pub movement_speed: f32,
    pub attack: bool,
}

impl AiDecision {
    fn still() -> Self {
        Self {
            movement_speed: 0.0,
            attack: false,
        }
    }
}

impl EnemyAi {
    pub fn with_move_speed(mut self, speed: f32) -> Self {
        self.set_move_speed(speed);
        self
    }

    pub fn set_move_speed(&mut self, speed: f32) {
        self.move_speed = speed.max(0.0);
    }

    pub fn stop_movement(&mut self) {
        self.can_move = false;
        self.target_velocity = Vector2::zero();
        self.current_velocity = Vector2::zero();
    }

    pub fn state_for_distance(&self, distance: f32) -> EnemyState {
        if distance > self.vision_range {
            EnemyState::Idle
        } else if distance <= self.attack_distance {
            EnemyState::Attacking
        } else {
            EnemyState::Walking
        }
    }

    /// Choose state and target velocity.
    ///
    /// `to_player` is the vector from the enemy to the player, `None` when
    /// there is no player. `now` is the world time in seconds.
    pub fn think(&mut self, to_player: Option<Vector2>, now: f32, dead: bool) -> AiDecision {
        let Some(to_player) = to_player.filter(|_| self.can_move && !dead) else {
            self.target_velocity = Vector2::zero();
            return AiDecision::still();
        };

        let distance = to_player.length();
        self.state = self.state_for_distance(distance);
        match self.state {
            EnemyState::Idle => {
                self.target_velocity = Vector2::zero();
                AiDecision::still()
            }
            EnemyState::Walking => {
                self.target_velocity = to_player.normalized().scale_by(self.move_speed);
                AiDecision {
                    movement_speed: self.target_velocity.length(),
                    attack: false,
                }
            }
            EnemyState::Attacking => {
                self.target_velocity = Vector2::zero();
                let attack = now >= self.next_attack_time;
                if attack {
                    self.next_attack_time = now + self.attack_cooldown;
                }
                AiDecision {
                    movement_speed: 0.0,
                    attack,
                }
            }
        }
    }

    /// Move `current_velocity` towards the target by at most `acceleration * dt`.
    pub fn step_velocity(&mut self, dt: f32) -> Vector2 {
        self.current_velocity = move_towards(
            self.current_velocity,
            self.target_velocity,
            self.acceleration * dt,
        );
        self.current_velocity
    }
}

/// Vector counterpart of a clamped step: never overshoots `target`.
pub fn move_towards(current: Vector2, target: Vector2, max_delta: f32) -> Vector2 {
    let delta = target - current;
    let distance = delta.length();
    if distance <= max_delta || distance == 0.0 {
        target
    } else {
        current + delta.scale_by(max_delta / distance)
    }
}

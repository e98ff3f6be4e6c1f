//! Entity templates.
//!
//! Each function spawns one kind of game entity with every component it
//! needs. Scene loading, the spawner and the player's gun all go through
//! these, so an enemy placed in a level and a spawned one are identical.

use bevy_ecs::prelude::*;
use raylib::prelude::{Color, Vector2};

use crate::components::animation::Animation;
use crate::components::boxcollider::BoxCollider;
use crate::components::bullet::{BULLET_LIFETIME, Bullet};
use crate::components::camerafollow::CameraFollow;
use crate::components::dynamictext::DynamicText;
use crate::components::enemy::{Enemy, EnemyAi};
use crate::components::enemyspawner::EnemySpawner;
use crate::components::group::{self, Group};
use crate::components::hud::{HeartSlot, HudText};
use crate::components::mapposition::MapPosition;
use crate::components::parallax::ParallaxLayer;
use crate::components::pickable::{Pickable, PickableKind};
use crate::components::player::{PlayerController, PlayerHealth};
use crate::components::rigidbody::{self, RigidBody};
use crate::components::scale::Scale;
use crate::components::screenposition::ScreenPosition;
use crate::components::signals::Signals;
use crate::components::solid::{PlatformBody, Solid};
use crate::components::sprite::Sprite;
use crate::components::timer::Timers;
use crate::components::zindex::ZIndex;
use crate::resources::level::{EnemyData, ParallaxData, PowerUpData, Rect, SpawnerData};
use crate::resources::rng::GameRng;
use crate::systems::animation::{
    ENEMY_IDLE, PICKABLE_SPIN, PLAYER_IDLE, enemy_animation_controller,
    player_animation_controller,
};

pub const PLAYER_SIZE: Vector2 = Vector2 { x: 32.0, y: 32.0 };
pub const ENEMY_SIZE: Vector2 = Vector2 { x: 32.0, y: 32.0 };
pub const MAX_FALL_SPEED: f32 = 600.0;
pub const HUD_FONT: &str = "arcade";

pub fn spawn_player(commands: &mut Commands, position: Vector2, camera_offset_y: f32) -> Entity {
    let controller = PlayerController::default();
    let mut body = RigidBody::new();
    body.add_force(
        rigidbody::GRAVITY,
        Vector2 {
            x: 0.0,
            y: controller.gravity,
        },
    );
    body.max_fall_speed = Some(MAX_FALL_SPEED);

    commands
        .spawn((
            Group::new(group::PLAYER),
            MapPosition::from_vec(position),
            ZIndex(10),
            Sprite::feet("player_sheet", PLAYER_SIZE.x, PLAYER_SIZE.y, Color::SKYBLUE),
            BoxCollider::feet(14.0, 28.0),
            body,
            PlatformBody::default(),
            controller,
            PlayerHealth::default(),
            Timers::new(),
            Signals::default(),
            Animation::new(PLAYER_IDLE),
            player_animation_controller(),
            CameraFollow {
                offset_y: camera_offset_y,
            },
        ))
        .id()
}

pub fn spawn_enemy(commands: &mut Commands, position: Vector2, move_speed: Option<f32>) -> Entity {
    let ai = match move_speed {
        Some(speed) => EnemyAi::default().with_move_speed(speed),
        None => EnemyAi::default(),
    };
    commands
        .spawn((
            Group::new(group::ENEMY),
            MapPosition::from_vec(position),
            ZIndex(5),
            Sprite::feet("enemy_sheet", ENEMY_SIZE.x, ENEMY_SIZE.y, Color::MAROON),
            BoxCollider::feet(18.0, 24.0),
            RigidBody::new(),
            PlatformBody::default(),
            Enemy::default(),
            ai,
            Signals::default(),
            Animation::new(ENEMY_IDLE),
            enemy_animation_controller(),
        ))
        .id()
}

pub fn spawn_level_enemy(commands: &mut Commands, data: &EnemyData) -> Entity {
    spawn_enemy(commands, Vector2 { x: data.x, y: data.y }, data.speed)
}

pub fn spawn_bullet(commands: &mut Commands, position: Vector2, direction: Vector2) -> Entity {
    commands
        .spawn((
            Group::new(group::BULLET),
            MapPosition::from_vec(position),
            ZIndex(8),
            Sprite::centered("bullet", 6.0, 6.0, Color::YELLOW),
            BoxCollider::centered(6.0, 6.0),
            Bullet::new(direction),
            crate::components::ttl::Ttl::new(BULLET_LIFETIME),
        ))
        .id()
}

pub fn spawn_coin(commands: &mut Commands, position: Vector2) -> Entity {
    commands
        .spawn((
            Group::new(group::PICKABLE),
            MapPosition::from_vec(position),
            ZIndex(4),
            Sprite::centered(PickableKind::Coin.texture_key(), 12.0, 12.0, Color::GOLD),
            BoxCollider::centered(12.0, 12.0),
            Pickable::new(PickableKind::Coin).with_value(1.0),
            Animation::new(PICKABLE_SPIN),
        ))
        .id()
}

/// Power-ups start at a random point of their spawn area.
pub fn spawn_power_up(commands: &mut Commands, data: &PowerUpData, rng: &mut GameRng) -> Entity {
    let pickable = Pickable::new(data.kind)
        .with_value(data.value)
        .with_respawn_time(data.respawn_time)
        .with_spawn_area(data.area_min.to_vec(), data.area_max.to_vec());
    let position = pickable.random_position(rng);
    let color = match data.kind {
        PickableKind::HealthPowerUp => Color::RED,
        PickableKind::InvincibilityPowerUp => Color::VIOLET,
        _ => Color::LIME,
    };
    commands
        .spawn((
            Group::new(group::PICKABLE),
            MapPosition::from_vec(position),
            ZIndex(4),
            Sprite::centered(data.kind.texture_key(), 14.0, 14.0, color),
            BoxCollider::centered(14.0, 14.0),
            pickable,
            Timers::new(),
        ))
        .id()
}

pub fn spawn_solid(commands: &mut Commands, rect: &Rect) -> Entity {
    commands
        .spawn((
            Group::new(group::SOLID),
            MapPosition::new(rect.x, rect.y),
            ZIndex(0),
            Sprite::top_left("platform", rect.w, rect.h, Color::DARKGREEN),
            BoxCollider::new(rect.w, rect.h),
            Solid,
        ))
        .id()
}

pub fn spawn_spawner(commands: &mut Commands, data: &SpawnerData) -> Entity {
    commands
        .spawn((
            MapPosition::new(data.x, data.y),
            EnemySpawner {
                interval: data.interval,
                area_size: Vector2 {
                    x: data.area_w,
                    y: data.area_h,
                },
                min_speed: data.min_speed,
                max_speed: data.max_speed,
                max_alive: data.max_alive,
                timer: 0.0,
            },
        ))
        .id()
}

pub fn spawn_parallax_layer(commands: &mut Commands, data: &ParallaxData) -> Entity {
    let [r, g, b, a] = data.color;
    commands
        .spawn((
            Group::new(group::SCENERY),
            MapPosition::new(data.x, data.y),
            ZIndex(data.z),
            Sprite::centered(
                data.texture.clone(),
                data.width,
                data.height,
                Color::new(r, g, b, a),
            ),
            Scale::default(),
            ParallaxLayer {
                parallax_x: data.parallax_x,
                parallax_y: data.parallax_y,
                fit_mode: data.fit_mode,
                keep_aspect: data.keep_aspect,
                align_to_camera_bottom: data.align_bottom,
                bottom_offset: data.bottom_offset,
                scale_multiplier: data.scale_multiplier.max(0.0),
                loop_x: data.loop_x,
                ..Default::default()
            },
        ))
        .id()
}

/// Hearts along the top-left corner, counters along the top-right.
pub fn spawn_hud(commands: &mut Commands, heart_count: usize, render_width: f32) {
    for i in 0..heart_count {
        commands.spawn((
            Group::new(group::UI),
            ScreenPosition::new(8.0 + i as f32 * 18.0, 8.0),
            Sprite::top_left("heart_full", 16.0, 16.0, Color::RED),
            HeartSlot(i),
        ));
    }
    let counters = [
        (HudText::Coins, 8.0),
        (HudText::Kills, 24.0),
        (HudText::PowerUps, 40.0),
    ];
    for (kind, y) in counters {
        commands.spawn((
            Group::new(group::UI),
            ScreenPosition::new(render_width - 150.0, y),
            DynamicText::new("", HUD_FONT, 12.0, Color::RAYWHITE),
            kind,
        ));
    }
}

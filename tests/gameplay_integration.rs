//! Gameplay integration tests: damage, pickups, power-up timers, enemies,
//! spawners, collisions and parallax, driven through headless worlds.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use skyhop::components::boxcollider::BoxCollider;
use skyhop::components::bullet::Bullet;
use skyhop::components::enemy::{Enemy, EnemyAi, EnemyState};
use skyhop::components::enemyspawner::EnemySpawner;
use skyhop::components::group::Group;
use skyhop::components::mapposition::MapPosition;
use skyhop::components::parallax::{ParallaxLayer, ParallaxSegment};
use skyhop::components::pickable::{Pickable, PickableKind};
use skyhop::components::player::{PlayerController, PlayerHealth};
use skyhop::components::rigidbody::RigidBody;
use skyhop::components::solid::PlatformBody;
use skyhop::components::sprite::Sprite;
use skyhop::components::timer::{self, Timers};
use skyhop::components::ttl::Ttl;
use skyhop::events::audio::AudioCmd;
use skyhop::events::collision::CollisionEvent;
use skyhop::events::gameplay::{
    CollectPickableEvent, DamageEnemyEvent, DamagePlayerEvent, RunEndedEvent,
};
use skyhop::prefabs;
use skyhop::resources::audio::AudioManager;
use skyhop::resources::camera2d::Camera2DRes;
use skyhop::resources::contacts::ContactPairs;
use skyhop::resources::input::InputState;
use skyhop::resources::level::{ParallaxData, Point, PowerUpData};
use skyhop::resources::rng::GameRng;
use skyhop::resources::screensize::ScreenSize;
use skyhop::resources::session::GameSession;
use skyhop::resources::worldsignals::WorldSignals;
use skyhop::resources::worldtime::WorldTime;
use skyhop::systems::bullet::{OFFSCREEN_MARGIN, bullet_system};
use skyhop::systems::collision::{collision_detector, collision_observer, game_collision_rules};
use skyhop::systems::enemy::{damage_enemy_observer, enemy_ai_system};
use skyhop::systems::parallax::parallax_system;
use skyhop::systems::pickup::collect_pickable_observer;
use skyhop::systems::player::{damage_player_observer, player_input};
use skyhop::systems::spawner::enemy_spawner_system;
use skyhop::systems::time::{timer_observer, update_timers};

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

#[derive(Resource, Default)]
struct RunEnds(Vec<RunEndedEvent>);

#[derive(Resource, Default)]
struct Collisions(usize);

fn make_world(delta: f32, session: GameSession) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime {
        elapsed: 0.0,
        delta,
        time_scale: 1.0,
    });
    world.insert_resource(ScreenSize { w: 640, h: 360 });
    world.insert_resource(session);
    world.insert_resource(WorldSignals::default());
    world.insert_resource(GameRng::with_seed(7));
    world.insert_resource(AudioManager::default());
    world.insert_resource(ContactPairs::default());
    world.init_resource::<RunEnds>();
    world.init_resource::<Messages<AudioCmd>>();

    world.add_observer(damage_player_observer);
    world.add_observer(damage_enemy_observer);
    world.add_observer(collect_pickable_observer);
    world.add_observer(timer_observer);
    world.add_observer(collision_observer);
    world.add_observer(|trigger: On<RunEndedEvent>, mut ends: ResMut<RunEnds>| {
        ends.0.push(*trigger.event());
    });
    world.flush();
    world
}

fn spawn_with(world: &mut World, f: impl FnOnce(&mut Commands) -> Entity) -> Entity {
    let entity = {
        let mut commands = world.commands();
        f(&mut commands)
    };
    world.flush();
    entity
}

fn spawn_player(world: &mut World, x: f32, y: f32) -> Entity {
    spawn_with(world, |c| prefabs::spawn_player(c, Vector2 { x, y }, 180.0))
}

fn power_up(kind: PickableKind, value: f32, respawn_time: f32) -> PowerUpData {
    PowerUpData {
        kind,
        value,
        respawn_time,
        area_min: Point::new(100.0, 100.0),
        area_max: Point::new(200.0, 150.0),
    }
}

fn spawn_power_up(world: &mut World, data: PowerUpData) -> Entity {
    let mut rng = GameRng::with_seed(3);
    spawn_with(world, |c| prefabs::spawn_power_up(c, &data, &mut rng))
}

fn tick_timers(world: &mut World, times: usize) {
    let mut schedule = Schedule::default();
    schedule.add_systems(update_timers);
    for _ in 0..times {
        schedule.run(world);
    }
}

fn tick_collisions(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(collision_detector);
    schedule.run(world);
}

fn health(world: &World, player: Entity) -> PlayerHealth {
    world.get::<PlayerHealth>(player).unwrap().clone()
}

#[test]
fn damage_reduces_health_and_plays_hurt() {
    let mut world = make_world(0.016, GameSession::new(5, 5));
    let player = spawn_player(&mut world, 0.0, 0.0);

    world.trigger(DamagePlayerEvent { player, amount: 1 });
    world.flush();

    assert_eq!(health(&world, player).current, 5);
    assert!(world.get::<PlayerController>(player).unwrap().alive);
}

#[test]
fn invincibility_blocks_damage_until_its_timer_ends() {
    let mut world = make_world(1.0, GameSession::new(5, 5));
    let player = spawn_player(&mut world, 0.0, 0.0);
    let star = spawn_power_up(
        &mut world,
        power_up(PickableKind::InvincibilityPowerUp, 5.0, 30.0),
    );

    world.trigger(CollectPickableEvent {
        pickable: star,
        collector: player,
    });
    world.flush();
    assert!(health(&world, player).invincible);
    assert!(
        world
            .get::<Timers>(player)
            .unwrap()
            .is_running(timer::INVINCIBILITY_END)
    );

    world.trigger(DamagePlayerEvent { player, amount: 3 });
    world.flush();
    assert_eq!(health(&world, player).current, 6);

    tick_timers(&mut world, 4);
    assert!(health(&world, player).invincible);
    tick_timers(&mut world, 2);
    assert!(!health(&world, player).invincible);

    world.trigger(DamagePlayerEvent { player, amount: 3 });
    world.flush();
    assert_eq!(health(&world, player).current, 3);
}

#[test]
fn collected_power_up_hides_then_respawns_inside_its_area() {
    let mut world = make_world(1.0, GameSession::new(5, 5));
    let player = spawn_player(&mut world, 0.0, 0.0);
    let potion = spawn_power_up(&mut world, power_up(PickableKind::HealthPowerUp, 2.0, 3.0));

    world.trigger(DamagePlayerEvent { player, amount: 3 });
    world.trigger(CollectPickableEvent {
        pickable: potion,
        collector: player,
    });
    world.flush();

    assert_eq!(health(&world, player).current, 5);
    let pickable = world.get::<Pickable>(potion).unwrap();
    assert!(!pickable.active);
    assert!(!world.get::<Sprite>(potion).unwrap().visible);
    assert!(!world.get::<BoxCollider>(potion).unwrap().enabled);

    // a second contact while hidden does nothing
    world.trigger(CollectPickableEvent {
        pickable: potion,
        collector: player,
    });
    world.flush();
    assert_eq!(health(&world, player).current, 5);

    tick_timers(&mut world, 4);
    let pickable = world.get::<Pickable>(potion).unwrap().clone();
    let position = world.get::<MapPosition>(potion).unwrap().pos;
    assert!(pickable.active);
    assert!(pickable.contains(position));
    assert!(world.get::<Sprite>(potion).unwrap().visible);
    assert!(world.get::<BoxCollider>(potion).unwrap().enabled);
}

#[test]
fn double_jump_lasts_for_the_power_up_duration() {
    let mut world = make_world(1.0, GameSession::new(5, 5));
    let player = spawn_player(&mut world, 0.0, 0.0);
    let wings = spawn_power_up(
        &mut world,
        power_up(PickableKind::DoubleJumpPowerUp, 2.0, 30.0),
    );

    world.trigger(CollectPickableEvent {
        pickable: wings,
        collector: player,
    });
    world.flush();
    assert!(world.get::<PlayerController>(player).unwrap().can_double_jump);

    tick_timers(&mut world, 3);
    let mut controller = world.get::<PlayerController>(player).unwrap().clone();
    assert!(!controller.can_double_jump);
    assert_eq!(controller.try_jump(false), None);
}

#[test]
fn coin_is_counted_once_and_despawned() {
    let mut world = make_world(0.016, GameSession::new(2, 0));
    let player = spawn_player(&mut world, 0.0, 0.0);
    let coin = spawn_with(&mut world, |c| prefabs::spawn_coin(c, Vector2 { x: 5.0, y: 0.0 }));

    world.trigger(CollectPickableEvent {
        pickable: coin,
        collector: player,
    });
    world.flush();
    world.trigger(CollectPickableEvent {
        pickable: coin,
        collector: player,
    });
    world.flush();

    assert!(world.get_entity(coin).is_err());
    let session = world.resource::<GameSession>();
    assert_eq!(session.coins, 1);
    assert!(!session.victory);
    assert_eq!(
        world.resource::<WorldSignals>().get_integer("coins"),
        Some(1)
    );
    assert!(world.resource::<RunEnds>().0.is_empty());
}

#[test]
fn last_coin_wins_once() {
    let mut world = make_world(0.016, GameSession::new(1, 0));
    let player = spawn_player(&mut world, 0.0, 0.0);
    let coin = spawn_with(&mut world, |c| prefabs::spawn_coin(c, Vector2::zero()));
    let extra = spawn_with(&mut world, |c| prefabs::spawn_coin(c, Vector2::zero()));

    for pickable in [coin, extra] {
        world.trigger(CollectPickableEvent {
            pickable,
            collector: player,
        });
        world.flush();
    }

    assert!(world.resource::<GameSession>().victory);
    assert_eq!(world.resource::<GameSession>().coins, 1);
    assert_eq!(world.resource::<RunEnds>().0, vec![RunEndedEvent::Victory]);
}

#[test]
fn player_death_ends_the_run_after_the_delay() {
    let mut world = make_world(1.0, GameSession::new(5, 5));
    let player = spawn_player(&mut world, 0.0, 0.0);

    world.trigger(DamagePlayerEvent { player, amount: 10 });
    world.flush();

    let controller = world.get::<PlayerController>(player).unwrap();
    assert!(!controller.alive);
    assert!(health(&world, player).dead);
    assert!(world.resource::<RunEnds>().0.is_empty());

    world.trigger(DamagePlayerEvent { player, amount: 10 });
    world.flush();
    tick_timers(&mut world, 2);

    assert!(world.resource::<GameSession>().game_over);
    assert_eq!(world.resource::<RunEnds>().0, vec![RunEndedEvent::GameOver]);
}

#[test]
fn killed_enemy_counts_once_and_is_removed_later() {
    let mut world = make_world(0.016, GameSession::new(0, 1));
    let enemy = spawn_with(&mut world, |c| {
        prefabs::spawn_enemy(c, Vector2 { x: 50.0, y: 0.0 }, None)
    });

    world.trigger(DamageEnemyEvent { enemy, amount: 1 });
    world.flush();
    assert!(!world.get::<Enemy>(enemy).unwrap().dead);
    assert_eq!(world.resource::<GameSession>().enemies_killed, 0);

    world.trigger(DamageEnemyEvent { enemy, amount: 1 });
    world.flush();
    world.trigger(DamageEnemyEvent { enemy, amount: 1 });
    world.flush();

    assert!(world.get::<Enemy>(enemy).unwrap().dead);
    assert!(!world.get::<BoxCollider>(enemy).unwrap().enabled);
    assert!(world.get::<Ttl>(enemy).is_some());
    assert_eq!(world.resource::<GameSession>().enemies_killed, 1);
    assert_eq!(world.resource::<RunEnds>().0, vec![RunEndedEvent::Victory]);
}

#[test]
fn enemy_attack_hurts_player_in_reach_and_respects_cooldown() {
    let mut world = make_world(0.016, GameSession::new(5, 5));
    let player = spawn_player(&mut world, 118.0, 300.0);
    let enemy = spawn_with(&mut world, |c| {
        prefabs::spawn_enemy(c, Vector2 { x: 100.0, y: 300.0 }, None)
    });

    let mut schedule = Schedule::default();
    schedule.add_systems(enemy_ai_system);
    schedule.run(&mut world);

    assert_eq!(
        world.get::<EnemyAi>(enemy).unwrap().state,
        EnemyState::Attacking
    );
    assert!(world.get::<Enemy>(enemy).unwrap().facing_right);
    assert_eq!(health(&world, player).current, 5);

    // same instant: still cooling down
    schedule.run(&mut world);
    assert_eq!(health(&world, player).current, 5);

    world.resource_mut::<WorldTime>().elapsed = 1.0;
    schedule.run(&mut world);
    assert_eq!(health(&world, player).current, 4);
}

#[test]
fn enemy_ignores_player_out_of_sight() {
    let mut world = make_world(0.016, GameSession::new(5, 5));
    let player = spawn_player(&mut world, 1000.0, 300.0);
    let enemy = spawn_with(&mut world, |c| {
        prefabs::spawn_enemy(c, Vector2 { x: 100.0, y: 300.0 }, None)
    });

    let mut schedule = Schedule::default();
    schedule.add_systems(enemy_ai_system);
    schedule.run(&mut world);

    let ai = world.get::<EnemyAi>(enemy).unwrap();
    assert_eq!(ai.state, EnemyState::Idle);
    assert_eq!(ai.target_velocity, Vector2::zero());
    assert_eq!(health(&world, player).current, 6);
}

#[test]
fn spawner_respects_interval_and_alive_cap() {
    let mut world = make_world(1.0, GameSession::new(5, 5));
    world.spawn((
        MapPosition::new(400.0, 100.0),
        EnemySpawner {
            interval: 1.0,
            max_alive: 2,
            ..Default::default()
        },
    ));

    let mut schedule = Schedule::default();
    schedule.add_systems(enemy_spawner_system);
    for _ in 0..5 {
        schedule.run(&mut world);
    }

    let mut query = world.query::<(&Enemy, &EnemyAi, &MapPosition)>();
    let spawned: Vec<_> = query.iter(&world).collect();
    assert_eq!(spawned.len(), 2);
    for (_, ai, position) in spawned {
        assert!(ai.move_speed >= 32.0 && ai.move_speed <= 96.0);
        assert!((position.pos.x - 400.0).abs() <= 160.0);
        assert!((position.pos.y - 100.0).abs() <= 80.0);
    }
}

#[test]
fn spawner_waits_while_paused() {
    let mut world = make_world(0.0, GameSession::new(5, 5));
    world.spawn((
        MapPosition::new(0.0, 0.0),
        EnemySpawner {
            interval: 0.5,
            ..Default::default()
        },
    ));
    let mut schedule = Schedule::default();
    schedule.add_systems(enemy_spawner_system);
    for _ in 0..10 {
        schedule.run(&mut world);
    }
    assert_eq!(world.query::<&Enemy>().iter(&world).count(), 0);
}

#[test]
fn collision_fires_on_enter_only() {
    let mut world = make_world(0.016, GameSession::new(5, 5));
    world.init_resource::<Collisions>();
    world.add_observer(|_trigger: On<CollisionEvent>, mut count: ResMut<Collisions>| {
        count.0 += 1;
    });
    world.flush();

    world.spawn((
        Group::new("a"),
        MapPosition::new(0.0, 0.0),
        BoxCollider::new(10.0, 10.0),
    ));
    let b = world
        .spawn((
            Group::new("b"),
            MapPosition::new(5.0, 5.0),
            BoxCollider::new(10.0, 10.0),
        ))
        .id();

    tick_collisions(&mut world);
    tick_collisions(&mut world);
    assert_eq!(world.resource::<Collisions>().0, 1);

    world.get_mut::<MapPosition>(b).unwrap().pos = Vector2 { x: 50.0, y: 50.0 };
    tick_collisions(&mut world);
    world.get_mut::<MapPosition>(b).unwrap().pos = Vector2 { x: 5.0, y: 5.0 };
    tick_collisions(&mut world);
    assert_eq!(world.resource::<Collisions>().0, 2);

    world.get_mut::<BoxCollider>(b).unwrap().enabled = false;
    world.get_mut::<MapPosition>(b).unwrap().pos = Vector2 { x: 50.0, y: 50.0 };
    tick_collisions(&mut world);
    world.get_mut::<MapPosition>(b).unwrap().pos = Vector2 { x: 5.0, y: 5.0 };
    tick_collisions(&mut world);
    assert_eq!(world.resource::<Collisions>().0, 2);
}

#[test]
fn bullet_hit_damages_enemy_and_consumes_bullet() {
    let mut world = make_world(0.016, GameSession::new(5, 5));
    for rule in game_collision_rules() {
        world.spawn(rule);
    }
    let enemy = spawn_with(&mut world, |c| {
        prefabs::spawn_enemy(c, Vector2 { x: 100.0, y: 100.0 }, None)
    });
    let bullet = spawn_with(&mut world, |c| {
        prefabs::spawn_bullet(c, Vector2 { x: 100.0, y: 90.0 }, Vector2 { x: 1.0, y: 0.0 })
    });
    assert!(world.get::<Bullet>(bullet).is_some());

    tick_collisions(&mut world);

    assert!(world.get_entity(bullet).is_err());
    assert_eq!(world.get::<Enemy>(enemy).unwrap().health, 1);
}

#[test]
fn touching_a_power_up_collects_it() {
    let mut world = make_world(0.016, GameSession::new(5, 5));
    for rule in game_collision_rules() {
        world.spawn(rule);
    }
    let wings = spawn_power_up(
        &mut world,
        power_up(PickableKind::DoubleJumpPowerUp, 8.0, 5.0),
    );
    let at = world.get::<MapPosition>(wings).unwrap().pos;
    let player = spawn_player(&mut world, at.x, at.y + 10.0);

    tick_collisions(&mut world);

    assert!(!world.get::<Pickable>(wings).unwrap().active);
    assert!(world.get::<PlayerController>(player).unwrap().can_double_jump);
}

#[test]
fn parallax_layer_fits_loops_and_follows_camera() {
    let mut world = make_world(0.016, GameSession::default());
    world.insert_resource(Camera2DRes::centered(
        640.0,
        360.0,
        Vector2 { x: 320.0, y: 180.0 },
    ));
    let data = ParallaxData {
        x: 320.0,
        y: 180.0,
        parallax_x: 0.5,
        ..Default::default()
    };
    let layer = spawn_with(&mut world, |c| prefabs::spawn_parallax_layer(c, &data));

    let mut schedule = Schedule::default();
    schedule.add_systems(parallax_system);
    schedule.run(&mut world);

    let state = world.get::<ParallaxLayer>(layer).unwrap().clone();
    assert!(state.initialized);
    assert!(approx_eq(state.segment_width, 640.0));
    let children = world
        .query::<(&ParallaxSegment, &ChildOf)>()
        .iter(&world)
        .filter(|(_, parent)| parent.parent() == layer)
        .count();
    assert_eq!(children, 2);

    world.resource_mut::<Camera2DRes>().0.target.x = 520.0;
    schedule.run(&mut world);

    let pos = world.get::<MapPosition>(layer).unwrap().pos;
    assert!(approx_eq(pos.x, 420.0));
    assert!(approx_eq(pos.y, 180.0));
    let mut xs: Vec<f32> = world
        .query::<(&ParallaxSegment, &MapPosition)>()
        .iter(&world)
        .map(|(_, p)| p.pos.x)
        .collect();
    xs.sort_by(|a, b| a.total_cmp(b));
    assert!(approx_eq(xs[0], 420.0 - 640.0));
    assert!(approx_eq(xs[1], 420.0 + 640.0));
}

fn run_bullets(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(bullet_system);
    schedule.run(world);
}

fn run_player_input(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(player_input);
    schedule.run(world);
}

fn bullets(world: &mut World) -> Vec<(Vector2, Vector2)> {
    world
        .query::<(&Bullet, &MapPosition)>()
        .iter(world)
        .map(|(b, p)| (b.direction(), p.pos))
        .collect()
}

fn press_only(world: &mut World, edit: impl FnOnce(&mut InputState)) {
    let mut input = InputState::default();
    edit(&mut input);
    world.insert_resource(input);
}

#[test]
fn bullet_flies_then_despawns_past_the_view_margin() {
    let mut world = make_world(0.1, GameSession::new(0, 0));
    // view spans x 0..640, bullets drop once their left edge passes 672
    world.insert_resource(Camera2DRes::centered(
        640.0,
        360.0,
        Vector2 { x: 320.0, y: 180.0 },
    ));
    let bullet = spawn_with(&mut world, |c| {
        prefabs::spawn_bullet(c, Vector2 { x: 600.0, y: 180.0 }, Vector2 { x: 1.0, y: 0.0 })
    });
    let step = world.get::<Bullet>(bullet).unwrap().speed * 0.1;
    assert!(approx_eq(step, 32.0));
    let half_width = world.get::<BoxCollider>(bullet).unwrap().size.x * 0.5;
    assert!(approx_eq(half_width, 3.0));

    run_bullets(&mut world);
    assert!(approx_eq(world.get::<MapPosition>(bullet).unwrap().pos.x, 632.0));

    // left edge at 661, inside the margin
    run_bullets(&mut world);
    assert!(approx_eq(world.get::<MapPosition>(bullet).unwrap().pos.x, 664.0));
    assert!(664.0 - half_width <= 640.0 + OFFSCREEN_MARGIN);

    // left edge at 693, past it
    run_bullets(&mut world);
    assert!(world.get_entity(bullet).is_err());
}

#[test]
fn bullet_waits_while_paused() {
    let mut world = make_world(0.0, GameSession::new(0, 0));
    world.insert_resource(Camera2DRes::centered(640.0, 360.0, Vector2::zero()));
    let bullet = spawn_with(&mut world, |c| {
        prefabs::spawn_bullet(c, Vector2 { x: 0.0, y: 0.0 }, Vector2 { x: 1.0, y: 0.0 })
    });

    run_bullets(&mut world);

    assert_eq!(world.get::<MapPosition>(bullet).unwrap().pos.x, 0.0);
}

#[test]
fn fire_spawns_a_bullet_aimed_at_the_mouse() {
    let mut world = make_world(0.016, GameSession::new(0, 0));
    let player = spawn_player(&mut world, 100.0, 300.0);
    let offset = world
        .get::<PlayerController>(player)
        .unwrap()
        .bullet_spawn_offset;
    let origin = Vector2 {
        x: 100.0 + offset.x,
        y: 300.0 + offset.y,
    };
    press_only(&mut world, |input| {
        input.fire.just_pressed = true;
        input.mouse_world = Vector2 {
            x: origin.x,
            y: origin.y - 100.0,
        };
    });

    run_player_input(&mut world);

    let fired = bullets(&mut world);
    assert_eq!(fired.len(), 1);
    let (direction, position) = fired[0];
    assert!(approx_eq(direction.x, 0.0));
    assert!(approx_eq(direction.y, -1.0));
    assert!(approx_eq(position.x, origin.x));
    assert!(approx_eq(position.y, origin.y));
}

#[test]
fn moving_left_turns_the_player_and_mirrors_the_spawn_point() {
    let mut world = make_world(0.016, GameSession::new(0, 0));
    let player = spawn_player(&mut world, 100.0, 300.0);
    let offset = world
        .get::<PlayerController>(player)
        .unwrap()
        .bullet_spawn_offset;
    press_only(&mut world, |input| {
        input.move_left.active = true;
        input.fire.just_pressed = true;
        input.mouse_world = Vector2 { x: -500.0, y: 300.0 + offset.y };
    });

    run_player_input(&mut world);

    let controller = world.get::<PlayerController>(player).unwrap();
    assert!(!controller.facing_right);
    let speed = controller.move_speed;
    assert!(approx_eq(world.get::<RigidBody>(player).unwrap().velocity.x, -speed));
    assert!(world.get::<Sprite>(player).unwrap().flip_h);

    let fired = bullets(&mut world);
    assert_eq!(fired.len(), 1);
    let (direction, position) = fired[0];
    assert!(approx_eq(position.x, 100.0 - offset.x));
    assert!(approx_eq(direction.x, -1.0));
    assert!(approx_eq(direction.y, 0.0));
}

#[test]
fn double_jump_comes_back_after_landing() {
    let mut world = make_world(0.016, GameSession::new(0, 0));
    let player = spawn_player(&mut world, 0.0, 0.0);
    world
        .get_mut::<PlayerController>(player)
        .unwrap()
        .activate_double_jump();
    {
        let mut platform = world.get_mut::<PlatformBody>(player).unwrap();
        platform.grounded = true;
        platform.was_grounded = true;
    }
    let jump_velocity = -world.get::<PlayerController>(player).unwrap().jump_force;
    let jump_pressed = |world: &mut World| {
        press_only(world, |input| input.jump.just_pressed = true);
        world.get_mut::<RigidBody>(player).unwrap().velocity.y = 0.0;
        run_player_input(world);
        world.get::<RigidBody>(player).unwrap().velocity.y
    };

    // ground jump, then the single air jump, then nothing
    assert!(approx_eq(jump_pressed(&mut world), jump_velocity));
    assert!(!world.get::<PlatformBody>(player).unwrap().grounded);
    assert!(approx_eq(jump_pressed(&mut world), jump_velocity));
    assert_eq!(jump_pressed(&mut world), 0.0);

    // land for one frame without pressing
    {
        let mut platform = world.get_mut::<PlatformBody>(player).unwrap();
        platform.grounded = true;
        platform.was_grounded = false;
    }
    press_only(&mut world, |_| {});
    run_player_input(&mut world);
    assert!(!world.get::<PlayerController>(player).unwrap().has_double_jumped);

    // walk off the ledge and jump in the air again
    {
        let mut platform = world.get_mut::<PlatformBody>(player).unwrap();
        platform.grounded = false;
        platform.was_grounded = true;
    }
    assert!(approx_eq(jump_pressed(&mut world), jump_velocity));
    assert!(world.get::<PlayerController>(player).unwrap().has_double_jumped);
}

//! Scene switching and menu flow, driven through observers the way the
//! running game triggers them.

use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemId;
use raylib::prelude::Vector2;

use skyhop::components::enemy::Enemy;
use skyhop::components::mapposition::MapPosition;
use skyhop::components::menu::{Menu, Panel, VolumeSlider};
use skyhop::components::persistent::Persistent;
use skyhop::components::pickable::{Pickable, PickableKind};
use skyhop::components::player::PlayerController;
use skyhop::events::audio::AudioCmd;
use skyhop::events::gameplay::RunEndedEvent;
use skyhop::events::input::{InputAction, InputEvent};
use skyhop::game;
use skyhop::resources::audio::AudioManager;
use skyhop::resources::camera2d::Camera2DRes;
use skyhop::resources::contacts::ContactPairs;
use skyhop::resources::gamestate::{GameState, NextGameState};
use skyhop::resources::level::{CurrentLevel, LevelData};
use skyhop::resources::preferences::{KEY_VOL_MASTER, Preferences};
use skyhop::resources::rng::GameRng;
use skyhop::resources::screensize::ScreenSize;
use skyhop::resources::session::GameSession;
use skyhop::resources::systemsstore::SystemsStore;
use skyhop::resources::uistate::UiState;
use skyhop::resources::volume::VolumeSettings;
use skyhop::resources::worldsignals::{self, WorldSignals};
use skyhop::resources::worldtime::WorldTime;
use skyhop::systems::menu::{
    menu_controller_observer, menu_selection_observer, pause_observer, run_ended_observer,
};

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world() -> (World, SystemId) {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(WorldSignals::default());
    world.insert_resource(ScreenSize { w: 640, h: 360 });
    world.insert_resource(ContactPairs::default());
    world.insert_resource(CurrentLevel(LevelData::builtin()));
    world.insert_resource(GameRng::with_seed(11));
    world.insert_resource(Camera2DRes::centered(640.0, 360.0, Vector2::zero()));
    world.insert_resource(AudioManager::default());
    world.insert_resource(VolumeSettings::default());
    world.insert_resource(Preferences::in_memory());
    world.insert_resource(UiState::menu_scene());
    world.insert_resource(GameSession::default());
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.init_resource::<Messages<AudioCmd>>();

    let switch_scene = world.register_system(game::switch_scene);
    world.entity_mut(switch_scene.entity()).insert(Persistent);
    let mut store = SystemsStore::new();
    store.insert("switch_scene", switch_scene);
    world.insert_resource(store);

    world.spawn((Observer::new(menu_controller_observer), Persistent));
    world.spawn((Observer::new(menu_selection_observer), Persistent));
    world.spawn((Observer::new(pause_observer), Persistent));
    world.spawn((Observer::new(run_ended_observer), Persistent));
    world.flush();
    (world, switch_scene)
}

fn load_scene(world: &mut World, switch_scene: SystemId, scene: &str) {
    world
        .resource_mut::<WorldSignals>()
        .set_string(worldsignals::SCENE, scene);
    world.run_system(switch_scene).unwrap();
    world.flush();
}

fn press(world: &mut World, action: InputAction) {
    world.trigger(InputEvent::pressed(action));
    world.flush();
}

fn visible_panels(world: &mut World) -> Vec<Panel> {
    world
        .query::<&Menu>()
        .iter(world)
        .filter(|m| m.visible)
        .map(|m| m.panel)
        .collect()
}

fn panel(world: &mut World, panel: Panel) -> Menu {
    world
        .query::<&Menu>()
        .iter(world)
        .find(|m| m.panel == panel)
        .cloned()
        .unwrap()
}

fn count<C: Component>(world: &mut World) -> usize {
    world.query::<&C>().iter(world).count()
}

#[test]
fn game_scene_replaces_everything_but_persistent_entities() {
    let (mut world, switch_scene) = make_world();
    let keeper = world.spawn((Persistent, MapPosition::new(1.0, 2.0))).id();
    let doomed = world.spawn(MapPosition::new(3.0, 4.0)).id();

    load_scene(&mut world, switch_scene, game::SCENE_GAME);

    assert!(world.get_entity(keeper).is_ok());
    assert!(world.get_entity(doomed).is_err());
    assert_eq!(count::<PlayerController>(&mut world), 1);
    assert_eq!(count::<Enemy>(&mut world), 1);
    let coins = world
        .query::<&Pickable>()
        .iter(&world)
        .filter(|p| p.kind == PickableKind::Coin)
        .count();
    assert_eq!(coins, 5);

    let session = world.resource::<GameSession>();
    assert_eq!(session.total_coins, 5);
    assert_eq!(session.total_enemies, 6);
    assert_eq!(
        world.resource::<WorldSignals>().get_integer("total_coins"),
        Some(5)
    );
    assert!(!world.resource::<UiState>().is_menu_scene);
    assert!(visible_panels(&mut world).is_empty());
    assert_eq!(world.resource::<AudioManager>().current_music(), Some("game"));
    assert!(approx_eq(world.resource::<Camera2DRes>().0.target.x, 64.0));
}

#[test]
fn back_to_menu_clears_the_level() {
    let (mut world, switch_scene) = make_world();
    load_scene(&mut world, switch_scene, game::SCENE_GAME);
    load_scene(&mut world, switch_scene, game::SCENE_MENU);

    assert_eq!(count::<PlayerController>(&mut world), 0);
    assert_eq!(count::<Pickable>(&mut world), 0);
    assert_eq!(visible_panels(&mut world), vec![Panel::Title]);
    assert_eq!(world.resource::<GameSession>().total_coins, 0);
    assert_eq!(world.resource::<AudioManager>().current_music(), Some("menu"));
    assert!(world.resource::<ContactPairs>().is_empty());
}

#[test]
fn unknown_scene_loads_the_menu() {
    let (mut world, switch_scene) = make_world();
    load_scene(&mut world, switch_scene, "nowhere");

    assert_eq!(visible_panels(&mut world), vec![Panel::Title]);
    assert_eq!(
        world
            .resource::<WorldSignals>()
            .get_string(worldsignals::SCENE)
            .map(String::as_str),
        Some(game::SCENE_MENU)
    );
}

#[test]
fn options_open_from_title_and_sliders_persist_volume() {
    let (mut world, switch_scene) = make_world();
    load_scene(&mut world, switch_scene, game::SCENE_MENU);

    press(&mut world, InputAction::Down);
    assert_eq!(panel(&mut world, Panel::Title).selected_index, 1);
    press(&mut world, InputAction::Confirm);
    assert_eq!(visible_panels(&mut world), vec![Panel::Options]);

    // master slider is selected first
    press(&mut world, InputAction::Left);
    press(&mut world, InputAction::Left);
    let master = world.resource::<VolumeSettings>().master;
    assert!(approx_eq(master, 0.8));
    assert!(approx_eq(
        world.resource::<Preferences>().get_float(KEY_VOL_MASTER, -1.0),
        0.8
    ));
    let options = panel(&mut world, Panel::Options);
    assert!(approx_eq(options.slider_value(VolumeSlider::Master).unwrap(), 0.8));

    // clamped at the top
    for _ in 0..5 {
        press(&mut world, InputAction::Right);
    }
    assert!(approx_eq(world.resource::<VolumeSettings>().master, 1.0));

    press(&mut world, InputAction::Pause);
    assert_eq!(visible_panels(&mut world), vec![Panel::Title]);
}

#[test]
fn play_button_starts_the_game() {
    let (mut world, switch_scene) = make_world();
    load_scene(&mut world, switch_scene, game::SCENE_MENU);

    press(&mut world, InputAction::Confirm);

    assert_eq!(count::<PlayerController>(&mut world), 1);
    assert_eq!(
        world
            .resource::<WorldSignals>()
            .get_string(worldsignals::SCENE)
            .map(String::as_str),
        Some(game::SCENE_GAME)
    );
}

#[test]
fn pause_freezes_time_and_options_return_to_pause() {
    let (mut world, switch_scene) = make_world();
    load_scene(&mut world, switch_scene, game::SCENE_GAME);

    press(&mut world, InputAction::Pause);
    assert!(world.resource::<WorldTime>().is_frozen());
    assert_eq!(visible_panels(&mut world), vec![Panel::Pause]);

    press(&mut world, InputAction::Down);
    press(&mut world, InputAction::Confirm);
    assert_eq!(visible_panels(&mut world), vec![Panel::Options]);

    press(&mut world, InputAction::Pause);
    assert_eq!(visible_panels(&mut world), vec![Panel::Pause]);
    assert!(world.resource::<UiState>().paused);

    press(&mut world, InputAction::Pause);
    assert!(visible_panels(&mut world).is_empty());
    assert!(!world.resource::<WorldTime>().is_frozen());
}

#[test]
fn resume_button_unpauses() {
    let (mut world, switch_scene) = make_world();
    load_scene(&mut world, switch_scene, game::SCENE_GAME);

    press(&mut world, InputAction::Pause);
    press(&mut world, InputAction::Confirm);

    assert!(!world.resource::<UiState>().paused);
    assert!(!world.resource::<WorldTime>().is_frozen());
    assert!(visible_panels(&mut world).is_empty());
}

#[test]
fn victory_panel_shows_summary_and_blocks_pause() {
    let (mut world, switch_scene) = make_world();
    load_scene(&mut world, switch_scene, game::SCENE_GAME);
    {
        let mut session = world.resource_mut::<GameSession>();
        session.victory = true;
    }

    world.trigger(RunEndedEvent::Victory);
    world.flush();

    assert_eq!(visible_panels(&mut world), vec![Panel::Victory]);
    assert!(world.resource::<WorldTime>().is_frozen());
    assert_eq!(world.resource::<AudioManager>().current_music(), None);
    let message = panel(&mut world, Panel::Victory).message.unwrap();
    assert_eq!(message, world.resource::<GameSession>().summary());

    press(&mut world, InputAction::Pause);
    assert_eq!(visible_panels(&mut world), vec![Panel::Victory]);
}

#[test]
fn retry_after_game_over_rebuilds_the_level() {
    let (mut world, switch_scene) = make_world();
    load_scene(&mut world, switch_scene, game::SCENE_GAME);
    world.resource_mut::<GameSession>().set_game_over();
    world.trigger(RunEndedEvent::GameOver);
    world.flush();
    assert_eq!(visible_panels(&mut world), vec![Panel::GameOver]);

    press(&mut world, InputAction::Confirm);

    assert!(!world.resource::<GameSession>().is_finished());
    assert!(!world.resource::<WorldTime>().is_frozen());
    assert!(visible_panels(&mut world).is_empty());
    assert_eq!(count::<PlayerController>(&mut world), 1);
}

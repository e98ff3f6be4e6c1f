//! Game flow: asset loading, scenes and quitting.
//!
//! The systems here are registered in the [`SystemsStore`] and run on demand:
//! `setup` when entering [`GameStates::Setup`], `enter_play` when entering
//! [`GameStates::Playing`], `switch_scene` whenever a menu button changes the
//! scene and `quit_game` on exit. Scene content itself is built by the plain
//! `spawn_*_scene` functions so it can be spawned without a window.

use bevy_ecs::prelude::*;
use raylib::prelude::{Color, Vector2};

use crate::components::menu::{Menu, MenuAction, MenuItem, Panel, VolumeSlider};
use crate::components::persistent::Persistent;
use crate::components::player::PlayerHealth;
use crate::events::audio::AudioCmd;
use crate::prefabs;
use crate::resources::animationstore::AnimationStore;
use crate::resources::audio::AudioManager;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::contacts::ContactPairs;
use crate::resources::fontstore::FontStore;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::level::{CurrentLevel, LevelData};
use crate::resources::rng::GameRng;
use crate::resources::screensize::ScreenSize;
use crate::resources::session::GameSession;
use crate::resources::systemsstore::SystemsStore;
use crate::resources::texturestore::TextureStore;
use crate::resources::uistate::UiState;
use crate::resources::worldsignals::{self, WorldSignals};
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::{
    ENEMY_ATTACK, ENEMY_DIE, ENEMY_IDLE, ENEMY_WALK, PICKABLE_SPIN, PLAYER_DIE, PLAYER_IDLE,
    PLAYER_JUMP, PLAYER_RUN,
};
use crate::systems::collision::game_collision_rules;
use crate::systems::menu::{sync_panels_in_world, sync_sliders_in_world};

pub const SCENE_MENU: &str = "menu";
pub const SCENE_GAME: &str = "game";
pub const MENU_MUSIC: &str = "menu";

const FONTS: &[(&str, &str)] = &[("arcade", "./assets/fonts/Arcade_Cabinet.ttf")];

const TEXTURES: &[(&str, &str)] = &[
    ("player_sheet", "./assets/textures/player_sheet.png"),
    ("enemy_sheet", "./assets/textures/enemy_sheet.png"),
    ("platform", "./assets/textures/platform.png"),
    ("bullet", "./assets/textures/bullet.png"),
    ("coin", "./assets/textures/coin.png"),
    ("powerup_health", "./assets/textures/powerup_health.png"),
    ("powerup_invincibility", "./assets/textures/powerup_invincibility.png"),
    ("powerup_double_jump", "./assets/textures/powerup_double_jump.png"),
    ("heart_full", "./assets/textures/heart_full.png"),
    ("heart_half", "./assets/textures/heart_half.png"),
    ("heart_empty", "./assets/textures/heart_empty.png"),
    ("background_far", "./assets/textures/background_far.png"),
    ("background_near", "./assets/textures/background_near.png"),
];

const MUSIC: &[(&str, &str)] = &[
    (MENU_MUSIC, "./assets/audio/menu.xm"),
    ("game", "./assets/audio/game.xm"),
];

const SOUNDS: &[(&str, &str)] = &[
    ("jump", "./assets/audio/jump.wav"),
    ("shoot", "./assets/audio/shoot.wav"),
    ("collect", "./assets/audio/collect.wav"),
    ("player_hurt", "./assets/audio/player_hurt.wav"),
    ("player_die", "./assets/audio/player_die.wav"),
    ("enemy_hit", "./assets/audio/enemy_hit.wav"),
    ("enemy_die", "./assets/audio/enemy_die.wav"),
    ("enemy_attack", "./assets/audio/enemy_attack.wav"),
    ("menu_move", "./assets/audio/menu_move.wav"),
    ("menu_select", "./assets/audio/menu_select.wav"),
    ("defeat", "./assets/audio/defeat.wav"),
    ("victory", "./assets/audio/victory.wav"),
];

/// Sprite sheet rows: (key, texture, frame w, frame h, row, frames, fps, looped).
type SheetRow = (&'static str, &'static str, f32, f32, usize, usize, f32, bool);

const ANIMATIONS: &[SheetRow] = &[
    (PLAYER_IDLE, "player_sheet", 32.0, 32.0, 0, 4, 6.0, true),
    (PLAYER_RUN, "player_sheet", 32.0, 32.0, 1, 6, 12.0, true),
    (PLAYER_JUMP, "player_sheet", 32.0, 32.0, 2, 2, 8.0, true),
    (PLAYER_DIE, "player_sheet", 32.0, 32.0, 3, 5, 8.0, false),
    (ENEMY_IDLE, "enemy_sheet", 32.0, 32.0, 0, 4, 6.0, true),
    (ENEMY_WALK, "enemy_sheet", 32.0, 32.0, 1, 6, 10.0, true),
    (ENEMY_ATTACK, "enemy_sheet", 32.0, 32.0, 2, 4, 12.0, false),
    (ENEMY_DIE, "enemy_sheet", 32.0, 32.0, 3, 4, 10.0, false),
    (PICKABLE_SPIN, "coin", 12.0, 12.0, 0, 6, 10.0, true),
];

pub fn animation_store() -> AnimationStore {
    let mut store = AnimationStore::default();
    for &(key, tex, w, h, row, count, fps, looped) in ANIMATIONS {
        store.add_row(key, tex, w, h, row, count, fps, looped);
    }
    store
}

/// Load fonts, textures, animations and audio, then move on to `Playing`.
///
/// Missing files are reported and skipped; sprites without a texture are
/// drawn as coloured rectangles.
pub fn setup(
    mut commands: Commands,
    mut next_state: ResMut<NextGameState>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    mut fonts: NonSendMut<FontStore>,
    mut audio_cmds: MessageWriter<AudioCmd>,
) {
    for &(key, path) in FONTS {
        match rl.load_font(&th, path) {
            Ok(font) => fonts.add(key, font),
            Err(e) => log::warn!("font '{}' not loaded: {}", key, e),
        }
    }

    let mut textures = TextureStore::new();
    for &(key, path) in TEXTURES {
        match rl.load_texture(&th, path) {
            Ok(texture) => textures.insert(key, texture),
            Err(e) => log::warn!("texture '{}' not loaded: {}", key, e),
        }
    }
    log::info!(
        "{} of {} textures loaded, {} fonts",
        textures.len(),
        TEXTURES.len(),
        fonts.len()
    );
    commands.insert_resource(textures);
    commands.insert_resource(animation_store());

    audio_cmds.write_batch(MUSIC.iter().map(|&(id, path)| AudioCmd::LoadMusic {
        id: id.into(),
        path: path.into(),
    }));
    audio_cmds.write_batch(SOUNDS.iter().map(|&(id, path)| AudioCmd::LoadFx {
        id: id.into(),
        path: path.into(),
    }));

    next_state.set(GameStates::Playing);
}

/// Start on the title screen.
pub fn enter_play(
    mut world_signals: ResMut<WorldSignals>,
    store: Res<SystemsStore>,
    mut commands: Commands,
) {
    world_signals.set_string(worldsignals::SCENE, SCENE_MENU);
    match store.get("switch_scene") {
        Some(id) => commands.run_system(*id),
        None => log::warn!("switch_scene is not registered"),
    }
}

pub fn quit_game(
    mut world_signals: ResMut<WorldSignals>,
    mut audio: ResMut<AudioManager>,
    mut audio_cmds: MessageWriter<AudioCmd>,
) {
    audio_cmds.write_batch(audio.stop_music());
    world_signals.set_flag(worldsignals::QUIT_GAME);
    log::info!("quitting");
}

/// Despawn the current scene and build the one named by the `scene` signal.
///
/// Exclusive so the new scene's panels and sliders can be synchronised in the
/// same call.
pub fn switch_scene(world: &mut World) {
    let doomed: Vec<Entity> = world
        .query_filtered::<Entity, (Without<Persistent>, Without<ChildOf>)>()
        .iter(world)
        .collect();
    for entity in doomed {
        world.despawn(entity);
    }

    world.resource_mut::<ContactPairs>().clear();
    world.resource_mut::<WorldTime>().time_scale = 1.0;

    let scene = world
        .resource::<WorldSignals>()
        .get_string(worldsignals::SCENE)
        .cloned()
        .unwrap_or_else(|| SCENE_MENU.to_string());
    let screen = *world.resource::<ScreenSize>();

    let music = match scene.as_str() {
        SCENE_GAME => {
            let level = world.resource::<CurrentLevel>().0.clone();
            let session = GameSession::new(level.total_coins(), level.total_enemies);
            world.insert_resource(UiState::game_scene());
            {
                let mut signals = world.resource_mut::<WorldSignals>();
                session.publish(&mut signals);
            }
            world.insert_resource(session);
            world.resource_scope(|world, mut rng: Mut<GameRng>| {
                let mut commands = world.commands();
                spawn_game_scene(&mut commands, &level, &mut rng, &screen);
            });
            world.resource_mut::<Camera2DRes>().0.target = Vector2 {
                x: level.player.x,
                y: level.camera_offset_y,
            };
            level.music
        }
        other => {
            if other != SCENE_MENU {
                log::warn!("unknown scene '{}', loading the menu", other);
                world
                    .resource_mut::<WorldSignals>()
                    .set_string(worldsignals::SCENE, SCENE_MENU);
            }
            world.insert_resource(UiState::menu_scene());
            world.insert_resource(GameSession::default());
            let mut commands = world.commands();
            spawn_menu_scene(&mut commands, &screen);
            MENU_MUSIC.to_string()
        }
    };
    world.flush();

    sync_sliders_in_world(world);
    sync_panels_in_world(world);

    let cmds = world.resource_mut::<AudioManager>().play_music(&music, true);
    world.write_message_batch(cmds);
    log::info!("scene '{}' ready", scene);
}

fn panel_origin(screen: &ScreenSize) -> Vector2 {
    Vector2 {
        x: screen.width() * 0.5,
        y: screen.height() * 0.25,
    }
}

fn options_panel(screen: &ScreenSize) -> Menu {
    Menu::new(
        Panel::Options,
        "Options",
        vec![
            MenuItem::slider("Master", VolumeSlider::Master),
            MenuItem::slider("Music", VolumeSlider::Music),
            MenuItem::slider("Effects", VolumeSlider::Sfx),
            MenuItem::button("Back", MenuAction::Back),
        ],
        panel_origin(screen),
    )
}

pub fn spawn_menu_scene(commands: &mut Commands, screen: &ScreenSize) {
    let origin = panel_origin(screen);
    commands.spawn(Menu::new(
        Panel::Title,
        "SKYHOP",
        vec![
            MenuItem::button("Play", MenuAction::Play),
            MenuItem::button("Options", MenuAction::ShowOptions),
            MenuItem::button("Credits", MenuAction::ShowCredits),
            MenuItem::button("Quit", MenuAction::Quit),
        ],
        origin,
    ));
    commands.spawn(options_panel(screen));
    commands.spawn(
        Menu::new(
            Panel::Credits,
            "Credits",
            vec![MenuItem::button("Back", MenuAction::Back)],
            origin,
        )
        .with_message("Code, art and sound by the Skyhop team"),
    );
}

/// Spawn everything a level describes plus the HUD, the collision rules
/// and the in-game panels.
pub fn spawn_game_scene(
    commands: &mut Commands,
    level: &LevelData,
    rng: &mut GameRng,
    screen: &ScreenSize,
) {
    for layer in &level.parallax {
        prefabs::spawn_parallax_layer(commands, layer);
    }
    for rect in &level.solids {
        prefabs::spawn_solid(commands, rect);
    }
    for coin in &level.coins {
        prefabs::spawn_coin(commands, coin.to_vec());
    }
    for power_up in &level.power_ups {
        prefabs::spawn_power_up(commands, power_up, rng);
    }
    for enemy in &level.enemies {
        prefabs::spawn_level_enemy(commands, enemy);
    }
    for spawner in &level.spawners {
        prefabs::spawn_spawner(commands, spawner);
    }
    prefabs::spawn_player(commands, level.player.to_vec(), level.camera_offset_y);

    for rule in game_collision_rules() {
        commands.spawn(rule);
    }

    prefabs::spawn_hud(
        commands,
        PlayerHealth::default().heart_count(),
        screen.width(),
    );

    let origin = panel_origin(screen);
    commands.spawn(Menu::new(
        Panel::Pause,
        "Paused",
        vec![
            MenuItem::button("Resume", MenuAction::Resume),
            MenuItem::button("Options", MenuAction::ShowOptions),
            MenuItem::button("Menu", MenuAction::ToMenu),
        ],
        origin,
    ));
    commands.spawn(options_panel(screen));
    commands.spawn(
        Menu::new(
            Panel::GameOver,
            "Game Over",
            vec![
                MenuItem::button("Retry", MenuAction::Retry),
                MenuItem::button("Menu", MenuAction::ToMenu),
            ],
            origin,
        )
        .with_colors(Color::LIGHTGRAY, Color::RED),
    );
    commands.spawn(
        Menu::new(
            Panel::Victory,
            "Victory!",
            vec![
                MenuItem::button("Retry", MenuAction::Retry),
                MenuItem::button("Menu", MenuAction::ToMenu),
            ],
            origin,
        )
        .with_colors(Color::LIGHTGRAY, Color::GOLD),
    );
}

//! Skyhop entry point.
//!
//! A small 2D action platformer built on:
//! - **raylib** for windowing, graphics, and audio
//! - **bevy_ecs** for entity-component-system architecture
//!
//! # Main Loop
//!
//! 1. Read `config.ini` and the command line, open the window
//! 2. Insert resources, register observers and the on-demand systems
//! 3. Enter `Setup` (asset loading), which moves on to `Playing` and the title screen
//! 4. Run the frame schedule until the window closes or the game quits:
//!    input, AI, physics, collisions, timers, camera, animation, HUD, render
//! 5. Stop the audio thread
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --level ./assets/levels/level01.json
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use raylib::prelude::Vector2;

use skyhop::components::persistent::Persistent;
use skyhop::events::gamestate::{GameStateChangedEvent, observe_gamestate_change_event};
use skyhop::events::switchdebug::switch_debug_observer;
use skyhop::events::switchfullscreen::switch_fullscreen_observer;
use skyhop::game;
use skyhop::resources::audio::{setup_audio, shutdown_audio};
use skyhop::resources::camera2d::Camera2DRes;
use skyhop::resources::contacts::ContactPairs;
use skyhop::resources::debugmode::DebugMode;
use skyhop::resources::fontstore::FontStore;
use skyhop::resources::gameconfig::GameConfig;
use skyhop::resources::gamestate::{GameState, GameStates, NextGameState};
use skyhop::resources::input::InputState;
use skyhop::resources::level::{CurrentLevel, LevelData};
use skyhop::resources::preferences::Preferences;
use skyhop::resources::rendertarget::RenderTarget;
use skyhop::resources::rng::GameRng;
use skyhop::resources::screensize::ScreenSize;
use skyhop::resources::session::GameSession;
use skyhop::resources::systemsstore::SystemsStore;
use skyhop::resources::texturestore::TextureStore;
use skyhop::resources::uistate::UiState;
use skyhop::resources::volume::VolumeSettings;
use skyhop::resources::windowsize::WindowSize;
use skyhop::resources::worldsignals::{self, WorldSignals};
use skyhop::resources::worldtime::WorldTime;
use skyhop::systems::animation::{animation, animation_controller};
use skyhop::systems::audio::{
    forward_audio_cmds, log_audio_failures, poll_audio_messages, update_bevy_audio_cmds,
    update_bevy_audio_messages,
};
use skyhop::systems::bullet::bullet_system;
use skyhop::systems::camera::camera_follow_system;
use skyhop::systems::collision::{collision_detector, collision_observer};
use skyhop::systems::dynamictext_size::dynamictext_size_system;
use skyhop::systems::enemy::{damage_enemy_observer, enemy_ai_system, enemy_motion};
use skyhop::systems::gameconfig::apply_gameconfig_changes;
use skyhop::systems::gamestate::{check_pending_state, state_is_playing};
use skyhop::systems::hud::hud_system;
use skyhop::systems::input::update_input_state;
use skyhop::systems::menu::{
    menu_controller_observer, menu_selection_observer, pause_observer, run_ended_observer,
};
use skyhop::systems::movement::{movement, resolve_solids};
use skyhop::systems::parallax::parallax_system;
use skyhop::systems::pickup::collect_pickable_observer;
use skyhop::systems::player::{
    damage_player_observer, player_blink, player_input, player_signals,
};
use skyhop::systems::render::render_system;
use skyhop::systems::spawner::enemy_spawner_system;
use skyhop::systems::time::{timer_observer, update_timers, update_world_time};
use skyhop::systems::ttl::ttl_system;

/// Skyhop, a 2D action platformer
#[derive(Parser)]
#[command(version, about = "Jump, shoot and collect your way through Skyhop.")]
struct Cli {
    /// Configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Level description to play, overriding the configuration.
    #[arg(long, value_name = "PATH")]
    level: Option<PathBuf>,

    /// Preferences file, overriding the configuration.
    #[arg(long, value_name = "PATH")]
    prefs: Option<PathBuf>,

    /// Start with the debug overlay on.
    #[arg(long)]
    debug: bool,
}

fn register_system<M>(
    world: &mut World,
    store: &mut SystemsStore,
    name: &str,
    system: impl IntoSystem<(), (), M> + 'static,
) {
    let id = world.register_system(system);
    // registered systems are entities and must survive scene switches
    world.entity_mut(id.entity()).insert(Persistent);
    store.insert(name, id);
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using default configuration", e);
    }
    if let Some(level) = cli.level {
        config.level_path = level;
    }
    if let Some(prefs) = cli.prefs {
        config.prefs_path = prefs;
    }

    log::info!("Skyhop starting");
    // --------------- Raylib window ---------------
    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .resizable()
        .title("Skyhop")
        .build();
    rl.set_target_fps(config.target_fps);
    // ESC is the pause key
    rl.set_exit_key(None);

    let render_width = config.render_width;
    let render_height = config.render_height;
    let render_target = match RenderTarget::new(&mut rl, &thread, render_width, render_height) {
        Ok(target) => target,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(WorldSignals::default());
    world.insert_resource(ScreenSize {
        w: render_width as i32,
        h: render_height as i32,
    });
    world.insert_resource(WindowSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    world.insert_resource(InputState::default());
    world.insert_resource(Camera2DRes::centered(
        render_width as f32,
        render_height as f32,
        Vector2::zero(),
    ));
    world.insert_resource(ContactPairs::default());
    world.insert_resource(GameSession::default());
    world.insert_resource(UiState::menu_scene());
    world.insert_resource(GameRng::default());
    world.insert_resource(CurrentLevel(LevelData::load_or_builtin(&config.level_path)));

    let prefs = match Preferences::load(&config.prefs_path) {
        Ok(prefs) => prefs,
        Err(e) => {
            log::warn!("{}; preferences will not be saved", e);
            Preferences::in_memory()
        }
    };
    let volume = VolumeSettings::from_prefs(&prefs);
    world.insert_resource(prefs);
    world.insert_resource(volume);
    world.insert_resource(config);
    if cli.debug {
        world.insert_resource(DebugMode {});
    }

    // Audio must be up before setup queues the loads
    setup_audio(&mut world);
    world.write_message_batch(volume.apply_all());

    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.insert_resource(TextureStore::default());
    world.insert_resource(game::animation_store());
    world.insert_non_send_resource(FontStore::new());
    world.insert_non_send_resource(render_target);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
    world.spawn((Observer::new(observe_gamestate_change_event), Persistent));

    let mut systems_store = SystemsStore::new();
    register_system(&mut world, &mut systems_store, "setup", game::setup);
    register_system(&mut world, &mut systems_store, "enter_play", game::enter_play);
    register_system(&mut world, &mut systems_store, "quit_game", game::quit_game);
    register_system(&mut world, &mut systems_store, "switch_scene", game::switch_scene);
    world.insert_resource(systems_store);
    world.flush();

    world.spawn((Observer::new(collision_observer), Persistent));
    world.spawn((Observer::new(timer_observer), Persistent));
    world.spawn((Observer::new(switch_debug_observer), Persistent));
    world.spawn((Observer::new(switch_fullscreen_observer), Persistent));
    world.spawn((Observer::new(menu_controller_observer), Persistent));
    world.spawn((Observer::new(menu_selection_observer), Persistent));
    world.spawn((Observer::new(pause_observer), Persistent));
    world.spawn((Observer::new(run_ended_observer), Persistent));
    world.spawn((Observer::new(damage_player_observer), Persistent));
    world.spawn((Observer::new(damage_enemy_observer), Persistent));
    world.spawn((Observer::new(collect_pickable_observer), Persistent));
    world.flush();

    world.resource_mut::<NextGameState>().set(GameStates::Setup);
    world.trigger(GameStateChangedEvent {});

    let mut update = Schedule::default();
    update.add_systems(apply_gameconfig_changes.run_if(state_is_playing));
    update.add_systems(check_pending_state);
    update.add_systems(update_input_state);
    update.add_systems(
        // audio systems must be together
        (
            update_bevy_audio_cmds,
            forward_audio_cmds,
            poll_audio_messages,
            update_bevy_audio_messages,
            log_audio_failures,
        )
            .chain(),
    );
    update.add_systems(
        (player_input, enemy_ai_system, enemy_motion)
            .chain()
            .after(update_input_state),
    );
    update.add_systems((movement, resolve_solids).chain().after(enemy_motion));
    update.add_systems(bullet_system.after(resolve_solids));
    update.add_systems(enemy_spawner_system.after(resolve_solids));
    update.add_systems(
        collision_detector
            .after(bullet_system)
            .after(enemy_spawner_system),
    );
    update.add_systems((update_timers, ttl_system).chain().after(collision_detector));
    update.add_systems(
        (camera_follow_system, parallax_system)
            .chain()
            .after(resolve_solids),
    );
    update.add_systems((player_signals, player_blink).after(update_timers));
    update.add_systems(
        (animation_controller, animation)
            .chain()
            .after(player_signals)
            .after(collision_detector),
    );
    update.add_systems(
        (hud_system, dynamictext_size_system)
            .chain()
            .after(update_timers),
    );
    update.add_systems(
        render_system
            .after(animation)
            .after(dynamictext_size_system)
            .after(parallax_system)
            .after(player_blink)
            .after(ttl_system),
    );

    if let Err(e) = update.initialize(&mut world) {
        log::error!("schedule initialisation failed: {}", e);
        shutdown_audio(&mut world);
        std::process::exit(1);
    }

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && !world
            .resource::<WorldSignals>()
            .has_flag(worldsignals::QUIT_GAME)
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers();

        let (new_w, new_h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_screen_width(), rl.get_screen_height())
        };
        let mut window_size = world.resource_mut::<WindowSize>();
        window_size.w = new_w;
        window_size.h = new_h;
    }
    shutdown_audio(&mut world);
    log::info!("bye");
}

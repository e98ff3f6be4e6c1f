//! Game systems.
//!
//! Submodules overview
//! - [`animation`] – advance sprite animations and select tracks via rules
//! - [`audio`] – bridge with the audio thread (poll/update message queues)
//! - [`bullet`] – move bullets and drop the ones that left the view
//! - [`camera`] – follow the player
//! - [`collision`] – overlap checks, enter events and the game's collision rules
//! - [`dynamictext_size`] – cache measured text sizes
//! - [`enemy`] – enemy AI, motion and damage
//! - [`gameconfig`] – push configuration changes to the window
//! - [`gamestate`] – check for pending state transitions and trigger events
//! - [`hud`] – hearts and counters
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`menu`] – panel navigation, sliders, pause and end-of-run panels
//! - [`movement`] – integrate rigid bodies and land them on solids
//! - [`parallax`] – background layers
//! - [`pickup`] – coins and power-ups
//! - [`player`] – player input, damage and visual state
//! - [`render`] – draw the world, HUD, menus and debug overlay using Raylib
//! - [`spawner`] – periodic enemy spawning
//! - [`time`] – update simulation time and process timers
//! - [`ttl`] – despawn expired entities

pub mod animation;
pub mod audio;
pub mod bullet;
pub mod camera;
pub mod collision;
pub mod dynamictext_size;
pub mod enemy;
pub mod gameconfig;
pub mod gamestate;
pub mod hud;
pub mod input;
pub mod menu;
pub mod movement;
pub mod parallax;
pub mod pickup;
pub mod player;
pub mod render;
pub mod spawner;
pub mod time;
pub mod ttl;
